//! Helpers for safely mutating environment variables in tests.
//!
//! The process environment is global state, and `std::env::set_var` is
//! unsafe in edition 2024 for exactly that reason. Each helper here acquires
//! a global re-entrant mutex for the duration of the mutation and returns an
//! RAII guard that restores the prior state when dropped, re-acquiring the
//! mutex during restoration. Guards for the same key stack and restore in
//! LIFO order.
//!
//! # Examples
//!
//! ```
//! use test_helpers::env;
//!
//! let _guard = env::set_var("KEY", "VALUE");
//! // `KEY` is set to `VALUE` until the guard is dropped.
//! ```

use std::env;
use std::ffi::{OsStr, OsString};
use std::sync::LazyLock;

use parking_lot::ReentrantMutex;

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// RAII guard restoring an environment variable to its prior state on drop.
///
/// If the variable was absent before the mutation, it is removed again.
#[must_use = "dropping restores the prior value"]
#[derive(Debug)]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _lock = ENV_MUTEX.lock();
        match self.original.take() {
            // SAFETY: mutations are serialised by `ENV_MUTEX`.
            Some(value) => unsafe { env::set_var(&self.key, value) },
            // SAFETY: mutations are serialised by `ENV_MUTEX`.
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

/// Sets `key` to `value` and returns a guard restoring the prior state.
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    let key_string = key.into();
    let _lock = ENV_MUTEX.lock();
    let original = env::var_os(&key_string);
    // SAFETY: mutations are serialised by `ENV_MUTEX`.
    unsafe { env::set_var(&key_string, value.as_ref()) };
    EnvVarGuard {
        key: key_string,
        original,
    }
}

/// Removes `key` and returns a guard restoring the prior state.
pub fn remove_var<K>(key: K) -> EnvVarGuard
where
    K: Into<String>,
{
    let key_string = key.into();
    let _lock = ENV_MUTEX.lock();
    let original = env::var_os(&key_string);
    // SAFETY: mutations are serialised by `ENV_MUTEX`.
    unsafe { env::remove_var(&key_string) };
    EnvVarGuard {
        key: key_string,
        original,
    }
}
