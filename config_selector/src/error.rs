//! Error types for configuration file selection.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type SelectorResult<T> = Result<T, SelectorError>;

/// Errors that can occur while resolving lookup places or selecting a file.
///
/// Callers are expected to treat [`SelectorError::NotFound`] differently from
/// the other variants: not-found means no candidate existed and the user
/// should be asked for a path, while [`SelectorError::InvalidPath`] and
/// [`SelectorError::Io`] signal a broken entry or environment.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SelectorError {
    /// A literal lookup place could not be made absolute.
    #[error("invalid lookup place '{}': {source}", .path.display())]
    InvalidPath {
        /// The literal entry that failed to absolutise.
        path: PathBuf,
        /// Underlying error reported by the path resolver.
        #[source]
        source: io::Error,
    },

    /// No candidate file exists in any of the attempted locations.
    #[error("no '{filename}' found in {}", join_paths(.attempted))]
    NotFound {
        /// The filename that was searched for.
        filename: String,
        /// Every candidate path that was tried, in search order.
        attempted: Vec<PathBuf>,
    },

    /// A stat failed for a reason other than non-existence.
    #[error("failed to stat '{}': {source}", .path.display())]
    Io {
        /// The candidate path whose stat failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl SelectorError {
    pub(crate) fn invalid_path(path: &Path, source: io::Error) -> Self {
        Self::InvalidPath {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn not_found(filename: impl Into<String>, attempted: Vec<PathBuf>) -> Self {
        Self::NotFound {
            filename: filename.into(),
            attempted,
        }
    }

    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether this error reports that no candidate file existed.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this error reports a malformed literal lookup entry.
    #[must_use]
    pub const fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
