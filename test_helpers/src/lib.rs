//! Test helpers shared across the workspace.
//!
//! Provides RAII guards for the two pieces of process-global state the
//! selector tests depend on: environment variables and the working
//! directory.

pub mod cwd;
pub mod env;
