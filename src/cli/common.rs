//! Common helpers shared across CLI commands

use crate::error::LaunchError;
use std::path::{Path, PathBuf};

/// Exit code for a clean run
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for launcher-side failures (bad environment, launch errors)
///
/// Child exit codes always pass through verbatim, so a child that itself
/// exits 2 is indistinguishable from a launch failure at the exit-code
/// level; the stderr message is what tells them apart.
pub const EXIT_ERROR: i32 = 2;

/// Resolve the test module directory to an absolute path
///
/// Defaults to the current directory. The framework receives an absolute
/// path, matching what it would historically have been handed.
///
/// # Errors
///
/// Returns `LaunchError::BadModuleDir` if the directory does not exist or
/// cannot be canonicalized.
pub(crate) fn resolve_module_dir(dir: Option<&Path>) -> Result<PathBuf, LaunchError> {
    let dir = dir.unwrap_or(Path::new("."));
    std::fs::canonicalize(dir).map_err(|source| LaunchError::BadModuleDir {
        dir: dir.to_path_buf(),
        source,
    })
}
