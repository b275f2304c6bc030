//! Run command implementation
//!
//! This module implements the `ioctest run` command, which:
//! - Resolves the launcher environment (interpreter, install root)
//! - Resolves the test module directory to an absolute path
//! - Assembles the framework invocation with pass-through arguments
//! - Runs the framework with unbuffered output
//! - Exits with the child's exit code, propagated exactly

use crate::cli::common::{EXIT_ERROR, resolve_module_dir};
use crate::config::LauncherConfig;
use crate::error::{ConfigError, LaunchError};
use crate::launcher::{self, TestCommand};
use std::ffi::OsString;
use std::path::Path;

/// Error type specific to the run command
#[derive(Debug, thiserror::Error)]
pub(crate) enum RunError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Launch error: {0}")]
    Launch(#[from] LaunchError),
}

/// Run the run command
///
/// Returns the exit code for the launcher process: the child's own exit
/// code when the framework ran, `EXIT_ERROR` when it could not be started.
pub fn run_tests(dir: Option<&Path>, verbose: bool, args: &[OsString]) -> i32 {
    match run_tests_inner(dir, verbose, args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Internal implementation of the run command
fn run_tests_inner(dir: Option<&Path>, verbose: bool, args: &[OsString]) -> Result<i32, RunError> {
    let config = LauncherConfig::from_env()?;
    let module_dir = resolve_module_dir(dir)?;

    let cmd = TestCommand::new(&config, &module_dir, args.iter().cloned());

    if verbose {
        eprintln!("Running: {}", cmd.display_line());
    }

    let code = launcher::run(&cmd)?;
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_error_display() {
        let err = RunError::Config(ConfigError::MissingVar("PYTHON3"));
        assert!(err.to_string().contains("PYTHON3"));

        let err = RunError::Launch(LaunchError::MissingFramework {
            script: "/opt/epics/run_tests.py".into(),
        });
        assert!(err.to_string().contains("run_tests.py"));
    }
}
