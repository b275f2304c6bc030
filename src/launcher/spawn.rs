//! Child invocation and exit-code propagation
//!
//! The launcher blocks on exactly one child process, inherits its stdio so
//! framework output is visible in real time, and reports the child's exit
//! code unchanged. There are no retries and no timeout; re-running is the
//! caller's responsibility.

use crate::error::LaunchError;
use crate::launcher::command::TestCommand;
use std::process::ExitStatus;

/// Run an assembled framework invocation to completion
///
/// Returns the exit code the launcher itself must terminate with.
///
/// # Errors
///
/// Returns `LaunchError::MissingFramework` if the framework entry point does
/// not exist under the configured install root, and `LaunchError::Spawn` if
/// the interpreter cannot be started. Both are launch failures, distinct
/// from a non-zero exit of tests that did run.
pub fn run(cmd: &TestCommand) -> Result<i32, LaunchError> {
    if !cmd.script().exists() {
        return Err(LaunchError::MissingFramework {
            script: cmd.script().to_path_buf(),
        });
    }

    let mut child: std::process::Command = cmd.into();
    let status = child.status().map_err(|source| LaunchError::Spawn {
        interpreter: cmd.program.clone(),
        source,
    })?;

    Ok(exit_code(status))
}

/// Map a child exit status to the launcher's own exit code
///
/// A normal exit propagates the child's code exactly. A signal-terminated
/// child (Unix only) maps to the conventional `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LauncherConfig;

    #[cfg(unix)]
    fn status_from(raw: i32) -> ExitStatus {
        use std::os::unix::process::ExitStatusExt;
        ExitStatus::from_raw(raw)
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_zero() {
        assert_eq!(exit_code(status_from(0)), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_nonzero_propagated_exactly() {
        // Raw wait status encodes the exit code in the high byte
        for code in [1, 2, 3, 42, 255] {
            assert_eq!(exit_code(status_from(code << 8)), code);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_signal_maps_to_128_plus() {
        // SIGKILL = 9, SIGTERM = 15
        assert_eq!(exit_code(status_from(9)), 137);
        assert_eq!(exit_code(status_from(15)), 143);
    }

    #[test]
    fn test_missing_framework_is_a_launch_error() {
        let config = LauncherConfig::new("/usr/bin/python3", "/nonexistent/epics");
        let cmd = TestCommand::new(&config, "/tests/m", Vec::<String>::new());

        match run(&cmd) {
            Err(LaunchError::MissingFramework { script }) => {
                assert!(script.ends_with("run_tests.py"));
            }
            other => panic!("Expected MissingFramework, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_bad_interpreter_is_a_spawn_error() {
        use std::fs;
        use tempfile::TempDir;

        // Real framework script, nonexistent interpreter
        let root = TempDir::new().unwrap();
        let master = root.path().join("support/IocTestFramework/master");
        fs::create_dir_all(&master).unwrap();
        fs::write(master.join("run_tests.py"), "").unwrap();

        let config = LauncherConfig::new("/nonexistent/python3", root.path());
        let cmd = TestCommand::new(&config, "/tests/m", Vec::<String>::new());

        match run(&cmd) {
            Err(LaunchError::Spawn { interpreter, .. }) => {
                assert_eq!(interpreter, std::path::Path::new("/nonexistent/python3"));
            }
            other => panic!("Expected Spawn error, got {:?}", other),
        }
    }
}
