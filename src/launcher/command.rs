//! Child command assembly
//!
//! Builds the exact invocation handed to the interpreter: the framework
//! entry point, the mode flag with the test module directory, then every
//! pass-through argument verbatim in its original order. Pure data, so the
//! argument-vector contract is testable without spawning anything.

use crate::config::LauncherConfig;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Flag selecting the framework's combined test-and-emulator mode
pub const MODE_FLAG: &str = "--test_and_emulator";

/// Environment variable disabling interpreter output buffering
pub const UNBUFFERED_VAR: &str = "PYTHONUNBUFFERED";

/// A fully assembled test framework invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCommand {
    /// Interpreter executable
    pub program: PathBuf,

    /// Arguments, starting with the framework entry point
    pub args: Vec<OsString>,

    /// Extra environment entries for the child
    pub envs: Vec<(String, String)>,
}

impl TestCommand {
    /// Assemble the framework invocation for one test module
    ///
    /// `pass_through` is forwarded verbatim after the two fixed leading
    /// arguments (mode flag and module directory).
    pub fn new(
        config: &LauncherConfig,
        module_dir: impl AsRef<Path>,
        pass_through: impl IntoIterator<Item = impl Into<OsString>>,
    ) -> Self {
        let mut args: Vec<OsString> = vec![
            config.framework_script().into(),
            OsString::from(MODE_FLAG),
            module_dir.as_ref().into(),
        ];
        args.extend(pass_through.into_iter().map(Into::into));

        Self {
            program: config.interpreter.clone(),
            args,
            envs: vec![(UNBUFFERED_VAR.to_string(), "1".to_string())],
        }
    }

    /// Path of the framework entry point (the first argument)
    pub fn script(&self) -> &Path {
        Path::new(&self.args[0])
    }

    /// Render the invocation for display, one token per space
    pub fn display_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

impl From<&TestCommand> for std::process::Command {
    fn from(cmd: &TestCommand) -> Self {
        let mut child = std::process::Command::new(&cmd.program);
        child.args(&cmd.args);
        for (name, value) in &cmd.envs {
            child.env(name, value);
        }
        child
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn test_config() -> LauncherConfig {
        LauncherConfig::new("/usr/bin/python3", "/opt/epics")
    }

    fn expected_script() -> PathBuf {
        Path::new("/opt/epics")
            .join("support")
            .join("IocTestFramework")
            .join("master")
            .join("run_tests.py")
    }

    #[test]
    fn test_fixed_prefix_no_pass_through() {
        let cmd = TestCommand::new(&test_config(), "/opt/ioc/tests/mymodule", Vec::<String>::new());

        assert_eq!(cmd.program, Path::new("/usr/bin/python3"));
        assert_eq!(
            cmd.args,
            vec![
                OsString::from(expected_script()),
                OsString::from(MODE_FLAG),
                OsString::from("/opt/ioc/tests/mymodule"),
            ]
        );
    }

    #[test]
    fn test_pass_through_order_preserved() {
        let extra = ["-t", "SomeTestClass", "--var", "EMULATOR=lewis"];
        let cmd = TestCommand::new(&test_config(), "/opt/ioc/tests/mymodule", extra);

        assert_eq!(cmd.args.len(), 3 + extra.len());
        for (i, arg) in extra.iter().enumerate() {
            assert_eq!(cmd.args[3 + i], OsString::from(arg));
        }
    }

    #[test]
    fn test_pass_through_forwarded_verbatim() {
        // Hyphens, spaces, and equals signs must survive untouched
        let extra = ["--weird arg with spaces", "-x=--y"];
        let cmd = TestCommand::new(&test_config(), "/tests/m", extra);
        assert_eq!(cmd.args[3], OsString::from("--weird arg with spaces"));
        assert_eq!(cmd.args[4], OsString::from("-x=--y"));
    }

    #[test]
    fn test_unbuffered_always_set() {
        let with_args = TestCommand::new(&test_config(), "/tests/m", ["-t", "x"]);
        let without_args = TestCommand::new(&test_config(), "/tests/m", Vec::<String>::new());

        for cmd in [with_args, without_args] {
            assert!(
                cmd.envs
                    .iter()
                    .any(|(name, value)| name == UNBUFFERED_VAR && value == "1")
            );
        }
    }

    #[test]
    fn test_script_accessor() {
        let cmd = TestCommand::new(&test_config(), "/tests/m", Vec::<String>::new());
        assert_eq!(cmd.script(), expected_script());
    }

    #[test]
    fn test_display_line() {
        let cmd = TestCommand::new(&test_config(), "/opt/ioc/tests/mymodule", ["-t", "Foo"]);
        let line = cmd.display_line();
        assert!(line.starts_with("/usr/bin/python3 "));
        assert!(line.contains(MODE_FLAG));
        assert!(line.ends_with("-t Foo"));
    }

    #[test]
    fn test_into_process_command() {
        let cmd = TestCommand::new(&test_config(), "/tests/m", ["-a"]);
        let child: std::process::Command = (&cmd).into();
        assert_eq!(child.get_program(), "/usr/bin/python3");
        assert_eq!(child.get_args().count(), 4);
        assert!(
            child
                .get_envs()
                .any(|(name, value)| name == UNBUFFERED_VAR && value == Some(OsStr::new("1")))
        );
    }
}
