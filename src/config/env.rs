//! Launcher environment resolution
//!
//! The launcher's inputs historically came from a shared site script
//! (`config_env`) that populated the process environment before the test
//! entry point ran. The environment is read once here into an explicit
//! [`LauncherConfig`], which is never mutated afterwards; everything
//! downstream takes the config object, not the process environment.

use crate::error::ConfigError;
use serde::Serialize;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the Python interpreter executable
pub const ENV_INTERPRETER: &str = "PYTHON3";

/// Environment variable naming the EPICS installation root
pub const ENV_INSTALL_ROOT: &str = "EPICS_KIT_ROOT";

/// Location of the test framework entry point under the install root
const FRAMEWORK_SCRIPT_PARTS: [&str; 4] = ["support", "IocTestFramework", "master", "run_tests.py"];

/// Resolved launcher environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LauncherConfig {
    /// Path of the interpreter used to run the framework
    pub interpreter: PathBuf,

    /// Root of the EPICS installation containing the framework
    pub install_root: PathBuf,
}

impl LauncherConfig {
    /// Creates a config from explicit paths
    pub fn new(interpreter: impl Into<PathBuf>, install_root: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
            install_root: install_root.into(),
        }
    }

    /// Resolve the launcher environment from the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVar` if `PYTHON3` or `EPICS_KIT_ROOT`
    /// is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|name| std::env::var_os(name))
    }

    /// Resolve the launcher environment through a variable lookup function
    pub fn resolve<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let interpreter = require_var(&get, ENV_INTERPRETER)?;
        let install_root = require_var(&get, ENV_INSTALL_ROOT)?;

        Ok(Self {
            interpreter: PathBuf::from(interpreter),
            install_root: PathBuf::from(install_root),
        })
    }

    /// Path of the test framework entry point under the install root
    pub fn framework_script(&self) -> PathBuf {
        let mut script = self.install_root.clone();
        for part in FRAMEWORK_SCRIPT_PARTS {
            script.push(part);
        }
        script
    }
}

fn require_var<F>(get: &F, name: &'static str) -> Result<OsString, ConfigError>
where
    F: Fn(&str) -> Option<OsString>,
{
    match get(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}
