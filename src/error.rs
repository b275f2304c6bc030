//! Error types for ioctest
//!
//! This module defines the error types used throughout ioctest, following
//! a hierarchical structure with specific error variants for different
//! error categories.

use std::path::PathBuf;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty
    #[error(
        "Environment variable {0} is not set. \
         Run the shared config_env script before invoking ioctest."
    )]
    MissingVar(&'static str),

    /// Invalid TOML syntax in a lint configuration file
    #[error("Invalid lint configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Structurally valid but semantically invalid configuration
    #[error("Invalid lint configuration: {0}")]
    Validation(String),

    /// I/O error while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while launching the test framework child process
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// Test module directory does not exist or cannot be resolved
    #[error("Test module directory {}: {source}", dir.display())]
    BadModuleDir {
        dir: PathBuf,
        source: std::io::Error,
    },

    /// Framework entry point missing under the configured install root
    #[error("Test framework entry point not found: {}", script.display())]
    MissingFramework { script: PathBuf },

    /// Interpreter could not be spawned
    #[error("Failed to launch interpreter {}: {source}", interpreter.display())]
    Spawn {
        interpreter: PathBuf,
        source: std::io::Error,
    },
}

/// Top-level error type for ioctest
#[derive(Debug, thiserror::Error)]
pub enum IocTestError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Launch error
    #[error("Launch error: {0}")]
    Launch(#[from] LaunchError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
