#![forbid(unsafe_code)]

//! ioctest: launcher for IOC system tests
//!
//! ioctest is the stable command-line entry point for running one IOC test
//! module's system tests through the external IocTestFramework. It resolves
//! the launcher environment, assembles the framework invocation, runs it with
//! unbuffered output, and propagates the child's exit code exactly.

pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, IocTestError, LaunchError};

// Re-export core domain types for convenient access
pub use types::RuleCode;
