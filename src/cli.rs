//! CLI argument parsing and command dispatch

pub mod args;
pub mod common;
pub mod env;
pub mod lint;
pub mod run;

// Re-export types for convenient access
pub use args::{Cli, Command, OutputFormat};
