//! CLI argument parsing using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

/// Output format for the env command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON object
    Json,
}

/// ioctest CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "ioctest")]
#[command(about = "Run IOC system tests through the IocTestFramework")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available ioctest subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run this test module's tests via the framework
    Run {
        /// Test module directory (defaults to the current directory)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Print the resolved framework invocation before running it
        #[arg(short, long)]
        verbose: bool,

        /// Arguments forwarded verbatim to the test framework
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<OsString>,
    },

    /// Validate a lint configuration file against the schema
    Lint {
        /// Configuration file to validate
        #[arg(default_value = "lint.toml")]
        path: PathBuf,
    },

    /// Show the resolved launcher environment
    Env {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },
}
