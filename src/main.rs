//! ioctest CLI entry point

use clap::Parser;
use ioctest::cli::{Command, args::Cli};
use std::process;

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Command::Run { dir, verbose, args } => {
            ioctest::cli::run::run_tests(dir.as_deref(), verbose, &args)
        }
        Command::Lint { path } => ioctest::cli::lint::run_lint(&path),
        Command::Env { format } => ioctest::cli::env::run_env(format),
    };

    process::exit(exit_code);
}
