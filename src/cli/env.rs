//! Env command implementation
//!
//! Shows the launcher environment exactly as the run command would resolve
//! it, which makes "why won't my tests launch" diagnosable without running
//! anything.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use crate::config::LauncherConfig;
use serde::Serialize;

/// Machine-readable environment report
#[derive(Debug, Serialize)]
struct EnvReport<'a> {
    #[serde(flatten)]
    config: &'a LauncherConfig,
    framework_script: std::path::PathBuf,
}

/// Run the env command
pub fn run_env(format: OutputFormat) -> i32 {
    let config = match LauncherConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_ERROR;
        }
    };

    let report = EnvReport {
        framework_script: config.framework_script(),
        config: &config,
    };

    match format {
        OutputFormat::Human => {
            println!("interpreter:      {}", config.interpreter.display());
            println!("install root:     {}", config.install_root.display());
            println!("framework script: {}", report.framework_script.display());
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return EXIT_ERROR;
            }
        },
    }

    EXIT_SUCCESS
}
