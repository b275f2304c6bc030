//! Lint command implementation
//!
//! Validates a lint configuration file against the documented schema. The
//! file is pure data for an external code-quality tool; this check exists so
//! a malformed file fails fast here instead of deep inside a CI pipeline.

use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use crate::config::LintConfig;
use std::path::Path;

/// Run the lint command
pub fn run_lint(path: &Path) -> i32 {
    match LintConfig::load(path) {
        Ok(config) => {
            println!(
                "{}: OK ({} selected, {} ignored, line length {})",
                path.display(),
                config.lint.extend_select.len(),
                config.lint.ignore.len(),
                config.line_length
            );
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}: {}", path.display(), e);
            EXIT_ERROR
        }
    }
}
