//! Configuration: launcher environment and lint configuration files

pub mod env;
pub mod lint_toml;

pub use env::LauncherConfig;
pub use lint_toml::{FormatConfig, IndentStyle, LineEnding, LintConfig, QuoteStyle};
