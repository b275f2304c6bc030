//! Parsing and validation for lint.toml configuration files
//!
//! The lint configuration is pure data consumed by an external code-quality
//! tool; this module gives it a typed schema so `ioctest lint` can catch a
//! malformed file before CI does.

use crate::error::ConfigError;
use crate::types::RuleCode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest line length the schema accepts
const MAX_LINE_LENGTH: u16 = 500;

/// Main configuration struct for lint.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LintConfig {
    /// Maximum allowed line length
    pub line_length: u16,

    /// Paths excluded from linting, in declaration order
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Rule selection
    #[serde(default)]
    pub lint: RuleSelection,

    /// Formatting options
    #[serde(default)]
    pub format: FormatConfig,
}

impl LintConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: LintConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.line_length == 0 || self.line_length > MAX_LINE_LENGTH {
            return Err(ConfigError::Validation(format!(
                "line-length must be between 1 and {}, got {}",
                MAX_LINE_LENGTH, self.line_length
            )));
        }

        // A code both selected and ignored is almost certainly a mistake
        for code in &self.lint.extend_select {
            if self.lint.ignore.contains(code) {
                return Err(ConfigError::Validation(format!(
                    "Rule code '{}' appears in both extend-select and ignore",
                    code
                )));
            }
        }

        Ok(())
    }
}

/// Rule selection section (`[lint]`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuleSelection {
    /// Rule codes enabled on top of the tool's defaults
    #[serde(default)]
    pub extend_select: Vec<RuleCode>,

    /// Rule codes suppressed even if selected
    #[serde(default)]
    pub ignore: Vec<RuleCode>,
}

/// Formatting options section (`[format]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FormatConfig {
    /// Preferred quote style
    #[serde(default)]
    pub quote_style: QuoteStyle,

    /// Preferred indentation style
    #[serde(default)]
    pub indent_style: IndentStyle,

    /// Whether code examples in docstrings are formatted
    #[serde(default)]
    pub docstring_code_format: bool,

    /// Line-ending convention
    #[serde(default)]
    pub line_ending: LineEnding,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            quote_style: QuoteStyle::Double,
            indent_style: IndentStyle::Space,
            docstring_code_format: false,
            line_ending: LineEnding::Auto,
        }
    }
}

/// Quote style options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// Prefer double quotes
    #[default]
    Double,
    /// Prefer single quotes
    Single,
    /// Leave quotes as written
    Preserve,
}

/// Indentation style options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    /// Indent with spaces
    #[default]
    Space,
    /// Indent with tabs
    Tab,
}

/// Line-ending convention options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LineEnding {
    /// Keep whatever the file already uses
    #[default]
    Auto,
    /// Unix line endings
    Lf,
    /// Windows line endings
    CrLf,
    /// Platform-native line endings
    Native,
}
