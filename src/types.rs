//! Core domain types for ioctest

use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated lint rule code
///
/// Rule codes are one or more uppercase ASCII letters naming a rule category,
/// optionally followed by digits selecting a specific rule (e.g. `D`, `E501`,
/// `RUF012`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuleCode(String);

impl RuleCode {
    /// Creates a new RuleCode, validating the input
    ///
    /// Returns None if the input is empty or not letters-then-digits.
    pub fn new(code: impl Into<String>) -> Option<Self> {
        let code = code.into();
        let digits_start = code
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(code.len());
        let (letters, digits) = code.split_at(digits_start);
        if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_uppercase()) {
            return None;
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(RuleCode(code))
    }

    /// Returns the rule code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the category prefix (the leading letters) of this code
    pub fn category(&self) -> &str {
        let digits_start = self
            .0
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(self.0.len());
        &self.0[..digits_start]
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RuleCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RuleCode::new(value.clone()).ok_or_else(|| format!("Invalid rule code: '{}'", value))
    }
}

impl From<RuleCode> for String {
    fn from(code: RuleCode) -> Self {
        code.0
    }
}
