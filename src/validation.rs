//! Username validation
//!
//! Checks raw input against the identifier contract before any network activity.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Alphanumeric plus hyphen/underscore, 1-15 characters
pub const USERNAME_PATTERN: &str = r"^[a-zA-Z0-9_-]{1,15}$";

/// Reasons a username is rejected before fetching
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username should not be empty")]
    Empty,

    #[error("Invalid Username: {0}")]
    Invalid(String),
}

fn username_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(USERNAME_PATTERN).expect("username pattern is a valid regex"))
}

/// Validate a raw username
///
/// Emptiness is checked on the trimmed value; the pattern is matched against
/// the raw value, so surrounding whitespace is rejected as invalid.
pub fn validate_username(raw: &str) -> Result<(), ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    if !username_regex().is_match(raw) {
        return Err(ValidationError::Invalid(raw.to_string()));
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod validation_tests;
