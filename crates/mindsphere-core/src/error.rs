//! Error types shared across the page components.

use thiserror::Error;

/// A parsed document that fails strict validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is present but empty or whitespace.
    #[error("Required field is blank: {0}")]
    BlankField(String),
}

/// Errors raised while building a page configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration JSON could not be parsed.
    #[error("Configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A configuration value is unusable.
    #[error("Invalid configuration value for {field}: {reason}")]
    Invalid { field: String, reason: String },
}
