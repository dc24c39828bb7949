//! Custom error types for fitness-rs
//!
//! User-friendly error messages for all failure scenarios.

use thiserror::Error;

/// Main error type for the fitness-rs application
#[derive(Error, Debug)]
pub enum FitError {
    /// A required form field was left blank
    #[error("Please fill all fields")]
    MissingFields,

    /// A numeric form field did not hold a positive whole number
    #[error("{field} must be a whole number greater than zero (got '{value}')")]
    InvalidNumber {
        /// Label of the offending field
        field: &'static str,
        /// Raw text the user entered
        value: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),

    /// Terminal/TUI error
    #[error("Terminal error: {0}\n\n  → Try resizing your terminal or restarting it.")]
    Terminal(String),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),
}

impl From<toml::de::Error> for FitError {
    fn from(err: toml::de::Error) -> Self {
        FitError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for FitError {
    fn from(err: toml::ser::Error) -> Self {
        FitError::Toml(err.to_string())
    }
}

/// Result type alias using FitError
pub type Result<T> = std::result::Result<T, FitError>;
