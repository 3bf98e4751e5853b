/// Error types for the FloodGuard core library
use crate::reading::ReadingField;
use thiserror::Error;

/// Errors raised by the prediction form
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    /// A required field was left empty
    #[error("{} is required", .0.label())]
    MissingField(ReadingField),

    /// A field holds text that is not a number
    #[error("{} must be a number (got {value:?})", .field.label())]
    InvalidNumber { field: ReadingField, value: String },

    /// A prediction is already in flight
    #[error("A prediction is already in progress")]
    PredictionPending,
}

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for the expected shape
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed but is out of range
    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Type alias for form Results
pub type Result<T> = std::result::Result<T, FormError>;
