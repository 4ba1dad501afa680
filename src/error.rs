//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Message shown when the expense form is submitted with an empty field
pub const MISSING_FIELDS_MESSAGE: &str = "All input are required";

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A required expense field was left empty
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields,

    /// The amount could not be read as a number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Expenses cannot carry a negative amount
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(i64),

    /// The date was not in YYYY-MM-DD form
    #[error("Invalid date '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A dispatched action tag that the store does not know
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl TrackerError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this error was raised by input validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::MissingFields
                | Self::InvalidAmount(_)
                | Self::NegativeAmount(_)
                | Self::InvalidDate(_)
        )
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_missing_fields_message() {
        let err = TrackerError::MissingFields;
        assert_eq!(err.to_string(), MISSING_FIELDS_MESSAGE);
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_error() {
        let err = TrackerError::category_not_found("travel");
        assert_eq!(err.to_string(), "Category not found: travel");
        assert!(matches!(err, TrackerError::NotFound { .. }));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let tracker_err: TrackerError = io_err.into();
        assert!(matches!(tracker_err, TrackerError::Io(_)));
    }
}
