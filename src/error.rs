//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field value failed its format rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone to edit is not on the record
    #[error("phone not found: {0}")]
    PhoneNotFound(String),

    /// Batches must hold at least one record
    #[error("batch size must be greater than zero")]
    InvalidBatchSize,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::PhoneNotFound("1234567890".to_string());
        assert_eq!(err.to_string(), "phone not found: 1234567890");

        let err = BookError::InvalidBatchSize;
        assert_eq!(err.to_string(), "batch size must be greater than zero");

        let err = ConfigError::InvalidValue {
            var: "ADDRESS_BOOK_BATCH_SIZE".to_string(),
            reason: "Must be greater than zero".to_string(),
        };
        assert!(err.to_string().contains("ADDRESS_BOOK_BATCH_SIZE"));
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: BookError = ValidationError::InvalidPhone("12".to_string()).into();
        assert_eq!(err.to_string(), "invalid phone number: 12");
        assert!(matches!(err, BookError::Validation(_)));
    }
}
