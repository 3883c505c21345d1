//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during field validation.
///
/// Every field constructor and setter returns this before anything is stored,
/// so a failed assignment never leaves a half-written value behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    #[error("name cannot be empty")]
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    #[error("invalid phone number: {0}")]
    InvalidPhone(String),

    /// The provided date is not a real `YYYY-MM-DD` date.
    #[error("invalid date format: {0}, expected YYYY-MM-DD")]
    InvalidDate(String),
}
