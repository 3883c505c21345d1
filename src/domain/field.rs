//! The `Field` trait shared by every validated record value.

use super::errors::ValidationError;

/// A single validated value owned by a record.
///
/// Implementors only supply [`Field::parse`]. Assignment goes through
/// [`Field::set`], which re-runs the same validation and only replaces the
/// stored value once it has passed.
///
/// # Example
///
/// ```
/// use address_book::domain::{Field, Phone};
///
/// let mut phone = Phone::parse("1234567890").unwrap();
/// assert!(phone.set("12345").is_err());
/// assert_eq!(phone.as_str(), "1234567890");
/// ```
pub trait Field: Sized {
    /// Validate raw text and build the field from it.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing why `raw` was rejected.
    fn parse(raw: &str) -> Result<Self, ValidationError>;

    /// Replace the current value with `raw`, validating first.
    ///
    /// On error the current value is left untouched.
    fn set(&mut self, raw: &str) -> Result<(), ValidationError> {
        *self = Self::parse(raw)?;
        Ok(())
    }
}
