//! Domain value objects and types.
//!
//! This module contains the validated fields a record is built from: names,
//! phone numbers and birthdays. Each one validates on construction and on
//! every later assignment, so invalid data cannot be represented.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
