//! Address Book - an in-memory contact book with validated records.
//!
//! Records hold a name, an optional birthday and a list of phone numbers.
//! Every field is validated when it is created and again on every
//! assignment, so a record never holds malformed data. Records live in an
//! [`AddressBook`] keyed by name, which supports lookup, deletion and
//! batched iteration.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (`Name`, `Phone`, `Birthday`)
//! - **models**: The `Record` contact type
//! - **book**: `AddressBook` and its batch iterator
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **logging**: `tracing` subscriber setup
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//!
//! let mut john = Record::new("John", Some("2000-05-15")).unwrap();
//! john.add_phone("1234567890").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(john);
//! assert!(book.find("John").unwrap().find_phone("1234567890").is_some());
//! ```

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod models;

pub use book::{AddressBook, Batch, RecordBatches};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError, ConfigResult};
pub use models::Record;
