//! Contact Book - a personal address book with validated phones and birthdays.
//!
//! Contacts are stored by name with any number of ten-digit phone numbers and
//! an optional birthday. The book supports exact lookup, substring search over
//! names and phones, fixed-size paging and whole-book persistence to a JSON file.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Phone`, `Birthday`)
//! - **models**: The `Record` for a single contact
//! - **book**: The `AddressBook` collection and its `Pages` iterator
//! - **repositories**: Persistence backends for the whole book
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **cli**: Command-line parsing and execution

pub mod book;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use book::{AddressBook, Pages, RecordMap};
pub use config::Config;
pub use domain::{Birthday, BirthdayIssue, Phone, ValidatedField, ValidationError};
pub use error::{BookError, BookResult, ConfigError, ConfigResult};
pub use models::Record;
pub use repositories::{JsonFileRepository, RecordRepository};
