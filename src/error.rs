//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when working with records and the address book.
#[derive(Error, Debug)]
pub enum BookError {
    /// A phone or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No phone with the given value exists on the record
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    /// No record with the given name exists in the book
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// Reading or writing the storage file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The storage file could not be encoded or decoded
    #[error("Storage format error: {0}")]
    Serialization(#[from] serde_json::Error),
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
