//! Domain validation errors.

use std::fmt;
use thiserror::Error;

/// Why a birthday string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayIssue {
    /// The text is not a `DD-MM-YYYY` date.
    Unparseable,

    /// The date lies after the day it was validated on.
    InFuture,
}

impl fmt::Display for BirthdayIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unparseable => write!(f, "expected DD-MM-YYYY"),
            Self::InFuture => write!(f, "date is in the future"),
        }
    }
}

/// Errors that can occur during field validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The phone number is not exactly ten decimal digits.
    #[error("Invalid phone number '{0}': expected exactly 10 digits")]
    InvalidPhoneFormat(String),

    /// The birthday is unparseable or lies in the future.
    #[error("Invalid birthday '{value}': {issue}")]
    InvalidBirthdayFormat { value: String, issue: BirthdayIssue },
}
