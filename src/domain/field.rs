//! The validated-field contract shared by phones and birthdays.

use super::errors::ValidationError;
use std::fmt;

/// A scalar value that is checked once, at construction.
///
/// Implementors are immutable: replacing a value means building a new one
/// through [`ValidatedField::parse`], so an invalid value is never stored.
pub trait ValidatedField: Sized + fmt::Display {
    /// Returns `true` if `raw` is acceptable for this field.
    fn validate(raw: &str) -> bool;

    /// Build the field from raw text.
    ///
    /// # Errors
    ///
    /// Returns the field's `ValidationError` kind when `validate` rejects `raw`.
    fn parse(raw: &str) -> Result<Self, ValidationError>;
}
