//! Domain value objects and types.
//!
//! Phones and birthdays are validated at construction time, which keeps
//! invalid data out of records entirely.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::{BirthdayIssue, ValidationError};
pub use field::ValidatedField;
pub use phone::Phone;
