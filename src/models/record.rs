//! Record model representing one contact in the address book.

use crate::domain::birthday::today;
use crate::domain::{Birthday, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, its phone numbers and an optional birthday.
///
/// The name is the record's key inside an [`AddressBook`](crate::AddressBook)
/// and cannot change after construction. Phones keep insertion order and may
/// repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthdayFormat` if `birthday` is given
    /// and is not a past or present `DD-MM-YYYY` date.
    pub fn new(name: impl Into<String>, birthday: Option<&str>) -> Result<Self, ValidationError> {
        let birthday = birthday.map(Birthday::new).transpose()?;
        Ok(Self {
            name: name.into(),
            phones: Vec::new(),
            birthday,
        })
    }

    /// Create a record with a birthday that has already been validated.
    pub fn with_birthday(name: impl Into<String>, birthday: Birthday) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: Some(birthday),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(raw)?;
        tracing::debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// The list is left untouched on any error.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if no phone equals `old`
    /// - `BookError::Validation` if `new` is not a valid phone
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self
            .position_of(old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;
        let phone = Phone::new(new)?;
        tracing::debug!(name = %self.name, old, new, "Editing phone");
        self.phones[index] = phone;
        Ok(())
    }

    /// The first phone equal to `value`.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == value)
    }

    /// Remove the first phone equal to `value`, returning it.
    ///
    /// Removing a phone that is not present is not an error.
    pub fn remove_phone(&mut self, value: &str) -> Option<Phone> {
        let index = self.position_of(value)?;
        tracing::debug!(name = %self.name, phone = value, "Removing phone");
        Some(self.phones.remove(index))
    }

    /// Set or replace the birthday from user input.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::new(raw)?;
        tracing::debug!(name = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Days until the next birthday, counted from the current date.
    ///
    /// Returns `None` when the birthday is unknown.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(today())
    }

    /// Days until the next birthday, counted from `today`.
    ///
    /// A birthday falling on `today` yields 0; only a date strictly before
    /// `today` moves to next year.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|birthday| birthday.days_until(today))
    }

    fn position_of(&self, value: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.as_str() == value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
