//! Birthday value object.

use super::errors::{BirthdayIssue, ValidationError};
use super::field::ValidatedField;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format of a birthday (`DD-MM-YYYY`).
pub const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

/// The current local date.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A calendar date that is not after the day it was entered.
///
/// The "not in the future" rule applies only when a birthday is built from
/// user input. Deserialized birthdays are checked for format only, so data
/// saved earlier never becomes unreadable.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let bday = Birthday::new("02-02-2020").unwrap();
/// assert_eq!(bday.to_string(), "02-02-2020");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validated against the current date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthdayFormat` if the text is not a
    /// `DD-MM-YYYY` date or the date is after today.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::new_as_of(raw, today())
    }

    /// Create a new Birthday, validated against an explicit `today`.
    pub fn new_as_of(raw: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        let date = Self::parse_date(raw).ok_or_else(|| ValidationError::InvalidBirthdayFormat {
            value: raw.to_string(),
            issue: BirthdayIssue::Unparseable,
        })?;

        if date > today {
            return Err(ValidationError::InvalidBirthdayFormat {
                value: raw.to_string(),
                issue: BirthdayIssue::InFuture,
            });
        }

        Ok(Self(date))
    }

    /// Strict `DD-MM-YYYY`: a four-digit year and no whitespace anywhere.
    fn parse_date(raw: &str) -> Option<NaiveDate> {
        if raw.chars().any(char::is_whitespace) {
            return None;
        }

        let year = raw.rsplit('-').next()?;
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT).ok()
    }

    /// The full birth date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's anniversary in `year`.
    ///
    /// A 29 February birthday falls on 1 March in non-leap years.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        self.0
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .unwrap_or(self.0)
    }

    /// The first anniversary on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.in_year(today.year());
        if today > this_year {
            self.in_year(today.year() + 1)
        } else {
            this_year
        }
    }

    /// Whole days from `today` until the next anniversary (0 on the day itself).
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }
}

impl ValidatedField for Birthday {
    fn validate(raw: &str) -> bool {
        Self::parse_date(raw).is_some_and(|date| date <= today())
    }

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw)
    }
}

// Serde support - serialize as DD-MM-YYYY
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize checking the format only
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_date(&s).map(Self).ok_or_else(|| {
            serde::de::Error::custom(ValidationError::InvalidBirthdayFormat {
                value: s,
                issue: BirthdayIssue::Unparseable,
            })
        })
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
