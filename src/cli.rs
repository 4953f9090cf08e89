//! Command-line interface for the contact book.
//!
//! Parsing is done with `clap`; [`execute`] runs one command against an
//! [`AddressBook`] and writes human-readable output. Errors are returned to
//! the caller, which turns them into messages with [`user_message`].

use crate::book::AddressBook;
use crate::config::Config;
use crate::domain::{BirthdayIssue, ValidationError};
use crate::error::BookError;
use crate::models::Record;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Personal contact book with phones, birthdays and search.
#[derive(Debug, Parser)]
#[command(name = "contact-book", version, about)]
pub struct Cli {
    /// Storage file (overrides CONTACT_BOOK_PATH)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Records per page for `list` (overrides CONTACT_BOOK_PAGE_SIZE)
    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add a contact, replacing any contact with the same name
    Add {
        name: String,
        /// Birthday as DD-MM-YYYY
        #[arg(long)]
        birthday: Option<String>,
        /// Phone number (10 digits); may be repeated
        #[arg(long = "phone")]
        phones: Vec<String>,
    },
    /// Add a phone number to a contact
    AddPhone { name: String, phone: String },
    /// Replace one of a contact's phone numbers
    EditPhone { name: String, old: String, new: String },
    /// Remove a phone number from a contact
    RemovePhone { name: String, phone: String },
    /// Set or replace a contact's birthday
    SetBirthday { name: String, birthday: String },
    /// Show one contact and the days left until their birthday
    Show { name: String },
    /// Delete a contact
    Delete { name: String },
    /// Search names (ignoring case) and phone numbers
    Search { query: String },
    /// List all contacts page by page
    List,
    /// List birthdays coming up soon
    Birthdays {
        /// Look-ahead window in days
        #[arg(long, default_value_t = 7)]
        within: i64,
    },
}

impl Command {
    /// Whether a successful run of this command changes the book.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Add { .. }
                | Self::AddPhone { .. }
                | Self::EditPhone { .. }
                | Self::RemovePhone { .. }
                | Self::SetBirthday { .. }
                | Self::Delete { .. }
        )
    }
}

impl Cli {
    /// Apply command-line overrides on top of the environment config.
    pub fn resolve_config(&self, mut config: Config) -> Result<Config> {
        if let Some(file) = &self.file {
            config.storage_path = file.clone();
        }
        if let Some(page_size) = self.page_size {
            Config::check_page_size(page_size)?;
            config.page_size = page_size;
        }
        Ok(config)
    }
}

fn find_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()).into())
}

/// Run `command` against `book`, writing results to `out`.
///
/// On error the book is left as it was.
pub fn execute(command: &Command, book: &mut AddressBook, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Add {
            name,
            birthday,
            phones,
        } => {
            let mut record = Record::new(name.as_str(), birthday.as_deref())?;
            for phone in phones {
                record.add_phone(phone)?;
            }
            match book.add_record(record) {
                Some(_) => writeln!(out, "Contact {} replaced", name)?,
                None => writeln!(out, "Contact {} added", name)?,
            }
        }
        Command::AddPhone { name, phone } => {
            find_mut(book, name)?.add_phone(phone)?;
            writeln!(out, "Phone {} added to {}", phone, name)?;
        }
        Command::EditPhone { name, old, new } => {
            find_mut(book, name)?.edit_phone(old, new)?;
            writeln!(out, "Phone {} changed to {}", old, new)?;
        }
        Command::RemovePhone { name, phone } => {
            match find_mut(book, name)?.remove_phone(phone) {
                Some(_) => writeln!(out, "Phone {} removed from {}", phone, name)?,
                None => writeln!(out, "{} has no phone {}", name, phone)?,
            }
        }
        Command::SetBirthday { name, birthday } => {
            find_mut(book, name)?.set_birthday(birthday)?;
            writeln!(out, "Birthday of {} set to {}", name, birthday)?;
        }
        Command::Show { name } => {
            let record = book
                .find(name)
                .ok_or_else(|| BookError::ContactNotFound(name.clone()))?;
            writeln!(out, "{}", record)?;
            if let Some(days) = record.days_to_birthday() {
                writeln!(out, "Days to birthday: {}", days)?;
            }
        }
        Command::Delete { name } => match book.delete(name) {
            Some(_) => writeln!(out, "Contact {} deleted", name)?,
            None => writeln!(out, "Contact {} not found; nothing deleted", name)?,
        },
        Command::Search { query } => {
            let found = book.global_search(query);
            if found.is_empty() {
                writeln!(out, "No contacts match '{}'", query)?;
            }
            for record in found {
                writeln!(out, "{}", record)?;
            }
        }
        Command::List => {
            if book.is_empty() {
                writeln!(out, "Address book is empty")?;
            }
            for (index, page) in book.pages().enumerate() {
                for record in page {
                    writeln!(out, "{}", record)?;
                }
                writeln!(out, "page {}", index + 1)?;
            }
        }
        Command::Birthdays { within } => {
            let upcoming = book.upcoming_birthdays(*within);
            if upcoming.is_empty() {
                writeln!(out, "No birthdays in the next {} days", within)?;
            }
            for (record, days) in upcoming {
                writeln!(out, "{}: in {} days", record.name(), days)?;
            }
        }
    }
    Ok(())
}

/// A message suitable for showing to the user for `err`.
pub fn user_message(err: &anyhow::Error) -> String {
    let validation = err.downcast_ref::<ValidationError>().or_else(|| {
        match err.downcast_ref::<BookError>() {
            Some(BookError::Validation(inner)) => Some(inner),
            _ => None,
        }
    });

    if let Some(validation) = validation {
        return match validation {
            ValidationError::InvalidPhoneFormat(_) => {
                "Invalid phone number, use exactly 10 digits".to_string()
            }
            ValidationError::InvalidBirthdayFormat {
                issue: BirthdayIssue::Unparseable,
                ..
            } => "Invalid format, use DD-MM-YYYY".to_string(),
            ValidationError::InvalidBirthdayFormat {
                issue: BirthdayIssue::InFuture,
                ..
            } => "Invalid birthday, the date is in the future".to_string(),
        };
    }

    match err.downcast_ref::<BookError>() {
        Some(BookError::PhoneNotFound(phone)) => format!("Phone {} not found", phone),
        Some(BookError::ContactNotFound(name)) => format!("Contact {} not found", name),
        _ => format!("{:#}", err),
    }
}
