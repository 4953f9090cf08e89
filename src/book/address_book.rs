//! The address book: records keyed by contact name.

use super::pages::Pages;
use crate::config::Config;
use crate::domain::birthday::today;
use crate::error::BookResult;
use crate::models::Record;
use crate::repositories::{JsonFileRepository, RecordRepository};
use chrono::NaiveDate;
use indexmap::IndexMap;

/// Records keyed by name, in insertion order.
pub type RecordMap = IndexMap<String, Record>;

/// A collection of contacts with at most one record per name.
///
/// Iteration order is insertion order. Overwriting a name keeps its original
/// position; deleting a name closes the gap.
pub struct AddressBook {
    records: RecordMap,
    page_size: usize,
    repository: Box<dyn RecordRepository>,
}

impl AddressBook {
    /// Create an empty book saving to the configured JSON file.
    pub fn new(config: &Config) -> Self {
        Self::with_repository(
            Box::new(JsonFileRepository::new(config.storage_path.clone())),
            config.page_size,
        )
    }

    /// Create an empty book with a custom persistence backend.
    pub fn with_repository(repository: Box<dyn RecordRepository>, page_size: usize) -> Self {
        Self {
            records: RecordMap::new(),
            page_size,
            repository,
        }
    }

    /// Number of records per page returned by [`AddressBook::pages`].
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Insert `record` under its name, returning the record it replaced.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        tracing::debug!(name = %record.name(), "Adding record");
        self.records.insert(record.name().to_string(), record)
    }

    /// Exact, case-sensitive lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable lookup by name, for editing phones or the birthday.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record called `name`. Deleting an unknown name is a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        if removed.is_some() {
            tracing::debug!(name, "Deleted record");
        }
        removed
    }

    /// Records whose name contains `query` ignoring case, or any of whose
    /// phones contain `query` exactly.
    ///
    /// Each record appears once, in insertion order. An empty query matches
    /// every record.
    pub fn global_search(&self, query: &str) -> Vec<&Record> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|(name, record)| {
                name.to_lowercase().contains(&needle)
                    || record
                        .phones()
                        .iter()
                        .any(|phone| phone.as_str().contains(query))
            })
            .map(|(_, record)| record)
            .collect()
    }

    /// Pages of the configured size, starting from the first record.
    pub fn pages(&self) -> Pages<'_> {
        self.pages_of(self.page_size)
    }

    /// Pages of `size` records, starting from the first record.
    pub fn pages_of(&self, size: usize) -> Pages<'_> {
        Pages::new(&self.records, size)
    }

    /// Records with a birthday within the next `within_days` days, soonest
    /// first, paired with the day count.
    pub fn upcoming_birthdays(&self, within_days: i64) -> Vec<(&Record, i64)> {
        self.upcoming_birthdays_from(within_days, today())
    }

    /// Like [`AddressBook::upcoming_birthdays`], counted from `today`.
    pub fn upcoming_birthdays_from(
        &self,
        within_days: i64,
        today: NaiveDate,
    ) -> Vec<(&Record, i64)> {
        let mut upcoming: Vec<(&Record, i64)> = self
            .records
            .values()
            .filter_map(|record| {
                record
                    .days_to_birthday_from(today)
                    .filter(|days| *days <= within_days)
                    .map(|days| (record, days))
            })
            .collect();
        upcoming.sort_by_key(|(_, days)| *days);
        upcoming
    }

    /// Write every record to the repository.
    pub fn save(&self) -> BookResult<()> {
        self.repository.save(&self.records)?;
        tracing::info!(records = self.records.len(), "Address book saved");
        Ok(())
    }

    /// Replace the in-memory records with the saved ones.
    ///
    /// Leaves the book unchanged when nothing has been saved yet.
    pub fn load(&mut self) -> BookResult<()> {
        match self.repository.load()? {
            Some(records) => {
                tracing::info!(records = records.len(), "Address book loaded");
                self.records = records;
            }
            None => tracing::info!("No saved address book; starting empty"),
        }
        Ok(())
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl std::fmt::Debug for AddressBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressBook")
            .field("records", &self.records)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = Vec<&'a Record>;
    type IntoIter = Pages<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages()
    }
}
