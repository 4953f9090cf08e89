use crate::book::RecordMap;
use crate::error::BookResult;

/// Repository for persisting the whole address book.
///
/// The book is always saved and loaded as one unit; there is no partial
/// persistence. Implementations decide the encoding.
pub trait RecordRepository: Send + Sync {
    /// Load the saved records.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> BookResult<Option<RecordMap>>;

    /// Replace the saved records with `records`.
    fn save(&self, records: &RecordMap) -> BookResult<()>;
}
