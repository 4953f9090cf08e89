use contact_book::book::RecordMap;
use contact_book::error::{BookError, BookResult};
use contact_book::repositories::RecordRepository;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock record repository for testing.
///
/// Keeps the saved book in memory, can be told to fail, and tracks method
/// calls for verification. Clones share state, so a test can keep a handle
/// after boxing one into an `AddressBook`.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockRecordRepository {
    saved: Arc<Mutex<Option<RecordMap>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockRecordRepository {
    /// Create a repository with nothing saved.
    pub fn new() -> Self {
        Self {
            saved: Arc::new(Mutex::new(None)),
            fail_saves: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a repository that already holds `records`.
    pub fn with_saved(records: RecordMap) -> Self {
        let repo = Self::new();
        *repo.saved.lock().unwrap() = Some(records);
        repo
    }

    /// Make every subsequent save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// The most recently saved records.
    pub fn saved(&self) -> Option<RecordMap> {
        self.saved.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordRepository for MockRecordRepository {
    fn load(&self) -> BookResult<Option<RecordMap>> {
        self.track_call("load");
        Ok(self.saved.lock().unwrap().clone())
    }

    fn save(&self, records: &RecordMap) -> BookResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(BookError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only storage",
            )));
        }

        *self.saved.lock().unwrap() = Some(records.clone());
        Ok(())
    }
}
