use super::traits::RecordRepository;
use crate::book::RecordMap;
use crate::error::BookResult;
use crate::models::Record;
use serde::de::Error as _;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores the address book as a JSON array of records in a single file.
///
/// Records appear in insertion order. On load the map is rebuilt from each
/// record's own name, so keys and names always agree; a file that names the
/// same contact twice is rejected. Writes go to a sibling temporary file that
/// is then renamed over the target, so a failed save never leaves a
/// truncated book or a stray temporary file behind.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository backed by `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn write_then_rename(&self, json: &str) -> BookResult<()> {
        let temp = self.temp_path();
        let result = fs::write(&temp, json).and_then(|()| fs::rename(&temp, &self.path));
        if let Err(e) = result {
            if let Err(cleanup) = fs::remove_file(&temp) {
                if cleanup.kind() != ErrorKind::NotFound {
                    tracing::warn!(path = %temp.display(), error = %cleanup, "Failed to remove temporary file");
                }
            }
            return Err(e.into());
        }
        Ok(())
    }
}

impl RecordRepository for JsonFileRepository {
    fn load(&self) -> BookResult<Option<RecordMap>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No saved address book");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let list: Vec<Record> = serde_json::from_str(&content)?;
        let mut records = RecordMap::with_capacity(list.len());
        for record in list {
            let name = record.name().to_string();
            if records.contains_key(&name) {
                return Err(serde_json::Error::custom(format!("duplicate contact name: {name}")).into());
            }
            records.insert(name, record);
        }
        Ok(Some(records))
    }

    fn save(&self, records: &RecordMap) -> BookResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let list: Vec<&Record> = records.values().collect();
        let json = serde_json::to_string_pretty(&list)?;
        self.write_then_rename(&json)
    }
}
