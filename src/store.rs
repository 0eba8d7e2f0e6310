//! Date-keyed entry persistence backed by a single pretty-printed JSON file.
//!
//! Every `save` reloads the whole file, replaces one date and rewrites the
//! file. There is no locking: two saves racing on the same date can lose an
//! update, and an interrupted write leaves a file that `load` treats as empty.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::{JournalError, JournalResult};
use crate::models::{self, EntryCollection};

#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the whole journal. A missing, empty, unreadable or malformed file
    /// yields an empty collection.
    pub fn load(&self) -> EntryCollection {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return EntryCollection::new(),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "entry file unreadable, treating journal as empty"
                );
                return EntryCollection::new();
            }
        };

        let content = content.trim();
        if content.is_empty() {
            return EntryCollection::new();
        }

        match serde_json::from_str(content) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "entry file malformed, treating journal as empty"
                );
                EntryCollection::new()
            }
        }
    }

    pub fn get(&self, date: NaiveDate) -> Option<String> {
        self.load().remove(&date)
    }

    /// Stores `text` as today's entry, replacing anything already written today.
    pub fn save(&self, text: &str) -> JournalResult<NaiveDate> {
        let today = models::today();
        self.save_on(today, text)?;
        Ok(today)
    }

    pub fn save_on(&self, date: NaiveDate, text: &str) -> JournalResult<()> {
        if text.trim().is_empty() {
            return Err(JournalError::EmptyEntry);
        }

        let mut entries = self.load();
        entries.insert(date, text.to_string());
        self.write_all(&entries)?;

        info!(
            %date,
            words = text.split_whitespace().count(),
            total_entries = entries.len(),
            "entry saved"
        );
        Ok(())
    }

    fn write_all(&self, entries: &EntryCollection) -> JournalResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| JournalError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let body = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, body).map_err(|source| JournalError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = EntryStore::new(dir.path().join("entries.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn empty_or_corrupt_file_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("entries.json");
        let store = EntryStore::new(&path);

        fs::write(&path, "   \n").unwrap();
        assert!(store.load().is_empty());

        fs::write(&path, "{ not json").unwrap();
        assert!(store.load().is_empty());

        fs::write(&path, r#"["2026-05-01", "text"]"#).unwrap();
        assert!(store.load().is_empty());

        fs::write(&path, r#"{"yesterday": "text"}"#).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_creates_directory_and_pretty_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("entries.json");
        let store = EntryStore::new(&path);

        store.save_on(day(1), "first entry").unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "{\n  \"2026-05-01\": \"first entry\"\n}");
        assert_eq!(store.get(day(1)).as_deref(), Some("first entry"));
    }

    #[test]
    fn same_day_save_overwrites() {
        let dir = tempdir().unwrap();
        let store = EntryStore::new(dir.path().join("entries.json"));

        store.save_on(day(2), "morning").unwrap();
        store.save_on(day(3), "next day").unwrap();
        store.save_on(day(2), "evening rewrite").unwrap();

        let entries = store.load();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[&day(2)], "evening rewrite");
        assert_eq!(entries[&day(3)], "next day");
    }

    #[test]
    fn save_uses_todays_date() {
        let dir = tempdir().unwrap();
        let store = EntryStore::new(dir.path().join("entries.json"));

        let date = store.save("hello").unwrap();
        store.save("hello again").unwrap();

        let entries = store.load();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[&date], "hello again");
    }

    #[test]
    fn blank_text_is_rejected_without_writing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("entries.json");
        let store = EntryStore::new(&path);

        let err = store.save_on(day(4), "  \n\t").unwrap_err();
        assert!(matches!(err, JournalError::EmptyEntry));
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_file_is_replaced_on_next_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("entries.json");
        fs::write(&path, "garbage").unwrap();

        let store = EntryStore::new(&path);
        store.save_on(day(5), "fresh start").unwrap();

        let entries = store.load();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[&day(5)], "fresh start");
    }
}
