//! Persistence of daily entries on top of a key-value storage slot.
//!
//! The whole collection lives under a single key as a JSON array. Every
//! write is a full read-modify-write of that array, so saving one date
//! never drops the others.

use crate::query::{entries_in_window, Window};
use crate::storage::KeyValueStorage;
use crate::{DailyEntry, Result};
use chrono::NaiveDate;

/// Default storage slot for the entry collection
pub const DEFAULT_ENTRIES_KEY: &str = "wellness_entries";

/// Journal of daily entries, at most one per date
pub struct EntryStore<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> EntryStore<S> {
    /// Create a store using the default storage slot
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_ENTRIES_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Give back the underlying storage
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Insert `entry`, replacing any existing entry with the same date.
    ///
    /// The replaced entry keeps its position in the stored array.
    pub fn save(&mut self, entry: DailyEntry) -> Result<()> {
        let mut entries = self.get_all()?;

        match entries.iter_mut().find(|e| e.date == entry.date) {
            Some(existing) => {
                tracing::debug!("Replacing entry for {}", entry.date);
                *existing = entry;
            }
            None => {
                tracing::debug!("Adding entry for {}", entry.date);
                entries.push(entry);
            }
        }

        self.write(&entries)
    }

    /// All persisted entries, in stored order.
    ///
    /// Missing or unparsable data reads as an empty journal. Elements of
    /// the array that are not valid entries are skipped. Only a failure of
    /// the storage itself is returned as an error.
    pub fn get_all(&self) -> Result<Vec<DailyEntry>> {
        let Some(contents) = self.storage.get(&self.key)? else {
            return Ok(Vec::new());
        };

        let values = match serde_json::from_str::<Vec<serde_json::Value>>(&contents) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(
                    "Stored entries under {:?} are not a JSON array: {}. Treating as empty.",
                    self.key,
                    e
                );
                return Ok(Vec::new());
            }
        };

        let mut entries = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            match serde_json::from_value::<DailyEntry>(value) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    tracing::warn!("Skipping malformed entry at index {}: {}", index, e);
                }
            }
        }

        tracing::debug!("Loaded {} entries from {:?}", entries.len(), self.key);
        Ok(entries)
    }

    /// Entry recorded for `date`, if any
    pub fn get_by_date(&self, date: NaiveDate) -> Result<Option<DailyEntry>> {
        Ok(self.get_all()?.into_iter().find(|e| e.date == date))
    }

    /// Entries in the trailing `window` ending at `today`, oldest first
    pub fn get_in_window(&self, window: Window, today: NaiveDate) -> Result<Vec<DailyEntry>> {
        Ok(entries_in_window(self.get_all()?, window, today))
    }

    /// Remove every entry. Irreversible.
    pub fn clear_all(&mut self) -> Result<()> {
        self.storage.remove(&self.key)?;
        tracing::info!("Cleared all entries under {:?}", self.key);
        Ok(())
    }

    fn write(&mut self, entries: &[DailyEntry]) -> Result<()> {
        let contents = serde_json::to_string(entries)?;
        self.storage.set(&self.key, &contents)?;
        tracing::debug!("Saved {} entries to {:?}", entries.len(), self.key);
        Ok(())
    }
}
