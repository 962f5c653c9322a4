//! In-memory record store
//!
//! Records live in a `RwLock<Vec<_>>` in insertion order. The uniqueness
//! check and the append happen under a single write-lock acquisition, so
//! insert-if-absent is atomic: concurrent writers cannot both insert the
//! same value. Optionally backed by a JSON snapshot rewritten after every
//! successful mutation.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::query::StringFilter;

use super::errors::{StoreError, StoreResult};
use super::record::AnalyzedRecord;
use super::snapshot::{load_snapshot, save_snapshot};
use super::StringStore;

/// In-memory store with optional snapshot persistence.
pub struct MemoryStore {
    records: RwLock<Vec<AnalyzedRecord>>,
    snapshot_path: Option<PathBuf>,
}

impl MemoryStore {
    /// Create an empty, purely in-memory store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            snapshot_path: None,
        }
    }

    /// Create a store backed by a snapshot file, loading any existing
    /// records from it.
    pub fn with_snapshot(path: PathBuf) -> StoreResult<Self> {
        let records = load_snapshot(&path)?;
        Ok(Self {
            records: RwLock::new(records),
            snapshot_path: Some(path),
        })
    }

    /// Rewrite the snapshot if one is configured.
    ///
    /// Called while holding the write lock so the snapshot always reflects
    /// a consistent record set.
    fn persist(&self, records: &[AnalyzedRecord]) -> StoreResult<()> {
        match &self.snapshot_path {
            Some(path) => save_snapshot(path, records),
            None => Ok(()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StringStore for MemoryStore {
    fn insert(&self, record: AnalyzedRecord) -> StoreResult<AnalyzedRecord> {
        let mut records = self.records.write().map_err(|_| StoreError::lock_poisoned())?;

        // Uniqueness check and append under the same lock: atomic
        // insert-if-absent. The hash is a pure function of the value, so
        // either comparison alone would do; checking both keeps the
        // invariant explicit.
        if let Some(existing) = records.iter().find(|r| {
            r.value == record.value || r.content_hash() == record.content_hash()
        }) {
            return Err(StoreError::duplicate(existing.content_hash()));
        }

        records.push(record.clone());
        self.persist(&records)?;

        Ok(record)
    }

    fn get(&self, value: &str) -> StoreResult<AnalyzedRecord> {
        let records = self.records.read().map_err(|_| StoreError::lock_poisoned())?;

        records
            .iter()
            .find(|r| r.value == value)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn list(&self, filter: &StringFilter) -> StoreResult<Vec<AnalyzedRecord>> {
        let records = self.records.read().map_err(|_| StoreError::lock_poisoned())?;

        Ok(records.iter().filter(|r| filter.matches(r)).cloned().collect())
    }

    fn remove(&self, value: &str) -> StoreResult<()> {
        let mut records = self.records.write().map_err(|_| StoreError::lock_poisoned())?;

        let idx = records
            .iter()
            .position(|r| r.value == value)
            .ok_or(StoreError::NotFound)?;

        records.remove(idx);
        self.persist(&records)?;

        Ok(())
    }

    fn clear(&self) -> StoreResult<usize> {
        let mut records = self.records.write().map_err(|_| StoreError::lock_poisoned())?;

        let removed = records.len();
        records.clear();
        self.persist(&records)?;

        Ok(removed)
    }

    fn count(&self) -> StoreResult<usize> {
        let records = self.records.read().map_err(|_| StoreError::lock_poisoned())?;
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(value: &str) -> AnalyzedRecord {
        AnalyzedRecord::new(value.to_string())
    }

    #[test]
    fn test_insert_and_get() {
        let store = MemoryStore::new();
        store.insert(record("hello")).unwrap();

        let found = store.get("hello").unwrap();
        assert_eq!(found.value, "hello");
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let store = MemoryStore::new();
        store.insert(record("hello")).unwrap();

        let result = store.insert(record("hello"));
        assert!(matches!(result, Err(StoreError::Duplicate { .. })));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(store.get("absent"), Err(StoreError::NotFound)));
    }

    #[test]
    fn test_remove_then_get_misses() {
        let store = MemoryStore::new();
        store.insert(record("ephemeral")).unwrap();

        store.remove("ephemeral").unwrap();
        assert!(matches!(store.get("ephemeral"), Err(StoreError::NotFound)));
        assert!(matches!(store.remove("ephemeral"), Err(StoreError::NotFound)));
    }

    #[test]
    fn test_clear_reports_count() {
        let store = MemoryStore::new();
        store.insert(record("a")).unwrap();
        store.insert(record("b")).unwrap();

        assert_eq!(store.clear().unwrap(), 2);
        assert_eq!(store.count().unwrap(), 0);
        assert_eq!(store.clear().unwrap(), 0);
    }

    #[test]
    fn test_list_applies_filter() {
        let store = MemoryStore::new();
        store.insert(record("racecar")).unwrap();
        store.insert(record("not one")).unwrap();

        let filter = StringFilter {
            is_palindrome: Some(true),
            ..Default::default()
        };
        let matches = store.list(&filter).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, "racecar");
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = MemoryStore::new();
        store.insert(record("first")).unwrap();
        store.insert(record("second")).unwrap();
        store.insert(record("third")).unwrap();

        let all = store.list(&StringFilter::none()).unwrap();
        let values: Vec<&str> = all.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_snapshot_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strings.json");

        {
            let store = MemoryStore::with_snapshot(path.clone()).unwrap();
            store.insert(record("durable")).unwrap();
        }

        let reopened = MemoryStore::with_snapshot(path).unwrap();
        assert_eq!(reopened.count().unwrap(), 1);
        assert_eq!(reopened.get("durable").unwrap().value, "durable");
    }

    #[test]
    fn test_snapshot_tracks_deletes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strings.json");

        {
            let store = MemoryStore::with_snapshot(path.clone()).unwrap();
            store.insert(record("keep")).unwrap();
            store.insert(record("drop")).unwrap();
            store.remove("drop").unwrap();
        }

        let reopened = MemoryStore::with_snapshot(path).unwrap();
        assert_eq!(reopened.count().unwrap(), 1);
        assert!(matches!(reopened.get("drop"), Err(StoreError::NotFound)));
    }
}
