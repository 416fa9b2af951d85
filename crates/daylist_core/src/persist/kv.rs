//! Key-value transport for the encoded collection.
//!
//! # Responsibility
//! - Abstract the "one string under one key" storage the browser app used.
//! - Bind a store and a storage key to the `PersistenceAdapter` contract.
//!
//! # Invariants
//! - The whole collection lives under a single key and is replaced on save.
//! - A payload that loses records on load is first copied to `<key>.backup`.

use super::codec::{decode_collection, encode_collection};
use super::{PersistError, PersistResult, PersistenceAdapter};
use crate::model::collection::TaskCollection;
use log::{debug, info, warn};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Storage key used when the caller does not pick one.
pub const DEFAULT_STORAGE_KEY: &str = "daylist-data";

/// Appended to the storage key for the copy of a partially unreadable payload.
pub const BACKUP_KEY_SUFFIX: &str = ".backup";

/// Minimal string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> PersistResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> PersistResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> PersistResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> PersistResult<()> {
        (**self).set(key, value)
    }
}

/// Process-local store; contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, e.g. a hand-crafted or corrupt payload.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> PersistResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PersistResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `PersistenceAdapter` storing the JSON-encoded collection under one key.
pub struct KeyValueAdapter<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> KeyValueAdapter<S> {
    /// Uses `DEFAULT_STORAGE_KEY`.
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    fn backup_key(&self) -> String {
        format!("{}{BACKUP_KEY_SUFFIX}", self.key)
    }

    /// Keeps the raw payload before the next save replaces it.
    fn back_up(&self, payload: &str) {
        match self.store.set(&self.backup_key(), payload) {
            Ok(()) => warn!(
                "event=persist_backup module=persist status=ok bytes={}",
                payload.len()
            ),
            Err(err) => warn!(
                "event=persist_backup module=persist status=error error={}",
                err
            ),
        }
    }
}

impl<S: KeyValueStore> PersistenceAdapter for KeyValueAdapter<S> {
    fn load(&self) -> PersistResult<Option<TaskCollection>> {
        let Some(payload) = self.store.get(&self.key)? else {
            debug!("event=persist_load module=persist status=empty");
            return Ok(None);
        };

        let decoded = match decode_collection(&payload) {
            Ok(decoded) => decoded,
            Err(err @ PersistError::Malformed(_)) => {
                self.back_up(&payload);
                return Err(err);
            }
            Err(err) => return Err(err),
        };
        if decoded.skipped > 0 {
            self.back_up(&payload);
        }

        let collection = decoded.collection;
        info!(
            "event=persist_load module=persist status=ok dates={} tasks={} skipped={}",
            collection.dates_desc().len(),
            collection.len(),
            decoded.skipped
        );
        Ok(Some(collection))
    }

    fn save(&self, collection: &TaskCollection) -> PersistResult<()> {
        let payload = encode_collection(collection)?;
        self.store.set(&self.key, &payload)?;
        debug!(
            "event=persist_save module=persist status=ok bytes={} tasks={}",
            payload.len(),
            collection.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueAdapter, KeyValueStore, MemoryKeyValueStore, DEFAULT_STORAGE_KEY};
    use crate::model::task::TaskId;
    use crate::model::collection::TaskCollection;
    use crate::model::task::Task;
    use crate::persist::{PersistError, PersistenceAdapter};

    #[test]
    fn load_returns_none_when_key_absent() {
        let adapter = KeyValueAdapter::new(MemoryKeyValueStore::new());
        assert!(adapter.load().unwrap().is_none());
    }

    #[test]
    fn save_writes_under_configured_key_only() {
        let store = MemoryKeyValueStore::new();
        let adapter = KeyValueAdapter::with_key(&store, "custom");
        let mut collection = TaskCollection::new();
        collection
            .bucket_mut("2024-01-01")
            .push(Task::new("2024-01-01", "Buy milk", "").unwrap());

        adapter.save(&collection).unwrap();

        assert!(store.get(DEFAULT_STORAGE_KEY).unwrap().is_none());
        assert!(store.get("custom").unwrap().unwrap().contains("Buy milk"));
        assert_eq!(adapter.load().unwrap(), Some(collection));
    }

    #[test]
    fn load_reports_malformed_payload_and_keeps_a_backup() {
        let store = MemoryKeyValueStore::with_entry(DEFAULT_STORAGE_KEY, "{oops");
        let adapter = KeyValueAdapter::new(&store);

        assert!(matches!(adapter.load(), Err(PersistError::Malformed(_))));
        assert_eq!(
            store.get("daylist-data.backup").unwrap().as_deref(),
            Some("{oops")
        );
    }

    #[test]
    fn partial_payload_loads_good_records_and_keeps_a_backup() {
        let payload = r#"{"2024-01-01": [
            {"id": "lq2k3j9x0abc", "name": "Keep me", "priority": 2,
             "createdAt": "2024-01-01T08:00:00.000Z", "date": "2024-01-01"},
            {"id": "", "name": "No id", "priority": 2,
             "createdAt": "2024-01-01T08:00:00.000Z", "date": "2024-01-01"}
        ]}"#;
        let store = MemoryKeyValueStore::with_entry("tasks", payload);
        let adapter = KeyValueAdapter::with_key(&store, "tasks");

        let collection = adapter.load().unwrap().unwrap();

        let kept = collection.bucket("2024-01-01");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, TaskId::parse("lq2k3j9x0abc").unwrap());
        assert_eq!(store.get("tasks.backup").unwrap().as_deref(), Some(payload));
    }

    #[test]
    fn clean_load_writes_no_backup() {
        let store = MemoryKeyValueStore::new();
        let adapter = KeyValueAdapter::new(&store);
        let mut collection = TaskCollection::new();
        collection
            .bucket_mut("2024-01-01")
            .push(Task::new("2024-01-01", "Buy milk", "").unwrap());
        adapter.save(&collection).unwrap();

        adapter.load().unwrap();

        assert!(store.get("daylist-data.backup").unwrap().is_none());
    }
}
