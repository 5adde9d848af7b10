//! Key-Value Store Implementations
//!
//! [`KeyValueStore`] is the whole persistence contract the engine relies on.
//! [`MemoryStore`] backs tests and ephemeral sessions; cloned handles share
//! state, so a test can hand one clone to the service and inspect writes
//! through the other. [`FileStore`] keeps every key in a single JSON file.

use crate::storage::StorageError;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Opaque string key-value persistence.
pub trait KeyValueStore {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store with clone-shared state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::LockPoisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store holding all keys in one JSON object file.
///
/// The file is created on first write; a missing file reads as an empty
/// store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> Result<HashMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw)
            .map_err(|err| StorageError::ReadFailed(format!("invalid store file: {err}")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        let payload = serde_json::to_string(&entries)?;
        fs::write(&self.path, payload)
            .map_err(|err| StorageError::WriteFailed(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("key", "value").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));

        store.set("key", "updated").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("updated"));
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let observer = store.clone();

        store.set("key", "value").unwrap();
        assert_eq!(observer.get("key").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("state.json"));

        assert_eq!(store.get("key").unwrap(), None);

        store.set("key", "value").unwrap();
        store.set("other", "more").unwrap();

        assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));
        assert_eq!(store.get("other").unwrap().as_deref(), Some("more"));
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        FileStore::new(&path).set("key", "value").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("key").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.get("key"),
            Err(StorageError::ReadFailed(_))
        ));
    }
}
