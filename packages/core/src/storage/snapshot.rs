//! Snapshot Encoding
//!
//! The whole course state is persisted as one JSON document — the module
//! sequence and item collection, in canonical order — under a versioned
//! key. Bump the key suffix when the snapshot shape changes incompatibly.

use crate::models::{Item, Module};
use crate::storage::{KeyValueStore, StorageError};
use serde::{Deserialize, Serialize};

/// Versioned storage key for the course state snapshot.
pub const STATE_KEY: &str = "courseBuilderState:v1";

/// Persisted form of the canonical collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub modules: Vec<Module>,
    pub items: Vec<Item>,
}

/// Load the persisted snapshot, if one exists.
///
/// A malformed payload is discarded with a warning rather than failing the
/// session: the user continues from an empty course instead of a crash.
pub fn read_state(store: &dyn KeyValueStore) -> Result<Option<Snapshot>, StorageError> {
    let Some(raw) = store.get(STATE_KEY)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(snapshot) => Ok(Some(snapshot)),
        Err(err) => {
            tracing::warn!("Discarding malformed persisted state: {}", err);
            Ok(None)
        }
    }
}

/// Encode and persist a snapshot.
pub fn write_state(store: &dyn KeyValueStore, snapshot: &Snapshot) -> Result<(), StorageError> {
    let payload = serde_json::to_string(snapshot)?;
    store.set(STATE_KEY, &payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_absent_state_reads_as_none() {
        let store = MemoryStore::new();
        assert_eq!(read_state(&store).unwrap(), None);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let store = MemoryStore::new();
        let snapshot = Snapshot {
            modules: vec![Module::with_id("1", "Algebra")],
            items: vec![Item::link("Syllabus", "https://example.com", Some("1"))],
        };

        write_state(&store, &snapshot).unwrap();
        assert_eq!(read_state(&store).unwrap(), Some(snapshot));
    }

    #[test]
    fn test_malformed_state_is_discarded() {
        let store = MemoryStore::new();
        store.set(STATE_KEY, "{not valid json").unwrap();

        assert_eq!(read_state(&store).unwrap(), None);
    }

    #[test]
    fn test_snapshot_uses_camel_case_wire_shape() {
        let store = MemoryStore::new();
        let snapshot = Snapshot {
            modules: vec![Module::with_id("1", "Algebra")],
            items: Vec::new(),
        };
        write_state(&store, &snapshot).unwrap();

        let raw = store.get(STATE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value["modules"][0].get("createdAt").is_some());
        assert!(value.get("items").is_some());
    }
}
