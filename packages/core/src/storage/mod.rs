//! Persistence Layer
//!
//! The engine persists its state through an opaque key-value contract:
//! implementations only need `get`/`set` of string values. Snapshots of the
//! canonical collections are JSON-encoded under a versioned key, so a
//! storage backend never needs to understand course data.
//!
//! Storage is always best-effort from the engine's point of view: a failed
//! save is logged and the in-memory state stays authoritative, so user work
//! is never lost for the session.

mod error;
mod snapshot;
mod store;

pub use error::StorageError;
pub use snapshot::{read_state, write_state, Snapshot, STATE_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
