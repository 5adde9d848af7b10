//! Storage Error Types

use thiserror::Error;

/// Errors surfaced by [`KeyValueStore`](crate::storage::KeyValueStore)
/// implementations and snapshot encoding.
///
/// These are never fatal to the engine: callers log them and continue with
/// in-memory state.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backend refused the write (quota exceeded, read-only medium, ...)
    #[error("storage write failed: {0}")]
    WriteFailed(String),

    /// The backend could not produce the stored value
    #[error("storage read failed: {0}")]
    ReadFailed(String),

    /// Snapshot (de)serialization failed
    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem-level failure in a file-backed store
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A shared in-memory store's lock was poisoned
    #[error("storage lock poisoned")]
    LockPoisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = StorageError::WriteFailed("quota exceeded".to_string());
        assert_eq!(format!("{}", err), "storage write failed: quota exceeded");

        let err = StorageError::LockPoisoned;
        assert_eq!(format!("{}", err), "storage lock poisoned");
    }
}
