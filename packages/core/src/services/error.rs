//! Service Layer Error Types
//!
//! Every command on the service returns either a success value or one of
//! these errors, whose `Display` forms are the human-readable reasons the
//! UI shows next to the relevant input. A returned error always means the
//! operation applied nothing.

use crate::models::ValidationIssue;
use crate::operations::ReorderError;
use crate::storage::StorageError;
use thiserror::Error;

/// Command surface errors.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Field validation failed; carries every violation found
    #[error("validation failed: {}", .0.iter().map(|issue| issue.to_string()).collect::<Vec<_>>().join(", "))]
    Validation(Vec<ValidationIssue>),

    /// Another module already carries this name
    #[error("a module named '{name}' already exists")]
    DuplicateModuleName { name: String },

    /// Another item in the same container already carries this name
    #[error("an item named '{name}' already exists in this container")]
    DuplicateItemName { name: String },

    /// A drag move was rejected by the reorder resolver
    #[error(transparent)]
    Move(#[from] ReorderError),

    /// Referenced module does not exist
    #[error("module '{id}' does not exist")]
    ModuleNotFound { id: String },

    /// Referenced item does not exist
    #[error("item '{id}' does not exist")]
    ItemNotFound { id: String },

    /// A drag endpoint token had none of the three accepted shapes
    #[error("unrecognized drag endpoint '{token}'")]
    InvalidDragToken { token: String },

    /// Persistence failed on an explicit flush
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ServiceError {
    /// Create a ModuleNotFound error
    pub fn module_not_found(id: impl Into<String>) -> Self {
        Self::ModuleNotFound { id: id.into() }
    }

    /// Create an ItemNotFound error
    pub fn item_not_found(id: impl Into<String>) -> Self {
        Self::ItemNotFound { id: id.into() }
    }
}
