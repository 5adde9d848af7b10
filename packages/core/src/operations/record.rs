//! Mutation Records
//!
//! Typed descriptions of every mutation the course outline accepts, as
//! retained by the [`HistoryLog`](crate::operations::HistoryLog). Records
//! carry enough state (the deleted module and its cascaded items, the edited
//! item, ...) for a caller to compute the inverse of the operation; the log
//! itself never applies inverses.

use crate::models::{Item, Module};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened, with the state needed to reason about reversal.
///
/// Serialized with SCREAMING_SNAKE_CASE tags, the shape persisted histories
/// and UI devtools already speak.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum Mutation {
    /// A module was created (`is_edit: false`) or renamed in place.
    SaveModule { module: Module, is_edit: bool },

    /// A module was deleted, cascading deletion of the items it held.
    DeleteModule { module: Module, items: Vec<Item> },

    /// A link item was added.
    AddLink { item: Item },

    /// A file item was added.
    AddFile { item: Item },

    /// An item was edited in place; `item` is the post-edit state.
    EditItem { item: Item },

    /// An item was deleted.
    DeleteItem { item: Item },

    /// The module sequence was reordered by dragging `module_id`.
    ReorderModules { module_id: String },

    /// An item was moved and/or repositioned by dragging `item_id`.
    ReorderItems { item_id: String },
}

/// A [`Mutation`] stamped with when it was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationRecord {
    #[serde(flatten)]
    pub mutation: Mutation,

    pub recorded_at: DateTime<Utc>,
}

impl MutationRecord {
    /// Stamp a mutation with the current time.
    pub fn new(mutation: Mutation) -> Self {
        Self {
            mutation,
            recorded_at: Utc::now(),
        }
    }
}
