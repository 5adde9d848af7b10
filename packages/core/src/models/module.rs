//! Course Module Data Structure
//!
//! A module is a named, top-level section of a course outline. Modules are
//! owned by the root collection and are never nested; their position in the
//! canonical module sequence is the presentation and export order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A top-level course section.
///
/// Module names are unique across the whole course when compared trimmed and
/// case-insensitively; the check lives in
/// [`crate::services::CourseService`] because modules have no sub-containers.
///
/// # Examples
///
/// ```rust
/// use coursebuilder_core::models::Module;
///
/// let module = Module::new("Algebra");
/// assert_eq!(module.name, "Algebra");
/// assert!(!module.id.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Unique identifier (UUID v4, opaque to callers)
    pub id: String,

    /// Display name, non-empty after trimming
    pub name: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Module {
    /// Create a new module with an auto-generated UUID.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name)
    }

    /// Create a module with an explicit id.
    ///
    /// Used when rehydrating persisted state, where ids must survive the
    /// round trip unchanged.
    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
