//! Course Item Data Structures
//!
//! An item is a single piece of course content: an external link or an
//! uploaded file. Items belong to a container — either a module (by id) or
//! the root level (`module_id = None`) — and each container keeps its items
//! in an explicit order.
//!
//! The link/file distinction is a tagged sum type rather than optional
//! fields, so validation is exhaustive per variant and a file item can never
//! half-carry link data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata for an uploaded file, produced by the upload collaborator.
///
/// The engine treats the upload as opaque: it stores the descriptor and the
/// blob URL but never inspects file bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAttachment {
    /// Original file name as selected by the user
    pub file_name: String,

    /// Size in bytes
    pub file_size: u64,

    /// MIME type reported for the file
    pub file_type: String,

    /// Blob URL handed over by the upload collaborator
    pub file_url: String,
}

/// Type-specific content of an [`Item`].
///
/// Serialized with a `type` tag of `"link"` or `"file"`, matching the wire
/// shape the UI and persisted snapshots use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemContent {
    /// An external link; the URL is required and non-empty
    Link { url: String },
    /// An uploaded file with its attachment metadata
    File(FileAttachment),
}

impl ItemContent {
    /// Stable type label, as used in snapshots and history records.
    pub fn type_label(&self) -> &'static str {
        match self {
            ItemContent::Link { .. } => "link",
            ItemContent::File(_) => "file",
        }
    }
}

/// A single piece of course content.
///
/// # Examples
///
/// ```rust
/// use coursebuilder_core::models::Item;
///
/// let link = Item::link("Syllabus", "https://example.com/syllabus", Some("mod-1"));
/// assert_eq!(link.module_id.as_deref(), Some("mod-1"));
/// assert_eq!(link.content.type_label(), "link");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier (UUID v4, opaque to callers)
    pub id: String,

    /// Owning container: a module id, or `None` for the root level
    pub module_id: Option<String>,

    /// Display name, non-empty after trimming, unique per container
    pub name: String,

    /// Link or file payload
    #[serde(flatten)]
    pub content: ItemContent,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Create a new link item with an auto-generated UUID.
    pub fn link(
        name: impl Into<String>,
        url: impl Into<String>,
        module_id: Option<&str>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            module_id: module_id.map(String::from),
            name: name.into(),
            content: ItemContent::Link { url: url.into() },
            created_at: Utc::now(),
        }
    }

    /// Create a new file item from an upload descriptor.
    pub fn file(
        name: impl Into<String>,
        attachment: FileAttachment,
        module_id: Option<&str>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            module_id: module_id.map(String::from),
            name: name.into(),
            content: ItemContent::File(attachment),
            created_at: Utc::now(),
        }
    }

    /// The link URL, if this item is a link.
    pub fn url(&self) -> Option<&str> {
        match &self.content {
            ItemContent::Link { url } => Some(url),
            ItemContent::File(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment() -> FileAttachment {
        FileAttachment {
            file_name: "notes.pdf".to_string(),
            file_size: 52_431,
            file_type: "application/pdf".to_string(),
            file_url: "blob:notes".to_string(),
        }
    }

    #[test]
    fn test_link_serializes_with_type_tag() {
        let item = Item::link("Syllabus", "https://example.com", Some("mod-1"));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "link");
        assert_eq!(json["url"], "https://example.com");
        assert_eq!(json["moduleId"], "mod-1");
    }

    #[test]
    fn test_file_serializes_flattened_attachment() {
        let item = Item::file("Notes", attachment(), None);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "file");
        assert_eq!(json["fileName"], "notes.pdf");
        assert_eq!(json["fileSize"], 52_431);
        assert_eq!(json["moduleId"], serde_json::Value::Null);
    }

    #[test]
    fn test_round_trips_through_json() {
        let item = Item::file("Notes", attachment(), Some("mod-2"));
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_url_accessor() {
        let link = Item::link("Syllabus", "https://example.com", None);
        assert_eq!(link.url(), Some("https://example.com"));

        let file = Item::file("Notes", attachment(), None);
        assert_eq!(file.url(), None);
    }
}
