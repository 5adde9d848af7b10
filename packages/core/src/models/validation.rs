//! Integrity Rules
//!
//! Pure, side-effect-free checks consumed by every mutation path before any
//! state is touched. Validators return the FULL list of violations, not just
//! the first, so the caller can surface every problem at once.
//!
//! Duplicate-name rules compare names trimmed and case-insensitively:
//! within a single container for items, across the whole course for modules.

use crate::models::{Item, ItemContent, Module};
use crate::utils::text::normalized;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Maximum module name length, in characters.
pub const MODULE_NAME_MAX_LEN: usize = 100;

/// Maximum item name length, in characters.
pub const ITEM_NAME_MAX_LEN: usize = 200;

/// Maximum link URL length, in characters.
pub const URL_MAX_LEN: usize = 2048;

/// Link URLs must carry an explicit http(s) scheme. This is a shape check,
/// not full URL parsing.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("URL pattern is valid"));

/// A single integrity violation.
///
/// `Display` renders the human-readable reason shown next to the relevant
/// input field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("a valid identifier is required")]
    MissingId,

    #[error("a non-empty name is required")]
    EmptyName,

    #[error("name cannot exceed {max} characters")]
    NameTooLong { max: usize },

    #[error("container must be a module id or empty for root-level items")]
    InvalidContainer,

    #[error("a URL is required for link items")]
    MissingUrl,

    #[error("URL must start with http:// or https://")]
    InvalidUrl,

    #[error("URL cannot exceed {max} characters")]
    UrlTooLong { max: usize },
}

/// Validate a module's own fields.
///
/// Returns every violation found; an empty vector means the module is valid.
/// Global name uniqueness is a collection-level rule checked separately (see
/// [`duplicate_module_name`]).
pub fn validate_module(module: &Module) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if module.id.trim().is_empty() {
        issues.push(ValidationIssue::MissingId);
    }

    let name = module.name.trim();
    if name.is_empty() {
        issues.push(ValidationIssue::EmptyName);
    } else if name.chars().count() > MODULE_NAME_MAX_LEN {
        issues.push(ValidationIssue::NameTooLong {
            max: MODULE_NAME_MAX_LEN,
        });
    }

    issues
}

/// Validate an item's own fields.
///
/// Container and duplicate rules beyond field shape (I1, I3) are enforced by
/// the service, which knows the live module collection.
pub fn validate_item(item: &Item) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if item.id.trim().is_empty() {
        issues.push(ValidationIssue::MissingId);
    }

    if let Some(container) = &item.module_id {
        if container.trim().is_empty() {
            issues.push(ValidationIssue::InvalidContainer);
        }
    }

    let name = item.name.trim();
    if name.is_empty() {
        issues.push(ValidationIssue::EmptyName);
    } else if name.chars().count() > ITEM_NAME_MAX_LEN {
        issues.push(ValidationIssue::NameTooLong {
            max: ITEM_NAME_MAX_LEN,
        });
    }

    if let ItemContent::Link { url } = &item.content {
        let url = url.trim();
        if url.is_empty() {
            issues.push(ValidationIssue::MissingUrl);
        } else if url.chars().count() > URL_MAX_LEN {
            issues.push(ValidationIssue::UrlTooLong { max: URL_MAX_LEN });
        } else if !URL_PATTERN.is_match(url) {
            issues.push(ValidationIssue::InvalidUrl);
        }
    }

    issues
}

/// True iff some item in `container` (other than `exclude`) already carries
/// `candidate_name`, compared trimmed and case-insensitively.
///
/// `exclude` is the id of an item being edited in place, which must not
/// collide with itself.
pub fn is_duplicate_in_container(
    items: &[Item],
    container: Option<&str>,
    candidate_name: &str,
    exclude: Option<&str>,
) -> bool {
    let wanted = normalized(candidate_name);

    items
        .iter()
        .filter(|item| item.module_id.as_deref() == container)
        .filter(|item| exclude != Some(item.id.as_str()))
        .any(|item| normalized(&item.name) == wanted)
}

/// Whether moving `item_id` into `target_container` would keep invariant I1.
///
/// - unknown item: `false`
/// - same container: always `true`
/// - otherwise: `true` iff the move would not create a duplicate name
pub fn can_move_item(items: &[Item], item_id: &str, target_container: Option<&str>) -> bool {
    let Some(item) = items.iter().find(|i| i.id == item_id) else {
        return false;
    };

    if item.module_id.as_deref() == target_container {
        return true;
    }

    !is_duplicate_in_container(items, target_container, &item.name, Some(item_id))
}

/// True iff some module other than `exclude` already carries
/// `candidate_name`, compared trimmed and case-insensitively.
pub fn duplicate_module_name(
    modules: &[Module],
    candidate_name: &str,
    exclude: Option<&str>,
) -> bool {
    let wanted = normalized(candidate_name);

    modules
        .iter()
        .filter(|module| exclude != Some(module.id.as_str()))
        .any(|module| normalized(&module.name) == wanted)
}
