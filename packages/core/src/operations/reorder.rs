//! Drag Reorder Resolution
//!
//! Decides, for a completed drag gesture, which container an element moves
//! into and at what position. The UI supplies raw endpoint tokens
//! (`"module-<id>"`, `"item-<id>"`, or the root drop zone); they are parsed
//! exactly once at this boundary into [`DragEndpoint`] values and everything
//! downstream works with the tagged form.
//!
//! The resolver reads borrowed canonical collections and returns freshly
//! built replacements, so a rejected or no-op gesture cannot leave partial
//! state behind: the caller swaps the collections in only on a committed
//! outcome.

use crate::models::validation::can_move_item;
use crate::models::{Item, Module};
use thiserror::Error;

/// Token prefix tagging a module endpoint.
pub const MODULE_PREFIX: &str = "module-";

/// Token prefix tagging an item endpoint.
pub const ITEM_PREFIX: &str = "item-";

/// Token for the root-level drop zone.
pub const ROOT_DROP_ZONE: &str = "root-drop-zone";

/// A parsed drag endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEndpoint {
    /// A module header or card, by module id
    Module(String),
    /// An item row, by item id
    Item(String),
    /// The top-level drop target outside any module
    RootZone,
}

impl DragEndpoint {
    /// Parse a raw UI token into an endpoint.
    ///
    /// Exactly three shapes are accepted: `"module-<id>"`, `"item-<id>"`
    /// (ids non-empty), and the root drop zone token. Anything else yields
    /// `None` and must be rejected by the caller.
    pub fn parse(token: &str) -> Option<Self> {
        if token == ROOT_DROP_ZONE {
            return Some(Self::RootZone);
        }
        if let Some(id) = token.strip_prefix(MODULE_PREFIX) {
            if !id.is_empty() {
                return Some(Self::Module(id.to_string()));
            }
        }
        if let Some(id) = token.strip_prefix(ITEM_PREFIX) {
            if !id.is_empty() {
                return Some(Self::Item(id.to_string()));
            }
        }
        None
    }
}

/// A gesture the resolver refused to commit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReorderError {
    /// Moving the item would violate per-container name uniqueness.
    #[error("an item named '{name}' already exists in the target container")]
    DuplicateName {
        name: String,
        container: Option<String>,
    },
}

/// Outcome of resolving a drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum Reorder {
    /// The module sequence changed; this is its replacement.
    Modules(Vec<Module>),
    /// The item collection changed; this is its replacement.
    Items(Vec<Item>),
    /// The gesture resolved to nothing.
    Unchanged,
}

/// Reposition `list[from]` so it lands at index `to` of the final list.
///
/// `to` is computed against the pre-removal list; insertion happens at that
/// index in the post-removal list, so the element absorbs the shift and
/// occupies the target's original slot.
fn array_move<T>(list: &mut Vec<T>, from: usize, to: usize) {
    let element = list.remove(from);
    let to = to.min(list.len());
    list.insert(to, element);
}

/// Resolve a completed drag gesture against the canonical collections.
///
/// - module onto module: single-element reposition of the module sequence
/// - item onto item / module / root zone: container reassignment plus
///   in-container reposition, guarded by the duplicate-name rule — a
///   rejected move changes nothing and surfaces [`ReorderError`]
/// - every other combination (including dropping something onto itself) is
///   a silent no-op
pub fn resolve_drag(
    source: &DragEndpoint,
    target: &DragEndpoint,
    modules: &[Module],
    items: &[Item],
) -> Result<Reorder, ReorderError> {
    if source == target {
        return Ok(Reorder::Unchanged);
    }

    match source {
        DragEndpoint::Module(source_id) => match target {
            DragEndpoint::Module(target_id) => {
                Ok(resolve_module_drag(source_id, target_id, modules))
            }
            // Cross-kind drags of a module are ignored.
            _ => Ok(Reorder::Unchanged),
        },
        DragEndpoint::Item(source_id) => resolve_item_drag(source_id, target, modules, items),
        DragEndpoint::RootZone => Ok(Reorder::Unchanged),
    }
}

fn resolve_module_drag(source_id: &str, target_id: &str, modules: &[Module]) -> Reorder {
    let from = modules.iter().position(|m| m.id == source_id);
    let to = modules.iter().position(|m| m.id == target_id);

    match (from, to) {
        (Some(from), Some(to)) if from != to => {
            let mut reordered = modules.to_vec();
            array_move(&mut reordered, from, to);
            Reorder::Modules(reordered)
        }
        _ => Reorder::Unchanged,
    }
}

fn resolve_item_drag(
    source_id: &str,
    target: &DragEndpoint,
    modules: &[Module],
    items: &[Item],
) -> Result<Reorder, ReorderError> {
    let Some(active) = items.iter().find(|i| i.id == source_id) else {
        return Ok(Reorder::Unchanged);
    };

    // Step one: resolve the destination container and position.
    let (target_container, target_index) = match target {
        DragEndpoint::Item(over_id) => {
            let Some(over) = items.iter().find(|i| i.id == *over_id) else {
                return Ok(Reorder::Unchanged);
            };
            let container = over.module_id.clone();
            let index = items
                .iter()
                .filter(|i| i.module_id == container)
                .position(|i| i.id == *over_id)
                .unwrap_or(0);
            (container, index)
        }
        // Dropping onto a module header appends to that module. Container
        // ids may only come from the live module collection.
        DragEndpoint::Module(module_id) => {
            if !modules.iter().any(|m| m.id == *module_id) {
                return Ok(Reorder::Unchanged);
            }
            let container = Some(module_id.clone());
            let index = items.iter().filter(|i| i.module_id == container).count();
            (container, index)
        }
        // Dropping onto the root zone appends to the root level.
        DragEndpoint::RootZone => {
            let index = items.iter().filter(|i| i.module_id.is_none()).count();
            (None, index)
        }
    };

    // Step two: the duplicate-name guard rejects the whole gesture.
    if !can_move_item(items, source_id, target_container.as_deref()) {
        return Err(ReorderError::DuplicateName {
            name: active.name.clone(),
            container: target_container,
        });
    }

    // Step three: reassign the container, keeping global order.
    let updated: Vec<Item> = items
        .iter()
        .cloned()
        .map(|mut item| {
            if item.id == source_id {
                item.module_id = target_container.clone();
            }
            item
        })
        .collect();

    let current_index = updated
        .iter()
        .filter(|i| i.module_id == target_container)
        .position(|i| i.id == source_id);

    match current_index {
        Some(current) if current != target_index => {
            // Reposition within the destination container; items in other
            // containers keep their relative order and are emitted first.
            let (mut bucket, others): (Vec<Item>, Vec<Item>) = updated
                .into_iter()
                .partition(|i| i.module_id == target_container);
            array_move(&mut bucket, current, target_index);

            let mut result = others;
            result.extend(bucket);
            Ok(Reorder::Items(result))
        }
        _ => Ok(Reorder::Items(updated)),
    }
}

#[cfg(test)]
#[path = "reorder_test.rs"]
mod reorder_test;
