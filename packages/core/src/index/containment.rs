//! Item Containment Index
//!
//! Maps a container id — a module id, or `None` for the root level — to the
//! ordered list of items it holds, so "all items in container C" never
//! requires filtering the full item collection.
//!
//! This is a derived, secondary structure. Every mutation path that touches
//! the canonical item collection must patch or rebuild it in the same call;
//! it is never the sole source of truth.

use crate::models::Item;
use std::collections::HashMap;

const EMPTY: &[Item] = &[];

/// Container-id to ordered-item-list map.
///
/// # Examples
///
/// ```rust
/// use coursebuilder_core::index::ContainmentIndex;
/// use coursebuilder_core::models::Item;
///
/// let mut index = ContainmentIndex::new();
/// index.add_item(Item::link("Syllabus", "https://example.com", Some("mod-1")));
///
/// assert_eq!(index.count(Some("mod-1")), 1);
/// assert!(index.items(None).is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ContainmentIndex {
    buckets: HashMap<Option<String>, Vec<Item>>,
}

impl ContainmentIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
        }
    }

    /// Build the index from the canonical item collection, preserving each
    /// container's relative item order.
    pub fn from_items(items: &[Item]) -> Self {
        let mut index = Self::new();
        for item in items {
            index.add_item(item.clone());
        }
        index
    }

    /// The items held by `container`, in order. Missing containers yield an
    /// empty slice, never an error.
    pub fn items(&self, container: Option<&str>) -> &[Item] {
        self.buckets
            .get(&container.map(String::from))
            .map(Vec::as_slice)
            .unwrap_or(EMPTY)
    }

    /// Append an item to its container's list, creating the bucket if
    /// absent. The container is read from the item's own `module_id`.
    pub fn add_item(&mut self, item: Item) {
        self.buckets
            .entry(item.module_id.clone())
            .or_default()
            .push(item);
    }

    /// Remove the item with `item_id` from `container`. No-op when either
    /// the container or the item is absent.
    pub fn remove_item(&mut self, container: Option<&str>, item_id: &str) {
        if let Some(bucket) = self.buckets.get_mut(&container.map(String::from)) {
            bucket.retain(|item| item.id != item_id);
        }
    }

    /// Replace an item in place, keeping its slot in the container order.
    /// No-op when the item is not present in `container`.
    pub fn replace_item(&mut self, container: Option<&str>, updated: Item) {
        if let Some(bucket) = self.buckets.get_mut(&container.map(String::from)) {
            if let Some(slot) = bucket.iter_mut().find(|item| item.id == updated.id) {
                *slot = updated;
            }
        }
    }

    /// Replace a container's list wholesale.
    pub fn set(&mut self, container: Option<&str>, items: Vec<Item>) {
        self.buckets.insert(container.map(String::from), items);
    }

    /// Number of items in `container`.
    pub fn count(&self, container: Option<&str>) -> usize {
        self.items(container).len()
    }

    /// Every indexed item, container by container. Order across containers
    /// is unspecified; order within a container is preserved.
    pub fn all_items(&self) -> Vec<Item> {
        self.buckets.values().flatten().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(id: &str, container: Option<&str>, name: &str) -> Item {
        let mut item = Item::link(name, "https://example.com", container);
        item.id = id.to_string();
        item
    }

    #[test]
    fn test_missing_container_yields_empty() {
        let index = ContainmentIndex::new();
        assert!(index.items(Some("missing")).is_empty());
        assert_eq!(index.count(None), 0);
    }

    #[test]
    fn test_add_preserves_order() {
        let mut index = ContainmentIndex::new();
        index.add_item(link("a", Some("1"), "First"));
        index.add_item(link("b", Some("1"), "Second"));
        index.add_item(link("c", None, "Root"));

        let ids: Vec<&str> = index
            .items(Some("1"))
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(index.count(None), 1);
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let mut index = ContainmentIndex::new();
        index.add_item(link("a", Some("1"), "First"));

        index.remove_item(Some("1"), "missing");
        index.remove_item(Some("2"), "a");
        assert_eq!(index.count(Some("1")), 1);

        index.remove_item(Some("1"), "a");
        assert_eq!(index.count(Some("1")), 0);
    }

    #[test]
    fn test_replace_keeps_slot() {
        let mut index = ContainmentIndex::new();
        index.add_item(link("a", Some("1"), "First"));
        index.add_item(link("b", Some("1"), "Second"));

        index.replace_item(Some("1"), link("a", Some("1"), "Renamed"));

        let bucket = index.items(Some("1"));
        assert_eq!(bucket[0].name, "Renamed");
        assert_eq!(bucket[1].id, "b");
    }

    #[test]
    fn test_set_replaces_wholesale() {
        let mut index = ContainmentIndex::new();
        index.add_item(link("a", Some("1"), "First"));

        index.set(Some("1"), Vec::new());
        assert_eq!(index.count(Some("1")), 0);
    }

    #[test]
    fn test_from_items_groups_by_container() {
        let items = vec![
            link("a", Some("1"), "First"),
            link("b", None, "Root"),
            link("c", Some("1"), "Second"),
        ];
        let index = ContainmentIndex::from_items(&items);

        assert_eq!(index.count(Some("1")), 2);
        assert_eq!(index.count(None), 1);
        assert_eq!(index.all_items().len(), 3);
    }
}
