//! Course Service - The Command Surface
//!
//! Owns the canonical module sequence and item collection, the derived
//! indexes, the undo/redo history, and a persistence handle. Every UI
//! command — create/edit/delete of modules and items, drag completion,
//! search, undo/redo — flows through here.
//!
//! # Mutation discipline
//!
//! Every mutation follows the same shape: run the integrity rules first,
//! commit to the canonical collections only when they pass, patch or
//! rebuild the indexes at the same call site, append a history record, and
//! persist. A rejected operation returns an error and changes nothing.
//! The indexes are never mutated from anywhere else, so they cannot drift
//! from canonical state.

use crate::index::{ContainmentIndex, SearchTree};
use crate::models::validation::{
    duplicate_module_name, is_duplicate_in_container, validate_item, validate_module,
};
use crate::models::{FileAttachment, Item, ItemContent, Module};
use crate::operations::{
    resolve_drag, DragEndpoint, HistoryLog, Mutation, MutationRecord, PriorityQueue, Reorder,
};
use crate::services::ServiceError;
use crate::storage::{read_state, write_state, KeyValueStore, MemoryStore, Snapshot};
use std::collections::HashSet;

/// One entry of the presentation/export order: modules first, in canonical
/// order, then the root-level items.
#[derive(Debug, Clone, PartialEq)]
pub enum OutlineEntry {
    Module(Module),
    Item(Item),
}

/// The course content engine.
///
/// # Examples
///
/// ```rust
/// use coursebuilder_core::services::CourseService;
///
/// let mut service = CourseService::in_memory();
/// let module = service.create_module("Algebra").unwrap();
/// service.add_link(Some(&module.id), "Syllabus", "https://example.com").unwrap();
///
/// assert_eq!(service.module_items(&module.id).len(), 1);
/// assert!(service.can_undo());
/// ```
pub struct CourseService {
    modules: Vec<Module>,
    items: Vec<Item>,
    search_tree: SearchTree,
    containment: ContainmentIndex,
    history: HistoryLog<MutationRecord>,
    store: Box<dyn KeyValueStore>,
}

impl CourseService {
    /// Create a service backed by `store`, restoring any persisted state.
    ///
    /// An unreadable or malformed snapshot degrades to an empty course with
    /// a warning; it never fails construction.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        let snapshot = match read_state(store.as_ref()) {
            Ok(snapshot) => snapshot.unwrap_or_default(),
            Err(err) => {
                tracing::warn!("Failed to load persisted course state: {}", err);
                Snapshot::default()
            }
        };

        let search_tree = SearchTree::from_modules(&snapshot.modules);
        let containment = ContainmentIndex::from_items(&snapshot.items);

        Self {
            modules: snapshot.modules,
            items: snapshot.items,
            search_tree,
            containment,
            history: HistoryLog::default(),
            store,
        }
    }

    /// Create a service with a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    // =====================================================================
    // Module commands
    // =====================================================================

    /// Create a module. Fails on a duplicate name (checked globally,
    /// case-insensitive and trimmed) or invalid fields.
    pub fn create_module(&mut self, name: &str) -> Result<Module, ServiceError> {
        let module = Module::new(name.trim());

        if duplicate_module_name(&self.modules, &module.name, None) {
            return Err(ServiceError::DuplicateModuleName {
                name: module.name.clone(),
            });
        }
        let issues = validate_module(&module);
        if !issues.is_empty() {
            return Err(ServiceError::Validation(issues));
        }

        self.modules.push(module.clone());
        self.search_tree.insert(module.clone());
        self.record(Mutation::SaveModule {
            module: module.clone(),
            is_edit: false,
        });
        self.persist();
        Ok(module)
    }

    /// Rename a module in place.
    pub fn rename_module(&mut self, module_id: &str, name: &str) -> Result<Module, ServiceError> {
        let position = self
            .modules
            .iter()
            .position(|m| m.id == module_id)
            .ok_or_else(|| ServiceError::module_not_found(module_id))?;

        let mut candidate = self.modules[position].clone();
        candidate.name = name.trim().to_string();

        if duplicate_module_name(&self.modules, &candidate.name, Some(module_id)) {
            return Err(ServiceError::DuplicateModuleName {
                name: candidate.name,
            });
        }
        let issues = validate_module(&candidate);
        if !issues.is_empty() {
            return Err(ServiceError::Validation(issues));
        }

        self.modules[position] = candidate.clone();
        self.search_tree = SearchTree::from_modules(&self.modules);
        self.record(Mutation::SaveModule {
            module: candidate.clone(),
            is_edit: true,
        });
        self.persist();
        Ok(candidate)
    }

    /// Delete a module, cascading deletion of every item it holds.
    pub fn delete_module(&mut self, module_id: &str) -> Result<(), ServiceError> {
        let position = self
            .modules
            .iter()
            .position(|m| m.id == module_id)
            .ok_or_else(|| ServiceError::module_not_found(module_id))?;

        let module = self.modules.remove(position);
        let (removed, kept): (Vec<Item>, Vec<Item>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| item.module_id.as_deref() == Some(module_id));
        self.items = kept;

        self.containment.set(Some(module_id), Vec::new());
        self.search_tree = SearchTree::from_modules(&self.modules);
        self.record(Mutation::DeleteModule {
            module,
            items: removed,
        });
        self.persist();
        Ok(())
    }

    // =====================================================================
    // Item commands
    // =====================================================================

    /// Add a link item to `container` (a module id, or `None` for root).
    pub fn add_link(
        &mut self,
        container: Option<&str>,
        name: &str,
        url: &str,
    ) -> Result<Item, ServiceError> {
        let item = Item::link(name.trim(), url.trim(), container);
        self.insert_item(item, |item| Mutation::AddLink { item })
    }

    /// Add a file item to `container` from an upload descriptor.
    pub fn add_file(
        &mut self,
        container: Option<&str>,
        name: &str,
        attachment: FileAttachment,
    ) -> Result<Item, ServiceError> {
        let item = Item::file(name.trim(), attachment, container);
        self.insert_item(item, |item| Mutation::AddFile { item })
    }

    fn insert_item(
        &mut self,
        item: Item,
        mutation: impl FnOnce(Item) -> Mutation,
    ) -> Result<Item, ServiceError> {
        // Container ids may only come from the live module collection.
        if let Some(container) = item.module_id.as_deref() {
            if !self.modules.iter().any(|m| m.id == container) {
                return Err(ServiceError::module_not_found(container));
            }
        }
        if is_duplicate_in_container(&self.items, item.module_id.as_deref(), &item.name, None) {
            return Err(ServiceError::DuplicateItemName {
                name: item.name.clone(),
            });
        }
        let issues = validate_item(&item);
        if !issues.is_empty() {
            return Err(ServiceError::Validation(issues));
        }

        self.items.push(item.clone());
        self.containment.add_item(item.clone());
        self.record(mutation(item.clone()));
        self.persist();
        Ok(item)
    }

    /// Edit an item in place: new name and content, same container and id.
    pub fn update_item(
        &mut self,
        item_id: &str,
        name: &str,
        content: ItemContent,
    ) -> Result<Item, ServiceError> {
        let position = self
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| ServiceError::item_not_found(item_id))?;

        let mut candidate = self.items[position].clone();
        candidate.name = name.trim().to_string();
        candidate.content = content;

        if is_duplicate_in_container(
            &self.items,
            candidate.module_id.as_deref(),
            &candidate.name,
            Some(item_id),
        ) {
            return Err(ServiceError::DuplicateItemName {
                name: candidate.name,
            });
        }
        let issues = validate_item(&candidate);
        if !issues.is_empty() {
            return Err(ServiceError::Validation(issues));
        }

        self.items[position] = candidate.clone();
        self.containment
            .replace_item(candidate.module_id.as_deref(), candidate.clone());
        self.record(Mutation::EditItem {
            item: candidate.clone(),
        });
        self.persist();
        Ok(candidate)
    }

    /// Delete an item.
    pub fn delete_item(&mut self, item_id: &str) -> Result<(), ServiceError> {
        let position = self
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| ServiceError::item_not_found(item_id))?;

        let item = self.items.remove(position);
        self.containment
            .remove_item(item.module_id.as_deref(), item_id);
        self.record(Mutation::DeleteItem { item });
        self.persist();
        Ok(())
    }

    // =====================================================================
    // Drag completion
    // =====================================================================

    /// Apply a completed drag gesture given the raw UI endpoint tokens.
    ///
    /// Returns `Ok(true)` when the gesture changed state, `Ok(false)` for a
    /// no-op, and an error for unparseable tokens or a rejected move — in
    /// which case nothing changed.
    pub fn apply_drag(&mut self, source: &str, target: &str) -> Result<bool, ServiceError> {
        let source = DragEndpoint::parse(source).ok_or_else(|| ServiceError::InvalidDragToken {
            token: source.to_string(),
        })?;
        let target = DragEndpoint::parse(target).ok_or_else(|| ServiceError::InvalidDragToken {
            token: target.to_string(),
        })?;

        let outcome =
            resolve_drag(&source, &target, &self.modules, &self.items).map_err(|err| {
                tracing::warn!("Rejected drag move: {}", err);
                err
            })?;

        match (source, outcome) {
            (_, Reorder::Unchanged) => Ok(false),
            (DragEndpoint::Module(module_id), Reorder::Modules(modules)) => {
                self.modules = modules;
                self.search_tree = SearchTree::from_modules(&self.modules);
                self.record(Mutation::ReorderModules { module_id });
                self.persist();
                Ok(true)
            }
            (DragEndpoint::Item(item_id), Reorder::Items(items)) => {
                self.items = items;
                self.containment = ContainmentIndex::from_items(&self.items);
                self.record(Mutation::ReorderItems { item_id });
                self.persist();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    // =====================================================================
    // Search
    // =====================================================================

    /// Modules matching `term`, in canonical order: a module matches when
    /// its name contains the term, or when it holds an item whose name or
    /// link URL contains the term (case-insensitive). An empty term returns
    /// all modules.
    pub fn search(&self, term: &str) -> Vec<Module> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return self.modules.clone();
        }

        let needle = trimmed.to_lowercase();
        let name_hits: HashSet<String> = self
            .search_tree
            .search(trimmed)
            .into_iter()
            .map(|module| module.id)
            .collect();

        self.modules
            .iter()
            .filter(|module| {
                name_hits.contains(&module.id)
                    || self.containment.items(Some(&module.id)).iter().any(|item| {
                        item.name.to_lowercase().contains(&needle)
                            || item
                                .url()
                                .is_some_and(|url| url.to_lowercase().contains(&needle))
                    })
            })
            .cloned()
            .collect()
    }

    // =====================================================================
    // History
    // =====================================================================

    /// Step the history back and return the record that was undone.
    ///
    /// The log only records intent; applying the inverse of the returned
    /// record is the caller's responsibility.
    pub fn undo(&mut self) -> Option<MutationRecord> {
        let record = self.history.undo().cloned();
        if let Some(record) = &record {
            tracing::debug!("Undoing operation: {:?}", record.mutation);
        }
        record
    }

    /// Step the history forward and return the record that was redone.
    pub fn redo(&mut self) -> Option<MutationRecord> {
        let record = self.history.redo().cloned();
        if let Some(record) = &record {
            tracing::debug!("Redoing operation: {:?}", record.mutation);
        }
        record
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // =====================================================================
    // Read access
    // =====================================================================

    /// The canonical module sequence.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// The canonical item collection.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The items of one module, in container order.
    pub fn module_items(&self, module_id: &str) -> &[Item] {
        self.containment.items(Some(module_id))
    }

    /// The root-level items, in container order.
    pub fn root_items(&self) -> &[Item] {
        self.containment.items(None)
    }

    /// Number of items in a container.
    pub fn item_count(&self, container: Option<&str>) -> usize {
        self.containment.count(container)
    }

    /// Presentation/export order: modules in canonical order, then the
    /// root-level items.
    pub fn ordered_content(&self) -> Vec<OutlineEntry> {
        let mut queue = PriorityQueue::new();
        let mut priority = 0;

        for module in &self.modules {
            queue.enqueue(OutlineEntry::Module(module.clone()), priority);
            priority += 1;
        }
        for item in self.items.iter().filter(|item| item.module_id.is_none()) {
            queue.enqueue(OutlineEntry::Item(item.clone()), priority);
            priority += 1;
        }

        let mut entries = Vec::with_capacity(queue.len());
        while let Some(entry) = queue.dequeue() {
            entries.push(entry);
        }
        entries
    }

    // =====================================================================
    // Persistence
    // =====================================================================

    /// Persist the current state, propagating storage failures.
    ///
    /// Mutations persist automatically and treat failures as non-fatal;
    /// this is for callers that need to know a snapshot actually landed
    /// (e.g. before application shutdown).
    pub fn flush(&self) -> Result<(), ServiceError> {
        write_state(self.store.as_ref(), &self.snapshot())?;
        Ok(())
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            modules: self.modules.clone(),
            items: self.items.clone(),
        }
    }

    fn record(&mut self, mutation: Mutation) {
        tracing::debug!("Recording operation: {:?}", mutation);
        self.history.push(MutationRecord::new(mutation));
    }

    fn persist(&self) {
        if let Err(err) = write_state(self.store.as_ref(), &self.snapshot()) {
            tracing::warn!("Failed to persist course state: {}", err);
        }
    }
}

#[cfg(test)]
#[path = "course_service_test.rs"]
mod course_service_test;
