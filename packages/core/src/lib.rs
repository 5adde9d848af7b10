//! CourseBuilder Core Content Engine
//!
//! This crate provides the in-memory state, index structures, and mutation
//! logic behind the CourseBuilder authoring UI: an ordered collection of
//! course modules, the link/file items they contain, and everything needed
//! to search, reorder, and undo changes to them.
//!
//! # Architecture
//!
//! - **Canonical collections**: the module sequence and item collection owned
//!   by [`CourseService`] are the single source of truth; order is meaningful
//!   and only ever changed by explicit operations
//! - **Derived indexes**: [`SearchTree`] and [`ContainmentIndex`] are caches,
//!   patched or rebuilt by the same call site that mutates canonical data
//! - **Validate-then-commit**: every mutation runs the integrity rules before
//!   touching state; a rejected operation leaves everything untouched
//! - **Pluggable persistence**: snapshots flow through the [`KeyValueStore`]
//!   trait; storage failures are logged and never lose in-memory state
//!
//! # Modules
//!
//! - [`models`] - Data structures (Module, Item) and integrity validation
//! - [`index`] - Search tree and containment index
//! - [`operations`] - History log, priority queue, and drag resolution
//! - [`services`] - The CourseService command surface
//! - [`storage`] - Key-value persistence and snapshot encoding

pub mod index;
pub mod models;
pub mod operations;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use index::{ContainmentIndex, SearchTree};
pub use models::{FileAttachment, Item, ItemContent, Module, ValidationIssue};
pub use operations::{DragEndpoint, HistoryLog, Mutation, MutationRecord, PriorityQueue, Reorder};
pub use services::{CourseService, OutlineEntry, ServiceError};
pub use storage::{FileStore, KeyValueStore, MemoryStore, Snapshot, StorageError};
