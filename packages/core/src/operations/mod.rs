//! Mutation Machinery
//!
//! This module provides the pieces every mutation of the course outline
//! flows through or is recorded by:
//!
//! - [`HistoryLog`] - bounded, linear undo/redo log
//! - [`Mutation`] / [`MutationRecord`] - what the log records
//! - [`PriorityQueue`] - generic stable priority queue for ordering
//!   candidates
//! - [`reorder`] - drag-endpoint parsing and the cross-container reorder
//!   resolution algorithm

pub mod history;
pub mod queue;
pub mod record;
pub mod reorder;

pub use history::HistoryLog;
pub use queue::PriorityQueue;
pub use record::{Mutation, MutationRecord};
pub use reorder::{resolve_drag, DragEndpoint, Reorder, ReorderError};
