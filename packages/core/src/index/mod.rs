//! Derived Index Structures
//!
//! Secondary structures kept in lockstep with the canonical collections:
//!
//! - [`SearchTree`] - name-keyed binary tree answering substring searches
//!   over modules without re-scanning the full collection per keystroke
//! - [`ContainmentIndex`] - container-id to ordered-item-list map giving
//!   amortized O(1) access to a container's contents
//!
//! Both are caches. They are never the source of truth, and only the call
//! sites that mutate the canonical module/item collections may patch or
//! rebuild them.

mod containment;
mod search_tree;

pub use containment::ContainmentIndex;
pub use search_tree::SearchTree;
