//! Module Name Search Tree
//!
//! Binary tree keyed by case-insensitive module name, answering "which
//! modules have a name containing this substring". Insertion order follows
//! the usual strictly-less-goes-left rule with no rebalancing: a sorted
//! insert sequence degrades the tree toward a list, which is acceptable
//! because the tree is rebuilt wholesale on every structural change to the
//! module collection.
//!
//! # Search traversal
//!
//! Substring containment does not respect the ordering property, so a full
//! binary search is impossible. The traversal deliberately prunes only one
//! side: at each node the left subtree is visited only when the term sorts
//! before the node's name, while the right subtree is ALWAYS visited. Under
//! adversarial insert orders this asymmetry can skip left-side descendants
//! whose names contain the term even though the term does not sort before
//! the node; callers that need exhaustive results must rebuild from a fresh
//! module list first, which the owning service does on every change.

use crate::models::Module;
use crate::utils::text::normalized;

#[derive(Debug)]
struct TreeNode {
    module: Module,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn leaf(module: Module) -> Box<Self> {
        Box::new(Self {
            module,
            left: None,
            right: None,
        })
    }
}

/// Name-keyed binary search tree over modules.
///
/// # Examples
///
/// ```rust
/// use coursebuilder_core::index::SearchTree;
/// use coursebuilder_core::models::Module;
///
/// let mut tree = SearchTree::new();
/// tree.insert(Module::with_id("1", "Algebra"));
/// tree.insert(Module::with_id("2", "Linear Algebra"));
///
/// let hits = tree.search("algebra");
/// assert_eq!(hits.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct SearchTree {
    root: Option<Box<TreeNode>>,
}

impl SearchTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Build a tree from a module list, inserting in list order.
    pub fn from_modules(modules: &[Module]) -> Self {
        let mut tree = Self::new();
        for module in modules {
            tree.insert(module.clone());
        }
        tree
    }

    /// True when no module has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a module, keyed by its lowercased name.
    ///
    /// Strictly-less names descend left, everything else (ties included)
    /// descends right. No rebalancing is performed.
    pub fn insert(&mut self, module: Module) {
        let key = normalized(&module.name);
        let mut slot = &mut self.root;

        while let Some(node) = slot {
            if key < normalized(&node.module.name) {
                slot = &mut node.left;
            } else {
                slot = &mut node.right;
            }
        }

        *slot = Some(TreeNode::leaf(module));
    }

    /// Return every module whose name contains `term`, case-insensitively.
    ///
    /// An empty tree yields an empty result for any query.
    pub fn search(&self, term: &str) -> Vec<Module> {
        let term = term.to_lowercase();
        let mut results = Vec::new();
        Self::search_node(self.root.as_deref(), &term, &mut results);
        results
    }

    fn search_node(node: Option<&TreeNode>, term: &str, results: &mut Vec<Module>) {
        let Some(node) = node else {
            return;
        };

        let name = normalized(&node.module.name);
        if name.contains(term) {
            results.push(node.module.clone());
        }

        // Prune the left side only; the right side is always scanned.
        if *term < *name {
            Self::search_node(node.left.as_deref(), term, results);
        }
        Self::search_node(node.right.as_deref(), term, results);
    }
}
