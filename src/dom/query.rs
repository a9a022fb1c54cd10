//! DOM queries: by class, by tag, generic predicate matching, selectors.
//!
//! All queries walk the tree under a scope node in document (pre-order) order,
//! so "the third thumbnail" is stable across rebuilds even when the arena
//! reuses slots.

use super::node::{NodeData, NodeId};
use super::tree::Dom;

/// A minimal class selector: the `nth` (zero-based) match of `.class`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub class: String,
    pub nth: usize,
}

impl Selector {
    /// First node carrying `class`.
    pub fn class(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            nth: 0,
        }
    }

    /// Pick the `nth` match instead of the first (builder).
    pub fn nth(mut self, nth: usize) -> Self {
        self.nth = nth;
        self
    }
}

impl Dom {
    /// All nodes under `scope` (inclusive) matching `predicate`, in document order.
    pub fn select_all(&self, scope: NodeId, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.walk_depth_first(scope)
            .into_iter()
            .filter(|&id| self.get(id).is_some_and(&predicate))
            .collect()
    }

    /// All nodes under `scope` that have the given CSS class.
    pub fn select_by_class(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        self.select_all(scope, |data| data.has_class(class))
    }

    /// All nodes under `scope` with the given tag name.
    pub fn select_by_tag(&self, scope: NodeId, tag: &str) -> Vec<NodeId> {
        self.select_all(scope, |data| data.tag == tag)
    }

    /// First node under `scope` with the given CSS class.
    pub fn select_first(&self, scope: NodeId, class: &str) -> Option<NodeId> {
        self.walk_depth_first(scope)
            .into_iter()
            .find(|&id| self.get(id).is_some_and(|d| d.has_class(class)))
    }

    /// Resolve a [`Selector`] under `scope`.
    pub fn select(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.select_by_class(scope, &selector.class)
            .get(selector.nth)
            .copied()
    }
}
