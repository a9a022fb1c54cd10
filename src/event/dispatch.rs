//! Click dispatch: bubble path computation and listener resolution.
//!
//! `bubble_path` computes the traversal order from a node up to the DOM root.
//! `dispatch_click` walks that path against a [`ListenerSet`] and returns the
//! actions to run, honoring [`TargetScope`] and [`Propagation`]. Dispatch is
//! pure: the element applies the returned actions to its own state.

use super::input::ClickEvent;
use super::listener::{ListenerSet, Propagation, TargetScope};
use crate::dom::{Dom, NodeId};

/// Compute the bubble path from `start` up to the root (inclusive).
///
/// Returns `[start, parent, grandparent, ..., root]`.
/// If `start` does not exist in the DOM, returns an empty vec.
pub fn bubble_path(dom: &Dom, start: NodeId) -> Vec<NodeId> {
    if !dom.contains(start) {
        return Vec::new();
    }
    let mut path = vec![start];
    path.extend(dom.ancestors(start));
    path
}

/// Resolve which listener actions a click triggers, in invocation order.
///
/// A target that is gone from the DOM (a node of a discarded generation)
/// triggers nothing.
pub fn dispatch_click<A: Clone>(dom: &Dom, listeners: &ListenerSet<A>, event: ClickEvent) -> Vec<A> {
    let mut actions = Vec::new();
    for node in bubble_path(dom, event.target) {
        let mut stopped = false;
        for listener in listeners.for_node(node) {
            if listener.scope == TargetScope::SelfOnly && event.target != node {
                continue;
            }
            actions.push(listener.action.clone());
            if listener.propagation == Propagation::Stop {
                stopped = true;
            }
        }
        // Remaining listeners on the same node still run, ancestors do not.
        if stopped {
            break;
        }
    }
    actions
}

// ===========================================================================
// Tests
// ===========================================================================
