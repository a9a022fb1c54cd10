//! Element-scoped click listeners, grouped by render generation.
//!
//! A rebuild replaces every node a listener could point at, so listeners are
//! never patched individually: each render bumps the [`Generation`], drops the
//! old [`ListenerSet`] and a fresh set is bound once the new subtree is live.

use std::fmt;

use crate::dom::NodeId;

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Monotonic render counter. Generation 0 means "nothing rendered yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation after this one.
    pub fn next(self) -> Generation {
        Generation(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Listener
// ---------------------------------------------------------------------------

/// Which click targets a listener reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetScope {
    /// The node itself or anything inside it.
    Subtree,
    /// Only clicks whose target is exactly this node.
    SelfOnly,
}

/// Whether the click keeps bubbling after this listener ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Bubble,
    Stop,
}

/// A click listener bound to one node, yielding an action of type `A`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listener<A> {
    pub node: NodeId,
    pub action: A,
    pub scope: TargetScope,
    pub propagation: Propagation,
}

impl<A> Listener<A> {
    /// A bubbling listener that reacts to clicks anywhere in `node`'s subtree.
    pub fn on_click(node: NodeId, action: A) -> Self {
        Self {
            node,
            action,
            scope: TargetScope::Subtree,
            propagation: Propagation::Bubble,
        }
    }

    /// Stop the click from reaching ancestors (builder).
    pub fn stop_propagation(mut self) -> Self {
        self.propagation = Propagation::Stop;
        self
    }

    /// Only react when the node itself is the click target (builder).
    pub fn self_only(mut self) -> Self {
        self.scope = TargetScope::SelfOnly;
        self
    }
}

// ---------------------------------------------------------------------------
// ListenerSet
// ---------------------------------------------------------------------------

/// The listeners attached for a single render generation.
#[derive(Debug, Clone)]
pub struct ListenerSet<A> {
    generation: Generation,
    listeners: Vec<Listener<A>>,
}

impl<A> ListenerSet<A> {
    /// Create an empty set for `generation`.
    pub fn new(generation: Generation) -> Self {
        Self {
            generation,
            listeners: Vec::new(),
        }
    }

    /// Attach a listener. Registration order is invocation order per node.
    pub fn add(&mut self, listener: Listener<A>) {
        self.listeners.push(listener);
    }

    /// The generation these listeners were bound against.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Listeners attached to `node`, in registration order.
    pub fn for_node(&self, node: NodeId) -> impl Iterator<Item = &Listener<A>> {
        self.listeners.iter().filter(move |l| l.node == node)
    }

    /// Number of attached listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listeners are attached.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn ids(n: usize) -> Vec<NodeId> {
        let mut sm: SlotMap<NodeId, ()> = SlotMap::with_key();
        (0..n).map(|_| sm.insert(())).collect()
    }

    #[test]
    fn generation_next_and_display() {
        let g = Generation::default();
        assert_eq!(g, Generation(0));
        assert_eq!(g.next(), Generation(1));
        assert!(g.next() > g);
        assert_eq!(Generation(7).to_string(), "gen#7");
    }

    #[test]
    fn listener_builders() {
        let n = ids(1)[0];
        let l = Listener::on_click(n, "close");
        assert_eq!(l.scope, TargetScope::Subtree);
        assert_eq!(l.propagation, Propagation::Bubble);

        let l = l.stop_propagation().self_only();
        assert_eq!(l.scope, TargetScope::SelfOnly);
        assert_eq!(l.propagation, Propagation::Stop);
    }

    #[test]
    fn set_filters_by_node() {
        let n = ids(2);
        let mut set = ListenerSet::new(Generation(3));
        set.add(Listener::on_click(n[0], 1));
        set.add(Listener::on_click(n[1], 2));
        set.add(Listener::on_click(n[0], 3));

        assert_eq!(set.generation(), Generation(3));
        assert_eq!(set.len(), 3);
        let on_first: Vec<i32> = set.for_node(n[0]).map(|l| l.action).collect();
        assert_eq!(on_first, vec![1, 3]);
    }

    #[test]
    fn empty_set() {
        let set: ListenerSet<()> = ListenerSet::new(Generation(1));
        assert!(set.is_empty());
    }
}
