//! Document-scope keyboard listener registry.
//!
//! A subscription is a capability: [`KeyboardRegistry::subscribe`] hands out a
//! [`KeyboardSubscription`] token that cannot be cloned, and
//! [`KeyboardRegistry::release`] consumes it. An element therefore cannot
//! release the same listener twice, and holding `Option<KeyboardSubscription>`
//! makes double registration visible at the call site.

use slotmap::{new_key_type, SlotMap};

use super::ComponentId;

new_key_type! {
    /// Registry slot of one keyboard listener.
    pub struct SubscriptionId;
}

/// Proof that a component's keydown listener is registered on the document.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping the token leaks the listener; hand it back to `release`"]
pub struct KeyboardSubscription {
    id: SubscriptionId,
}

impl KeyboardSubscription {
    /// The registry slot this token refers to.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

/// Keydown listeners registered at document scope.
#[derive(Debug, Default)]
pub struct KeyboardRegistry {
    subscribers: SlotMap<SubscriptionId, ComponentId>,
}

impl KeyboardRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a keydown listener for `component`.
    pub fn subscribe(&mut self, component: ComponentId) -> KeyboardSubscription {
        KeyboardSubscription {
            id: self.subscribers.insert(component),
        }
    }

    /// Unregister the listener behind `subscription`.
    ///
    /// Returns `false` if the slot was already cleared by [`drop_component`](Self::drop_component).
    pub fn release(&mut self, subscription: KeyboardSubscription) -> bool {
        self.subscribers.remove(subscription.id).is_some()
    }

    /// Components with a live listener, in slot order.
    pub fn subscribers(&self) -> Vec<ComponentId> {
        self.subscribers.values().copied().collect()
    }

    /// Whether `component` currently has a listener registered.
    pub fn is_subscribed(&self, component: ComponentId) -> bool {
        self.subscribers.values().any(|&c| c == component)
    }

    /// Forcefully remove every listener owned by `component`.
    ///
    /// Returns the number removed. Anything non-zero means the component
    /// never released its token.
    pub fn drop_component(&mut self, component: ComponentId) -> usize {
        let before = self.subscribers.len();
        self.subscribers.retain(|_, c| *c != component);
        before - self.subscribers.len()
    }

    /// Number of live listeners.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Whether no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
