//! Host page: element ownership, lifecycle, input routing, event-loop turns.
//!
//! [`Host`] stands in for the document a custom element lives in. It owns the
//! elements, the [`EventLoop`], the document [`KeyboardRegistry`] and a
//! [`LifecycleTracker`], and it is the only thing that calls into an
//! [`Element`].

pub mod context;
pub mod debounce;
pub mod element;
pub mod event_loop;
pub mod keyboard;
pub mod lifecycle;
pub mod serve;

use slotmap::{new_key_type, SlotMap};
use tracing::{debug, trace, warn};

use crate::dom::{NodeId, Selector};
use crate::event::{ClickEvent, KeyEvent, KeyOutcome};

pub use context::Context;
pub use debounce::Debouncer;
pub use element::{Element, Task};
pub use event_loop::{EventLoop, FrameId, Scheduled, TimerId};
pub use keyboard::{KeyboardRegistry, KeyboardSubscription, SubscriptionId};
pub use lifecycle::{LifecycleEvent, LifecycleTracker, DEFAULT_EVENT_CAPACITY};
pub use serve::{serve, HostCommand};

new_key_type! {
    /// Unique identifier for an element owned by a [`Host`].
    pub struct ComponentId;
}

// ---------------------------------------------------------------------------
// HostError
// ---------------------------------------------------------------------------

/// Errors from host operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("no element with id {0:?}")]
    UnknownComponent(ComponentId),
}

// ---------------------------------------------------------------------------
// HostConfig
// ---------------------------------------------------------------------------

/// Configuration for the host.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Upper bound on turns run by [`Host::run_until_idle`] before it gives up.
    pub max_turns: usize,
    /// Undrained lifecycle events kept before the oldest are discarded.
    pub event_capacity: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            max_turns: 1000,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl HostConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the turn limit (builder).
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set the lifecycle event capacity (builder). Zero disables recording.
    pub fn with_event_capacity(mut self, event_capacity: usize) -> Self {
        self.event_capacity = event_capacity;
        self
    }
}

// ---------------------------------------------------------------------------
// Host
// ---------------------------------------------------------------------------

/// The page that owns and drives elements.
pub struct Host {
    elements: SlotMap<ComponentId, Box<dyn Element>>,
    lifecycle: LifecycleTracker,
    event_loop: EventLoop,
    keyboard: KeyboardRegistry,
    config: HostConfig,
}

impl Host {
    /// Create an empty host with default configuration.
    pub fn new() -> Self {
        Self::with_config(HostConfig::default())
    }

    /// Create an empty host with the given configuration.
    pub fn with_config(config: HostConfig) -> Self {
        Self {
            elements: SlotMap::with_key(),
            lifecycle: LifecycleTracker::with_capacity(config.event_capacity),
            event_loop: EventLoop::new(),
            keyboard: KeyboardRegistry::new(),
            config,
        }
    }

    /// Take ownership of a constructed (not yet attached) element.
    pub fn create(&mut self, element: Box<dyn Element>) -> ComponentId {
        let id = self.elements.insert(element);
        trace!(component = ?id, "element created");
        id
    }

    /// Attach an element to the page. Attaching twice is a no-op.
    pub fn attach(&mut self, id: ComponentId) -> Result<(), HostError> {
        let element = self
            .elements
            .get_mut(id)
            .ok_or(HostError::UnknownComponent(id))?;
        if self.lifecycle.on_mount(id) {
            debug!(component = ?id, tag = element.tag_name(), "attached");
            let mut cx = Context::new(id, &mut self.event_loop, &mut self.keyboard);
            element.connected(&mut cx);
        }
        Ok(())
    }

    /// Detach an element from the page. Detaching twice is a no-op.
    pub fn detach(&mut self, id: ComponentId) -> Result<(), HostError> {
        let element = self
            .elements
            .get_mut(id)
            .ok_or(HostError::UnknownComponent(id))?;
        if self.lifecycle.on_unmount(id) {
            debug!(component = ?id, tag = element.tag_name(), "detached");
            let mut cx = Context::new(id, &mut self.event_loop, &mut self.keyboard);
            element.disconnected(&mut cx);
            let dropped = self.event_loop.drop_component(id);
            if dropped > 0 {
                trace!(component = ?id, dropped, "dropped tasks of detached element");
            }
        }
        Ok(())
    }

    /// Detach (if needed) and drop an element, returning it.
    pub fn remove(&mut self, id: ComponentId) -> Result<Box<dyn Element>, HostError> {
        self.detach(id)?;
        let leaked = self.keyboard.drop_component(id);
        if leaked > 0 {
            warn!(component = ?id, leaked, "element removed without releasing keyboard listener");
        }
        self.elements
            .remove(id)
            .ok_or(HostError::UnknownComponent(id))
    }

    /// Set an attribute, notifying the element if the attribute is observed.
    pub fn set_attribute(
        &mut self,
        id: ComponentId,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), HostError> {
        let value = value.into();
        let element = self
            .elements
            .get_mut(id)
            .ok_or(HostError::UnknownComponent(id))?;
        let old = element.attributes_mut().set(name, value.clone());
        if element.observed_attributes().contains(&name) {
            self.lifecycle.on_update(id);
            let mut cx = Context::new(id, &mut self.event_loop, &mut self.keyboard);
            element.attribute_changed(name, old.as_deref(), Some(&value), &mut cx);
        }
        Ok(())
    }

    /// Remove an attribute, notifying the element if it was present and observed.
    pub fn remove_attribute(&mut self, id: ComponentId, name: &str) -> Result<(), HostError> {
        let element = self
            .elements
            .get_mut(id)
            .ok_or(HostError::UnknownComponent(id))?;
        let Some(old) = element.attributes_mut().remove(name) else {
            return Ok(());
        };
        if element.observed_attributes().contains(&name) {
            self.lifecycle.on_update(id);
            let mut cx = Context::new(id, &mut self.event_loop, &mut self.keyboard);
            element.attribute_changed(name, Some(&old), None, &mut cx);
        }
        Ok(())
    }

    /// Click a node of an element's shadow root.
    ///
    /// Hidden nodes and detached elements cannot be hit; such clicks return
    /// `Ok(false)` without reaching any listener.
    pub fn click(&mut self, id: ComponentId, target: NodeId) -> Result<bool, HostError> {
        let element = self
            .elements
            .get_mut(id)
            .ok_or(HostError::UnknownComponent(id))?;
        if !self.lifecycle.is_mounted(id) || !element.shadow_root().is_displayed(target) {
            trace!(component = ?id, ?target, "click missed: target not displayed");
            return Ok(false);
        }
        let mut cx = Context::new(id, &mut self.event_loop, &mut self.keyboard);
        Ok(element.handle_click(ClickEvent { target }, &mut cx))
    }

    /// Click the node matched by `selector` inside an element's shadow root.
    pub fn click_selector(&mut self, id: ComponentId, selector: &Selector) -> Result<bool, HostError> {
        let element = self
            .elements
            .get(id)
            .ok_or(HostError::UnknownComponent(id))?;
        let dom = element.shadow_root();
        let found = dom.root().and_then(|root| dom.select(root, selector));
        match found {
            Some(target) => self.click(id, target),
            None => {
                debug!(component = ?id, class = %selector.class, nth = selector.nth, "no node matches selector");
                Ok(false)
            }
        }
    }

    /// Dispatch a document keydown to every subscribed element.
    pub fn key_down(&mut self, event: KeyEvent) -> KeyOutcome {
        let mut outcome = KeyOutcome::default();
        for id in self.keyboard.subscribers() {
            let Some(element) = self.elements.get_mut(id) else {
                trace!(component = ?id, "keyboard listener of missing element");
                continue;
            };
            let mut cx = Context::new(id, &mut self.event_loop, &mut self.keyboard);
            outcome = outcome.merge(element.handle_key(&event, &mut cx));
        }
        outcome
    }

    /// Run one event-loop turn: due timers, then due frame callbacks.
    ///
    /// Returns `false` if there was nothing to run.
    pub fn tick(&mut self) -> bool {
        if !self.event_loop.has_pending() {
            return false;
        }
        self.event_loop.begin_turn();
        for timer in self.event_loop.due_timers() {
            if let Some(scheduled) = self.event_loop.take_timer(timer) {
                self.run_scheduled(scheduled);
            }
        }
        for frame in self.event_loop.due_frames() {
            if let Some(scheduled) = self.event_loop.take_frame(frame) {
                self.run_scheduled(scheduled);
            }
        }
        true
    }

    /// Run turns until nothing is pending or the turn limit is hit.
    ///
    /// Returns the number of turns run.
    pub fn run_until_idle(&mut self) -> usize {
        let mut turns = 0;
        while self.event_loop.has_pending() {
            if turns >= self.config.max_turns {
                warn!(
                    max_turns = self.config.max_turns,
                    timers = self.event_loop.pending_timers(),
                    frames = self.event_loop.pending_frames(),
                    "event loop did not settle"
                );
                break;
            }
            self.tick();
            turns += 1;
        }
        turns
    }

    fn run_scheduled(&mut self, scheduled: Scheduled) {
        let Scheduled { component, task } = scheduled;
        let Some(element) = self.elements.get_mut(component) else {
            trace!(?component, ?task, "task for missing element dropped");
            return;
        };
        let mut cx = Context::new(component, &mut self.event_loop, &mut self.keyboard);
        element.run_task(task, &mut cx);
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Borrow an element as its concrete type.
    pub fn element<T: Element + 'static>(&self, id: ComponentId) -> Option<&T> {
        self.elements.get(id)?.as_any().downcast_ref::<T>()
    }

    /// Mutably borrow an element as its concrete type.
    pub fn element_mut<T: Element + 'static>(&mut self, id: ComponentId) -> Option<&mut T> {
        self.elements.get_mut(id)?.as_any_mut().downcast_mut::<T>()
    }

    /// Whether an element is attached.
    pub fn is_attached(&self, id: ComponentId) -> bool {
        self.lifecycle.is_mounted(id)
    }

    /// Drain recorded lifecycle events.
    ///
    /// At most [`HostConfig::event_capacity`] of the newest events are kept
    /// between drains.
    pub fn lifecycle_events(&mut self) -> Vec<LifecycleEvent> {
        self.lifecycle.pending_events()
    }

    /// Number of lifecycle events waiting to be drained.
    pub fn pending_lifecycle_events(&self) -> usize {
        self.lifecycle.pending_len()
    }

    /// The event loop (for inspecting pending work).
    pub fn event_loop(&self) -> &EventLoop {
        &self.event_loop
    }

    /// The document keyboard registry.
    pub fn keyboard(&self) -> &KeyboardRegistry {
        &self.keyboard
    }

    /// Number of elements owned by the host.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the host owns no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
