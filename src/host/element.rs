//! Element trait: lifecycle callbacks, deferred tasks, input handling.
//!
//! The `Element` trait is the seam between the [`Host`](super::Host) and a
//! component. The host owns elements as `Box<dyn Element>` and calls into them
//! with a [`Context`] that exposes the scheduling and document services an
//! element may use. Elements never hold references back into the host; they
//! schedule [`Task`] values instead of closures, and the host routes each task
//! back to the element that queued it.

use std::any::Any;

use super::context::Context;
use crate::dom::{Attributes, Dom};
use crate::event::{ClickEvent, Generation, KeyEvent, KeyOutcome};

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

/// Deferred work an element can queue on the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Rebuild the element's subtree from its current attributes.
    Render,
    /// Attach element-scoped listeners to the subtree of the given generation.
    BindListeners(Generation),
}

// ---------------------------------------------------------------------------
// Element trait
// ---------------------------------------------------------------------------

/// A custom element hosted on the page.
///
/// Element is object-safe: every method takes `&self`/`&mut self` and returns
/// owned or borrowed data.
pub trait Element {
    /// The element's tag name (e.g. "game-media-gallery").
    fn tag_name(&self) -> &str;

    /// Attribute names whose changes trigger [`attribute_changed`](Self::attribute_changed).
    ///
    /// Defaults to none.
    fn observed_attributes(&self) -> &[&str] {
        &[]
    }

    /// The element's own (host-side) attributes.
    fn attributes(&self) -> &Attributes;

    /// Mutable access to the element's attributes. The host writes through this
    /// before notifying the element.
    fn attributes_mut(&mut self) -> &mut Attributes;

    /// The element's private subtree.
    fn shadow_root(&self) -> &Dom;

    /// Called when the element is attached to the page.
    fn connected(&mut self, cx: &mut Context<'_>);

    /// Called when the element is detached. Must release everything acquired
    /// through `cx`.
    fn disconnected(&mut self, cx: &mut Context<'_>);

    /// Called after an observed attribute was set or removed.
    fn attribute_changed(
        &mut self,
        _name: &str,
        _old: Option<&str>,
        _new: Option<&str>,
        _cx: &mut Context<'_>,
    ) {
    }

    /// Run a task this element queued earlier.
    fn run_task(&mut self, task: Task, cx: &mut Context<'_>);

    /// Deliver a click on a displayed node of the shadow root.
    ///
    /// Returns whether any listener acted on it.
    fn handle_click(&mut self, _event: ClickEvent, _cx: &mut Context<'_>) -> bool {
        false
    }

    /// Deliver a document keydown to an element holding a keyboard subscription.
    fn handle_key(&mut self, _event: &KeyEvent, _cx: &mut Context<'_>) -> KeyOutcome {
        KeyOutcome::default()
    }

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
