//! Per-call view of host services handed to an element.

use super::element::Task;
use super::event_loop::{EventLoop, FrameId, TimerId};
use super::keyboard::{KeyboardRegistry, KeyboardSubscription};
use super::ComponentId;

/// Scheduling and document services scoped to one element.
///
/// Every task queued through a `Context` is tagged with the element's id, so
/// the host can route it back (or drop it if the element is gone).
pub struct Context<'a> {
    component: ComponentId,
    event_loop: &'a mut EventLoop,
    keyboard: &'a mut KeyboardRegistry,
}

impl<'a> Context<'a> {
    pub(crate) fn new(
        component: ComponentId,
        event_loop: &'a mut EventLoop,
        keyboard: &'a mut KeyboardRegistry,
    ) -> Self {
        Self {
            component,
            event_loop,
            keyboard,
        }
    }

    /// The id of the element this context belongs to.
    pub fn component(&self) -> ComponentId {
        self.component
    }

    /// Queue `task` for the next event-loop turn.
    pub fn set_timeout(&mut self, task: Task) -> TimerId {
        self.event_loop.set_timeout(self.component, task)
    }

    /// Cancel a pending timer.
    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        self.event_loop.clear_timeout(id)
    }

    /// Queue `task` for the frame phase, after pending timers have run.
    pub fn request_frame(&mut self, task: Task) -> FrameId {
        self.event_loop.request_frame(self.component, task)
    }

    /// Cancel a pending frame callback.
    pub fn cancel_frame(&mut self, id: FrameId) -> bool {
        self.event_loop.cancel_frame(id)
    }

    /// Register a document keydown listener for this element.
    pub fn subscribe_keyboard(&mut self) -> KeyboardSubscription {
        self.keyboard.subscribe(self.component)
    }

    /// Unregister a document keydown listener.
    pub fn release_keyboard(&mut self, subscription: KeyboardSubscription) -> bool {
        self.keyboard.release(subscription)
    }
}
