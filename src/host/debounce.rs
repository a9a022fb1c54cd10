//! Latest-wins debouncing of a deferred task.
//!
//! At most one task is pending. Scheduling while one is pending cancels it and
//! queues a fresh one for the next turn, so a burst of requests collapses into
//! a single execution that observes the state left by the last request.

use tracing::trace;

use super::context::Context;
use super::element::Task;
use super::event_loop::TimerId;

/// Coalesces repeated requests for the same task.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<TimerId>,
}

impl Debouncer {
    /// Create an idle debouncer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task`, replacing any pending one.
    ///
    /// Returns `true` if a pending task was superseded.
    pub fn schedule(&mut self, task: Task, cx: &mut Context<'_>) -> bool {
        let superseded = match self.pending.take() {
            Some(timer) => cx.clear_timeout(timer),
            None => false,
        };
        if superseded {
            trace!(component = ?cx.component(), ?task, "superseded pending task");
        }
        self.pending = Some(cx.set_timeout(task));
        superseded
    }

    /// Mark the pending task as started. Call this first thing when it runs.
    pub fn complete(&mut self) {
        self.pending = None;
    }

    /// Cancel the pending task, if any.
    pub fn cancel(&mut self, cx: &mut Context<'_>) -> bool {
        match self.pending.take() {
            Some(timer) => cx.clear_timeout(timer),
            None => false,
        }
    }

    /// Whether a task is waiting for its turn.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
