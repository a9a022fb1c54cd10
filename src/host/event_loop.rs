//! Single-threaded cooperative event loop: zero-delay timers and frame callbacks.
//!
//! One turn runs every timer that was queued when the turn began (cancelled
//! timers are skipped), then every frame callback queued at that point. Work
//! scheduled while a phase runs lands in a later phase or turn, so a render
//! task always finishes before the frame callback it requested.

use std::collections::VecDeque;

use slotmap::{new_key_type, SlotMap};

use super::element::Task;
use super::ComponentId;

new_key_type! {
    /// Handle for a pending zero-delay timer.
    pub struct TimerId;
    /// Handle for a pending frame callback.
    pub struct FrameId;
}

/// A task queued on behalf of one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub component: ComponentId,
    pub task: Task,
}

/// Timer and frame-callback queues.
#[derive(Debug, Default)]
pub struct EventLoop {
    timers: SlotMap<TimerId, Scheduled>,
    timer_order: VecDeque<TimerId>,
    frames: SlotMap<FrameId, Scheduled>,
    frame_order: VecDeque<FrameId>,
    turns: u64,
}

impl EventLoop {
    /// Create an idle event loop.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to run on the next turn.
    pub fn set_timeout(&mut self, component: ComponentId, task: Task) -> TimerId {
        let id = self.timers.insert(Scheduled { component, task });
        self.timer_order.push_back(id);
        id
    }

    /// Cancel a pending timer. Returns `false` if it already ran or was cancelled.
    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        let removed = self.timers.remove(id).is_some();
        if removed {
            self.timer_order.retain(|queued| *queued != id);
        }
        removed
    }

    /// Queue `task` for the frame phase of the current (or next) turn.
    pub fn request_frame(&mut self, component: ComponentId, task: Task) -> FrameId {
        let id = self.frames.insert(Scheduled { component, task });
        self.frame_order.push_back(id);
        id
    }

    /// Cancel a pending frame callback.
    pub fn cancel_frame(&mut self, id: FrameId) -> bool {
        let removed = self.frames.remove(id).is_some();
        if removed {
            self.frame_order.retain(|queued| *queued != id);
        }
        removed
    }

    /// Drop every pending task that belongs to `component`.
    ///
    /// Returns the number of tasks dropped.
    pub fn drop_component(&mut self, component: ComponentId) -> usize {
        let before = self.timers.len() + self.frames.len();
        self.timers.retain(|_, s| s.component != component);
        self.frames.retain(|_, s| s.component != component);
        let timers = &self.timers;
        self.timer_order.retain(|id| timers.contains_key(*id));
        let frames = &self.frames;
        self.frame_order.retain(|id| frames.contains_key(*id));
        before - (self.timers.len() + self.frames.len())
    }

    /// Whether any timer or frame callback is pending.
    pub fn has_pending(&self) -> bool {
        !self.timers.is_empty() || !self.frames.is_empty()
    }

    /// Number of pending timers.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Number of pending frame callbacks.
    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Number of ids held in the ordering queues, pending or not.
    pub fn queued_ids(&self) -> usize {
        self.timer_order.len() + self.frame_order.len()
    }

    /// Number of turns started so far.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    pub(crate) fn begin_turn(&mut self) {
        self.turns += 1;
    }

    /// Snapshot the timers due this turn, in scheduling order.
    pub(crate) fn due_timers(&mut self) -> Vec<TimerId> {
        let due: Vec<TimerId> = self.timer_order.drain(..).collect();
        due.into_iter()
            .filter(|id| self.timers.contains_key(*id))
            .collect()
    }

    /// Remove a due timer for execution. `None` if it was cancelled meanwhile.
    pub(crate) fn take_timer(&mut self, id: TimerId) -> Option<Scheduled> {
        self.timers.remove(id)
    }

    /// Snapshot the frame callbacks due this turn, in request order.
    pub(crate) fn due_frames(&mut self) -> Vec<FrameId> {
        let due: Vec<FrameId> = self.frame_order.drain(..).collect();
        due.into_iter()
            .filter(|id| self.frames.contains_key(*id))
            .collect()
    }

    /// Remove a due frame callback for execution.
    pub(crate) fn take_frame(&mut self, id: FrameId) -> Option<Scheduled> {
        self.frames.remove(id)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Generation;

    fn components(n: usize) -> Vec<ComponentId> {
        let mut sm: SlotMap<ComponentId, ()> = SlotMap::with_key();
        (0..n).map(|_| sm.insert(())).collect()
    }

    #[test]
    fn new_loop_is_idle() {
        let el = EventLoop::new();
        assert!(!el.has_pending());
        assert_eq!(el.turns(), 0);
    }

    #[test]
    fn timers_run_in_scheduling_order() {
        let c = components(2);
        let mut el = EventLoop::new();
        let a = el.set_timeout(c[0], Task::Render);
        let b = el.set_timeout(c[1], Task::Render);
        assert_eq!(el.due_timers(), vec![a, b]);
        assert_eq!(el.take_timer(a).unwrap().component, c[0]);
        assert_eq!(el.take_timer(b).unwrap().component, c[1]);
        assert!(!el.has_pending());
    }

    #[test]
    fn cleared_timer_is_skipped() {
        let c = components(1);
        let mut el = EventLoop::new();
        let a = el.set_timeout(c[0], Task::Render);
        let b = el.set_timeout(c[0], Task::Render);
        assert!(el.clear_timeout(a));
        assert!(!el.clear_timeout(a));
        assert_eq!(el.due_timers(), vec![b]);
    }

    #[test]
    fn timer_cancelled_after_snapshot_is_not_taken() {
        let c = components(1);
        let mut el = EventLoop::new();
        let a = el.set_timeout(c[0], Task::Render);
        let due = el.due_timers();
        el.clear_timeout(a);
        assert_eq!(due, vec![a]);
        assert!(el.take_timer(a).is_none());
    }

    #[test]
    fn timers_added_after_snapshot_wait_for_next_turn() {
        let c = components(1);
        let mut el = EventLoop::new();
        el.set_timeout(c[0], Task::Render);
        let due = el.due_timers();
        let late = el.set_timeout(c[0], Task::Render);
        assert_eq!(due.len(), 1);
        assert_eq!(el.due_timers(), vec![late]);
    }

    #[test]
    fn frames_queue_and_cancel() {
        let c = components(1);
        let mut el = EventLoop::new();
        let f1 = el.request_frame(c[0], Task::BindListeners(Generation(1)));
        let f2 = el.request_frame(c[0], Task::BindListeners(Generation(2)));
        assert_eq!(el.pending_frames(), 2);
        assert!(el.cancel_frame(f1));
        assert_eq!(el.due_frames(), vec![f2]);
        assert_eq!(
            el.take_frame(f2).unwrap().task,
            Task::BindListeners(Generation(2))
        );
    }

    #[test]
    fn drop_component_removes_only_its_tasks() {
        let c = components(2);
        let mut el = EventLoop::new();
        el.set_timeout(c[0], Task::Render);
        el.request_frame(c[0], Task::BindListeners(Generation(1)));
        let keep = el.set_timeout(c[1], Task::Render);
        assert_eq!(el.drop_component(c[0]), 2);
        assert_eq!(el.pending_timers(), 1);
        assert_eq!(el.pending_frames(), 0);
        assert_eq!(el.due_timers(), vec![keep]);
    }

    #[test]
    fn cancelled_work_leaves_no_queued_ids() {
        let c = components(1);
        let mut el = EventLoop::new();
        for _ in 0..10_000 {
            let timer = el.set_timeout(c[0], Task::Render);
            assert!(el.clear_timeout(timer));
            let frame = el.request_frame(c[0], Task::BindListeners(Generation(1)));
            assert!(el.cancel_frame(frame));
        }
        assert!(!el.has_pending());
        assert_eq!(el.queued_ids(), 0);
    }

    #[test]
    fn drop_component_prunes_queued_ids() {
        let c = components(2);
        let mut el = EventLoop::new();
        for _ in 0..100 {
            el.set_timeout(c[0], Task::Render);
            el.request_frame(c[0], Task::BindListeners(Generation(1)));
            el.drop_component(c[0]);
        }
        el.set_timeout(c[1], Task::Render);
        assert_eq!(el.queued_ids(), 1);
    }

    #[test]
    fn begin_turn_counts() {
        let mut el = EventLoop::new();
        el.begin_turn();
        el.begin_turn();
        assert_eq!(el.turns(), 2);
    }
}
