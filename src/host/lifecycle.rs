//! Element lifecycle: attach, detach, attribute updates.
//!
//! The `LifecycleTracker` records which elements are currently attached to the
//! page and accumulates lifecycle events (`Mount`, `Unmount`, `Update`) that can
//! be drained by whoever drives the host. The event queue is bounded: once it
//! holds `capacity` events the oldest one is discarded for each new event.

use std::collections::{HashSet, VecDeque};

use super::ComponentId;

// ---------------------------------------------------------------------------
// LifecycleEvent
// ---------------------------------------------------------------------------

/// Events that occur during an element's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// An element was attached to the page.
    Mount { component: ComponentId },
    /// An element was detached from the page.
    Unmount { component: ComponentId },
    /// An observed attribute of an attached element changed.
    Update { component: ComponentId },
}

// ---------------------------------------------------------------------------
// LifecycleTracker
// ---------------------------------------------------------------------------

/// Default number of undrained events kept by a [`LifecycleTracker`].
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Tracks which elements are attached and accumulates lifecycle events.
///
/// Mount and unmount are idempotent: the host only invokes the element's
/// connected/disconnected callbacks when the tracker reports a real transition.
#[derive(Debug)]
pub struct LifecycleTracker {
    mounted: HashSet<ComponentId>,
    pending: VecDeque<LifecycleEvent>,
    capacity: usize,
    discarded: u64,
}

impl Default for LifecycleTracker {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }
}

impl LifecycleTracker {
    /// Create a new, empty lifecycle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker that keeps at most `capacity` undrained events.
    ///
    /// A capacity of zero records no events at all.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            mounted: HashSet::new(),
            pending: VecDeque::new(),
            capacity,
            discarded: 0,
        }
    }

    fn record(&mut self, event: LifecycleEvent) {
        if self.capacity == 0 {
            self.discarded += 1;
            return;
        }
        if self.pending.len() == self.capacity {
            self.pending.pop_front();
            self.discarded += 1;
        }
        self.pending.push_back(event);
    }

    /// Record that an element has been attached.
    ///
    /// Returns `false` (and records nothing) if it was already attached.
    pub fn on_mount(&mut self, id: ComponentId) -> bool {
        let inserted = self.mounted.insert(id);
        if inserted {
            self.record(LifecycleEvent::Mount { component: id });
        }
        inserted
    }

    /// Record that an element has been detached.
    ///
    /// Returns `false` (and records nothing) if it was not attached.
    pub fn on_unmount(&mut self, id: ComponentId) -> bool {
        let removed = self.mounted.remove(&id);
        if removed {
            self.record(LifecycleEvent::Unmount { component: id });
        }
        removed
    }

    /// Record that an attached element changed. No-op when detached.
    pub fn on_update(&mut self, id: ComponentId) {
        if self.mounted.contains(&id) {
            self.record(LifecycleEvent::Update { component: id });
        }
    }

    /// Check whether an element is currently attached.
    pub fn is_mounted(&self, id: ComponentId) -> bool {
        self.mounted.contains(&id)
    }

    /// The number of currently attached elements.
    pub fn mounted_count(&self) -> usize {
        self.mounted.len()
    }

    /// Drain and return all pending lifecycle events.
    pub fn pending_events(&mut self) -> Vec<LifecycleEvent> {
        self.pending.drain(..).collect()
    }

    /// Whether there are any pending events.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of undrained events currently held.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Events discarded so far because the queue was full.
    pub fn discarded(&self) -> u64 {
        self.discarded
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn make_id(sm: &mut SlotMap<ComponentId, ()>) -> ComponentId {
        sm.insert(())
    }

    #[test]
    fn new_tracker_is_empty() {
        let tracker = LifecycleTracker::new();
        assert_eq!(tracker.mounted_count(), 0);
        assert!(!tracker.has_pending());
    }

    #[test]
    fn double_mount_is_noop() {
        let mut sm = SlotMap::with_key();
        let id = make_id(&mut sm);
        let mut tracker = LifecycleTracker::new();

        assert!(tracker.on_mount(id));
        assert!(!tracker.on_mount(id));
        assert_eq!(tracker.mounted_count(), 1);
        assert_eq!(tracker.pending_events(), vec![LifecycleEvent::Mount { component: id }]);
    }

    #[test]
    fn unmount_not_mounted_is_noop() {
        let mut sm = SlotMap::with_key();
        let id = make_id(&mut sm);
        let mut tracker = LifecycleTracker::new();

        assert!(!tracker.on_unmount(id));
        assert!(!tracker.has_pending());
    }

    #[test]
    fn update_unmounted_is_noop() {
        let mut sm = SlotMap::with_key();
        let id = make_id(&mut sm);
        let mut tracker = LifecycleTracker::new();

        tracker.on_update(id);
        assert!(!tracker.has_pending());
    }

    #[test]
    fn full_lifecycle_sequence() {
        let mut sm = SlotMap::with_key();
        let id = make_id(&mut sm);
        let mut tracker = LifecycleTracker::new();

        tracker.on_mount(id);
        tracker.on_update(id);
        tracker.on_unmount(id);
        assert!(!tracker.is_mounted(id));

        let events = tracker.pending_events();
        assert_eq!(
            events,
            vec![
                LifecycleEvent::Mount { component: id },
                LifecycleEvent::Update { component: id },
                LifecycleEvent::Unmount { component: id },
            ]
        );
        assert!(tracker.pending_events().is_empty());
    }

    #[test]
    fn full_queue_discards_oldest() {
        let mut sm = SlotMap::with_key();
        let id = make_id(&mut sm);
        let mut tracker = LifecycleTracker::with_capacity(2);

        tracker.on_mount(id);
        for _ in 0..10_000 {
            tracker.on_update(id);
        }
        tracker.on_unmount(id);
        assert_eq!(tracker.pending_len(), 2);
        assert_eq!(tracker.discarded(), 10_000);
        assert_eq!(
            tracker.pending_events(),
            vec![
                LifecycleEvent::Update { component: id },
                LifecycleEvent::Unmount { component: id },
            ]
        );
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let mut sm = SlotMap::with_key();
        let id = make_id(&mut sm);
        let mut tracker = LifecycleTracker::with_capacity(0);

        assert!(tracker.on_mount(id));
        tracker.on_update(id);
        assert!(tracker.is_mounted(id));
        assert!(!tracker.has_pending());
        assert_eq!(tracker.discarded(), 2);
    }

    #[test]
    fn remount_after_unmount() {
        let mut sm = SlotMap::with_key();
        let id = make_id(&mut sm);
        let mut tracker = LifecycleTracker::new();

        tracker.on_mount(id);
        tracker.on_unmount(id);
        assert!(tracker.on_mount(id));
        assert!(tracker.is_mounted(id));
    }
}
