//! Event queue abstraction.
//!
//! The lifecycle pump only needs to push events and count the ones still
//! queued, so the application's real event loop stays behind this trait.

use crate::LifecycleEvent;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Ordered queue of lifecycle events.
pub trait EventQueue: Send + Sync {
    /// Append an event to the back of the queue.
    fn push(&self, event: LifecycleEvent);

    /// Number of queued events equal to `event`, without removing them.
    fn count(&self, event: LifecycleEvent) -> usize;

    /// Whether at least one `event` is queued.
    fn has(&self, event: LifecycleEvent) -> bool {
        self.count(event) > 0
    }
}

/// Type alias for shared event queue reference.
pub type EventQueueRef = Arc<dyn EventQueue>;

/// FIFO queue held in memory.
///
/// Serves as the application's queue in the demo and as a capturing queue in tests.
#[derive(Default)]
pub struct InMemoryEventQueue {
    events: Mutex<VecDeque<LifecycleEvent>>,
}

impl InMemoryEventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return the oldest event.
    pub fn poll(&self) -> Option<LifecycleEvent> {
        self.events
            .lock()
            .expect("event queue mutex poisoned")
            .pop_front()
    }

    /// Remove and return every queued event, oldest first.
    pub fn drain(&self) -> Vec<LifecycleEvent> {
        self.events
            .lock()
            .expect("event queue mutex poisoned")
            .drain(..)
            .collect()
    }

    /// Copy of the queued events, oldest first.
    pub fn snapshot(&self) -> Vec<LifecycleEvent> {
        self.events
            .lock()
            .expect("event queue mutex poisoned")
            .iter()
            .copied()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().expect("event queue mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventQueue for InMemoryEventQueue {
    fn push(&self, event: LifecycleEvent) {
        tracing::trace!(event = %event, "event queued");
        self.events
            .lock()
            .expect("event queue mutex poisoned")
            .push_back(event);
    }

    fn count(&self, event: LifecycleEvent) -> usize {
        self.events
            .lock()
            .expect("event queue mutex poisoned")
            .iter()
            .filter(|queued| **queued == event)
            .count()
    }
}

/// Queue that discards everything and never reports queued events.
pub struct NullEventQueue;

impl EventQueue for NullEventQueue {
    fn push(&self, _event: LifecycleEvent) {}

    fn count(&self, _event: LifecycleEvent) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_queue_counts_without_consuming() {
        let queue = InMemoryEventQueue::new();

        queue.push(LifecycleEvent::WillEnterBackground);
        queue.push(LifecycleEvent::DidEnterBackground);
        queue.push(LifecycleEvent::DidEnterBackground);

        assert_eq!(queue.count(LifecycleEvent::DidEnterBackground), 2);
        assert_eq!(queue.count(LifecycleEvent::Quit), 0);
        assert!(queue.has(LifecycleEvent::WillEnterBackground));
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_in_memory_queue_is_fifo() {
        let queue = InMemoryEventQueue::new();
        queue.push(LifecycleEvent::WillEnterForeground);
        queue.push(LifecycleEvent::DidEnterForeground);

        assert_eq!(queue.poll(), Some(LifecycleEvent::WillEnterForeground));
        assert_eq!(queue.drain(), vec![LifecycleEvent::DidEnterForeground]);
        assert!(queue.is_empty());
        assert_eq!(queue.poll(), None);
    }

    #[test]
    fn test_null_event_queue() {
        let queue = NullEventQueue;
        queue.push(LifecycleEvent::Quit);
        assert!(!queue.has(LifecycleEvent::Quit));
    }
}
