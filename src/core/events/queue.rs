//=========================================================================
// Event Queue
//=========================================================================
//
// Unbounded FIFO of dispatched events. Appends at the tail, retrieves
// from the head. Consumers drain it at least once per frame.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::VecDeque;

//=== Internal Dependencies ===============================================

use super::event::Event;

//=== EventQueue ==========================================================

/// FIFO queue of events.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: VecDeque::with_capacity(16) }
    }

    /// Appends an event at the tail.
    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Removes and returns the head event, if any.
    pub fn retrieve(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Returns the head event without removing it.
    pub fn peek(&self) -> Option<&Event> {
        self.events.front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drops all queued events, keeping capacity.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::event::{EventType, WindowId};

    #[test]
    fn empty_queue_retrieves_nothing() {
        let mut queue = EventQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.retrieve(), None);
    }

    #[test]
    fn retrieve_is_fifo() {
        let mut queue = EventQueue::new();
        for i in 0..5 {
            queue.push(Event::new(EventType::CharInput, Some(WindowId(1)), i, 0));
        }

        let order: Vec<u32> = std::iter::from_fn(|| queue.retrieve()).map(|e| e.val1).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
        assert_eq!(queue.retrieve(), None);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut queue = EventQueue::new();
        queue.push(Event::bare(EventType::Timer));

        assert_eq!(queue.peek().map(|e| e.kind), Some(EventType::Timer));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn clear_preserves_capacity() {
        let mut queue = EventQueue::new();
        for _ in 0..100 {
            queue.push(Event::bare(EventType::Redraw));
        }
        let capacity_before = queue.events.capacity();

        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(queue.events.capacity(), capacity_before);
    }
}
