//! Input event queue
//!
//! Window and keyboard callbacks push events as they arrive; the frame driver
//! drains the queue once per tick, so every action runs on the frame thread
//! in arrival order.

use std::collections::VecDeque;

use crate::input::KeyCode;

/// Events delivered by the windowing layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Key was pressed
    KeyPressed(KeyCode),
    /// Key was released
    KeyReleased(KeyCode),
    /// Window was resized
    Resized {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },
}

/// FIFO queue of pending input events
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<InputEvent>,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for the next tick
    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Take every pending event, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.pending.drain(..)
    }

    /// Number of events waiting
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True when nothing is waiting
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_arrival_order() {
        let mut queue = EventQueue::new();
        queue.push(InputEvent::KeyPressed(KeyCode::Space));
        queue.push(InputEvent::Resized { width: 800, height: 600 });
        queue.push(InputEvent::KeyReleased(KeyCode::Space));

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                InputEvent::KeyPressed(KeyCode::Space),
                InputEvent::Resized { width: 800, height: 600 },
                InputEvent::KeyReleased(KeyCode::Space),
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_drain_empties_queue_once() {
        let mut queue = EventQueue::new();
        queue.push(InputEvent::KeyPressed(KeyCode::W));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.drain().count(), 1);
        assert_eq!(queue.drain().count(), 0);
    }
}
