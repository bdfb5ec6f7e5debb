use std::collections::VecDeque;

use super::types::Direction;

// Sole gatekeeper against 180-degree reversals: a pushed direction is
// checked against the direction it would actually follow, which is the
// back of the queue when turns are still pending.
#[derive(Clone, Debug)]
pub struct InputQueue {
    queue: VecDeque<Direction>,
    capacity: usize,
    active: Direction,
}

impl InputQueue {
    pub fn new(capacity: usize, active: Direction) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            capacity,
            active,
        }
    }

    pub fn push(&mut self, direction: Direction) {
        if self.queue.len() >= self.capacity {
            return;
        }
        let reference = self.queue.back().copied().unwrap_or(self.active);
        if direction.is_opposite(&reference) {
            return;
        }
        self.queue.push_back(direction);
    }

    pub fn pop(&mut self) -> Option<Direction> {
        let direction = self.queue.pop_front();
        if let Some(direction) = direction {
            self.active = direction;
        }
        direction
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn reset(&mut self, active: Direction) {
        self.queue.clear();
        self.active = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = InputQueue::new(3, Direction::Right);
        queue.push(Direction::Up);
        queue.push(Direction::Left);
        assert_eq!(queue.pop(), Some(Direction::Up));
        assert_eq!(queue.pop(), Some(Direction::Left));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_rejects_reversal_of_active_direction() {
        let mut queue = InputQueue::new(3, Direction::Right);
        queue.push(Direction::Left);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_rejects_reversal_across_queued_turns() {
        let mut queue = InputQueue::new(3, Direction::Right);
        queue.push(Direction::Up);
        // Down would reverse the queued Up, not the active Right.
        queue.push(Direction::Down);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop(), Some(Direction::Up));
    }

    #[test]
    fn test_drops_inputs_beyond_capacity() {
        let mut queue = InputQueue::new(3, Direction::Right);
        queue.push(Direction::Up);
        queue.push(Direction::Right);
        queue.push(Direction::Down);
        queue.push(Direction::Left);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some(Direction::Up));
        assert_eq!(queue.pop(), Some(Direction::Right));
        assert_eq!(queue.pop(), Some(Direction::Down));
    }

    #[test]
    fn test_pop_updates_reference_direction() {
        let mut queue = InputQueue::new(3, Direction::Right);
        queue.push(Direction::Up);
        assert_eq!(queue.pop(), Some(Direction::Up));
        // Up is now the last effective direction, so Down must be rejected.
        queue.push(Direction::Down);
        assert!(queue.is_empty());
        queue.push(Direction::Left);
        assert_eq!(queue.pop(), Some(Direction::Left));
    }

    #[test]
    fn test_reset_clears_and_rebases() {
        let mut queue = InputQueue::new(3, Direction::Up);
        queue.push(Direction::Left);
        queue.reset(Direction::Right);
        assert!(queue.is_empty());
        queue.push(Direction::Left);
        assert!(queue.is_empty());
    }
}
