use std::{cmp::Ordering, collections::BinaryHeap};

/// Min-priority queue without decrease-key.
///
/// Updating an item means enqueuing it again; consumers discard stale entries when they dequeue
/// them. Equal priorities come out in insertion order.
pub struct PriorityQueue<T> {
    heap: BinaryHeap<QueueEntry<T>>,
    next_sequence: u64,
}

struct QueueEntry<T> {
    priority: f64,
    sequence: u64,
    item: T,
}

impl<T> PartialEq for QueueEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for QueueEntry<T> {}

impl<T> PartialOrd for QueueEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for QueueEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flipped on both keys to turn the max-heap into a FIFO min-heap
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        PriorityQueue::new()
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn enqueue(&mut self, item: T, priority: f64) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(QueueEntry {
            priority,
            sequence,
            item,
        });
    }

    pub fn dequeue(&mut self) -> Option<(T, f64)> {
        self.heap.pop().map(|entry| (entry.item, entry.priority))
    }

    pub fn peek(&self) -> Option<(&T, f64)> {
        self.heap.peek().map(|entry| (&entry.item, entry.priority))
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_sequence = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dequeue() {
        let mut queue = PriorityQueue::<usize>::new();
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_size() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(1, 5.0);
        assert_eq!(queue.len(), 1);
        queue.enqueue(2, 5.0);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_enqueue_and_peek() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(1, 5.0);
        assert_eq!(queue.peek(), Some((&1, 5.0)));
        queue.enqueue(2, 3.0);
        assert_eq!(queue.peek(), Some((&2, 3.0)));
        queue.enqueue(3, 4.0);
        assert_eq!(queue.peek(), Some((&2, 3.0)));
    }

    #[test]
    fn test_dequeue() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(1, 5.0);
        queue.enqueue(2, 3.0);
        queue.enqueue(3, 4.0);

        assert_eq!(queue.dequeue(), Some((2, 3.0)));
        assert_eq!(queue.dequeue(), Some((3, 4.0)));
        assert_eq!(queue.dequeue(), Some((1, 5.0)));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_ties_are_fifo() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("c", 1.0);
        queue.enqueue("a", 1.0);
        queue.enqueue("b", 1.0);
        queue.enqueue("first", 0.5);

        assert_eq!(queue.dequeue(), Some(("first", 0.5)));
        assert_eq!(queue.dequeue(), Some(("c", 1.0)));
        assert_eq!(queue.dequeue(), Some(("a", 1.0)));
        assert_eq!(queue.dequeue(), Some(("b", 1.0)));
    }

    #[test]
    fn test_same_item_enqueued_twice() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(7, 10.0);
        queue.enqueue(7, 2.0);

        assert_eq!(queue.dequeue(), Some((7, 2.0)));
        assert_eq!(queue.dequeue(), Some((7, 10.0)));
    }

    #[test]
    fn test_clear() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(1, 5.0);
        queue.enqueue(2, 3.0);

        queue.clear();
        assert_eq!(queue.len(), 0);

        queue.enqueue(1, 5.0);
        assert_eq!(queue.len(), 1);
    }
}
