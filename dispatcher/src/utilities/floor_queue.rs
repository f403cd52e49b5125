use std::collections::BTreeSet;
use std::fmt;
use std::marker::PhantomData;

/// Which end of a [`FloorQueue`] is served first.
pub trait QueueOrder {
    fn head(floors: &BTreeSet<u8>) -> Option<u8>;
}

/// Nearest-first for floors above the elevator: lowest floor at the head.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascending;

/// Nearest-first for floors below the elevator: highest floor at the head.
#[derive(Debug, Clone, Copy, Default)]
pub struct Descending;

impl QueueOrder for Ascending {
    fn head(floors: &BTreeSet<u8>) -> Option<u8> {
        floors.first().copied()
    }
}

impl QueueOrder for Descending {
    fn head(floors: &BTreeSet<u8>) -> Option<u8> {
        floors.last().copied()
    }
}

/// Ordered set of requested cabin floors.
pub struct FloorQueue<O: QueueOrder> {
    floors: BTreeSet<u8>,
    order: PhantomData<O>,
}

impl<O: QueueOrder> FloorQueue<O> {
    pub fn new() -> Self {
        FloorQueue {
            floors: BTreeSet::new(),
            order: PhantomData,
        }
    }

    /// Returns false if the floor was already queued.
    pub fn push(&mut self, floor: u8) -> bool {
        self.floors.insert(floor)
    }

    pub fn head(&self) -> Option<u8> {
        O::head(&self.floors)
    }

    pub fn head_is(&self, floor: u8) -> bool {
        self.head() == Some(floor)
    }

    /// Removes the head only if it is `floor`.
    pub fn pop_if_head(&mut self, floor: u8) -> bool {
        self.head_is(floor) && self.floors.remove(&floor)
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn clear(&mut self) {
        self.floors.clear();
    }

    /// Floors in service order.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut floors: Vec<u8> = self.floors.iter().copied().collect();
        if self.head() != floors.first().copied() {
            floors.reverse();
        }
        floors
    }
}

impl<O: QueueOrder> Default for FloorQueue<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: QueueOrder> Clone for FloorQueue<O> {
    fn clone(&self) -> Self {
        FloorQueue {
            floors: self.floors.clone(),
            order: PhantomData,
        }
    }
}

impl<O: QueueOrder> fmt::Debug for FloorQueue<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_vec()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_serves_lowest_first() {
        let mut queue: FloorQueue<Ascending> = FloorQueue::new();
        queue.push(4);
        queue.push(2);
        queue.push(3);
        assert_eq!(queue.head(), Some(2));
        assert_eq!(queue.to_vec(), vec![2, 3, 4]);
    }

    #[test]
    fn descending_serves_highest_first() {
        let mut queue: FloorQueue<Descending> = FloorQueue::new();
        queue.push(0);
        queue.push(2);
        queue.push(1);
        assert_eq!(queue.head(), Some(2));
        assert_eq!(queue.to_vec(), vec![2, 1, 0]);
    }

    #[test]
    fn pop_only_removes_matching_head() {
        let mut queue: FloorQueue<Ascending> = FloorQueue::new();
        queue.push(2);
        queue.push(4);
        assert!(!queue.pop_if_head(4));
        assert_eq!(queue.len(), 2);
        assert!(queue.pop_if_head(2));
        assert_eq!(queue.head(), Some(4));
    }

    #[test]
    fn duplicate_requests_collapse() {
        let mut queue: FloorQueue<Descending> = FloorQueue::new();
        assert!(queue.push(1));
        assert!(!queue.push(1));
        assert_eq!(queue.len(), 1);
        assert!(queue.pop_if_head(1));
        assert!(queue.is_empty());
    }
}
