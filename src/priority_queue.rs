//! Min-priority queue with decrease-key
//!
//! [`MinPriorityQueue`] is the public face of the crate: it tracks the
//! logical size and forwards every operation to an indexed
//! [`BinaryHeap`]. Priorities live on the elements themselves; after changing
//! a queued element's priority the caller must call
//! [`MinPriorityQueue::rebalance`]. The queue has no way to observe the
//! change on its own.

use crate::binary_heap::BinaryHeap;
use crate::position_index::FxKeyHasher;
use crate::traits::{Element, KeyHasher, QueueError};

/// Min-priority queue over caller-owned elements
///
/// Use [`QueueBuilder`](crate::QueueBuilder) for a growable queue, a custom
/// index size or another hasher.
///
/// # Example
///
/// ```rust
/// use indexed_heap::{MinPriorityQueue, Node};
/// use std::rc::Rc;
///
/// let mut queue = MinPriorityQueue::new();
/// for (id, p) in [("a", 5), ("b", 3), ("c", 8)] {
///     queue.insert(Rc::new(Node::new(id, p))).unwrap();
/// }
///
/// let order: Vec<_> = queue.drain_sorted().map(|n| n.priority()).collect();
/// assert_eq!(order, vec![3, 5, 8]);
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<E, H = FxKeyHasher> {
    heap: BinaryHeap<E, H>,
    len: usize,
}

impl<E: Element> MinPriorityQueue<E, FxKeyHasher> {
    /// Creates an empty queue with the default bound and index size
    pub fn new() -> Self {
        Self::from_heap(BinaryHeap::new())
    }

    /// Creates an empty queue bounded to `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_heap(BinaryHeap::with_capacity(capacity))
    }
}

impl<E: Element> Default for MinPriorityQueue<E, FxKeyHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element, H: KeyHasher> MinPriorityQueue<E, H> {
    pub(crate) fn from_heap(heap: BinaryHeap<E, H>) -> Self {
        let len = heap.len();
        MinPriorityQueue { heap, len }
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of queued elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if `element` (by key) is queued
    pub fn contains(&self, element: &E) -> bool {
        self.heap.contains(element.key())
    }

    /// Returns true if an element with `key` is queued
    pub fn contains_key(&self, key: &str) -> bool {
        self.heap.contains(key)
    }

    /// Returns the queued element with `key`
    pub fn get(&self, key: &str) -> Option<&E> {
        self.heap.get(key)
    }

    /// Returns the element that `extract_min` would return
    pub fn peek(&self) -> Option<&E> {
        self.heap.peek()
    }

    /// Inserts an element
    ///
    /// # Errors
    /// [`QueueError::CapacityExceeded`] when a bounded queue is full,
    /// [`QueueError::DuplicateKey`] when the key is already queued.
    pub fn insert(&mut self, element: E) -> Result<(), QueueError> {
        self.heap.insert(element)?;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element with the smallest priority
    ///
    /// # Errors
    /// [`QueueError::EmptyQueue`] if the queue is empty.
    pub fn extract_min(&mut self) -> Result<E, QueueError> {
        let min = self.heap.extract_min()?;
        self.len -= 1;
        Ok(min)
    }

    /// Restores queue order after `element`'s priority was changed in place
    ///
    /// # Errors
    /// [`QueueError::KeyNotFound`] if the element is not queued.
    pub fn rebalance(&mut self, element: &E) -> Result<(), QueueError> {
        self.heap.notify_priority_changed(element.key())
    }

    /// Applies `update` to the element with `key`, then rebalances it
    ///
    /// `update` receives a shared reference, so it can only change
    /// priorities stored behind interior mutability (as [`Node`](crate::Node)
    /// does).
    ///
    /// # Errors
    /// [`QueueError::KeyNotFound`] if no element with `key` is queued;
    /// `update` is not called in that case.
    pub fn update<F: FnOnce(&E)>(&mut self, key: &str, update: F) -> Result<(), QueueError> {
        let element = self.heap.get(key).ok_or(QueueError::KeyNotFound)?;
        update(element);
        self.heap.notify_priority_changed(key)
    }

    /// Removes and returns `element` (by key) wherever it sits in the queue
    ///
    /// # Errors
    /// [`QueueError::KeyNotFound`] if the element is not queued.
    pub fn remove(&mut self, element: &E) -> Result<E, QueueError> {
        self.remove_key(element.key())
    }

    /// Removes and returns the element with `key`
    ///
    /// # Errors
    /// [`QueueError::KeyNotFound`] if no element with `key` is queued.
    pub fn remove_key(&mut self, key: &str) -> Result<E, QueueError> {
        let removed = self.heap.remove(key)?;
        self.len -= 1;
        Ok(removed)
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.heap.clear();
        self.len = 0;
    }

    /// Inserts every element of `iter`, stopping at the first error
    ///
    /// Elements inserted before the failing one stay queued.
    pub fn try_extend<I: IntoIterator<Item = E>>(&mut self, iter: I) -> Result<(), QueueError> {
        iter.into_iter().try_for_each(|element| self.insert(element))
    }

    /// Iterates over the queued elements in no particular order
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.heap.iter()
    }

    /// Extracts elements in priority order until the queue is empty
    ///
    /// Dropping the iterator early leaves the remaining elements queued.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, E, H> {
        DrainSorted { queue: self }
    }

    /// The underlying indexed heap
    pub fn heap(&self) -> &BinaryHeap<E, H> {
        &self.heap
    }
}

/// Iterator returned by [`MinPriorityQueue::drain_sorted`]
#[derive(Debug)]
pub struct DrainSorted<'a, E, H = FxKeyHasher> {
    queue: &'a mut MinPriorityQueue<E, H>,
}

impl<E: Element, H: KeyHasher> Iterator for DrainSorted<'_, E, H> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        self.queue.extract_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<E: Element, H: KeyHasher> ExactSizeIterator for DrainSorted<'_, E, H> {}
