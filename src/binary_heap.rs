//! Indexed binary min-heap
//!
//! An array-backed binary min-heap paired with a [`PositionIndex`] that
//! records, for every queued key, the slot the element currently occupies.
//! Every swap updates both structures, so an element whose priority changed
//! (or that must be removed) is found without scanning the array.
//!
//! # Time Complexity
//!
//! | Operation                 | Complexity        |
//! |---------------------------|-------------------|
//! | `insert`                  | O(log n)          |
//! | `extract_min`             | O(log n)          |
//! | `peek`                    | O(1)              |
//! | `contains` / `get`        | O(1) expected     |
//! | `notify_priority_changed` | O(log n)          |
//! | `remove`                  | O(log n)          |
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::{BinaryHeap, Node};
//! use std::rc::Rc;
//!
//! let mut heap = BinaryHeap::new();
//! let b = Rc::new(Node::new("b", 20));
//! heap.insert(Rc::new(Node::new("a", 10))).unwrap();
//! heap.insert(Rc::clone(&b)).unwrap();
//!
//! b.set_priority(1);
//! heap.notify_priority_changed("b").unwrap();
//! assert_eq!(heap.peek().map(|n| n.id()), Some("b"));
//! ```

use crate::config::{Capacity, QueueBuilder};
use crate::position_index::{FxKeyHasher, PositionIndex};
use crate::traits::{Element, KeyHasher, QueueError};

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left(i: usize) -> usize {
    2 * i + 1
}

fn right(i: usize) -> usize {
    2 * i + 2
}

/// Binary min-heap with a key to slot index
#[derive(Debug, Clone)]
pub struct BinaryHeap<E, H = FxKeyHasher> {
    /// Heap-ordered elements; `data.len()` is the logical size
    data: Vec<E>,
    index: PositionIndex<H>,
    capacity: Capacity,
}

impl<E: Element> BinaryHeap<E, FxKeyHasher> {
    /// Creates an empty heap with the default bound and index size
    pub fn new() -> Self {
        QueueBuilder::new().build_heap()
    }

    /// Creates an empty heap bounded to `capacity` elements
    ///
    /// The position index is sized to keep `capacity` keys under its load
    /// threshold.
    pub fn with_capacity(capacity: usize) -> Self {
        QueueBuilder::new()
            .heap_capacity(capacity)
            .index_capacity(capacity.saturating_mul(2))
            .build_heap()
    }
}

impl<E: Element> Default for BinaryHeap<E, FxKeyHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element, H: KeyHasher> BinaryHeap<E, H> {
    pub(crate) fn from_parts(capacity: Capacity, index: PositionIndex<H>) -> Self {
        BinaryHeap {
            data: Vec::new(),
            index,
            capacity,
        }
    }

    /// Returns true if the heap holds no element
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of queued elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Growth policy of the backing array
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Read access to the position index
    pub fn index(&self) -> &PositionIndex<H> {
        &self.index
    }

    /// Returns true if an element with `key` is queued
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains(key)
    }

    /// Returns the queued element with `key`
    pub fn get(&self, key: &str) -> Option<&E> {
        self.index.get(key).ok().map(|slot| &self.data[slot])
    }

    /// Returns the element with the smallest priority
    pub fn peek(&self) -> Option<&E> {
        self.data.first()
    }

    /// Iterates over the elements in heap-array order
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.data.iter()
    }

    /// Inserts an element
    ///
    /// # Errors
    /// - [`QueueError::CapacityExceeded`] if the heap is bounded and full
    /// - [`QueueError::DuplicateKey`] if an element with the same key is queued
    ///
    /// The heap is unchanged on error.
    pub fn insert(&mut self, element: E) -> Result<(), QueueError> {
        if self.capacity.is_full(self.data.len()) {
            if let Capacity::Bounded(capacity) = self.capacity {
                return Err(QueueError::CapacityExceeded { capacity });
            }
        }
        if self.index.contains(element.key()) {
            return Err(QueueError::DuplicateKey);
        }

        let slot = self.data.len();
        self.index.set(element.key(), slot);
        self.data.push(element);
        self.sift_up(slot);
        Ok(())
    }

    /// Removes and returns the element with the smallest priority
    ///
    /// # Errors
    /// [`QueueError::EmptyQueue`] if the heap is empty.
    pub fn extract_min(&mut self) -> Result<E, QueueError> {
        if self.data.is_empty() {
            return Err(QueueError::EmptyQueue);
        }

        // the last element takes over the root slot
        let min = self.data.swap_remove(0);
        self.index.remove(min.key());

        if let Some(moved) = self.data.first() {
            self.index.set(moved.key(), 0);
            self.sift_down(0);
        }

        Ok(min)
    }

    /// Restores heap order after the priority of `key` changed
    ///
    /// The element moves up if it is now smaller than its parent and down
    /// otherwise; a single priority change can only break one direction.
    ///
    /// # Errors
    /// [`QueueError::KeyNotFound`] if no element with `key` is queued.
    pub fn notify_priority_changed(&mut self, key: &str) -> Result<(), QueueError> {
        let slot = self.index.get(key)?;
        self.reposition(slot);
        Ok(())
    }

    /// Removes and returns the element with `key`
    ///
    /// # Errors
    /// [`QueueError::KeyNotFound`] if no element with `key` is queued.
    pub fn remove(&mut self, key: &str) -> Result<E, QueueError> {
        let slot = self.index.get(key)?;
        let removed = self.data.swap_remove(slot);
        self.index.remove(removed.key());

        if let Some(moved) = self.data.get(slot) {
            self.index.set(moved.key(), slot);
            self.reposition(slot);
        }

        Ok(removed)
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.data.clear();
        self.index.clear();
    }

    /// Checks heap order and index consistency
    ///
    /// Returns false if some element is smaller than its parent, if some
    /// element's key is not indexed at its own slot, or if the index holds
    /// keys that are not in the heap. O(n).
    pub fn verify_invariants(&self) -> bool {
        let ordered = (1..self.data.len())
            .all(|i| self.data[i].priority() >= self.data[parent(i)].priority());
        let indexed = self
            .data
            .iter()
            .enumerate()
            .all(|(slot, element)| self.index.get(element.key()) == Ok(slot));
        ordered && indexed && self.index.len() == self.data.len()
    }

    fn reposition(&mut self, slot: usize) {
        if slot > 0 && self.data[slot].priority() < self.data[parent(slot)].priority() {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
    }

    /// Move element at slot up to maintain heap property
    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = parent(slot);
            if self.data[slot].priority() < self.data[parent].priority() {
                self.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at slot down to maintain heap property
    fn sift_down(&mut self, mut slot: usize) {
        let len = self.data.len();
        loop {
            let left = left(slot);
            let right = right(slot);
            let mut smallest = slot;

            if left < len && self.data[left].priority() < self.data[smallest].priority() {
                smallest = left;
            }
            if right < len && self.data[right].priority() < self.data[smallest].priority() {
                smallest = right;
            }

            if smallest != slot {
                self.swap(slot, smallest);
                slot = smallest;
            } else {
                break;
            }
        }
    }

    /// Swaps two slots in the array and in the index
    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.index.set(self.data[a].key(), a);
        self.index.set(self.data[b].key(), b);
    }
}
