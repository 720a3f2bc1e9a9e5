//! Construction options for the indexed heap and queue
//!
//! The heap's backing array has a fixed bound by default and reports
//! [`QueueError::CapacityExceeded`](crate::QueueError::CapacityExceeded) when
//! it is reached, while the position index doubles on its own. Use
//! [`QueueBuilder::growable`] to lift the heap bound.
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::{Node, QueueBuilder};
//! use std::rc::Rc;
//!
//! let mut queue = QueueBuilder::new()
//!     .heap_capacity(2)
//!     .index_capacity(16)
//!     .build::<Rc<Node>>();
//!
//! queue.insert(Rc::new(Node::new("a", 1))).unwrap();
//! queue.insert(Rc::new(Node::new("b", 2))).unwrap();
//! assert!(queue.insert(Rc::new(Node::new("c", 3))).is_err());
//! ```

use crate::binary_heap::BinaryHeap;
use crate::position_index::{FxKeyHasher, PositionIndex};
use crate::priority_queue::MinPriorityQueue;
use crate::traits::{Element, KeyHasher};

/// Default bound on the number of queued elements
pub const DEFAULT_HEAP_CAPACITY: usize = 200_000;

/// Default number of cells in a fresh position index
pub const DEFAULT_INDEX_CAPACITY: usize = 20_000;

/// Growth policy of the heap's backing array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    /// At most this many elements; inserting past it is an error
    Bounded(usize),
    /// Grows with amortized doubling; inserts never hit a bound
    Growable,
}

impl Capacity {
    /// Returns true if `len` elements leave no room for another insert
    pub fn is_full(&self, len: usize) -> bool {
        match self {
            Capacity::Bounded(max) => len >= *max,
            Capacity::Growable => false,
        }
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Capacity::Bounded(DEFAULT_HEAP_CAPACITY)
    }
}

/// Builder for [`BinaryHeap`] and [`MinPriorityQueue`]
#[derive(Debug, Clone)]
pub struct QueueBuilder<H = FxKeyHasher> {
    heap_capacity: Capacity,
    index_capacity: usize,
    hasher: H,
}

impl QueueBuilder<FxKeyHasher> {
    /// Starts from the defaults: bounded heap of [`DEFAULT_HEAP_CAPACITY`],
    /// index of [`DEFAULT_INDEX_CAPACITY`] cells, [`FxKeyHasher`]
    pub fn new() -> Self {
        QueueBuilder {
            heap_capacity: Capacity::default(),
            index_capacity: DEFAULT_INDEX_CAPACITY,
            hasher: FxKeyHasher,
        }
    }
}

impl Default for QueueBuilder<FxKeyHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: KeyHasher> QueueBuilder<H> {
    /// Bounds the heap to `capacity` elements
    pub fn heap_capacity(mut self, capacity: usize) -> Self {
        self.heap_capacity = Capacity::Bounded(capacity);
        self
    }

    /// Lets the heap grow without bound
    pub fn growable(mut self) -> Self {
        self.heap_capacity = Capacity::Growable;
        self
    }

    /// Initial number of position index cells
    pub fn index_capacity(mut self, cells: usize) -> Self {
        self.index_capacity = cells;
        self
    }

    /// Replaces the position index hasher
    pub fn hasher<H2: KeyHasher>(self, hasher: H2) -> QueueBuilder<H2> {
        QueueBuilder {
            heap_capacity: self.heap_capacity,
            index_capacity: self.index_capacity,
            hasher,
        }
    }

    /// Builds a bare indexed heap
    pub fn build_heap<E: Element>(self) -> BinaryHeap<E, H> {
        BinaryHeap::from_parts(
            self.heap_capacity,
            PositionIndex::with_capacity_and_hasher(self.index_capacity, self.hasher),
        )
    }

    /// Builds a priority queue
    pub fn build<E: Element>(self) -> MinPriorityQueue<E, H> {
        MinPriorityQueue::from_heap(self.build_heap())
    }
}
