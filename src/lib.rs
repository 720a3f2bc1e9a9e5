//! Indexed Min-Priority Queue for Rust
//!
//! This crate provides a binary min-heap whose elements can change priority
//! while queued. A position index (an open-addressing hash table from element
//! key to heap slot) is kept in lock-step with the heap array, so the heap can
//! find any element in expected O(1) time and restore order in O(log n). This
//! is the decrease-key operation needed by Dijkstra's shortest paths and
//! Prim's minimum spanning tree.
//!
//! # Components
//!
//! - [`PositionIndex`](position_index::PositionIndex): key → slot table with
//!   linear probing, tombstoned removal and doubling at 60% load
//! - [`BinaryHeap`]: array-backed min-heap that updates the index on every move
//! - [`MinPriorityQueue`]: the queue contract (insert, extract-min, rebalance)
//!
//! Priorities are stored on the elements (see [`Element`]). The queue never
//! observes a priority change by itself: mutate the element, then call
//! [`MinPriorityQueue::rebalance`].
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::{MinPriorityQueue, Node};
//! use std::rc::Rc;
//!
//! let mut queue = MinPriorityQueue::new();
//! let nodes: Vec<_> = [10, 20, 30]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, p)| Rc::new(Node::new(format!("v-{}", i), *p)))
//!     .collect();
//! for n in &nodes {
//!     queue.insert(Rc::clone(n)).unwrap();
//! }
//!
//! nodes[2].set_priority(5);
//! queue.rebalance(&nodes[2]).unwrap();
//! assert_eq!(queue.extract_min().unwrap().id(), "v-2");
//! ```

pub mod binary_heap;
pub mod config;
pub mod node;
pub mod position_index;
pub mod priority_queue;
pub mod traits;

// Re-export the main types for convenience
pub use binary_heap::BinaryHeap;
pub use config::{Capacity, QueueBuilder};
pub use node::Node;
pub use priority_queue::MinPriorityQueue;
pub use traits::{Element, KeyHasher, QueueError};
