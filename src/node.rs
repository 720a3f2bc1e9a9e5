//! Graph-node-like element with a mutable priority
//!
//! [`Node`] keeps its priority in a [`Cell`], so a caller holding an
//! `Rc<Node>` can change the priority of a node that is already queued and
//! then call [`MinPriorityQueue::rebalance`](crate::MinPriorityQueue::rebalance).
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::{MinPriorityQueue, Node};
//! use std::rc::Rc;
//!
//! let mut queue = MinPriorityQueue::new();
//! let far = Rc::new(Node::new("far", 30));
//! queue.insert(Rc::new(Node::new("near", 10))).unwrap();
//! queue.insert(Rc::clone(&far)).unwrap();
//!
//! far.set_priority(5);
//! queue.rebalance(&far).unwrap();
//! assert_eq!(queue.extract_min().unwrap().id(), "far");
//! ```

use crate::traits::Element;
use std::cell::Cell;
use std::fmt;

/// Element with an immutable id and a priority that can change while queued
pub struct Node<P = i64> {
    id: String,
    priority: Cell<P>,
}

impl<P: Copy> Node<P> {
    /// Creates a node
    pub fn new(id: impl Into<String>, priority: P) -> Self {
        Node {
            id: id.into(),
            priority: Cell::new(priority),
        }
    }

    /// The node's identifier, used as its queue key
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current priority
    pub fn priority(&self) -> P {
        self.priority.get()
    }

    /// Replaces the priority, returning the previous one
    ///
    /// A queue holding this node must be told with `rebalance` afterwards.
    pub fn set_priority(&self, priority: P) -> P {
        self.priority.replace(priority)
    }
}

impl<P: Ord + Copy> Element for Node<P> {
    type Priority = P;

    fn key(&self) -> &str {
        &self.id
    }

    fn priority(&self) -> P {
        self.priority.get()
    }
}

impl<P: Copy + fmt::Debug> fmt::Debug for Node<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("priority", &self.priority.get())
            .finish()
    }
}

impl<P: Copy> Clone for Node<P> {
    fn clone(&self) -> Self {
        Node {
            id: self.id.clone(),
            priority: Cell::new(self.priority.get()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_updates_through_shared_reference() {
        let node = Node::new("a-1", 10);
        assert_eq!(node.id(), "a-1");
        assert_eq!(node.key(), "a-1");

        let previous = node.set_priority(3);
        assert_eq!(previous, 10);
        assert_eq!(node.priority(), 3);
        assert_eq!(Element::priority(&node), 3);
    }

    #[test]
    fn test_clone_is_independent() {
        let node = Node::new("b", 1u32);
        let copy = node.clone();
        node.set_priority(9);
        assert_eq!(copy.priority(), 1);
        assert_eq!(format!("{:?}", copy), "Node { id: \"b\", priority: 1 }");
    }
}
