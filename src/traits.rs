//! Common traits and the error type shared by the queue components
//!
//! - [`Element`]: what the queue needs from a queued value (a stable key and a
//!   readable priority)
//! - [`KeyHasher`]: how the position index turns a key into a table cell
//! - [`QueueError`]: the failures reported by queue operations

use std::fmt;
use std::rc::Rc;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The heap's backing array is full
    CapacityExceeded {
        /// The fixed bound that was hit
        capacity: usize,
    },
    /// Extraction from an empty queue
    EmptyQueue,
    /// The key is not present in the position index
    KeyNotFound,
    /// An element with the same key is already queued
    DuplicateKey,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::CapacityExceeded { capacity } => {
                write!(f, "heap capacity of {} elements reached", capacity)
            }
            QueueError::EmptyQueue => write!(f, "queue is empty"),
            QueueError::KeyNotFound => write!(f, "key is not present in the queue"),
            QueueError::DuplicateKey => {
                write!(f, "an element with the same key is already queued")
            }
        }
    }
}

impl std::error::Error for QueueError {}

/// A value that can be stored in the indexed queue
///
/// The key identifies the element in the position index and must not change
/// while the element is queued. The priority may change at any time through
/// interior mutability, but the queue only notices when told so through
/// [`MinPriorityQueue::rebalance`](crate::MinPriorityQueue::rebalance).
/// Lower priorities are extracted first.
///
/// # Example
///
/// ```rust
/// use indexed_heap::Element;
///
/// struct Task {
///     name: String,
///     deadline: u32,
/// }
///
/// impl Element for Task {
///     type Priority = u32;
///
///     fn key(&self) -> &str {
///         &self.name
///     }
///
///     fn priority(&self) -> u32 {
///         self.deadline
///     }
/// }
/// ```
pub trait Element {
    /// Ordering type; smaller values are served first
    type Priority: Ord + Copy;

    /// Stable unique identity of the element
    fn key(&self) -> &str;

    /// Current priority, read on demand
    fn priority(&self) -> Self::Priority;
}

impl<T: Element + ?Sized> Element for Rc<T> {
    type Priority = T::Priority;

    fn key(&self) -> &str {
        (**self).key()
    }

    fn priority(&self) -> Self::Priority {
        (**self).priority()
    }
}

impl<T: Element + ?Sized> Element for Box<T> {
    type Priority = T::Priority;

    fn key(&self) -> &str {
        (**self).key()
    }

    fn priority(&self) -> Self::Priority {
        (**self).priority()
    }
}

impl<T: Element + ?Sized> Element for &T {
    type Priority = T::Priority;

    fn key(&self) -> &str {
        (**self).key()
    }

    fn priority(&self) -> Self::Priority {
        (**self).priority()
    }
}

/// Hash function used by [`PositionIndex`](crate::position_index::PositionIndex)
///
/// The index scales the returned value and reduces it modulo its capacity, so
/// implementations only need to be deterministic for a given key.
pub trait KeyHasher {
    /// Hashes a key to an unscaled table position
    fn hash_key(&self, key: &str) -> u64;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, i32);

    impl Element for Fixed {
        type Priority = i32;

        fn key(&self) -> &str {
            self.0
        }

        fn priority(&self) -> i32 {
            self.1
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            QueueError::CapacityExceeded { capacity: 4 }.to_string(),
            "heap capacity of 4 elements reached"
        );
        assert_eq!(QueueError::EmptyQueue.to_string(), "queue is empty");
        assert_eq!(
            QueueError::KeyNotFound.to_string(),
            "key is not present in the queue"
        );
    }

    #[test]
    fn test_smart_pointer_elements_forward() {
        let rc = Rc::new(Fixed("a", 7));
        assert_eq!(rc.key(), "a");
        assert_eq!(rc.priority(), 7);

        let boxed = Box::new(Fixed("b", -1));
        assert_eq!(boxed.key(), "b");
        assert_eq!(boxed.priority(), -1);

        let plain = Fixed("c", 3);
        let borrowed = &plain;
        assert_eq!(Element::key(&borrowed), "c");
        assert_eq!(Element::priority(&borrowed), 3);
    }
}
