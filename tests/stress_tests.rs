//! Stress tests that push the queue and its index through large workloads
//!
//! These tests perform large numbers of operations in various patterns to
//! catch edge cases and verify correctness under load, including many
//! position index resizes.

use indexed_heap::position_index::CharSumHasher;
use indexed_heap::{Capacity, MinPriorityQueue, Node, QueueBuilder};
use std::rc::Rc;

fn node(id: String, priority: i64) -> Rc<Node> {
    Rc::new(Node::new(id, priority))
}

/// Simple LCG so the workloads are deterministic
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

/// Test massive numbers of inserts and extractions
#[test]
fn test_massive_operations() {
    let mut queue = MinPriorityQueue::new();

    // Descending priorities force every insert to sift to the root
    for i in 0..20_000 {
        queue.insert(node(format!("m-{}", i), 20_000 - i)).unwrap();
    }
    assert_eq!(queue.len(), 20_000);
    // crossed the 60% load factor of the default 20_000-cell index
    assert!(queue.heap().index().capacity() >= 40_000);
    assert!(queue.heap().verify_invariants());

    for expected in 1..=20_000 {
        assert_eq!(queue.extract_min().unwrap().priority(), expected);
    }
    assert!(queue.is_empty());
}

/// Test many decrease-key operations
#[test]
fn test_many_decrease_keys() {
    let mut queue = MinPriorityQueue::new();
    let nodes: Vec<_> = (0..2_000)
        .map(|i| node(format!("dk-{}", i), 100_000 + i))
        .collect();
    for n in &nodes {
        queue.insert(Rc::clone(n)).unwrap();
    }

    // Repeatedly lower every node, reversing the insertion order
    for round in 0..5 {
        for (i, n) in nodes.iter().enumerate() {
            n.set_priority(n.priority() - 10 * (i as i64 + 1) - round);
            queue.rebalance(n).unwrap();
        }
    }
    assert!(queue.heap().verify_invariants());

    let popped: Vec<i64> = queue.drain_sorted().map(|n| n.priority()).collect();
    assert_eq!(popped.len(), 2_000);
    assert!(popped.windows(2).all(|w| w[0] <= w[1]));
}

/// Interleave inserts, extractions, priority changes and removals
#[test]
fn test_interleaved_workload() {
    let mut rng = Lcg(7);
    let mut queue: MinPriorityQueue<Rc<Node>> = QueueBuilder::new().index_capacity(16).build();
    let mut live: Vec<Rc<Node>> = Vec::new();
    let mut next_id = 0;

    for step in 0..20_000 {
        match rng.next() % 10 {
            0..=3 => {
                let n = node(format!("w-{}", next_id), (rng.next() % 1_000) as i64);
                next_id += 1;
                queue.insert(Rc::clone(&n)).unwrap();
                live.push(n);
            }
            4..=5 => {
                if let Ok(min) = queue.extract_min() {
                    let pos = live.iter().position(|n| Rc::ptr_eq(n, &min)).unwrap();
                    let expected_min = live.iter().map(|n| n.priority()).min().unwrap();
                    assert_eq!(min.priority(), expected_min);
                    live.swap_remove(pos);
                }
            }
            6..=8 => {
                if !live.is_empty() {
                    let n = &live[(rng.next() as usize) % live.len()];
                    n.set_priority((rng.next() % 1_000) as i64 - 500);
                    queue.rebalance(n).unwrap();
                }
            }
            _ => {
                if !live.is_empty() {
                    let n = live.swap_remove((rng.next() as usize) % live.len());
                    queue.remove(&n).unwrap();
                }
            }
        }

        if step % 997 == 0 {
            assert!(queue.heap().verify_invariants(), "step {}", step);
        }
        assert_eq!(queue.len(), live.len());
    }
    assert!(queue.heap().verify_invariants());
}

/// Reusing a small set of keys keeps reviving dead index entries
#[test]
fn test_key_churn() {
    let mut queue: MinPriorityQueue<Rc<Node>> = QueueBuilder::new().index_capacity(8).build();

    for round in 0..2_000i64 {
        let id = format!("k-{}", round % 4);
        if queue.contains_key(&id) {
            queue.remove_key(&id).unwrap();
        } else {
            queue.insert(node(id, round)).unwrap();
        }
    }
    // four keys never need more than a handful of cells
    assert!(queue.heap().index().capacity() <= 16);
    assert!(queue.heap().verify_invariants());
}

/// Streaming many distinct keys through a near-empty queue keeps the index small
#[test]
fn test_distinct_key_churn_keeps_index_bounded() {
    let mut queue: MinPriorityQueue<Rc<Node>> = QueueBuilder::new().index_capacity(8).build();
    queue.insert(node("resident".into(), i64::MAX)).unwrap();

    for i in 0..200_000 {
        queue.insert(node(format!("job-{}", i), i)).unwrap();
        assert_eq!(queue.extract_min().unwrap().priority(), i);
    }
    assert_eq!(queue.len(), 1);
    assert!(queue.heap().index().capacity() <= 16);
    assert!(queue.heap().index().load_factor() <= 0.6);
    assert!(queue.heap().verify_invariants());
}

/// Fill a bounded queue to the brim, drain it, fill it again
#[test]
fn test_bounded_fill_drain_cycles() {
    let mut queue = MinPriorityQueue::with_capacity(500);
    assert_eq!(queue.heap().capacity(), Capacity::Bounded(500));

    for cycle in 0..4 {
        for i in 0..500 {
            queue
                .insert(node(format!("c{}-{}", cycle, i), (i * 31) % 500))
                .unwrap();
        }
        assert!(queue.insert(node("overflow".into(), 0)).is_err());
        assert_eq!(queue.drain_sorted().count(), 500);
    }
}

#[test]
fn test_massive_operations_growable() {
    let mut queue: MinPriorityQueue<Rc<Node>> = QueueBuilder::new()
        .index_capacity(64)
        .growable()
        .build();

    for i in 0..50_000 {
        queue.insert(node(format!("g-{}", i), (i * 7_919) % 50_000)).unwrap();
    }
    assert!(queue.heap().verify_invariants());
    for expected in 0..50_000 {
        assert_eq!(queue.extract_min().unwrap().priority(), expected);
    }
}

/// Graph-style ids pile into a few dozen char-sum cells; the queue stays correct
#[test]
fn test_clustered_char_sum_keys() {
    let mut queue: MinPriorityQueue<Rc<Node>, CharSumHasher> =
        QueueBuilder::new().hasher(CharSumHasher).index_capacity(32).build();

    for i in 0..1_000 {
        queue.insert(node(format!("v-{}", i), (i * 389) % 1_000)).unwrap();
    }
    assert!(queue.heap().verify_invariants());
    for expected in 0..1_000 {
        assert_eq!(queue.extract_min().unwrap().priority(), expected);
    }
}
