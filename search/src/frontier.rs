//! Best-first frontier: the open set, ordered by an algorithm-supplied key.
//!
//! The frontier does no deduplication of its own. Callers consult the
//! [`crate::closed::ClosedSet`] before pushing, and discard stale entries
//! (states closed after they were pushed) when popping.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::rc::Rc;

use crate::node::{FrontierKey, SearchNode};

/// A frontier entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest priority first).
struct FrontierEntry<S> {
    key: Reverse<FrontierKey>,
    node: Rc<SearchNode<S>>,
}

impl<S> PartialEq for FrontierEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S> Eq for FrontierEntry<S> {}

impl<S> PartialOrd for FrontierEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for FrontierEntry<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Priority collection of open nodes with FIFO tie-breaking.
pub struct Frontier<S> {
    heap: BinaryHeap<FrontierEntry<S>>,
    next_creation_order: u64,
    high_water: u64,
}

impl<S> Frontier<S> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_creation_order: 0,
            high_water: 0,
        }
    }

    /// Insert `node` with the given priority (lower pops first).
    pub fn push(&mut self, node: Rc<SearchNode<S>>, priority: f64) {
        let key = FrontierKey {
            priority,
            creation_order: self.next_creation_order,
        };
        self.next_creation_order += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the node with the lowest priority, oldest first among equals.
    #[must_use]
    pub fn pop(&mut self) -> Option<Rc<SearchNode<S>>> {
        self.heap.pop().map(|e| e.node)
    }

    /// Priority of the node [`Frontier::pop`] would return next.
    #[must_use]
    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|e| e.key.0.priority)
    }

    /// Drop every open node. The high-water mark is kept.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl<S> Default for Frontier<S> {
    fn default() -> Self {
        Self::new()
    }
}
