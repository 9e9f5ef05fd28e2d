//! Best-first frontier with lazy deletion and a finalized set.
//!
//! Uses `BTreeSet` for the finalized set (not `HashSet`) so node identifiers
//! only need `Ord`, matching the rest of the search layer.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use deliberate_kernel::graph::Cost;

use crate::node::FrontierKey;

/// A popped frontier entry.
///
/// `cost` is the cumulative cost the node had when it was pushed. If the
/// node's record has since improved, the entry is stale and the caller
/// skips it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry<N> {
    pub key: FrontierKey,
    pub cost: Cost,
    pub node: N,
}

/// Heap slot. Ordered by key only; `BinaryHeap` is a max-heap, so the key is
/// wrapped in `Reverse` to pop the lowest key first.
#[derive(Debug)]
struct HeapSlot<N> {
    key: Reverse<FrontierKey>,
    cost: Cost,
    node: N,
}

impl<N> PartialEq for HeapSlot<N> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<N> Eq for HeapSlot<N> {}

impl<N> PartialOrd for HeapSlot<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for HeapSlot<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Best-first frontier manager.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the lowest `(priority, creation_order)`
/// - A `BTreeSet<N>` of finalized (expanded) nodes, used by greedy search
/// - A monotonic creation counter and a high-water mark
pub struct BestFirstFrontier<N> {
    heap: BinaryHeap<HeapSlot<N>>,
    finalized: BTreeSet<N>,
    next_creation_order: u64,
    high_water: u64,
}

impl<N: Ord> BestFirstFrontier<N> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            finalized: BTreeSet::new(),
            next_creation_order: 0,
            high_water: 0,
        }
    }

    /// Push `node` at `priority`, remembering the cost it was discovered at.
    ///
    /// Duplicates are allowed; stale copies are filtered by the caller on pop.
    pub fn push(&mut self, priority: Cost, cost: Cost, node: N) {
        let key = FrontierKey {
            priority,
            creation_order: self.next_creation_order,
        };
        self.next_creation_order += 1;
        self.heap.push(HeapSlot {
            key: Reverse(key),
            cost,
            node,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the lowest-key entry.
    #[must_use]
    pub fn pop(&mut self) -> Option<FrontierEntry<N>> {
        self.heap.pop().map(|slot| FrontierEntry {
            key: slot.key.0,
            cost: slot.cost,
            node: slot.node,
        })
    }

    /// Mark `node` as expanded. Returns `false` if it already was.
    pub fn finalize(&mut self, node: N) -> bool {
        self.finalized.insert(node)
    }

    #[must_use]
    pub fn is_finalized(&self, node: &N) -> bool {
        self.finalized.contains(node)
    }

    /// Total pushes so far.
    #[must_use]
    pub fn pushes(&self) -> u64 {
        self.next_creation_order
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl<N: Ord> Default for BestFirstFrontier<N> {
    fn default() -> Self {
        Self::new()
    }
}
