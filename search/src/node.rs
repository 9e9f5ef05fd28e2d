//! Per-node bookkeeping for frontier-ordered search.

use deliberate_kernel::graph::Cost;

/// Best-known cumulative cost and parent pointer for a discovered node.
///
/// `parent` is the identifier of the predecessor on the best known path
/// (`None` only for the start node). Records are created on first discovery,
/// overwritten when a strictly cheaper path arrives, and never removed
/// during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRecord<N> {
    pub cost: Cost,
    pub parent: Option<N>,
}

/// The frontier ordering key: `(priority, creation_order)`.
///
/// Lower priority first; equal priorities pop in insertion order, which
/// makes every search deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub priority: Cost,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
