//! Heuristic estimates for informed search.

use std::collections::BTreeMap;

use deliberate_kernel::graph::Cost;

/// Trait for remaining-cost estimates.
///
/// `estimate` must be total. A* returns optimal paths only when the estimate
/// never exceeds the true remaining cost (admissible); this is not checked.
/// Greedy best-first has no such requirement.
pub trait Heuristic<N> {
    fn estimate(&self, node: &N) -> Cost;
}

impl<N, F> Heuristic<N> for F
where
    F: Fn(&N) -> Cost,
{
    fn estimate(&self, node: &N) -> Cost {
        self(node)
    }
}

/// Estimates 0 everywhere. A* with this heuristic expands like UCS.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<N> Heuristic<N> for ZeroHeuristic {
    fn estimate(&self, _node: &N) -> Cost {
        0
    }
}

/// Lookup-table heuristic.
///
/// Nodes missing from the table estimate 0, which keeps the table admissible
/// when it is admissible on the nodes it lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHeuristic<N: Ord> {
    table: BTreeMap<N, Cost>,
}

impl<N: Ord> TableHeuristic<N> {
    #[must_use]
    pub fn new(table: BTreeMap<N, Cost>) -> Self {
        Self { table }
    }
}

impl<N: Ord> FromIterator<(N, Cost)> for TableHeuristic<N> {
    fn from_iter<I: IntoIterator<Item = (N, Cost)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<N: Ord> Heuristic<N> for TableHeuristic<N> {
    fn estimate(&self, node: &N) -> Cost {
        self.table.get(node).copied().unwrap_or(0)
    }
}
