//! Weighted route graphs for the frontier-ordered searches.
//!
//! [`UCS_ROUTES`] is a small DAG where the cheapest route is not the one with
//! the fewest hops. [`HEURISTIC_ROUTES`] lists both directions of each road
//! and ships a heuristic table. The table overestimates at `A` (7 against a
//! true distance of 5), so it is not admissible there; A* still finds the
//! cheapest route on this graph.

use deliberate_kernel::graph::{AdjacencyGraph, Cost, GraphError};
use deliberate_search::heuristic::TableHeuristic;

use crate::contract::WorldV1;

/// A route-finding world: directed edges, endpoints and a heuristic table.
#[derive(Debug, Clone, Copy)]
pub struct RouteWorld {
    pub id: &'static str,
    pub edges: &'static [(&'static str, &'static str, Cost)],
    /// Heuristic estimates; nodes not listed estimate 0.
    pub heuristic: &'static [(&'static str, Cost)],
    pub start: &'static str,
    pub goal: &'static str,
}

pub const UCS_ROUTES: RouteWorld = RouteWorld {
    id: "ucs_routes",
    edges: &[
        ("A", "B", 1),
        ("A", "C", 4),
        ("B", "D", 1),
        ("B", "E", 3),
        ("C", "F", 5),
        ("D", "G", 2),
        ("E", "G", 1),
        ("F", "G", 2),
    ],
    heuristic: &[],
    start: "A",
    goal: "G",
};

pub const HEURISTIC_ROUTES: RouteWorld = RouteWorld {
    id: "heuristic_routes",
    edges: &[
        ("A", "B", 1),
        ("A", "C", 4),
        ("B", "A", 1),
        ("B", "D", 2),
        ("B", "E", 5),
        ("C", "A", 4),
        ("C", "F", 1),
        ("D", "B", 2),
        ("E", "B", 5),
        ("E", "F", 3),
        ("F", "C", 1),
        ("F", "E", 3),
    ],
    heuristic: &[("A", 7), ("B", 6), ("C", 2), ("D", 1), ("E", 2), ("F", 0)],
    start: "A",
    goal: "F",
};

impl RouteWorld {
    /// Build the adjacency graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateEdge`] if the edge table repeats a pair.
    pub fn graph(&self) -> Result<AdjacencyGraph<&'static str>, GraphError> {
        AdjacencyGraph::from_edges(self.edges.iter().copied())
    }

    #[must_use]
    pub fn heuristic(&self) -> TableHeuristic<&'static str> {
        self.heuristic.iter().copied().collect()
    }
}

impl WorldV1 for RouteWorld {
    fn world_id(&self) -> &str {
        self.id
    }

    fn fixture(&self) -> serde_json::Value {
        let edges: Vec<_> = self
            .edges
            .iter()
            .map(|(from, to, cost)| serde_json::json!({"cost": cost, "from": from, "to": to}))
            .collect();
        let heuristic: serde_json::Map<_, _> = self
            .heuristic
            .iter()
            .map(|(node, h)| ((*node).to_string(), serde_json::json!(h)))
            .collect();
        serde_json::json!({
            "edges": edges,
            "goal": self.goal,
            "heuristic": heuristic,
            "start": self.start,
            "world_id": self.id,
        })
    }
}
