//! `AdjacencyGraph`: ordered adjacency lists keyed by node identifier.
//!
//! Uses `BTreeMap` (not `HashMap`) so node iteration order is deterministic
//! at serialization boundaries.

use std::collections::BTreeMap;
use std::fmt::Debug;

/// Non-negative edge weight and cumulative path cost.
pub type Cost = u64;

/// A directed, weighted edge to `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<N> {
    pub to: N,
    pub cost: Cost,
}

/// Read-only adjacency view used by the frontier-ordered searches.
///
/// # Contract
///
/// - `edges` returns outgoing edges in a stable order; a node without an
///   adjacency entry has no outgoing edges (empty slice, not an error).
/// - The graph must not change while a search borrows it.
pub trait GraphSource<N> {
    /// Outgoing edges of `node`, in insertion order.
    fn edges(&self, node: &N) -> &[Edge<N>];
}

/// Errors raised while building a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge `from -> to` was added twice.
    DuplicateEdge { detail: String },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEdge { detail } => write!(f, "duplicate edge: {detail}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Weighted directed graph stored as adjacency lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph<N: Ord> {
    adjacency: BTreeMap<N, Vec<Edge<N>>>,
}

impl<N: Ord + Clone + Debug> AdjacencyGraph<N> {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }

    /// Build a directed graph from `(from, to, cost)` triples.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateEdge`] if a `(from, to)` pair repeats.
    pub fn from_edges<I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (N, N, Cost)>,
    {
        let mut graph = Self::new();
        for (from, to, cost) in edges {
            graph.add_edge(from, to, cost)?;
        }
        Ok(graph)
    }

    /// Register `node` with no outgoing edges (no-op if present).
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Add a directed edge. Both endpoints become nodes of the graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateEdge`] if `from -> to` already exists.
    pub fn add_edge(&mut self, from: N, to: N, cost: Cost) -> Result<(), GraphError> {
        if self.edge_cost(&from, &to).is_some() {
            return Err(GraphError::DuplicateEdge {
                detail: format!("{from:?} -> {to:?}"),
            });
        }
        self.add_node(to.clone());
        self.adjacency.entry(from).or_default().push(Edge { to, cost });
        Ok(())
    }

    /// Add `a -> b` and `b -> a` with the same cost.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateEdge`] if either direction exists.
    pub fn add_undirected_edge(&mut self, a: N, b: N, cost: Cost) -> Result<(), GraphError> {
        self.add_edge(a.clone(), b.clone(), cost)?;
        self.add_edge(b, a, cost)
    }

    /// Cost of the direct edge `from -> to`, if any.
    #[must_use]
    pub fn edge_cost(&self, from: &N, to: &N) -> Option<Cost> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|e| &e.to == to)
            .map(|e| e.cost)
    }

    /// Sum of edge costs along `path`.
    ///
    /// Returns `None` if any consecutive pair is not joined by an edge.
    /// A single-node path costs 0.
    #[must_use]
    pub fn path_cost(&self, path: &[N]) -> Option<Cost> {
        path.windows(2).try_fold(0, |acc: Cost, pair| {
            self.edge_cost(&pair[0], &pair[1])
                .map(|c| acc.saturating_add(c))
        })
    }

    /// Whether `node` is known to the graph.
    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// All nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl<N: Ord + Clone + Debug> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Ord> GraphSource<N> for AdjacencyGraph<N> {
    fn edges(&self, node: &N) -> &[Edge<N>] {
        match self.adjacency.get(node) {
            Some(edges) => edges,
            None => &[],
        }
    }
}
