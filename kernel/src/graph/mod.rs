//! Graph module: the weighted adjacency model consumed by path search.
//!
//! Edge costs are [`Cost`] (`u64`), so the non-negative-weight precondition
//! of cost-ordered search holds by construction.

pub mod adjacency;

pub use adjacency::{AdjacencyGraph, Cost, Edge, GraphError, GraphSource};
