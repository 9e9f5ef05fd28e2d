//! Deliberate Search: deterministic search engines over caller-supplied models.
//!
//! This crate depends only on `deliberate_kernel`. It does NOT depend on
//! `deliberate_harness`, which holds the concrete worlds and report bundles.
//!
//! # Crate dependency graph
//!
//! ```text
//! deliberate_kernel  ←  deliberate_search  ←  deliberate_harness
//! (graph, canon/hash)   (engines, policies)    (worlds, runner, bundles)
//! ```
//!
//! # Engines
//!
//! - [`path::search`] -- uniform-cost, A* and greedy best-first over a
//!   [`GraphSource`](deliberate_kernel::graph::GraphSource)
//! - [`local::climb`] -- hill climbing over a [`LocalSearchProblem`]
//! - [`csp::solve`] -- chronological backtracking over a [`ConstraintProblem`]
//! - [`adversarial::best_move`] -- minimax with optional alpha-beta over a
//!   [`GameState`]
//!
//! Every engine is single-threaded and holds no state between calls. Given
//! the same model and policy, results (including stats) are identical.

#![forbid(unsafe_code)]

pub mod adversarial;
pub mod contract;
pub mod csp;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod local;
pub mod node;
pub mod path;
pub mod policy;

pub use contract::{Assignment, ConstraintProblem, GameState, LocalSearchProblem, Successor};
pub use error::SearchError;
pub use heuristic::Heuristic;
