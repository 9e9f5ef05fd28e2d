//! Shared problem builders for deliberate benchmark suites.

use deliberate_kernel::graph::{AdjacencyGraph, Cost};
use deliberate_search::csp::ColoringProblem;

/// Grid coordinate `(row, col)`.
pub type GridNode = (u32, u32);

/// Four-connected `side x side` grid with unit edges in both directions,
/// plus a cost-3 shortcut along the main diagonal that never pays off.
///
/// # Panics
///
/// Panics if the edge list repeats a pair, which cannot happen here.
#[must_use]
pub fn grid_graph(side: u32) -> AdjacencyGraph<GridNode> {
    let mut graph = AdjacencyGraph::new();
    for row in 0..side {
        for col in 0..side {
            if col + 1 < side {
                graph
                    .add_undirected_edge((row, col), (row, col + 1), 1)
                    .expect("grid edges are unique");
            }
            if row + 1 < side {
                graph
                    .add_undirected_edge((row, col), (row + 1, col), 1)
                    .expect("grid edges are unique");
            }
            if row + 1 < side && col + 1 < side {
                graph
                    .add_edge((row, col), (row + 1, col + 1), 3)
                    .expect("grid edges are unique");
            }
        }
    }
    graph
}

/// Manhattan distance to `goal`; admissible on [`grid_graph`].
#[must_use]
pub fn manhattan(goal: GridNode) -> impl Fn(&GridNode) -> Cost {
    move |&(row, col)| Cost::from(row.abs_diff(goal.0) + col.abs_diff(goal.1))
}

/// Even ring of `n` variables; 2-colorable, so three colors give the solver
/// slack and two force alternation.
#[must_use]
pub fn ring_coloring(n: usize, colors: usize) -> ColoringProblem<usize, usize> {
    let mut problem = ColoringProblem::new((0..n).collect(), (0..colors).collect());
    for i in 0..n {
        problem.add_border(i, (i + 1) % n);
    }
    problem
}
