//! Exhaustive reference solvers used as oracles by the property tests.
//!
//! Each one is the obvious enumeration with no pruning, so it is only fit for
//! the tiny instances proptest generates.

use std::collections::BTreeSet;
use std::rc::Rc;

use deliberate_kernel::graph::{Cost, GraphSource};
use deliberate_search::contract::GameState;

/// Cheapest `start` → `goal` cost over all simple paths, `None` if the goal
/// is unreachable. Non-negative weights make simple paths sufficient.
pub fn cheapest_path_cost<N, G>(graph: &G, start: &N, goal: &N) -> Option<Cost>
where
    N: Ord + Clone,
    G: GraphSource<N> + ?Sized,
{
    let mut best = None;
    let mut on_path = BTreeSet::new();
    walk(graph, start, goal, 0, &mut on_path, &mut best);
    best
}

fn walk<N, G>(
    graph: &G,
    node: &N,
    goal: &N,
    cost: Cost,
    on_path: &mut BTreeSet<N>,
    best: &mut Option<Cost>,
) where
    N: Ord + Clone,
    G: GraphSource<N> + ?Sized,
{
    if node == goal {
        *best = Some(best.map_or(cost, |b| b.min(cost)));
        return;
    }
    on_path.insert(node.clone());
    for edge in graph.edges(node) {
        if !on_path.contains(&edge.to) {
            walk(graph, &edge.to, goal, cost + edge.cost, on_path, best);
        }
    }
    on_path.remove(node);
}

/// Whether `vars` vertices joined by `edges` admit a proper coloring with
/// `colors` colors, by trying all `colors^vars` assignments.
#[must_use]
pub fn colorable(vars: usize, edges: &[(usize, usize)], colors: usize) -> bool {
    if vars == 0 {
        return true;
    }
    if colors == 0 {
        return false;
    }
    let mut assignment = vec![0usize; vars];
    loop {
        if edges
            .iter()
            .all(|&(a, b)| a == b || assignment[a] != assignment[b])
        {
            return true;
        }
        // Odometer increment; wrapping past the last digit means done.
        let mut i = 0;
        loop {
            if i == vars {
                return false;
            }
            assignment[i] += 1;
            if assignment[i] < colors {
                break;
            }
            assignment[i] = 0;
            i += 1;
        }
    }
}

/// Plain minimax value of `state` for `player`, no pruning.
pub fn minimax_value<G: GameState>(state: &G, depth: u32, player: G::Player) -> i64 {
    if depth == 0 || state.is_terminal() {
        return state.evaluate(player);
    }
    let values: Vec<i64> = state
        .successors()
        .iter()
        .map(|(_, child)| minimax_value(child, depth - 1, player))
        .collect();
    let best = if state.active_player() == player {
        values.iter().max()
    } else {
        values.iter().min()
    };
    best.copied().unwrap_or_else(|| state.evaluate(player))
}

/// Uniform game tree with arbitrary leaf values; player 0 moves at even
/// plies. Interior nodes evaluate to half their leftmost leaf, so depth-cut
/// searches see varied static values too.
#[derive(Debug, Clone)]
pub struct ArrayTree {
    leaves: Rc<[i64]>,
    branching: usize,
    height: usize,
    path: Vec<usize>,
}

impl ArrayTree {
    /// Root of a tree with `branching^height` leaves taken from `values`
    /// (cycled if too short, `0` if empty).
    #[must_use]
    pub fn new(values: &[i64], branching: usize, height: usize) -> Self {
        let count = branching
            .pow(u32::try_from(height).unwrap_or(u32::MAX))
            .max(1);
        let leaves: Vec<i64> = if values.is_empty() {
            vec![0; count]
        } else {
            values.iter().copied().cycle().take(count).collect()
        };
        Self {
            leaves: leaves.into(),
            branching,
            height,
            path: Vec::new(),
        }
    }

    fn leftmost_leaf(&self) -> usize {
        let below = self.height - self.path.len();
        let prefix = self
            .path
            .iter()
            .fold(0, |acc, &i| acc * self.branching + i);
        prefix * self.branching.pow(u32::try_from(below).unwrap_or(u32::MAX))
    }
}

impl GameState for ArrayTree {
    type Move = usize;
    type Player = u8;

    fn active_player(&self) -> u8 {
        u8::from(self.path.len() % 2 == 1)
    }

    fn successors(&self) -> Vec<(usize, Self)> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.branching)
            .map(|i| {
                let mut next = self.clone();
                next.path.push(i);
                (i, next)
            })
            .collect()
    }

    fn is_terminal(&self) -> bool {
        self.path.len() == self.height
    }

    fn evaluate(&self, player: u8) -> i64 {
        let leaf = self.leaves[self.leftmost_leaf()];
        let value = if self.is_terminal() { leaf } else { leaf / 2 };
        if player == 0 {
            value
        } else {
            -value
        }
    }
}
