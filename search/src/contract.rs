//! Problem-model contracts consumed by the engines.
//!
//! Each engine is written once against one of these traits. Worlds (see the
//! harness crate) provide the concrete models.
//!
//! The graph contract lives in the kernel as
//! [`deliberate_kernel::graph::GraphSource`]; the heuristic contract lives in
//! [`crate::heuristic`].

use std::collections::BTreeMap;

/// A successor produced by a local-search problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S, A> {
    pub state: S,
    /// Label of the action that produced `state`.
    pub action: A,
    pub step_cost: u64,
}

/// Trait for problems explored by hill climbing.
///
/// # Contract
///
/// - `evaluate` is total: every reachable state has a value. Higher is better.
/// - `successors` is deterministic: same state, same successors, same order.
pub trait LocalSearchProblem {
    type State: Clone;
    type Action;

    /// The state the climb starts from.
    fn start(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    fn evaluate(&self, state: &Self::State) -> i64;
}

/// Partial or total variable assignment built by the constraint solver.
pub type Assignment<V, D> = BTreeMap<V, D>;

/// Trait for constraint-satisfaction problems.
///
/// # Contract
///
/// - `variables` fixes the assignment order; it must not contain duplicates.
/// - `domain` lists candidate values in the order they are tried.
/// - `is_consistent` must only consult variables present in `assignment`;
///   the solver never shows it unassigned variables.
pub trait ConstraintProblem {
    type Var: Ord + Clone;
    type Value: Clone + PartialEq;

    fn variables(&self) -> &[Self::Var];

    fn domain(&self, var: &Self::Var) -> &[Self::Value];

    /// Whether giving `value` to `var` conflicts with nothing in `assignment`.
    fn is_consistent(
        &self,
        var: &Self::Var,
        value: &Self::Value,
        assignment: &Assignment<Self::Var, Self::Value>,
    ) -> bool;
}

/// Trait for two-player, turn-based game positions.
///
/// States are values: `successors` returns derived positions and never
/// mutates `self`, so sibling branches of the game tree cannot observe each
/// other.
pub trait GameState: Sized {
    type Move: Clone;
    type Player: Copy + Eq;

    /// The player to move in this position.
    fn active_player(&self) -> Self::Player;

    /// Every legal move with the position it leads to, in a fixed order.
    fn successors(&self) -> Vec<(Self::Move, Self)>;

    /// Win, loss or draw.
    fn is_terminal(&self) -> bool;

    /// Static value of the position from `player`'s point of view.
    fn evaluate(&self, player: Self::Player) -> i64;
}
