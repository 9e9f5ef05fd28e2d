//! Depth-bounded minimax with optional alpha-beta pruning.
//!
//! The root is handled separately from the recursion: every root move gets
//! its own full-window evaluation, so the per-move values in
//! [`RootAnalysis`] are exact minimax values under both pruning modes and
//! the chosen move never depends on whether pruning is enabled.

use std::fmt::Display;

use tracing::{debug, trace};

use crate::contract::GameState;
use crate::error::SearchError;
use crate::policy::{AdversarialPolicyV1, Pruning};

/// Work counters for one root search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimaxStatsV1 {
    /// Positions evaluated below the root, leaves included.
    pub nodes_visited: u64,
    /// Sibling loops cut short by `beta <= alpha`.
    pub cutoffs: u64,
}

/// The selected root move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveChoice<M> {
    pub mv: M,
    /// Minimax value of the move for the searching player.
    pub value: i64,
    /// Position of the move in the root's successor order.
    pub index: usize,
}

/// A root move with its minimax value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredMove<M> {
    pub mv: M,
    pub value: i64,
}

/// Full outcome of a root search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootAnalysis<M> {
    /// `None` when the root is terminal or has no legal moves.
    pub choice: Option<MoveChoice<M>>,
    /// Every root move in successor order.
    pub scored: Vec<ScoredMove<M>>,
    pub stats: MinimaxStatsV1,
}

impl<M: Display> RootAnalysis<M> {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let choice = self.choice.as_ref().map(|c| {
            serde_json::json!({
                "index": c.index,
                "move": c.mv.to_string(),
                "value": c.value,
            })
        });
        let scored: Vec<_> = self
            .scored
            .iter()
            .map(|s| serde_json::json!({"move": s.mv.to_string(), "value": s.value}))
            .collect();
        serde_json::json!({
            "choice": choice,
            "scored": scored,
            "stats": {
                "cutoffs": self.stats.cutoffs,
                "nodes_visited": self.stats.nodes_visited,
            },
        })
    }
}

/// Pick the best move for `player` from `state`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the policy depth is outside
/// `1..=MAX_SEARCH_DEPTH`.
pub fn best_move<G: GameState>(
    state: &G,
    player: G::Player,
    policy: &AdversarialPolicyV1,
) -> Result<Option<MoveChoice<G::Move>>, SearchError> {
    Ok(analyze(state, player, policy)?.choice)
}

/// Score every root move and pick the best one.
///
/// Each root move is evaluated to `policy.depth - 1` further plies. The
/// highest value wins; on a tie the earlier move is kept.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the policy depth is outside
/// `1..=MAX_SEARCH_DEPTH`. Validation happens before any evaluation.
pub fn analyze<G: GameState>(
    state: &G,
    player: G::Player,
    policy: &AdversarialPolicyV1,
) -> Result<RootAnalysis<G::Move>, SearchError> {
    policy.validate()?;

    let mut search = Minimax {
        player,
        pruning: policy.pruning,
        stats: MinimaxStatsV1::default(),
    };
    let mut scored: Vec<ScoredMove<G::Move>> = Vec::new();
    let mut best: Option<usize> = None;

    if !state.is_terminal() {
        for (mv, child) in state.successors() {
            let value = search.value(&child, policy.depth - 1, i64::MIN, i64::MAX);
            trace!(index = scored.len(), value, "root move scored");
            let improves = match best {
                Some(b) => value > scored[b].value,
                None => true,
            };
            if improves {
                best = Some(scored.len());
            }
            scored.push(ScoredMove { mv, value });
        }
    }

    let choice = best.map(|index| MoveChoice {
        mv: scored[index].mv.clone(),
        value: scored[index].value,
        index,
    });
    debug!(
        depth = policy.depth,
        pruning = policy.pruning.as_str(),
        root_moves = scored.len(),
        nodes = search.stats.nodes_visited,
        cutoffs = search.stats.cutoffs,
        "minimax finished"
    );

    Ok(RootAnalysis {
        choice,
        scored,
        stats: search.stats,
    })
}

struct Minimax<P> {
    player: P,
    pruning: Pruning,
    stats: MinimaxStatsV1,
}

impl<P: Copy + Eq> Minimax<P> {
    fn value<G: GameState<Player = P>>(
        &mut self,
        state: &G,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
    ) -> i64 {
        self.stats.nodes_visited += 1;
        if depth == 0 || state.is_terminal() {
            return state.evaluate(self.player);
        }
        let successors = state.successors();
        if successors.is_empty() {
            return state.evaluate(self.player);
        }

        let maximizing = state.active_player() == self.player;
        let mut best = if maximizing { i64::MIN } else { i64::MAX };
        for (_, child) in successors {
            let value = self.value(&child, depth - 1, alpha, beta);
            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }
            if self.pruning == Pruning::AlphaBeta && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}
