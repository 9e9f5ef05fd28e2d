//! Hill climbing over a [`LocalSearchProblem`].
//!
//! Each iteration tests the goal, scores every successor and moves to the
//! best one only if it strictly beats the current value. There are no
//! restarts and no sideways moves, so plateaus and local maxima end the climb
//! without a result. That is the intended contract, not a failure.

use std::fmt::Display;

use tracing::{debug, trace};

use crate::contract::LocalSearchProblem;
use crate::policy::ClimbPolicyV1;

/// Why the climb stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimbTerminationV1 {
    GoalReached,
    /// No successor strictly improves the current value.
    LocalOptimum,
    /// `max_iterations` goal tests ran without reaching a goal.
    IterationBudgetExhausted,
}

impl ClimbTerminationV1 {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::LocalOptimum => "local_optimum",
            Self::IterationBudgetExhausted => "iteration_budget_exhausted",
        }
    }
}

/// Result of [`climb`].
#[derive(Debug, Clone)]
pub struct ClimbResult<S, A> {
    /// The goal state, or `None` (NotFound).
    pub goal: Option<S>,
    /// Where the climb ended, goal or not.
    pub final_state: S,
    pub termination_reason: ClimbTerminationV1,
    /// Goal tests performed.
    pub iterations: u64,
    /// Actions of the accepted moves, in order.
    pub actions: Vec<A>,
    /// Evaluation of the start state followed by one entry per accepted move.
    /// Strictly increasing.
    pub values: Vec<i64>,
    /// Sum of the step costs of the accepted moves.
    pub total_step_cost: u64,
    pub successors_evaluated: u64,
}

impl<S: Display, A: Display> ClimbResult<S, A> {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "actions": self.actions.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "final_state": self.final_state.to_string(),
            "goal": self.goal.as_ref().map(ToString::to_string),
            "iterations": self.iterations,
            "successors_evaluated": self.successors_evaluated,
            "termination_reason": {"type": self.termination_reason.as_str()},
            "total_step_cost": self.total_step_cost,
            "values": self.values,
        })
    }
}

/// Climb from `problem.start()` for at most `policy.max_iterations` iterations.
///
/// Ties never trigger a move: among successors the first one with the
/// highest value is chosen, and only if that value exceeds the current one.
pub fn climb<P>(problem: &P, policy: &ClimbPolicyV1) -> ClimbResult<P::State, P::Action>
where
    P: LocalSearchProblem + ?Sized,
{
    let mut current = problem.start();
    let mut current_value = problem.evaluate(&current);
    let mut values = vec![current_value];
    let mut actions = Vec::new();
    let mut total_step_cost = 0u64;
    let mut iterations = 0u64;
    let mut successors_evaluated = 0u64;

    let termination_reason = loop {
        if iterations >= policy.max_iterations {
            break ClimbTerminationV1::IterationBudgetExhausted;
        }
        iterations += 1;

        if problem.is_goal(&current) {
            break ClimbTerminationV1::GoalReached;
        }

        let mut best = None;
        let mut best_value = current_value;
        for successor in problem.successors(&current) {
            let value = problem.evaluate(&successor.state);
            successors_evaluated += 1;
            if value > best_value {
                best_value = value;
                best = Some(successor);
            }
        }

        let Some(next) = best else {
            break ClimbTerminationV1::LocalOptimum;
        };
        trace!(iteration = iterations, from = current_value, to = best_value, "climb");
        current = next.state;
        current_value = best_value;
        values.push(current_value);
        actions.push(next.action);
        total_step_cost = total_step_cost.saturating_add(next.step_cost);
    };

    debug!(
        termination = termination_reason.as_str(),
        iterations,
        moves = actions.len(),
        value = current_value,
        "hill climb finished"
    );

    let goal = (termination_reason == ClimbTerminationV1::GoalReached).then(|| current.clone());
    ClimbResult {
        goal,
        final_state: current,
        termination_reason,
        iterations,
        actions,
        values,
        total_step_cost,
        successors_evaluated,
    }
}
