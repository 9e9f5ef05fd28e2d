//! `NumberLine`: integer hill-climbing world.
//!
//! States are integers. Each state has two successors, one step up and one
//! step down, both costing 1. The value of a state is `-|goal - state|`, so
//! the goal is the unique maximum and climbing from any start reaches it.

use std::fmt;

use deliberate_search::contract::{LocalSearchProblem, Successor};

use crate::contract::WorldV1;

/// A one-unit move along the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Increment,
    Decrement,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLine {
    pub start: i64,
    pub goal: i64,
}

impl Default for NumberLine {
    fn default() -> Self {
        Self { start: 0, goal: 10 }
    }
}

impl LocalSearchProblem for NumberLine {
    type State = i64;
    type Action = Step;

    fn start(&self) -> i64 {
        self.start
    }

    fn is_goal(&self, state: &i64) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &i64) -> Vec<Successor<i64, Step>> {
        vec![
            Successor {
                state: state.saturating_add(1),
                action: Step::Increment,
                step_cost: 1,
            },
            Successor {
                state: state.saturating_sub(1),
                action: Step::Decrement,
                step_cost: 1,
            },
        ]
    }

    fn evaluate(&self, state: &i64) -> i64 {
        -(self.goal.saturating_sub(*state)).saturating_abs()
    }
}

impl WorldV1 for NumberLine {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "number_line"
    }

    fn fixture(&self) -> serde_json::Value {
        serde_json::json!({
            "goal": self.goal,
            "start": self.start,
            "step_cost": 1,
            "world_id": "number_line",
        })
    }
}
