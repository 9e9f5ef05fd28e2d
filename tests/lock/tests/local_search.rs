//! Hill-climbing acceptance tests.
//!
//! Proves:
//! 1. The number line climbs to its goal one step at a time
//! 2. Accepted values strictly increase
//! 3. Local optima and budget exhaustion are NotFound, not errors

use deliberate_harness::worlds::number_line::{NumberLine, Step};
use deliberate_search::contract::{LocalSearchProblem, Successor};
use deliberate_search::local::{climb, ClimbTerminationV1};
use deliberate_search::policy::ClimbPolicyV1;

/// A ridge with a false summit at 4 and the real goal at 12.
struct Ridge;

impl LocalSearchProblem for Ridge {
    type State = i64;
    type Action = i64;

    fn start(&self) -> i64 {
        0
    }

    fn is_goal(&self, state: &i64) -> bool {
        *state == 12
    }

    fn successors(&self, state: &i64) -> Vec<Successor<i64, i64>> {
        [1, -1]
            .into_iter()
            .map(|d| Successor {
                state: state + d,
                action: d,
                step_cost: 1,
            })
            .collect()
    }

    fn evaluate(&self, state: &i64) -> i64 {
        if *state <= 4 {
            *state
        } else {
            *state - 8
        }
    }
}

// ---------------------------------------------------------------------------
// 1. Number line
// ---------------------------------------------------------------------------

/// ACCEPTANCE: CLIMB-NUMBER-LINE
#[test]
fn number_line_reaches_ten() {
    let result = climb(&NumberLine::default(), &ClimbPolicyV1::default());
    assert_eq!(result.termination_reason, ClimbTerminationV1::GoalReached);
    assert_eq!(result.goal, Some(10));
    assert_eq!(result.actions, vec![Step::Increment; 10]);
    assert_eq!(result.total_step_cost, 10);
    assert_eq!(result.iterations, 11);
    assert_eq!(result.values.first(), Some(&-10));
    assert_eq!(result.values.last(), Some(&0));
}

/// ACCEPTANCE: CLIMB-NUMBER-LINE
#[test]
fn number_line_climbs_down_from_above() {
    let world = NumberLine { start: 15, goal: 10 };
    let result = climb(&world, &ClimbPolicyV1::default());
    assert_eq!(result.goal, Some(10));
    assert!(result.actions.iter().all(|a| *a == Step::Decrement));
}

// ---------------------------------------------------------------------------
// 2. Monotonicity
// ---------------------------------------------------------------------------

/// ACCEPTANCE: CLIMB-MONOTONE
#[test]
fn accepted_values_strictly_increase() {
    for (start, goal) in [(0, 10), (-7, 3), (20, -4), (5, 5)] {
        let result = climb(&NumberLine { start, goal }, &ClimbPolicyV1::default());
        assert!(
            result.values.windows(2).all(|w| w[0] < w[1]),
            "values not strictly increasing for {start}->{goal}: {:?}",
            result.values
        );
        assert_eq!(result.values.len(), result.actions.len() + 1);
    }
}

// ---------------------------------------------------------------------------
// 3. NotFound outcomes
// ---------------------------------------------------------------------------

/// ACCEPTANCE: CLIMB-LOCAL-OPTIMUM
#[test]
fn false_summit_stops_without_goal() {
    let result = climb(&Ridge, &ClimbPolicyV1::default());
    assert_eq!(result.termination_reason, ClimbTerminationV1::LocalOptimum);
    assert_eq!(result.goal, None);
    assert_eq!(result.final_state, 4);
    assert_eq!(result.values, vec![0, 1, 2, 3, 4]);
}

/// ACCEPTANCE: CLIMB-BUDGET
#[test]
fn small_budget_stops_short() {
    let policy = ClimbPolicyV1 { max_iterations: 3 };
    let result = climb(&NumberLine::default(), &policy);
    assert_eq!(
        result.termination_reason,
        ClimbTerminationV1::IterationBudgetExhausted
    );
    assert_eq!(result.goal, None);
    assert_eq!(result.final_state, 3);
    assert_eq!(result.iterations, 3);
}

/// The goal test runs at the top of an iteration, so a budget of exactly the
/// distance moves onto the goal without confirming it.
///
/// ACCEPTANCE: CLIMB-BUDGET
#[test]
fn budget_equal_to_distance_is_not_found() {
    let policy = ClimbPolicyV1 { max_iterations: 10 };
    let result = climb(&NumberLine::default(), &policy);
    assert_eq!(result.final_state, 10);
    assert_eq!(result.goal, None);

    let policy = ClimbPolicyV1 { max_iterations: 11 };
    assert_eq!(climb(&NumberLine::default(), &policy).goal, Some(10));
}

/// ACCEPTANCE: CLIMB-DETERMINISM
#[test]
fn repeated_climbs_render_identically() {
    let world = NumberLine { start: -3, goal: 9 };
    let baseline = climb(&world, &ClimbPolicyV1::default()).to_json_value();
    for _ in 0..10 {
        assert_eq!(climb(&world, &ClimbPolicyV1::default()).to_json_value(), baseline);
    }
}
