//! Chronological backtracking for [`ConstraintProblem`]s.
//!
//! Variables are assigned in the order the problem lists them and values in
//! domain order. Each candidate is checked only against variables already
//! assigned; there is no forward checking or dynamic variable ordering, so
//! hard instances cost more than with most-constrained-first heuristics.
//!
//! The search runs on an explicit cursor stack instead of the call stack.
//! `cursors[k]` is the index of the next value to try for `variables[k]`.
//! Before a level tries a new value it removes its previous one, so every
//! consistency check for `variables[k]` sees exactly `variables[..k]`
//! assigned, and an unsatisfiable instance leaves the assignment empty.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Debug, Display};

use tracing::{debug, trace};

use crate::contract::{Assignment, ConstraintProblem};
use crate::error::SearchError;

/// Work counters for one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CspStatsV1 {
    pub consistency_checks: u64,
    /// Tentative assignments made.
    pub assignments: u64,
    /// Tentative assignments removed after a failure below them.
    pub undos: u64,
    /// Levels whose domain ran out (one backtrack each).
    pub dead_ends: u64,
}

/// Result of [`solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CspResult<V, D> {
    /// Total assignment, or `None` (Unsatisfiable).
    pub assignment: Option<Assignment<V, D>>,
    pub stats: CspStatsV1,
}

impl<V, D> CspResult<V, D> {
    #[must_use]
    pub fn is_satisfiable(&self) -> bool {
        self.assignment.is_some()
    }
}

impl<V: Display, D: Display> CspResult<V, D> {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let assignment = self.assignment.as_ref().map(|a| {
            a.iter()
                .map(|(var, value)| (var.to_string(), serde_json::json!(value.to_string())))
                .collect::<serde_json::Map<_, _>>()
        });
        serde_json::json!({
            "assignment": assignment,
            "satisfiable": self.is_satisfiable(),
            "stats": {
                "assignments": self.stats.assignments,
                "consistency_checks": self.stats.consistency_checks,
                "dead_ends": self.stats.dead_ends,
                "undos": self.stats.undos,
            },
        })
    }
}

/// Solve `problem` by backtracking.
///
/// # Errors
///
/// Returns [`SearchError::MalformedProblem`] if `problem.variables()`
/// contains a duplicate.
pub fn solve<P>(problem: &P) -> Result<CspResult<P::Var, P::Value>, SearchError>
where
    P: ConstraintProblem + ?Sized,
    P::Var: Debug,
{
    let variables = problem.variables();
    let mut seen = BTreeSet::new();
    for var in variables {
        if !seen.insert(var) {
            return Err(SearchError::MalformedProblem {
                detail: format!("variable {var:?} listed more than once"),
            });
        }
    }

    let mut assignment: Assignment<P::Var, P::Value> = Assignment::new();
    let mut stats = CspStatsV1::default();
    let mut cursors: Vec<usize> = Vec::with_capacity(variables.len());
    if !variables.is_empty() {
        cursors.push(0);
    }
    let mut solved = variables.is_empty();

    while let Some(&start) = cursors.last() {
        let depth = cursors.len() - 1;
        let var = &variables[depth];

        if assignment.remove(var).is_some() {
            stats.undos += 1;
            trace!(var = ?var, depth, "undo");
        }

        let domain = problem.domain(var);
        let mut index = start;
        let mut placed = false;
        while index < domain.len() {
            let value = &domain[index];
            index += 1;
            stats.consistency_checks += 1;
            if problem.is_consistent(var, value, &assignment) {
                assignment.insert(var.clone(), value.clone());
                stats.assignments += 1;
                placed = true;
                break;
            }
        }
        cursors[depth] = index;

        if !placed {
            cursors.pop();
            stats.dead_ends += 1;
            trace!(var = ?var, depth, "domain exhausted, backtrack");
            continue;
        }
        if depth + 1 == variables.len() {
            solved = true;
            break;
        }
        cursors.push(0);
    }

    debug!(
        variables = variables.len(),
        satisfiable = solved,
        checks = stats.consistency_checks,
        dead_ends = stats.dead_ends,
        "backtracking finished"
    );

    Ok(CspResult {
        assignment: solved.then_some(assignment),
        stats,
    })
}

/// Graph coloring: adjacent variables must take different colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoringProblem<V: Ord, C> {
    variables: Vec<V>,
    colors: Vec<C>,
    neighbors: BTreeMap<V, BTreeSet<V>>,
}

impl<V: Ord + Clone, C: Clone + PartialEq> ColoringProblem<V, C> {
    /// Variables in assignment order, every one sharing `colors` as domain.
    #[must_use]
    pub fn new(variables: Vec<V>, colors: Vec<C>) -> Self {
        Self {
            variables,
            colors,
            neighbors: BTreeMap::new(),
        }
    }

    /// Build from an adjacency listing. Variables are the listing's keys in
    /// ascending order; borders are made symmetric.
    #[must_use]
    pub fn from_adjacency(adjacency: &BTreeMap<V, Vec<V>>, colors: Vec<C>) -> Self {
        let mut problem = Self::new(adjacency.keys().cloned().collect(), colors);
        for (var, adjacent) in adjacency {
            for other in adjacent {
                problem.add_border(var.clone(), other.clone());
            }
        }
        problem
    }

    /// Require `a` and `b` to differ. Symmetric; self-borders are ignored.
    pub fn add_border(&mut self, a: V, b: V) {
        if a == b {
            return;
        }
        self.neighbors.entry(a.clone()).or_default().insert(b.clone());
        self.neighbors.entry(b).or_default().insert(a);
    }

    /// Variables that must differ from `var`.
    pub fn neighbors_of(&self, var: &V) -> impl Iterator<Item = &V> {
        self.neighbors.get(var).into_iter().flatten()
    }

    #[must_use]
    pub fn colors(&self) -> &[C] {
        &self.colors
    }

    /// Whether `assignment` is total and no border joins equal colors.
    #[must_use]
    pub fn is_proper(&self, assignment: &Assignment<V, C>) -> bool {
        self.variables.iter().all(|v| assignment.contains_key(v))
            && self.neighbors.iter().all(|(a, adjacent)| {
                adjacent
                    .iter()
                    .all(|b| match (assignment.get(a), assignment.get(b)) {
                        (Some(x), Some(y)) => x != y,
                        _ => true,
                    })
            })
    }
}

impl<V: Ord + Clone, C: Clone + PartialEq> ConstraintProblem for ColoringProblem<V, C> {
    type Var = V;
    type Value = C;

    fn variables(&self) -> &[V] {
        &self.variables
    }

    fn domain(&self, _var: &V) -> &[C] {
        &self.colors
    }

    fn is_consistent(&self, var: &V, value: &C, assignment: &Assignment<V, C>) -> bool {
        self.neighbors_of(var).all(|n| assignment.get(n) != Some(value))
    }
}

/// Number of distinct values used by `assignment`.
#[must_use]
pub fn distinct_values<V, D: Ord>(assignment: &Assignment<V, D>) -> usize {
    assignment.values().collect::<BTreeSet<_>>().len()
}
