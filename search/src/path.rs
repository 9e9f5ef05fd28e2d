//! Frontier-ordered path search.
//!
//! One best-first loop serves three priority policies:
//!
//! | Strategy | Priority | Goal test | Optimal |
//! |---|---|---|---|
//! | [`Strategy::UniformCost`] | `g` | on pop | yes (non-negative costs) |
//! | [`Strategy::AStar`] | `g + h` | on pop | yes if `h` is admissible |
//! | [`Strategy::GreedyBestFirst`] | `h` | on pop | no |
//!
//! Cost-ordered strategies keep every improved path on the frontier and skip
//! stale entries on pop (lazy deletion). Greedy keeps a finalized set and
//! never reopens a node.

use std::collections::BTreeMap;
use std::fmt::{Debug, Display};

use deliberate_kernel::graph::{Cost, GraphSource};
use tracing::{debug, trace};

use crate::frontier::BestFirstFrontier;
use crate::heuristic::Heuristic;
use crate::node::SearchRecord;

/// Priority policy for [`search`].
pub enum Strategy<'h, N> {
    /// Dijkstra-style cost ordering.
    UniformCost,
    /// Cost plus heuristic estimate.
    AStar(&'h dyn Heuristic<N>),
    /// Heuristic estimate only.
    GreedyBestFirst(&'h dyn Heuristic<N>),
}

impl<N> Strategy<'_, N> {
    fn priority(&self, cost: Cost, node: &N) -> Cost {
        match self {
            Self::UniformCost => cost,
            Self::AStar(h) => cost.saturating_add(h.estimate(node)),
            Self::GreedyBestFirst(h) => h.estimate(node),
        }
    }

    /// Whether frontier order lower-bounds the true path cost.
    #[must_use]
    pub fn is_cost_ordered(&self) -> bool {
        !matches!(self, Self::GreedyBestFirst(_))
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::UniformCost => "uniform_cost",
            Self::AStar(_) => "a_star",
            Self::GreedyBestFirst(_) => "greedy_best_first",
        }
    }
}

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// The goal was popped from the frontier.
    GoalReached,
    /// Frontier emptied without reaching the goal (NotFound).
    FrontierExhausted,
}

impl TerminationReasonV1 {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
        }
    }
}

/// A path from start to goal with its cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundPath<N> {
    pub total_cost: Cost,
    /// `path[0]` is the start, the last element is the goal.
    pub path: Vec<N>,
}

/// Work counters for one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathStatsV1 {
    /// Nodes whose edges were relaxed.
    pub expansions: u64,
    /// Popped entries discarded as stale or already finalized.
    pub stale_skipped: u64,
    /// Record creations or improvements.
    pub relaxations: u64,
    pub frontier_pushes: u64,
    pub frontier_high_water: u64,
}

/// Result of a path search.
#[derive(Debug, Clone)]
pub struct PathSearchResult<N> {
    pub strategy: &'static str,
    pub start: N,
    pub goal: N,
    /// `None` means NotFound.
    pub found: Option<FoundPath<N>>,
    pub termination_reason: TerminationReasonV1,
    pub stats: PathStatsV1,
}

impl<N> PathSearchResult<N> {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination_reason == TerminationReasonV1::GoalReached
    }

    /// Drop the bookkeeping and keep `(total_cost, path)`.
    #[must_use]
    pub fn into_path(self) -> Option<FoundPath<N>> {
        self.found
    }
}

impl<N: Display> PathSearchResult<N> {
    /// JSON rendering for report bundles. Node identifiers use `Display`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let (path, total_cost) = match &self.found {
            Some(found) => (
                serde_json::json!(found.path.iter().map(ToString::to_string).collect::<Vec<_>>()),
                serde_json::json!(found.total_cost),
            ),
            None => (serde_json::Value::Null, serde_json::Value::Null),
        };
        serde_json::json!({
            "goal": self.goal.to_string(),
            "path": path,
            "start": self.start.to_string(),
            "stats": {
                "expansions": self.stats.expansions,
                "frontier_high_water": self.stats.frontier_high_water,
                "frontier_pushes": self.stats.frontier_pushes,
                "relaxations": self.stats.relaxations,
                "stale_skipped": self.stats.stale_skipped,
            },
            "strategy": self.strategy,
            "termination_reason": {"type": self.termination_reason.as_str()},
            "total_cost": total_cost,
        })
    }
}

/// Run best-first search from `start` to `goal` under `strategy`.
///
/// Unreachable goals return `found: None` with
/// [`TerminationReasonV1::FrontierExhausted`]. There is no expansion budget:
/// the graph must be finite.
pub fn search<N, G>(graph: &G, start: &N, goal: &N, strategy: &Strategy<'_, N>) -> PathSearchResult<N>
where
    N: Ord + Clone + Debug,
    G: GraphSource<N> + ?Sized,
{
    let cost_ordered = strategy.is_cost_ordered();
    let mut frontier = BestFirstFrontier::new();
    let mut records: BTreeMap<N, SearchRecord<N>> = BTreeMap::new();
    let mut stats = PathStatsV1::default();

    records.insert(
        start.clone(),
        SearchRecord {
            cost: 0,
            parent: None,
        },
    );
    frontier.push(strategy.priority(0, start), 0, start.clone());

    let termination_reason = loop {
        let Some(entry) = frontier.pop() else {
            break TerminationReasonV1::FrontierExhausted;
        };
        let current = entry.node;

        if cost_ordered {
            let recorded = records.get(&current).map_or(Cost::MAX, |r| r.cost);
            if entry.cost > recorded {
                stats.stale_skipped += 1;
                trace!(node = ?current, stale = entry.cost, recorded, "skip stale entry");
                continue;
            }
        } else if !frontier.finalize(current.clone()) {
            stats.stale_skipped += 1;
            continue;
        }

        if current == *goal {
            break TerminationReasonV1::GoalReached;
        }

        // Greedy may pop an entry pushed before its record improved; the
        // record is authoritative for parent-consistent costs.
        let current_cost = records.get(&current).map_or(entry.cost, |r| r.cost);
        stats.expansions += 1;
        trace!(node = ?current, cost = current_cost, priority = entry.key.priority, "expand");

        for edge in graph.edges(&current) {
            if !cost_ordered && frontier.is_finalized(&edge.to) {
                continue;
            }
            let tentative = current_cost.saturating_add(edge.cost);
            if records.get(&edge.to).is_some_and(|r| tentative >= r.cost) {
                continue;
            }
            records.insert(
                edge.to.clone(),
                SearchRecord {
                    cost: tentative,
                    parent: Some(current.clone()),
                },
            );
            stats.relaxations += 1;
            frontier.push(strategy.priority(tentative, &edge.to), tentative, edge.to.clone());
        }
    };

    stats.frontier_pushes = frontier.pushes();
    stats.frontier_high_water = frontier.high_water();

    let found = match termination_reason {
        TerminationReasonV1::GoalReached => {
            let total_cost = records.get(goal).map_or(0, |r| r.cost);
            let path = reconstruct_path(&records, goal);
            Some(FoundPath { total_cost, path })
        }
        TerminationReasonV1::FrontierExhausted => None,
    };

    debug!(
        strategy = strategy.name(),
        start = ?start,
        goal = ?goal,
        termination = termination_reason.as_str(),
        total_cost = found.as_ref().map(|f| f.total_cost),
        expansions = stats.expansions,
        "path search finished"
    );

    PathSearchResult {
        strategy: strategy.name(),
        start: start.clone(),
        goal: goal.clone(),
        found,
        termination_reason,
        stats,
    }
}

/// Uniform-Cost Search: `search` with [`Strategy::UniformCost`].
pub fn uniform_cost_search<N, G>(graph: &G, start: &N, goal: &N) -> PathSearchResult<N>
where
    N: Ord + Clone + Debug,
    G: GraphSource<N> + ?Sized,
{
    search(graph, start, goal, &Strategy::UniformCost)
}

/// A*: `search` with [`Strategy::AStar`].
pub fn a_star_search<N, G>(
    graph: &G,
    start: &N,
    goal: &N,
    heuristic: &dyn Heuristic<N>,
) -> PathSearchResult<N>
where
    N: Ord + Clone + Debug,
    G: GraphSource<N> + ?Sized,
{
    search(graph, start, goal, &Strategy::AStar(heuristic))
}

/// Greedy best-first: `search` with [`Strategy::GreedyBestFirst`].
pub fn greedy_best_first_search<N, G>(
    graph: &G,
    start: &N,
    goal: &N,
    heuristic: &dyn Heuristic<N>,
) -> PathSearchResult<N>
where
    N: Ord + Clone + Debug,
    G: GraphSource<N> + ?Sized,
{
    search(graph, start, goal, &Strategy::GreedyBestFirst(heuristic))
}

/// Follow parent pointers from `goal` back to the start, then reverse.
///
/// The walk ends at the first node without a parent (the start). It is
/// bounded by the record count, since parent chains cannot cycle.
#[must_use]
pub fn reconstruct_path<N: Ord + Clone>(records: &BTreeMap<N, SearchRecord<N>>, goal: &N) -> Vec<N> {
    let mut path = vec![goal.clone()];
    let mut current = goal;
    while let Some(parent) = records.get(current).and_then(|r| r.parent.as_ref()) {
        if path.len() > records.len() {
            break;
        }
        path.push(parent.clone());
        current = parent;
    }
    path.reverse();
    path
}
