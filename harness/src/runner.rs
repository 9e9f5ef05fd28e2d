//! Scenario runner: runs a named world through its engine and packages the
//! outcome as a [`ReportBundleV1`].
//!
//! # Pipeline
//!
//! ```text
//! world fixture + policy → engine → result JSON
//!   → canonical_json_bytes() × 3 → policy/result digests → report.json
//!   → build_bundle()
//! ```
//!
//! The runner does not implement search logic; it only selects the world,
//! the engine and the policy, then hashes what comes back.

use deliberate_kernel::proof::canon::canonical_json_bytes;
use deliberate_kernel::proof::hash::canonical_hash;
use deliberate_search::adversarial::analyze;
use deliberate_search::csp::{distinct_values, solve};
use deliberate_search::error::SearchError;
use deliberate_search::local::climb;
use deliberate_search::path::{search, Strategy};
use deliberate_search::policy::{AdversarialPolicyV1, ClimbPolicyV1};
use tracing::{debug, info, info_span};

use crate::bundle::{
    build_bundle, BundleBuildError, EngineKind, ReportBundleV1, DOMAIN_POLICY_SNAPSHOT,
    FIXTURE_ARTIFACT, POLICY_ARTIFACT, REPORT_ARTIFACT, RESULT_ARTIFACT,
};
use crate::contract::WorldV1;
use crate::worlds::bangladesh::BangladeshMap;
use crate::worlds::number_line::NumberLine;
use crate::worlds::route_graphs::{RouteWorld, HEURISTIC_ROUTES, UCS_ROUTES};
use crate::worlds::tic_tac_toe::TicTacToeWorld;

/// Error during a scenario run.
#[derive(Debug)]
pub enum RunError {
    /// The world's data could not be built.
    World { detail: String },
    /// The engine rejected its policy or problem.
    Search(SearchError),
    /// Canonical JSON serialization failed.
    Canon { detail: String },
    /// Bundle assembly failed.
    Bundle(BundleBuildError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::World { detail } => write!(f, "world error: {detail}"),
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::Canon { detail } => write!(f, "canonical JSON error: {detail}"),
            Self::Bundle(e) => write!(f, "bundle error: {e}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<BundleBuildError> for RunError {
    fn from(e: BundleBuildError) -> Self {
        Self::Bundle(e)
    }
}

/// A named world + engine + policy combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioV1 {
    /// Uniform-cost search over the UCS route graph, `A` to `G`.
    UcsRoutes,
    /// A* over the heuristic route graph, `A` to `F`.
    AStarRoutes,
    /// Greedy best-first over the heuristic route graph, `A` to `F`.
    GreedyRoutes,
    /// Hill climbing on the number line, 0 to 10.
    NumberLineClimb,
    /// Four-coloring of the Bangladesh divisions.
    BangladeshColoring,
    /// Minimax for O in a position where X threatens the bottom row.
    TicTacToeBlock,
}

impl ScenarioV1 {
    pub const ALL: [Self; 6] = [
        Self::UcsRoutes,
        Self::AStarRoutes,
        Self::GreedyRoutes,
        Self::NumberLineClimb,
        Self::BangladeshColoring,
        Self::TicTacToeBlock,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::UcsRoutes => "ucs_routes",
            Self::AStarRoutes => "a_star_routes",
            Self::GreedyRoutes => "greedy_routes",
            Self::NumberLineClimb => "number_line_climb",
            Self::BangladeshColoring => "bangladesh_coloring",
            Self::TicTacToeBlock => "tic_tac_toe_block",
        }
    }

    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    #[must_use]
    pub fn engine(self) -> EngineKind {
        match self {
            Self::UcsRoutes | Self::AStarRoutes | Self::GreedyRoutes => EngineKind::Path,
            Self::NumberLineClimb => EngineKind::Climb,
            Self::BangladeshColoring => EngineKind::Csp,
            Self::TicTacToeBlock => EngineKind::Adversarial,
        }
    }
}

/// Raw JSON produced by one scenario, before hashing.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutput {
    pub world_id: String,
    pub fixture: serde_json::Value,
    pub policy: serde_json::Value,
    pub result: serde_json::Value,
    /// Short summary copied into `report.json`.
    pub outcome: serde_json::Value,
}

/// Run `scenario` and return its JSON outputs.
///
/// # Errors
///
/// Returns [`RunError`] if the world cannot be built or the engine rejects
/// its policy.
pub fn execute(scenario: ScenarioV1) -> Result<ScenarioOutput, RunError> {
    match scenario {
        ScenarioV1::UcsRoutes => run_routes(&UCS_ROUTES, PathStrategy::UniformCost),
        ScenarioV1::AStarRoutes => run_routes(&HEURISTIC_ROUTES, PathStrategy::AStar),
        ScenarioV1::GreedyRoutes => run_routes(&HEURISTIC_ROUTES, PathStrategy::Greedy),
        ScenarioV1::NumberLineClimb => {
            let world = NumberLine::default();
            let policy = ClimbPolicyV1::default();
            let result = climb(&world, &policy);
            Ok(ScenarioOutput {
                world_id: world.world_id().to_string(),
                fixture: world.fixture(),
                policy: policy.to_json_value(),
                outcome: serde_json::json!({
                    "goal": result.goal,
                    "termination_reason": result.termination_reason.as_str(),
                }),
                result: result.to_json_value(),
            })
        }
        ScenarioV1::BangladeshColoring => {
            let world = BangladeshMap::default();
            let result = solve(&world.problem())?;
            Ok(ScenarioOutput {
                world_id: world.world_id().to_string(),
                fixture: world.fixture(),
                policy: serde_json::json!({
                    "kind": "csp",
                    "value_order": "domain",
                    "variable_order": "listed",
                }),
                outcome: serde_json::json!({
                    "colors_used": result.assignment.as_ref().map(distinct_values),
                    "satisfiable": result.is_satisfiable(),
                }),
                result: result.to_json_value(),
            })
        }
        ScenarioV1::TicTacToeBlock => {
            let world = TicTacToeWorld::must_block().ok_or_else(|| RunError::World {
                detail: "tic-tac-toe fixture moves are illegal".into(),
            })?;
            let policy = AdversarialPolicyV1::default();
            let analysis = analyze(&world.board, world.player, &policy)?;
            Ok(ScenarioOutput {
                world_id: world.world_id().to_string(),
                fixture: world.fixture(),
                policy: policy.to_json_value(),
                outcome: serde_json::json!({
                    "move": analysis.choice.as_ref().map(|c| c.mv.to_string()),
                    "value": analysis.choice.as_ref().map(|c| c.value),
                }),
                result: analysis.to_json_value(),
            })
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum PathStrategy {
    UniformCost,
    AStar,
    Greedy,
}

fn run_routes(world: &RouteWorld, which: PathStrategy) -> Result<ScenarioOutput, RunError> {
    let graph = world.graph().map_err(|e| RunError::World {
        detail: e.to_string(),
    })?;
    let heuristic = world.heuristic();
    let strategy = match which {
        PathStrategy::UniformCost => Strategy::UniformCost,
        PathStrategy::AStar => Strategy::AStar(&heuristic),
        PathStrategy::Greedy => Strategy::GreedyBestFirst(&heuristic),
    };
    let result = search(&graph, &world.start, &world.goal, &strategy);
    Ok(ScenarioOutput {
        world_id: world.world_id().to_string(),
        fixture: world.fixture(),
        policy: serde_json::json!({
            "kind": "path",
            "strategy": strategy.name(),
        }),
        outcome: serde_json::json!({
            "goal_reached": result.is_goal_reached(),
            "total_cost": result.found.as_ref().map(|f| f.total_cost),
        }),
        result: result.to_json_value(),
    })
}

/// Run `scenario` and package it as a report bundle.
///
/// # Errors
///
/// Returns [`RunError`] if the run fails or its output cannot be
/// canonicalized.
pub fn run_scenario(scenario: ScenarioV1) -> Result<ReportBundleV1, RunError> {
    let span = info_span!("scenario", name = scenario.name());
    let _guard = span.enter();

    let output = execute(scenario)?;
    debug!(world_id = %output.world_id, "scenario executed");
    let bundle = package(scenario, &output)?;
    info!(digest = %bundle.digest, outcome = %output.outcome, "scenario bundle built");
    Ok(bundle)
}

fn package(scenario: ScenarioV1, output: &ScenarioOutput) -> Result<ReportBundleV1, RunError> {
    let engine = scenario.engine();
    let fixture = canon(&output.fixture)?;
    let policy = canon(&output.policy)?;
    let result = canon(&output.result)?;

    let report = serde_json::json!({
        "engine": engine.as_str(),
        "outcome": output.outcome,
        "policy_digest": canonical_hash(DOMAIN_POLICY_SNAPSHOT, &policy).as_str(),
        "result_digest": canonical_hash(engine.result_domain(), &result).as_str(),
        "scenario": scenario.name(),
        "schema_version": "scenario_report.v1",
        "world_id": output.world_id,
    });
    let report = canon(&report)?;

    Ok(build_bundle(vec![
        (FIXTURE_ARTIFACT.into(), fixture, true),
        (POLICY_ARTIFACT.into(), policy, true),
        (REPORT_ARTIFACT.into(), report, true),
        (RESULT_ARTIFACT.into(), result, true),
    ])?)
}

fn canon(value: &serde_json::Value) -> Result<Vec<u8>, RunError> {
    canonical_json_bytes(value).map_err(|e| RunError::Canon {
        detail: e.to_string(),
    })
}
