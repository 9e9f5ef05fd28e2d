//! Report bundle lock tests: scenario bundles and report binding.
//!
//! Proves:
//! 1. Every scenario bundle verifies and is byte-identical across runs
//! 2. `report.json` binds `result.json` under the engine's hash domain
//! 3. Bundles stay in memory: no engine or harness source touches the filesystem

use deliberate_harness::bundle::{
    verify_bundle, BundleVerifyError, EngineKind, DOMAIN_POLICY_SNAPSHOT, POLICY_ARTIFACT,
    REPORT_ARTIFACT, RESULT_ARTIFACT,
};
use deliberate_harness::runner::{execute, run_scenario, ScenarioV1};
use deliberate_kernel::proof::canon::canonical_json_bytes;
use deliberate_kernel::proof::hash::canonical_hash;
use lock_tests::bundle_test_helpers::{
    rebuild_with_modified_report, rebuild_with_modified_result, rebuild_with_rebound_result,
};

// ---------------------------------------------------------------------------
// 1. Scenario bundles
// ---------------------------------------------------------------------------

/// ACCEPTANCE: BUNDLE-SCENARIOS
#[test]
fn every_scenario_verifies_with_four_artifacts() {
    for scenario in ScenarioV1::ALL {
        let bundle = run_scenario(scenario).unwrap();
        verify_bundle(&bundle).unwrap_or_else(|e| panic!("{}: {e}", scenario.name()));
        assert_eq!(
            bundle.artifacts.keys().map(String::as_str).collect::<Vec<_>>(),
            ["fixture.json", "policy.json", "report.json", "result.json"]
        );
        let report = bundle.json(REPORT_ARTIFACT).unwrap();
        assert_eq!(report["scenario"], scenario.name());
        assert_eq!(report["engine"], scenario.engine().as_str());
    }
}

/// ACCEPTANCE: BUNDLE-DETERMINISM
#[test]
fn scenario_bundles_are_byte_identical_across_runs() {
    for scenario in ScenarioV1::ALL {
        let baseline = run_scenario(scenario).unwrap();
        for _ in 0..5 {
            let run = run_scenario(scenario).unwrap();
            assert_eq!(run.digest, baseline.digest, "{}", scenario.name());
            for (name, artifact) in &baseline.artifacts {
                assert_eq!(run.artifacts[name].content, artifact.content, "{name}");
            }
        }
    }
}

/// Distinct scenarios never collide, even when they share a world.
///
/// ACCEPTANCE: BUNDLE-SCENARIOS
#[test]
fn scenario_digests_are_distinct() {
    let digests: std::collections::BTreeSet<_> = ScenarioV1::ALL
        .into_iter()
        .map(|s| run_scenario(s).unwrap().digest.as_str().to_string())
        .collect();
    assert_eq!(digests.len(), ScenarioV1::ALL.len());
}

/// ACCEPTANCE: BUNDLE-POLICY-BINDING
#[test]
fn policy_digest_commits_to_policy_artifact() {
    let bundle = run_scenario(ScenarioV1::TicTacToeBlock).unwrap();
    let report = bundle.json(REPORT_ARTIFACT).unwrap();
    let policy = &bundle.artifact(POLICY_ARTIFACT).unwrap().content;
    let expected = canonical_hash(DOMAIN_POLICY_SNAPSHOT, policy);
    assert_eq!(report["policy_digest"], expected.as_str());

    let output = execute(ScenarioV1::TicTacToeBlock).unwrap();
    assert_eq!(policy, &canonical_json_bytes(&output.policy).unwrap());
}

// ---------------------------------------------------------------------------
// 2. Report binding
// ---------------------------------------------------------------------------

/// ACCEPTANCE: BUNDLE-RESULT-BINDING
#[test]
fn edited_result_without_rebinding_is_rejected() {
    let bundle = run_scenario(ScenarioV1::UcsRoutes).unwrap();
    let tampered = rebuild_with_modified_result(&bundle, |result| {
        result["total_cost"] = serde_json::json!(3);
    });
    let err = verify_bundle(&tampered).unwrap_err();
    assert!(
        matches!(&err, BundleVerifyError::BindingMismatch { field, .. } if field == "result_digest"),
        "expected result_digest BindingMismatch, got {err}"
    );
}

/// Rebinding is the only way to make an edited result verify; the digest
/// then moves.
///
/// ACCEPTANCE: BUNDLE-RESULT-BINDING
#[test]
fn rebound_result_verifies_under_new_digest() {
    let bundle = run_scenario(ScenarioV1::UcsRoutes).unwrap();
    let rebound = rebuild_with_rebound_result(&bundle, |result| {
        result["total_cost"] = serde_json::json!(3);
    });
    verify_bundle(&rebound).unwrap();
    assert_ne!(rebound.digest, bundle.digest);
}

/// The result digest is domain-separated per engine: relabeling a report
/// with another engine breaks the binding.
///
/// ACCEPTANCE: BUNDLE-RESULT-BINDING
#[test]
fn relabeled_engine_breaks_binding() {
    for scenario in ScenarioV1::ALL {
        let bundle = run_scenario(scenario).unwrap();
        let other = [
            EngineKind::Path,
            EngineKind::Climb,
            EngineKind::Csp,
            EngineKind::Adversarial,
        ]
        .into_iter()
        .find(|e| *e != scenario.engine())
        .unwrap();
        let relabeled = rebuild_with_modified_report(&bundle, |report| {
            report["engine"] = serde_json::json!(other.as_str());
        });
        assert!(
            matches!(
                verify_bundle(&relabeled),
                Err(BundleVerifyError::BindingMismatch { .. })
            ),
            "{}",
            scenario.name()
        );
    }
}

/// ACCEPTANCE: BUNDLE-RESULT-BINDING
#[test]
fn unknown_engine_is_rejected() {
    let bundle = run_scenario(ScenarioV1::NumberLineClimb).unwrap();
    let relabeled = rebuild_with_modified_report(&bundle, |report| {
        report["engine"] = serde_json::json!("simulated_annealing");
    });
    assert!(matches!(
        verify_bundle(&relabeled),
        Err(BundleVerifyError::UnknownEngine { .. })
    ));
}

/// ACCEPTANCE: BUNDLE-RESULT-BINDING
#[test]
fn missing_result_digest_is_rejected() {
    let bundle = run_scenario(ScenarioV1::BangladeshColoring).unwrap();
    let stripped = rebuild_with_modified_report(&bundle, |report| {
        if let Some(map) = report.as_object_mut() {
            map.remove("result_digest");
        }
    });
    assert!(matches!(
        verify_bundle(&stripped),
        Err(BundleVerifyError::ReportFieldMissing { ref field }) if field == "result_digest"
    ));
}

/// ACCEPTANCE: BUNDLE-CONTENT-HASH
#[test]
fn in_place_content_edit_is_rejected() {
    let mut bundle = run_scenario(ScenarioV1::GreedyRoutes).unwrap();
    if let Some(result) = bundle.artifacts.get_mut(RESULT_ARTIFACT) {
        result.content.push(b' ');
    }
    assert!(matches!(
        verify_bundle(&bundle),
        Err(BundleVerifyError::ContentHashMismatch { .. })
    ));
}

// ---------------------------------------------------------------------------
// 3. In-memory only
// ---------------------------------------------------------------------------

/// ACCEPTANCE: BUNDLE-IN-MEMORY
#[test]
fn library_sources_do_not_touch_the_filesystem() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let mut violations = Vec::new();
    let mut pending = Vec::new();
    for crate_dir in ["kernel", "search", "harness"] {
        pending.push(root.join(crate_dir).join("src"));
    }
    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir).unwrap().flatten() {
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some("rs") {
                continue;
            }
            let content = std::fs::read_to_string(&path).unwrap();
            for (i, line) in content.lines().enumerate() {
                if ["std::fs", "fs::", "File::"].iter().any(|p| line.contains(p)) {
                    violations.push(format!("  {}:{}: {}", path.display(), i + 1, line.trim()));
                }
            }
        }
    }
    assert!(
        violations.is_empty(),
        "filesystem access in library source:\n{}",
        violations.join("\n")
    );
}
