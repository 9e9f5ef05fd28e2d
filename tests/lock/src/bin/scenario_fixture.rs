//! Binary that runs every named scenario and prints deterministic output
//! lines for cross-process verification.
//!
//! Usage: `scenario_fixture [scenario ...]` (all scenarios when none given)
//! Output: per scenario, `key=value` lines prefixed by the scenario name:
//!   `<name>.bundle_digest`=sha256:...
//!   `<name>.result_digest`=sha256:...
//!   `<name>.outcome`=<canonical JSON>
//!
//! Logs go to stderr (`RUST_LOG`-free, info level) so stdout stays
//! byte-deterministic.

use anyhow::{anyhow, Context, Result};
use deliberate_harness::bundle::{verify_bundle, REPORT_ARTIFACT};
use deliberate_harness::runner::{run_scenario, ScenarioV1};
use deliberate_kernel::proof::canon::canonical_json_bytes;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let requested: Vec<String> = std::env::args().skip(1).collect();
    let scenarios = if requested.is_empty() {
        ScenarioV1::ALL.to_vec()
    } else {
        requested
            .iter()
            .map(|name| ScenarioV1::parse(name).ok_or_else(|| anyhow!("unknown scenario: {name}")))
            .collect::<Result<Vec<_>>>()?
    };

    for scenario in scenarios {
        let name = scenario.name();
        let bundle = run_scenario(scenario).with_context(|| format!("running {name}"))?;
        verify_bundle(&bundle).with_context(|| format!("verifying {name}"))?;
        let report = bundle
            .json(REPORT_ARTIFACT)
            .ok_or_else(|| anyhow!("{name}: missing {REPORT_ARTIFACT}"))?;
        let outcome = canonical_json_bytes(&report["outcome"])?;

        println!("{name}.bundle_digest={}", bundle.digest);
        println!(
            "{name}.result_digest={}",
            report["result_digest"].as_str().unwrap_or_default()
        );
        println!("{name}.outcome={}", String::from_utf8(outcome)?);
    }
    Ok(())
}
