// system-tests/tests/suites/live.rs
// ============================================================================
// Module: Live Tests
// Description: Scenario catalog against the configured ReqRes origin.
// Purpose: Detect drift in the real service.
// Dependencies: system-tests, reqres-scenarios
// ============================================================================

//! ## Overview
//! Targets `REQRES_BASE_URL`, or the public origin when unset. Built only
//! with the `system-tests` feature because it needs network access.

#![allow(
    clippy::missing_docs_in_private_items,
    reason = "Test suite helpers keep documentation concise."
)]

use std::error::Error;

use helpers::artifacts::TestReporter;
use helpers::harness::client_for;
use helpers::harness::registry;
use reqres_scenarios::ScenarioId;
use reqres_scenarios::run_catalog;
use reqres_scenarios::run_scenarios;
use system_tests::config::SystemTestConfig;

use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn live_full_catalog() -> Result<(), Box<dyn Error>> {
    let config = SystemTestConfig::load()?.client_config()?;
    let mut reporter = TestReporter::new("live_full_catalog", config.base_url())?;
    let client = client_for(config, reporter.artifacts())?;
    let registry = registry()?;

    let report = run_catalog(&client, &registry).await;
    reporter.artifacts().write_json("catalog_report.json", &report)?;
    reporter.artifacts().write_json("transcript.json", &client.transcript())?;
    let artifacts = vec![
        "summary.json".to_string(),
        "summary.md".to_string(),
        "requests.jsonl".to_string(),
        "catalog_report.json".to_string(),
        "transcript.json".to_string(),
    ];
    if !report.all_passed() {
        let summary = report.failure_summary();
        reporter.finish("fail", summary.lines().map(str::to_string).collect(), artifacts)?;
        return Err(format!("live catalog failures:\n{summary}").into());
    }

    let notes = vec![
        format!("target {} conforms", client.config().base_url()),
        format!("artifacts under {}", reporter.artifacts().root().display()),
    ];
    reporter.finish("pass", notes, artifacts)?;
    drop(reporter);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn live_reads_are_repeatable() -> Result<(), Box<dyn Error>> {
    let config = SystemTestConfig::load()?.client_config()?;
    let mut reporter = TestReporter::new("live_reads_are_repeatable", config.base_url())?;
    let client = client_for(config, reporter.artifacts())?;
    let registry = registry()?;

    let reads = [
        ScenarioId::SingleUserNotFound,
        ScenarioId::UnknownResourceNotFound,
        ScenarioId::SingleUserNotFound,
        ScenarioId::UnknownResourceNotFound,
    ];
    let report = run_scenarios(&reads, &client, &registry).await;
    if !report.all_passed() {
        return Err(format!("repeated reads disagree:\n{}", report.failure_summary()).into());
    }

    reporter.finish("pass", vec!["not-found reads repeat".to_string()], Vec::new())?;
    drop(reporter);
    Ok(())
}
