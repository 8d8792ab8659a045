// system-tests/tests/suites/conformance.rs
// ============================================================================
// Module: Conformance Tests
// Description: Scenario catalog against a conformant loopback ReqRes.
// Purpose: Ensure every scenario passes when the contract holds.
// Dependencies: system-tests helpers, reqres-scenarios
// ============================================================================

//! ## Overview
//! Each scenario runs against its own conformant fixture stub, so scenarios
//! never observe one another's requests.
//! Invariants:
//! - Scenarios are independent and need no prior state.
//! - Failures surface as typed scenario errors, never panics.

#![allow(
    clippy::missing_docs_in_private_items,
    reason = "Test suite helpers keep documentation concise."
)]

use std::error::Error;

use helpers::artifacts::TestReporter;
use helpers::fixture_stub::FixtureProfile;
use helpers::fixture_stub::StubRequest;
use helpers::fixture_stub::spawn_fixture_stub;
use helpers::harness::registry;
use helpers::harness::stub_client;
use reqres_scenarios::ScenarioId;
use reqres_scenarios::fixtures;
use reqres_scenarios::run_catalog;
use serde_json::Value;
use serde_json::json;

use crate::helpers;

const TARGET: &str = "fixture-stub";

fn standard_artifacts() -> Vec<String> {
    vec![
        "summary.json".to_string(),
        "summary.md".to_string(),
        "requests.jsonl".to_string(),
        "transcript.json".to_string(),
    ]
}

/// Runs one scenario against a fresh conformant stub and records artifacts.
async fn run_conformant(
    test_name: &str,
    scenario: ScenarioId,
) -> Result<Vec<StubRequest>, Box<dyn Error>> {
    let mut reporter = TestReporter::new(test_name, TARGET)?;
    let stub = spawn_fixture_stub(FixtureProfile::Conformant)?;
    let client = stub_client(stub.base_url(), reporter.artifacts())?;
    let registry = registry()?;

    let result = scenario.run(&client, &registry).await;
    reporter.artifacts().write_json("transcript.json", &client.transcript())?;
    if let Err(err) = result {
        reporter.finish("fail", vec![err.to_string()], standard_artifacts())?;
        return Err(format!("{scenario} failed: {err}").into());
    }
    let note = format!("{scenario} passed against {}", client.config().base_url());
    reporter.finish("pass", vec![note], standard_artifacts())?;
    drop(reporter);
    Ok(stub.requests())
}

#[tokio::test(flavor = "multi_thread")]
async fn conformance_list_users() -> Result<(), Box<dyn Error>> {
    let requests = run_conformant("conformance_list_users", ScenarioId::ListUsers).await?;
    let [request] = requests.as_slice() else {
        return Err(format!("expected one request, got {}", requests.len()).into());
    };
    if request.path != "/users" || request.query.get("page") != Some(&json!(2)) {
        return Err(format!("unexpected list request: {request:?}").into());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn conformance_single_user() -> Result<(), Box<dyn Error>> {
    run_conformant("conformance_single_user", ScenarioId::SingleUser).await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn conformance_create_user() -> Result<(), Box<dyn Error>> {
    let requests = run_conformant("conformance_create_user", ScenarioId::CreateUser).await?;
    let expected = json!({ "name": "neo", "job": "chosen_one" });
    if requests.first().and_then(|request| request.body.as_ref()) != Some(&expected) {
        return Err(format!("unexpected create body: {requests:?}").into());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn conformance_single_user_not_found() -> Result<(), Box<dyn Error>> {
    run_conformant("conformance_single_user_not_found", ScenarioId::SingleUserNotFound).await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn conformance_unknown_resource_list() -> Result<(), Box<dyn Error>> {
    let requests =
        run_conformant("conformance_unknown_resource_list", ScenarioId::UnknownResourceList)
            .await?;
    if requests.first().and_then(|request| request.query.get("per_page")) != Some(&json!(1)) {
        return Err(format!("per_page not sent: {requests:?}").into());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn conformance_unknown_resource_not_found() -> Result<(), Box<dyn Error>> {
    run_conformant("conformance_unknown_resource_not_found", ScenarioId::UnknownResourceNotFound)
        .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn conformance_update_user_creates_its_own_fixture() -> Result<(), Box<dyn Error>> {
    let requests = run_conformant("conformance_update_user", ScenarioId::UpdateUser).await?;
    let [create, update] = requests.as_slice() else {
        return Err(format!("expected two requests, got {}", requests.len()).into());
    };
    if create.method != "POST" || create.path != "/users" {
        return Err(format!("update did not create a fixture first: {create:?}").into());
    }
    if update.method != "PUT" || update.path != "/users/500" {
        return Err(format!("update targeted the wrong user: {update:?}").into());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn conformance_delete_user_creates_its_own_fixture() -> Result<(), Box<dyn Error>> {
    let requests = run_conformant("conformance_delete_user", ScenarioId::DeleteUser).await?;
    let [create, delete] = requests.as_slice() else {
        return Err(format!("expected two requests, got {}", requests.len()).into());
    };
    if create.method != "POST" || delete.method != "DELETE" || delete.path != "/users/500" {
        return Err(format!("unexpected delete flow: {requests:?}").into());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn conformance_register_success() -> Result<(), Box<dyn Error>> {
    run_conformant("conformance_register_success", ScenarioId::RegisterSuccess).await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn conformance_register_missing_password() -> Result<(), Box<dyn Error>> {
    let requests =
        run_conformant("conformance_register_missing_password", ScenarioId::RegisterMissingPassword)
            .await?;
    let sent_password =
        requests.first().and_then(|request| request.body.as_ref()?.get("password").cloned());
    if sent_password.is_some() {
        return Err("password must be omitted, not sent empty".into());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn conformance_register_undefined_user() -> Result<(), Box<dyn Error>> {
    run_conformant("conformance_register_undefined_user", ScenarioId::RegisterUndefinedUser)
        .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn conformance_login_success() -> Result<(), Box<dyn Error>> {
    run_conformant("conformance_login_success", ScenarioId::LoginSuccess).await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn conformance_login_missing_password() -> Result<(), Box<dyn Error>> {
    run_conformant("conformance_login_missing_password", ScenarioId::LoginMissingPassword).await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn conformance_full_catalog() -> Result<(), Box<dyn Error>> {
    let mut reporter = TestReporter::new("conformance_full_catalog", TARGET)?;
    let stub = spawn_fixture_stub(FixtureProfile::Conformant)?;
    let client = stub_client(stub.base_url(), reporter.artifacts())?;
    let registry = registry()?;

    let report = run_catalog(&client, &registry).await;
    reporter.artifacts().write_json("catalog_report.json", &report)?;
    reporter.artifacts().write_json("transcript.json", &client.transcript())?;
    if !report.all_passed() {
        return Err(format!("catalog failures:\n{}", report.failure_summary()).into());
    }
    if report.outcomes.len() != ScenarioId::all().len() {
        return Err(format!("expected 13 outcomes, got {}", report.outcomes.len()).into());
    }

    let mut artifacts = standard_artifacts();
    artifacts.push("catalog_report.json".to_string());
    reporter.finish("pass", vec!["all scenarios passed".to_string()], artifacts)?;
    drop(reporter);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn conformance_not_found_is_idempotent() -> Result<(), Box<dyn Error>> {
    let mut reporter = TestReporter::new("conformance_not_found_is_idempotent", TARGET)?;
    let stub = spawn_fixture_stub(FixtureProfile::Conformant)?;
    let client = stub_client(stub.base_url(), reporter.artifacts())?;
    let registry = registry()?;

    for scenario in [ScenarioId::SingleUserNotFound, ScenarioId::UnknownResourceNotFound] {
        for attempt in 1..=3 {
            if let Err(err) = scenario.run(&client, &registry).await {
                return Err(format!("{scenario} attempt {attempt} failed: {err}").into());
            }
        }
    }
    if client.transcript().len() != 6 {
        return Err(format!("expected 6 exchanges, got {}", client.transcript().len()).into());
    }

    reporter.finish("pass", vec!["repeated reads agree".to_string()], standard_artifacts())?;
    drop(reporter);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn conformance_register_missing_password_for_any_email() -> Result<(), Box<dyn Error>> {
    let mut reporter =
        TestReporter::new("conformance_register_missing_password_for_any_email", TARGET)?;
    let stub = spawn_fixture_stub(FixtureProfile::Conformant)?;
    let client = stub_client(stub.base_url(), reporter.artifacts())?;

    for email in [fixtures::PASSWORDLESS_EMAIL, fixtures::DEFINED_EMAIL, fixtures::UNDEFINED_EMAIL]
    {
        let response = client.post("/register", json!({ "email": email })).await?;
        if response.status != 400 {
            return Err(format!("{email}: expected 400, got {}", response.status).into());
        }
        if response.str_at("/error") != Some(fixtures::MISSING_PASSWORD) {
            return Err(format!("{email}: unexpected body {}", response.body).into());
        }
    }

    reporter.artifacts().write_json("transcript.json", &client.transcript())?;
    reporter.finish(
        "pass",
        vec!["missing password rejected regardless of email".to_string()],
        standard_artifacts(),
    )?;
    drop(reporter);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn conformance_request_log_records_every_exchange() -> Result<(), Box<dyn Error>> {
    let mut reporter =
        TestReporter::new("conformance_request_log_records_every_exchange", TARGET)?;
    let stub = spawn_fixture_stub(FixtureProfile::Conformant)?;
    let client = stub_client(stub.base_url(), reporter.artifacts())?;
    let registry = registry()?;

    ScenarioId::DeleteUser.run(&client, &registry).await?;
    let log = std::fs::read_to_string(reporter.artifacts().event_log())?;
    let events = log
        .lines()
        .map(serde_json::from_str::<Value>)
        .collect::<Result<Vec<_>, _>>()?;
    let statuses: Vec<Option<u64>> =
        events.iter().map(|event| event.get("status").and_then(Value::as_u64)).collect();
    if statuses != [Some(201), Some(204)] {
        return Err(format!("unexpected logged statuses: {statuses:?}").into());
    }

    reporter.finish("pass", vec!["request log complete".to_string()], standard_artifacts())?;
    drop(reporter);
    Ok(())
}
