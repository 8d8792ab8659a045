// crates/reqres-scenarios/src/report.rs
// ============================================================================
// Module: Catalog Runner
// Description: Runs scenarios and aggregates their outcomes.
// Purpose: Keep every failure visible without one scenario stopping another.
// Dependencies: reqres-client, reqres-contract, serde
// ============================================================================

//! ## Overview
//! Scenarios run sequentially in the order given. Each produces one
//! [`ScenarioOutcome`]; a failure is rendered into the outcome and the runner
//! moves on to the next scenario.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Instant;

use reqres_client::ApiClient;
use reqres_contract::SchemaRegistry;
use serde::Serialize;

use crate::catalog::ScenarioId;

// ============================================================================
// SECTION: Report Types
// ============================================================================

/// Result of one scenario run.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    /// Scenario that ran.
    pub scenario: ScenarioId,
    /// Whether every assertion held.
    pub passed: bool,
    /// Rendered failure, when the scenario failed.
    pub failure: Option<String>,
    /// Wall-clock duration.
    pub elapsed_ms: u128,
}

/// Outcomes for a catalog run, in execution order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogReport {
    /// One outcome per scenario run.
    pub outcomes: Vec<ScenarioOutcome>,
}

impl CatalogReport {
    /// Returns true when every scenario passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }

    /// Returns the failed outcomes.
    #[must_use]
    pub fn failures(&self) -> Vec<&ScenarioOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed).collect()
    }

    /// Returns the outcome for `scenario`, if it ran.
    #[must_use]
    pub fn outcome(&self, scenario: ScenarioId) -> Option<&ScenarioOutcome> {
        self.outcomes.iter().find(|outcome| outcome.scenario == scenario)
    }

    /// Renders failures as `name: reason` lines.
    #[must_use]
    pub fn failure_summary(&self) -> String {
        self.failures()
            .iter()
            .map(|outcome| {
                format!("{}: {}", outcome.scenario, outcome.failure.as_deref().unwrap_or("failed"))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ============================================================================
// SECTION: Runner
// ============================================================================

/// Runs every catalog scenario sequentially.
pub async fn run_catalog(client: &ApiClient, registry: &SchemaRegistry) -> CatalogReport {
    run_scenarios(&ScenarioId::all(), client, registry).await
}

/// Runs the given scenarios sequentially, recording each outcome.
pub async fn run_scenarios(
    scenarios: &[ScenarioId],
    client: &ApiClient,
    registry: &SchemaRegistry,
) -> CatalogReport {
    let mut outcomes = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        let started = Instant::now();
        let result = scenario.run(client, registry).await;
        outcomes.push(ScenarioOutcome {
            scenario: *scenario,
            passed: result.is_ok(),
            failure: result.err().map(|err| err.to_string()),
            elapsed_ms: started.elapsed().as_millis(),
        });
    }
    CatalogReport {
        outcomes,
    }
}
