// crates/reqres-scenarios/src/lib.rs
// ============================================================================
// Module: ReqRes Conformance Scenarios
// Description: Catalog of independent assertions against the ReqRes API.
// Purpose: Run each conformance scenario against an injected client.
// Dependencies: reqres-client, reqres-contract, serde, thiserror
// ============================================================================

//! ## Overview
//! Every scenario is a [`ScenarioId`] variant. A scenario issues one or two
//! requests through the [`reqres_client::ApiClient`] it is given, then checks
//! the status code and either a schema from
//! [`reqres_contract::SchemaRegistry`] or literal field values. Scenarios
//! share no state: the update and delete scenarios create their own fixture
//! user first.
//!
//! [`run_catalog`] runs every scenario and collects a [`CatalogReport`]; one
//! failing scenario never stops the rest.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod assertions;
pub mod catalog;
pub mod error;
pub mod fixtures;
pub mod report;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::ScenarioId;
pub use error::ScenarioError;
pub use report::CatalogReport;
pub use report::ScenarioOutcome;
pub use report::run_catalog;
pub use report::run_scenarios;
