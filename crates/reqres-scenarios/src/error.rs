// crates/reqres-scenarios/src/error.rs
// ============================================================================
// Module: Scenario Errors
// Description: Failure taxonomy for conformance scenarios.
// Purpose: Report why a scenario failed with expected and actual values.
// Dependencies: reqres-client, reqres-contract, serde_json, thiserror
// ============================================================================

//! ## Overview
//! [`ScenarioError`] is the single failure type a scenario returns. Transport
//! failures abort the scenario; every other variant describes one contract
//! mismatch with enough detail to diagnose it from the report alone.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqres_client::ClientError;
use reqres_contract::SchemaViolation;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Reasons a scenario fails.
///
/// # Invariants
/// - Mismatch variants always carry both the expected and the observed value.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Transport or decode failure; the scenario cannot continue.
    #[error(transparent)]
    Client(#[from] ClientError),
    /// The response status differs from the contract.
    #[error("{request}: expected status {expected}, got {actual}")]
    StatusMismatch {
        /// Request label, for example `GET /users/23`.
        request: String,
        /// Contracted status.
        expected: u16,
        /// Observed status.
        actual: u16,
    },
    /// The response body does not satisfy its schema.
    #[error(transparent)]
    Schema(#[from] SchemaViolation),
    /// A field holds a value other than the contracted literal.
    #[error("{request}: {field} expected {expected}, got {actual}")]
    ValueMismatch {
        /// Request label.
        request: String,
        /// JSON pointer of the field.
        field: String,
        /// Contracted value.
        expected: Value,
        /// Observed value (`null` when absent).
        actual: Value,
    },
    /// A field needed to continue the scenario is absent or unusable.
    #[error("{request}: missing field {field}")]
    MissingField {
        /// Request label.
        request: String,
        /// JSON pointer of the field.
        field: String,
    },
}
