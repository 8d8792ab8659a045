// crates/reqres-scenarios/src/assertions.rs
// ============================================================================
// Module: Response Assertions
// Description: Checks applied to normalized responses.
// Purpose: Turn contract mismatches into typed scenario errors.
// Dependencies: reqres-client, reqres-contract, serde_json
// ============================================================================

//! ## Overview
//! Each check inspects one aspect of an [`ApiResponse`] and returns a typed
//! [`ScenarioError`] naming the request, the expected value, and the observed
//! value. Checks never panic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqres_client::ApiResponse;
use reqres_contract::ResponseSchema;
use reqres_contract::SchemaRegistry;
use serde_json::Map;
use serde_json::Value;

use crate::error::ScenarioError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Pointer label used when the whole body is compared.
const ROOT_POINTER: &str = "/";

// ============================================================================
// SECTION: Status and Schema Checks
// ============================================================================

/// Fails unless the response carries `expected` status.
///
/// # Errors
///
/// Returns [`ScenarioError::StatusMismatch`] on any other status.
pub fn expect_status(
    request: &str,
    response: &ApiResponse,
    expected: u16,
) -> Result<(), ScenarioError> {
    if response.status == expected {
        return Ok(());
    }
    Err(ScenarioError::StatusMismatch {
        request: request.to_string(),
        expected,
        actual: response.status,
    })
}

/// Fails unless the body satisfies `schema`.
///
/// # Errors
///
/// Returns [`ScenarioError::Schema`] with every violation.
pub fn expect_schema(
    registry: &SchemaRegistry,
    schema: ResponseSchema,
    response: &ApiResponse,
) -> Result<(), ScenarioError> {
    registry.validate(schema, &response.body).map_err(ScenarioError::from)
}

// ============================================================================
// SECTION: Value Checks
// ============================================================================

/// Fails unless the value at `pointer` equals `expected`.
///
/// # Errors
///
/// Returns [`ScenarioError::ValueMismatch`]; an absent field reports `null`.
pub fn expect_value(
    request: &str,
    response: &ApiResponse,
    pointer: &str,
    expected: &Value,
) -> Result<(), ScenarioError> {
    let actual = response.pointer(pointer).cloned().unwrap_or(Value::Null);
    if &actual == expected {
        return Ok(());
    }
    Err(ScenarioError::ValueMismatch {
        request: request.to_string(),
        field: pointer.to_string(),
        expected: expected.clone(),
        actual,
    })
}

/// Fails unless the string at `pointer` equals `expected`.
///
/// # Errors
///
/// Returns [`ScenarioError::ValueMismatch`].
pub fn expect_str(
    request: &str,
    response: &ApiResponse,
    pointer: &str,
    expected: &str,
) -> Result<(), ScenarioError> {
    expect_value(request, response, pointer, &Value::String(expected.to_string()))
}

/// Fails unless the body is exactly `{}`.
///
/// # Errors
///
/// Returns [`ScenarioError::ValueMismatch`] carrying the whole body.
pub fn expect_empty_object(request: &str, response: &ApiResponse) -> Result<(), ScenarioError> {
    if response.is_empty_object() {
        return Ok(());
    }
    Err(ScenarioError::ValueMismatch {
        request: request.to_string(),
        field: ROOT_POINTER.to_string(),
        expected: Value::Object(Map::new()),
        actual: response.body.clone(),
    })
}

// ============================================================================
// SECTION: Chaining Helpers
// ============================================================================

/// Extracts the server-assigned `id` of a created resource.
///
/// ReqRes returns the id as a string; numeric ids are accepted as well.
///
/// # Errors
///
/// Returns [`ScenarioError::MissingField`] when `id` is absent, empty, or not
/// a scalar.
pub fn created_id(request: &str, response: &ApiResponse) -> Result<String, ScenarioError> {
    match response.pointer("/id") {
        Some(Value::String(id)) if !id.is_empty() => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        _ => Err(ScenarioError::MissingField {
            request: request.to_string(),
            field: "/id".to_string(),
        }),
    }
}
