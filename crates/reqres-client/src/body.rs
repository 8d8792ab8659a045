// crates/reqres-client/src/body.rs
// ============================================================================
// Module: Body Normalization
// Description: Turns raw response payloads into JSON values.
// Purpose: Guarantee callers a JSON object instead of null or empty bytes.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Response bodies are decoded with one rule set:
//! - empty or whitespace-only payloads become `{}`;
//! - a JSON `null` becomes `{}`;
//! - a 404 whose payload is not JSON becomes `{}`;
//! - any other payload that is not JSON is a decode error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;

use crate::client::ClientError;

/// Status code whose non-JSON payloads normalize to `{}`.
const NOT_FOUND: u16 = 404;

/// Decodes a response payload into a JSON value.
///
/// # Errors
///
/// Returns [`ClientError::Decode`] when a non-404 payload is not valid JSON.
pub fn normalize_body(status: u16, payload: &[u8]) -> Result<Value, ClientError> {
    if payload.iter().all(u8::is_ascii_whitespace) {
        return Ok(empty_object());
    }
    match serde_json::from_slice::<Value>(payload) {
        Ok(Value::Null) => Ok(empty_object()),
        Ok(value) => Ok(value),
        Err(_) if status == NOT_FOUND => Ok(empty_object()),
        Err(err) => Err(ClientError::Decode {
            status,
            message: err.to_string(),
        }),
    }
}

/// Returns `{}`.
fn empty_object() -> Value {
    Value::Object(Map::new())
}
