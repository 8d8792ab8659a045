// crates/reqres-contract/src/schemas.rs
// ============================================================================
// Module: Contract Schemas
// Description: JSON schema builders for ReqRes response bodies.
// Purpose: Provide canonical structural contracts for each response kind.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! This module defines the JSON Schema payloads for the response bodies the
//! conformance scenarios inspect. Each [`ResponseSchema`] variant maps to one
//! document. Documents allow additional properties so that fields the remote
//! adds later do not break conformance; required fields, types, and string
//! shapes (URLs, timestamps) are enforced.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Draft identifier stamped on every schema document.
const SCHEMA_DRAFT: &str = "https://json-schema.org/draft/2020-12/schema";

/// Pattern for absolute http(s) URLs.
const URL_PATTERN: &str = r"^https?://[^\s/$.?#][^\s]*$";

/// Pattern for ISO-8601 date-time values with an explicit offset.
const TIMESTAMP_PATTERN: &str =
    r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?(Z|[+-]\d{2}:\d{2})$";

// ============================================================================
// SECTION: Response Kinds
// ============================================================================

/// Response shapes with a published structural contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseSchema {
    /// `GET /users?page=N` page envelope.
    ListUsers,
    /// `GET /users/{id}` envelope.
    SingleUser,
    /// `POST /users` echo with server-assigned id and timestamp.
    CreatedUser,
    /// `POST /register` success body.
    SuccessReg,
}

impl ResponseSchema {
    /// Returns every response kind in registry order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::ListUsers, Self::SingleUser, Self::CreatedUser, Self::SuccessReg]
    }

    /// Returns the stable schema name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListUsers => "list_users",
            Self::SingleUser => "single_user",
            Self::CreatedUser => "created_user",
            Self::SuccessReg => "success_reg",
        }
    }

    /// Returns the JSON schema document for this response kind.
    #[must_use]
    pub fn document(self) -> Value {
        match self {
            Self::ListUsers => list_users_schema(),
            Self::SingleUser => single_user_schema(),
            Self::CreatedUser => created_user_schema(),
            Self::SuccessReg => success_reg_schema(),
        }
    }
}

impl fmt::Display for ResponseSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Public Schema Entrypoints
// ============================================================================

/// Returns the JSON schema for the paginated user list.
#[must_use]
pub fn list_users_schema() -> Value {
    json!({
        "$schema": SCHEMA_DRAFT,
        "$id": schema_id(ResponseSchema::ListUsers),
        "title": "ReqRes list users",
        "type": "object",
        "required": ["page", "per_page", "total", "total_pages", "data", "support"],
        "properties": {
            "page": { "type": "integer" },
            "per_page": { "type": "integer" },
            "total": { "type": "integer" },
            "total_pages": { "type": "integer" },
            "data": {
                "type": "array",
                "items": user_schema()
            },
            "support": support_schema()
        }
    })
}

/// Returns the JSON schema for a single user envelope.
#[must_use]
pub fn single_user_schema() -> Value {
    json!({
        "$schema": SCHEMA_DRAFT,
        "$id": schema_id(ResponseSchema::SingleUser),
        "title": "ReqRes single user",
        "type": "object",
        "required": ["data", "support"],
        "properties": {
            "data": user_schema(),
            "support": support_schema()
        }
    })
}

/// Returns the JSON schema for the created-user echo.
#[must_use]
pub fn created_user_schema() -> Value {
    json!({
        "$schema": SCHEMA_DRAFT,
        "$id": schema_id(ResponseSchema::CreatedUser),
        "title": "ReqRes created user",
        "type": "object",
        "required": ["name", "job", "id", "createdAt"],
        "properties": {
            "name": { "type": "string" },
            "job": { "type": "string" },
            "id": { "type": "string" },
            "createdAt": timestamp_schema()
        }
    })
}

/// Returns the JSON schema for a successful registration.
#[must_use]
pub fn success_reg_schema() -> Value {
    json!({
        "$schema": SCHEMA_DRAFT,
        "$id": schema_id(ResponseSchema::SuccessReg),
        "title": "ReqRes successful registration",
        "type": "object",
        "required": ["id", "token"],
        "properties": {
            "id": { "type": "integer" },
            "token": { "type": "string" }
        }
    })
}

// ============================================================================
// SECTION: Shared Fragments
// ============================================================================

/// Builds the canonical `$id` for a response kind.
fn schema_id(kind: ResponseSchema) -> String {
    format!("reqres://contract/schemas/{}.schema.json", kind.as_str())
}

/// User record embedded in list and single-user envelopes.
fn user_schema() -> Value {
    json!({
        "type": "object",
        "required": ["id", "email", "first_name", "last_name", "avatar"],
        "properties": {
            "id": { "type": "integer" },
            "email": { "type": "string" },
            "first_name": { "type": "string" },
            "last_name": { "type": "string" },
            "avatar": url_schema()
        }
    })
}

/// Support banner attached to user envelopes.
fn support_schema() -> Value {
    json!({
        "type": "object",
        "required": ["url", "text"],
        "properties": {
            "url": url_schema(),
            "text": { "type": "string" }
        }
    })
}

/// String constrained to an absolute http(s) URL.
fn url_schema() -> Value {
    json!({ "type": "string", "pattern": URL_PATTERN })
}

/// String constrained to an ISO-8601 date-time.
fn timestamp_schema() -> Value {
    json!({ "type": "string", "pattern": TIMESTAMP_PATTERN })
}
