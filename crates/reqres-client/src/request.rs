// crates/reqres-client/src/request.rs
// ============================================================================
// Module: Request and Response Types
// Description: Request descriptions and normalized responses for the ReqRes client.
// Purpose: Keep one immutable value per request and per response.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! [`ApiRequest`] describes one call: method, relative path, query pairs, and
//! an optional JSON body. [`ApiResponse`] is what the client hands back: the
//! status code and a JSON body that is never `null`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Method
// ============================================================================

/// HTTP methods used by the conformance scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// `GET`.
    Get,
    /// `POST`.
    Post,
    /// `PUT`.
    Put,
    /// `DELETE`.
    Delete,
}

impl HttpMethod {
    /// Returns the canonical method token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns true when the method must carry a JSON body.
    #[must_use]
    pub const fn requires_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    /// Maps the method onto the reqwest representation.
    #[must_use]
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Query Values
// ============================================================================

/// Scalar value allowed in a query string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// Text value.
    Text(String),
    /// Signed integer.
    Integer(i64),
    /// Boolean flag.
    Bool(bool),
}

impl QueryValue {
    /// Renders the value as it appears on the wire.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Bool(value) => value.to_string(),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

// ============================================================================
// SECTION: Request
// ============================================================================

/// One HTTP call relative to the configured base URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Path relative to the base URL, for example `/users/2`.
    pub path: String,
    /// Query pairs in insertion order.
    pub query: Vec<(String, QueryValue)>,
    /// JSON payload for `POST`/`PUT`.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a request without query or body.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Creates a `GET` request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a `POST` request with a JSON body.
    #[must_use]
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(HttpMethod::Post, path).with_body(body)
    }

    /// Creates a `PUT` request with a JSON body.
    #[must_use]
    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(HttpMethod::Put, path).with_body(body)
    }

    /// Creates a `DELETE` request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Returns query pairs rendered as strings.
    #[must_use]
    pub fn rendered_query(&self) -> Vec<(&str, String)> {
        self.query.iter().map(|(key, value)| (key.as_str(), value.render())).collect()
    }
}

// ============================================================================
// SECTION: Response
// ============================================================================

/// Normalized response returned by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Parsed body; `{}` when the remote sent no content.
    pub body: Value,
}

impl ApiResponse {
    /// Returns the value at a JSON pointer such as `/data/0/name`.
    #[must_use]
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        self.body.pointer(pointer)
    }

    /// Returns the string at a JSON pointer.
    #[must_use]
    pub fn str_at(&self, pointer: &str) -> Option<&str> {
        self.pointer(pointer).and_then(Value::as_str)
    }

    /// Returns true when the body is the empty object.
    #[must_use]
    pub fn is_empty_object(&self) -> bool {
        self.body.as_object().is_some_and(serde_json::Map::is_empty)
    }
}
