// crates/reqres-client/src/events.rs
// ============================================================================
// Module: Request Event Logging
// Description: Structured events for each HTTP exchange.
// Purpose: Emit JSON-line logs without a hard logging dependency.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Every exchange performed by [`crate::ApiClient`] produces one
//! [`RequestEvent`]. Sinks decide where events go: nowhere (the default),
//! stderr, or an append-only file. Sinks never fail the request; write errors
//! are dropped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::request::HttpMethod;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Event payload for one HTTP exchange.
#[derive(Debug, Clone, Serialize)]
pub struct RequestEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// HTTP method.
    pub method: HttpMethod,
    /// Fully resolved URL.
    pub url: String,
    /// Response status when a response arrived.
    pub status: Option<u16>,
    /// Transport or decode failure message.
    pub error: Option<String>,
    /// Wall-clock duration of the exchange.
    pub elapsed_ms: u128,
    /// Serialized request body size in bytes.
    pub request_bytes: usize,
    /// Raw response body size in bytes.
    pub response_bytes: usize,
}

/// Inputs required to construct a request event.
pub struct RequestEventParams {
    /// HTTP method.
    pub method: HttpMethod,
    /// Fully resolved URL.
    pub url: String,
    /// Response status when a response arrived.
    pub status: Option<u16>,
    /// Failure message.
    pub error: Option<String>,
    /// Wall-clock duration of the exchange.
    pub elapsed_ms: u128,
    /// Serialized request body size in bytes.
    pub request_bytes: usize,
    /// Raw response body size in bytes.
    pub response_bytes: usize,
}

impl RequestEvent {
    /// Creates a new event stamped with the current time.
    #[must_use]
    pub fn new(params: RequestEventParams) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event: "http_exchange",
            timestamp_ms,
            method: params.method,
            url: params.url,
            status: params.status,
            error: params.error,
            elapsed_ms: params.elapsed_ms,
            request_bytes: params.request_bytes,
            response_bytes: params.response_bytes,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Destination for request events.
pub trait RequestEventSink: Send + Sync {
    /// Record one event.
    fn record(&self, event: &RequestEvent);
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Sink that discards events.
pub struct NoopEventSink;

impl RequestEventSink for NoopEventSink {
    fn record(&self, _event: &RequestEvent) {}
}

/// Sink that logs JSON lines to stderr.
pub struct StderrEventSink;

impl RequestEventSink for StderrEventSink {
    fn record(&self, event: &RequestEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Sink that logs JSON lines to a file.
pub struct FileEventSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileEventSink {
    /// Opens the log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl RequestEventSink for FileEventSink {
    fn record(&self, event: &RequestEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}
