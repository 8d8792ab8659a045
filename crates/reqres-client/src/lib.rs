// crates/reqres-client/src/lib.rs
// ============================================================================
// Module: ReqRes HTTP Client
// Description: Thin HTTP adapter for the ReqRes REST API.
// Purpose: Issue one request against a configured base URL and normalize it.
// Dependencies: reqwest, serde, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! The client crate wraps a single [`reqwest::Client`] behind [`ApiClient`].
//! Each call resolves a path against the injected [`ClientConfig`] base URL,
//! sends at most one HTTP request (no retries), and returns an
//! [`ApiResponse`] whose body is always a JSON value, `{}` when the remote
//! sends nothing. Exchanges are recorded in a transcript and emitted to a
//! [`RequestEventSink`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod body;
pub mod client;
pub mod config;
pub mod events;
pub mod request;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use client::ApiClient;
pub use client::ClientError;
pub use client::TranscriptEntry;
pub use config::ClientConfig;
pub use config::DEFAULT_BASE_URL;
pub use config::DEFAULT_TIMEOUT;
pub use events::FileEventSink;
pub use events::NoopEventSink;
pub use events::RequestEvent;
pub use events::RequestEventSink;
pub use events::StderrEventSink;
pub use request::ApiRequest;
pub use request::ApiResponse;
pub use request::HttpMethod;
pub use request::QueryValue;
