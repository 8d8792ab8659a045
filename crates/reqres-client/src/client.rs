// crates/reqres-client/src/client.rs
// ============================================================================
// Module: ReqRes API Client
// Description: Single-shot HTTP client with transcript capture.
// Purpose: Send one request per call and hand back a normalized response.
// Dependencies: reqwest, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! [`ApiClient`] owns one pooled [`reqwest::Client`] built from a
//! [`ClientConfig`]. Calls are never retried: a transport failure is returned
//! as [`ClientError::Transport`] and ends the caller's scenario. Successful
//! exchanges and failures alike are appended to the transcript and reported to
//! the configured [`RequestEventSink`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::time::Instant;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::body::normalize_body;
use crate::config::ClientConfig;
use crate::events::NoopEventSink;
use crate::events::RequestEvent;
use crate::events::RequestEventParams;
use crate::events::RequestEventSink;
use crate::request::ApiRequest;
use crate::request::ApiResponse;
use crate::request::HttpMethod;
use crate::request::QueryValue;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base URL is unusable.
    #[error("invalid base url {url}: {reason}")]
    InvalidBaseUrl {
        /// Rejected value.
        url: String,
        /// Parse or validation failure.
        reason: String,
    },
    /// A request path could not be resolved against the base URL.
    #[error("invalid request path: {0}")]
    InvalidPath(String),
    /// A `POST`/`PUT` request was issued without a JSON body.
    #[error("{0} request requires a json body")]
    MissingBody(HttpMethod),
    /// The underlying HTTP client could not be built.
    #[error("failed to build http client: {0}")]
    Build(String),
    /// Network, DNS, TLS, or timeout failure.
    #[error("{method} {url} failed: {message}")]
    Transport {
        /// Request method.
        method: HttpMethod,
        /// Resolved URL.
        url: String,
        /// Transport diagnostic.
        message: String,
    },
    /// The response payload was not JSON.
    #[error("invalid json body (status {status}): {message}")]
    Decode {
        /// Response status.
        status: u16,
        /// Parser diagnostic.
        message: String,
    },
}

// ============================================================================
// SECTION: Transcript
// ============================================================================

/// One recorded exchange.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    /// 1-based position in the transcript.
    pub sequence: u64,
    /// Request that was sent.
    pub request: ApiRequest,
    /// Status code, when a response arrived.
    pub status: Option<u16>,
    /// Normalized body, when a response decoded.
    pub response: Option<Value>,
    /// Failure message, when the exchange failed.
    pub error: Option<String>,
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// HTTP client bound to one base URL.
#[derive(Clone)]
pub struct ApiClient {
    /// Injected target settings.
    config: ClientConfig,
    /// Pooled HTTP client.
    client: Client,
    /// Exchanges performed through this client and its clones.
    transcript: Arc<Mutex<Vec<TranscriptEntry>>>,
    /// Event destination.
    sink: Arc<dyn RequestEventSink>,
}

impl ApiClient {
    /// Creates a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] when the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|err| ClientError::Build(err.to_string()))?;
        Ok(Self {
            config,
            client,
            transcript: Arc::new(Mutex::new(Vec::new())),
            sink: Arc::new(NoopEventSink),
        })
    }

    /// Routes request events to `sink`.
    #[must_use]
    pub fn with_event_sink(mut self, sink: Arc<dyn RequestEventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns a snapshot of the transcript entries.
    #[must_use]
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Issues one request built from its parts.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(&str, QueryValue)],
        body: Option<Value>,
    ) -> Result<ApiResponse, ClientError> {
        let mut request = ApiRequest::new(method, path);
        for (key, value) in query {
            request = request.with_query(*key, value.clone());
        }
        if let Some(body) = body {
            request = request.with_body(body);
        }
        self.send(&request).await
    }

    /// Issues a `GET` request.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn get(&self, path: &str) -> Result<ApiResponse, ClientError> {
        self.send(&ApiRequest::get(path)).await
    }

    /// Issues a `GET` request with query parameters.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn get_with_query(
        &self,
        path: &str,
        query: &[(&str, QueryValue)],
    ) -> Result<ApiResponse, ClientError> {
        self.request(HttpMethod::Get, path, query, None).await
    }

    /// Issues a `POST` request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn post(&self, path: &str, body: Value) -> Result<ApiResponse, ClientError> {
        self.send(&ApiRequest::post(path, body)).await
    }

    /// Issues a `PUT` request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn put(&self, path: &str, body: Value) -> Result<ApiResponse, ClientError> {
        self.send(&ApiRequest::put(path, body)).await
    }

    /// Issues a `DELETE` request.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn delete(&self, path: &str) -> Result<ApiResponse, ClientError> {
        self.send(&ApiRequest::delete(path)).await
    }

    /// Sends a request and normalizes the response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingBody`] for `POST`/`PUT` without a body,
    /// [`ClientError::InvalidPath`] when the path cannot be resolved,
    /// [`ClientError::Transport`] when the exchange fails on the wire, and
    /// [`ClientError::Decode`] when the payload is not JSON.
    pub async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ClientError> {
        if request.method.requires_body() && request.body.is_none() {
            return Err(ClientError::MissingBody(request.method));
        }
        let url = self.config.endpoint(&request.path)?;
        let url_text = url.to_string();
        let request_bytes = request
            .body
            .as_ref()
            .and_then(|body| serde_json::to_vec(body).ok())
            .map_or(0, |bytes| bytes.len());

        let mut http_request = self.client.request(request.method.to_reqwest(), url);
        if !request.query.is_empty() {
            http_request = http_request.query(&request.rendered_query());
        }
        if let Some(body) = &request.body {
            http_request = http_request.json(body);
        }

        let started = Instant::now();
        let exchange = async move {
            let response = http_request.send().await?;
            let status = response.status().as_u16();
            let payload = response.bytes().await?.to_vec();
            Ok::<_, reqwest::Error>((status, payload))
        }
        .await;
        let elapsed_ms = started.elapsed().as_millis();

        let (status, payload) = match exchange {
            Ok(parts) => parts,
            Err(err) => {
                let message = err.to_string();
                self.record(request, None, None, Some(message.clone()));
                self.sink.record(&RequestEvent::new(RequestEventParams {
                    method: request.method,
                    url: url_text.clone(),
                    status: err.status().map(|status| status.as_u16()),
                    error: Some(message.clone()),
                    elapsed_ms,
                    request_bytes,
                    response_bytes: 0,
                }));
                return Err(ClientError::Transport {
                    method: request.method,
                    url: url_text,
                    message,
                });
            }
        };

        let decoded = normalize_body(status, &payload);
        let error = decoded.as_ref().err().map(ToString::to_string);
        self.record(request, Some(status), decoded.as_ref().ok().cloned(), error.clone());
        self.sink.record(&RequestEvent::new(RequestEventParams {
            method: request.method,
            url: url_text,
            status: Some(status),
            error,
            elapsed_ms,
            request_bytes,
            response_bytes: payload.len(),
        }));
        Ok(ApiResponse {
            status,
            body: decoded?,
        })
    }

    /// Appends an exchange to the transcript.
    fn record(
        &self,
        request: &ApiRequest,
        status: Option<u16>,
        response: Option<Value>,
        error: Option<String>,
    ) {
        let mut guard = self.transcript.lock().unwrap_or_else(PoisonError::into_inner);
        let sequence = u64::try_from(guard.len()).unwrap_or(u64::MAX).saturating_add(1);
        guard.push(TranscriptEntry {
            sequence,
            request: request.clone(),
            status,
            response,
            error,
        });
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
