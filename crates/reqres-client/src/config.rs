// crates/reqres-client/src/config.rs
// ============================================================================
// Module: Client Configuration
// Description: Base URL and timeout settings for the ReqRes client.
// Purpose: Carry the injected target origin instead of a global constant.
// Dependencies: url
// ============================================================================

//! ## Overview
//! [`ClientConfig`] is the only configuration the client accepts. The base URL
//! is validated once at construction; request paths are appended to it
//! verbatim so that a base path prefix such as `/api` is preserved.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use url::Url;

use crate::client::ClientError;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Public ReqRes origin and API prefix.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";

/// Request timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Target settings injected into an [`crate::ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute base URL without a trailing slash.
    base_url: String,
    /// Per-request timeout.
    timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] when the value is not an
    /// absolute `http` or `https` URL, or carries a query or fragment.
    pub fn with_base_url(base_url: &str) -> Result<Self, ClientError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|err| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: err.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "base url must not carry a query or fragment".to_string(),
            });
        }
        Ok(Self {
            base_url: trimmed.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Replaces the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolves a request path against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidPath`] when the path is absolute, carries
    /// its own query string, or does not produce a valid URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        if path.contains("://") || path.contains('?') || path.contains('#') {
            return Err(ClientError::InvalidPath(path.to_string()));
        }
        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&joined).map_err(|_| ClientError::InvalidPath(path.to_string()))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
