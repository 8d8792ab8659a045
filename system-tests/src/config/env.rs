// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for system tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: reqres-client
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8 fails closed, as do empty values.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use reqres_client::ClientConfig;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTestEnv {
    /// Optional base URL override for the target API.
    BaseUrl,
    /// Optional artifact root override.
    RunRoot,
    /// Mirror request events to stderr (`true`/`false` or `1`/`0`).
    LogRequests,
}

impl SystemTestEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "REQRES_BASE_URL",
            Self::RunRoot => "REQRES_SYSTEM_TEST_RUN_ROOT",
            Self::LogRequests => "REQRES_SYSTEM_TEST_LOG_REQUESTS",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed system test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SystemTestConfig {
    /// Optional base URL override.
    pub base_url: Option<String>,
    /// Optional artifact root override.
    pub run_root: Option<PathBuf>,
    /// Mirror request events to stderr.
    pub log_requests: bool,
}

impl SystemTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is empty,
    /// or fails validation (for example, an invalid boolean value).
    pub fn load() -> Result<Self, String> {
        let base_url = read_env_nonempty(SystemTestEnv::BaseUrl.as_str())?;
        let run_root = read_env_nonempty(SystemTestEnv::RunRoot.as_str())?.map(PathBuf::from);
        let log_requests = parse_bool_env(
            SystemTestEnv::LogRequests.as_str(),
            read_env_nonempty(SystemTestEnv::LogRequests.as_str())?,
        )?;
        Ok(Self {
            base_url,
            run_root,
            log_requests,
        })
    }

    /// Builds the client configuration, defaulting to the public origin.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL override is not a usable URL.
    pub fn client_config(&self) -> Result<ClientConfig, String> {
        self.base_url.as_deref().map_or_else(
            || Ok(ClientConfig::default()),
            |url| {
                ClientConfig::with_base_url(url)
                    .map_err(|err| format!("{}: {err}", SystemTestEnv::BaseUrl.as_str()))
            },
        )
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a boolean environment variable, defaulting to `false` when unset.
///
/// # Errors
///
/// Returns an error when the value is not a recognized boolean literal.
fn parse_bool_env(name: &str, raw: Option<String>) -> Result<bool, String> {
    let Some(value) = raw else {
        return Ok(false);
    };
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        return Ok(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        return Ok(false);
    }
    Err(format!("{name} must be 1, 0, true, or false"))
}
