// system-tests/tests/helpers/harness.rs
// ============================================================================
// Module: Catalog Harness
// Description: Builds clients and registries for system-tests.
// Purpose: Wire request logging into per-test artifact roots.
// Dependencies: reqres-client, reqres-contract, system-tests
// ============================================================================

//! ## Overview
//! Every client built here logs to the test's `requests.jsonl`.

use std::sync::Arc;
use std::time::Duration;

use reqres_client::ApiClient;
use reqres_client::ClientConfig;
use reqres_client::FileEventSink;
use reqres_client::RequestEvent;
use reqres_client::RequestEventSink;
use reqres_client::StderrEventSink;
use reqres_contract::SchemaRegistry;
use system_tests::config::SystemTestConfig;

use super::artifacts::TestArtifacts;

/// Timeout for requests against the loopback stub.
pub const STUB_TIMEOUT: Duration = Duration::from_secs(5);

/// Fans one event out to several sinks.
struct TeeEventSink {
    sinks: Vec<Arc<dyn RequestEventSink>>,
}

impl RequestEventSink for TeeEventSink {
    fn record(&self, event: &RequestEvent) {
        for sink in &self.sinks {
            sink.record(event);
        }
    }
}

/// Compiles the response schema registry.
pub fn registry() -> Result<SchemaRegistry, String> {
    SchemaRegistry::new().map_err(|err| err.to_string())
}

/// Builds a client that logs every exchange to `requests.jsonl` in the
/// artifact root, mirroring to stderr when request logging is enabled.
pub fn client_for(config: ClientConfig, artifacts: &TestArtifacts) -> Result<ApiClient, String> {
    let env = SystemTestConfig::load()?;
    // A reused run root must not leak exchanges from an earlier run.
    let _ = std::fs::remove_file(artifacts.event_log());
    let file_sink = FileEventSink::new(&artifacts.event_log())
        .map_err(|err| format!("request log open failed: {err}"))?;
    let mut sinks: Vec<Arc<dyn RequestEventSink>> = vec![Arc::new(file_sink)];
    if env.log_requests {
        sinks.push(Arc::new(StderrEventSink));
    }
    let client = ApiClient::new(config).map_err(|err| err.to_string())?;
    Ok(client.with_event_sink(Arc::new(TeeEventSink {
        sinks,
    })))
}

/// Builds a client for a loopback stub base URL.
pub fn stub_client(base_url: &str, artifacts: &TestArtifacts) -> Result<ApiClient, String> {
    let config = ClientConfig::with_base_url(base_url)
        .map_err(|err| err.to_string())?
        .with_timeout(STUB_TIMEOUT);
    client_for(config, artifacts)
}
