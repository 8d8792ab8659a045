// system-tests/src/lib.rs
// ============================================================================
// Module: ReqRes System Tests Library
// Description: Shared configuration for the conformance test binaries.
// Purpose: Turn environment settings into the client configuration.
// Dependencies: reqres-client
// ============================================================================

//! ## Overview
//! This crate hosts the environment-backed configuration used by the
//! conformance binaries in `system-tests/tests`. The base URL is read once and
//! passed to each scenario as a [`reqres_client::ClientConfig`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
