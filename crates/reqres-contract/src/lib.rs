// crates/reqres-contract/src/lib.rs
// ============================================================================
// Module: ReqRes Contract Library
// Description: Canonical response-shape contracts for the ReqRes API.
// Purpose: Provide the schemas every conformance scenario validates against.
// Dependencies: jsonschema, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The contract library defines the structural contracts for the ReqRes
//! response bodies the harness checks: list users, single user, created user,
//! and successful registration. Schemas are JSON Schema (draft 2020-12)
//! documents compiled once into a [`SchemaRegistry`] and shared read-only.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod registry;
pub mod schemas;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use registry::SchemaRegistry;
pub use registry::SchemaRegistryError;
pub use registry::SchemaViolation;
pub use schemas::ResponseSchema;
