// crates/reqres-contract/src/registry.rs
// ============================================================================
// Module: Schema Registry
// Description: Compiled validators for every ReqRes response schema.
// Purpose: Validate response bodies against their structural contracts.
// Dependencies: jsonschema, serde_json, thiserror
// ============================================================================

//! ## Overview
//! [`SchemaRegistry`] compiles each [`ResponseSchema`] document once and keeps
//! the validators for the lifetime of the test run. Validation is generic: the
//! same routine checks every response kind and collects every violation the
//! validator reports, in the order it reports them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use jsonschema::Draft;
use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

use crate::schemas::ResponseSchema;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while building the registry.
#[derive(Debug, Error)]
pub enum SchemaRegistryError {
    /// A schema document failed to compile.
    #[error("invalid schema {schema}: {message}")]
    Compile {
        /// Schema that failed to compile.
        schema: ResponseSchema,
        /// Compiler diagnostic.
        message: String,
    },
}

/// A response body that does not satisfy its schema.
///
/// # Invariants
/// - `violations` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("schema {schema} violated: {}", .violations.join("; "))]
pub struct SchemaViolation {
    /// Schema the body was checked against.
    pub schema: ResponseSchema,
    /// One validator message per failed constraint.
    pub violations: Vec<String>,
}

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Read-only set of compiled response validators.
pub struct SchemaRegistry {
    /// Validators keyed by response kind.
    validators: BTreeMap<ResponseSchema, Validator>,
}

impl SchemaRegistry {
    /// Compiles every response schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaRegistryError::Compile`] when a schema document is invalid.
    pub fn new() -> Result<Self, SchemaRegistryError> {
        let mut validators = BTreeMap::new();
        for schema in ResponseSchema::all() {
            validators.insert(schema, compile_schema(schema)?);
        }
        Ok(Self {
            validators,
        })
    }

    /// Validates `body` against the schema for `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaViolation`] listing each failed constraint.
    pub fn validate(&self, schema: ResponseSchema, body: &Value) -> Result<(), SchemaViolation> {
        let Some(validator) = self.validators.get(&schema) else {
            return Err(SchemaViolation {
                schema,
                violations: vec![format!("no validator registered for {schema}")],
            });
        };
        let violations: Vec<String> =
            validator.iter_errors(body).map(|err| err.to_string()).collect();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaViolation {
                schema,
                violations,
            })
        }
    }

    /// Returns true when `body` satisfies the schema.
    #[must_use]
    pub fn is_valid(&self, schema: ResponseSchema, body: &Value) -> bool {
        self.validators.get(&schema).is_some_and(|validator| validator.is_valid(body))
    }
}

impl fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("schemas", &self.validators.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Compiles the document for one response kind.
fn compile_schema(schema: ResponseSchema) -> Result<Validator, SchemaRegistryError> {
    jsonschema::options().with_draft(Draft::Draft202012).build(&schema.document()).map_err(
        |err| SchemaRegistryError::Compile {
            schema,
            message: err.to_string(),
        },
    )
}
