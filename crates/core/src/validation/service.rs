//! Schema validation service

use std::sync::Arc;

use dinero_domain::{DineroError, Result, ValidationRequest};
use tracing::debug;

use super::ports::SchemaSource;

/// Result of a validation pass that did not reject the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// A schema was found and the payload conforms to it
    Passed,
    /// No schema is registered for the request
    Skipped,
}

/// Validates outgoing payloads before any network traffic
pub struct SchemaValidator {
    source: Arc<dyn SchemaSource>,
}

impl SchemaValidator {
    /// Create a new validator over a schema source
    pub fn new(source: Arc<dyn SchemaSource>) -> Self {
        Self { source }
    }

    /// Check a payload against `{prefix}_{operation}_schema`.
    ///
    /// Only the first violation is reported.
    ///
    /// # Errors
    /// Returns `DineroError::Validation` when the payload violates the
    /// schema, or `DineroError::Config` when the schema itself is unusable.
    pub fn validate(&self, request: &ValidationRequest<'_>) -> Result<ValidationOutcome> {
        let name = request.schema_name();
        let Some(schema) = self.source.load(&name)? else {
            debug!(schema = %name, "No schema registered, skipping validation");
            return Ok(ValidationOutcome::Skipped);
        };

        let validator = jsonschema::validator_for(&schema)
            .map_err(|e| DineroError::Config(format!("Invalid schema {name}: {e}")))?;

        if let Some(error) = validator.iter_errors(request.payload).next() {
            return Err(DineroError::Validation(format!(
                "Invalid data for {} {}: {}",
                request.schema_prefix, request.operation, error
            )));
        }

        debug!(schema = %name, "Payload passed validation");
        Ok(ValidationOutcome::Passed)
    }
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaValidator").finish_non_exhaustive()
    }
}
