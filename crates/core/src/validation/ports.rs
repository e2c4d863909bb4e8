//! Ports for schema lookup

use dinero_domain::Result;
use serde_json::Value;

/// Trait for resolving a schema identifier to a JSON schema document
///
/// Schema absence is not an error: `Ok(None)` means "nothing to validate
/// against" and the caller proceeds without checking.
pub trait SchemaSource: Send + Sync {
    /// Look up the schema named `name` (e.g. `invoice_create_schema`).
    ///
    /// # Errors
    /// Returns `DineroError::Config` when a schema exists but cannot be read
    /// or parsed.
    fn load(&self, name: &str) -> Result<Option<Value>>;
}

/// Source that knows no schemas; every validation is skipped
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSchemas;

impl SchemaSource for NoSchemas {
    fn load(&self, _name: &str) -> Result<Option<Value>> {
        Ok(None)
    }
}
