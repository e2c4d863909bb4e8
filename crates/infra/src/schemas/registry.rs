//! In-memory schema registry

use std::collections::HashMap;

use dinero_core::SchemaSource;
use dinero_domain::Result;
use serde_json::Value;

/// Schemas registered programmatically, keyed by full schema name
/// (e.g. `account_entry_create_schema`).
#[derive(Debug, Clone, Default)]
pub struct StaticSchemas {
    schemas: HashMap<String, Value>,
}

impl StaticSchemas {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_schema(mut self, name: impl Into<String>, schema: Value) -> Self {
        self.insert(name, schema);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, schema: Value) {
        self.schemas.insert(name.into(), schema);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl SchemaSource for StaticSchemas {
    fn load(&self, name: &str) -> Result<Option<Value>> {
        Ok(self.schemas.get(name).cloned())
    }
}
