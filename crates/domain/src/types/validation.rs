//! Pre-flight validation requests

use std::borrow::Cow;

use serde_json::Value;

use crate::constants::SCHEMA_NAME_SUFFIX;

/// A payload paired with the schema it should be checked against
///
/// Built per call and consumed immediately by the schema validator.
#[derive(Debug, Clone)]
pub struct ValidationRequest<'a> {
    pub schema_prefix: Cow<'a, str>,
    pub operation: &'a str,
    pub payload: &'a Value,
}

impl<'a> ValidationRequest<'a> {
    pub fn new(
        schema_prefix: impl Into<Cow<'a, str>>,
        operation: &'a str,
        payload: &'a Value,
    ) -> Self {
        Self { schema_prefix: schema_prefix.into(), operation, payload }
    }

    /// Deterministic schema identifier: `{prefix}_{operation}_schema`.
    #[must_use]
    pub fn schema_name(&self) -> String {
        format!("{}_{}_{}", self.schema_prefix, self.operation, SCHEMA_NAME_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_schema_name_pattern() {
        let payload = json!({});
        let request = ValidationRequest::new("contact_state", "get", &payload);
        assert_eq!(request.schema_name(), "contact_state_get_schema");

        let owned = ValidationRequest::new(String::from("account_entry"), "create", &payload);
        assert_eq!(owned.schema_name(), "account_entry_create_schema");
    }
}
