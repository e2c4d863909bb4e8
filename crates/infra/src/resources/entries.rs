use std::sync::Arc;

use dinero_domain::{Endpoint, HttpMethod, Resource, Result};
use serde_json::Value;

use crate::api::{ApiContext, Payload};

const LIST: Endpoint = Endpoint::new(Resource::Entries, HttpMethod::Get, "", "list").validated();
// Shares the list schema: the change feed takes the same filters.
const LIST_CHANGES: Endpoint =
    Endpoint::new(Resource::Entries, HttpMethod::Get, "changes", "list").validated();

/// Posted ledger entries
#[derive(Debug, Clone)]
pub struct Entries {
    ctx: Arc<ApiContext>,
}

impl Entries {
    pub(crate) const fn new(ctx: Arc<ApiContext>) -> Self {
        Self { ctx }
    }

    pub fn list(&self, params: Option<&Value>) -> Result<Value> {
        self.ctx.dispatch(&LIST, &[], Payload::Query(params))
    }

    /// Entries changed within the window given by `params`.
    pub fn list_changes(&self, params: Option<&Value>) -> Result<Value> {
        self.ctx.dispatch(&LIST_CHANGES, &[], Payload::Query(params))
    }
}
