use std::sync::Arc;

use dinero_domain::{Endpoint, HttpMethod, Resource, Result};
use serde_json::Value;

use crate::api::{ApiContext, Payload};

const LIST: Endpoint = Endpoint::new(Resource::AccountingYears, HttpMethod::Get, "", "list");

/// Accounting years of the current organization
#[derive(Debug, Clone)]
pub struct AccountingYears {
    ctx: Arc<ApiContext>,
}

impl AccountingYears {
    pub(crate) const fn new(ctx: Arc<ApiContext>) -> Self {
        Self { ctx }
    }

    pub fn list(&self) -> Result<Value> {
        self.ctx.dispatch(&LIST, &[], Payload::None)
    }
}
