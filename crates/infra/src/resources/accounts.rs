//! Ledger accounts
//!
//! Accounts come in variants (`entry`, `deposit`, `purchase`). The variant
//! picks both the path (`accounts/{kind}`) and the schema prefix
//! (`account_{kind}`). Purchase accounts can be listed but not created.

use std::sync::Arc;

use dinero_domain::{AccountKind, Endpoint, HttpMethod, Resource, Result};
use serde_json::Value;

use crate::api::{ApiContext, Payload};

const CREATE: Endpoint =
    Endpoint::new(Resource::Accounts, HttpMethod::Post, "{kind}", "create").validated();
const LIST: Endpoint =
    Endpoint::new(Resource::Accounts, HttpMethod::Get, "{kind}", "list").validated();

#[derive(Debug, Clone)]
pub struct Accounts {
    ctx: Arc<ApiContext>,
}

impl Accounts {
    pub(crate) const fn new(ctx: Arc<ApiContext>) -> Self {
        Self { ctx }
    }

    /// Create an entry or deposit account.
    ///
    /// # Errors
    /// `DineroError::Config` for [`AccountKind::Purchase`], raised before
    /// validation or any request.
    pub fn create(&self, data: &Value, kind: AccountKind) -> Result<Value> {
        let kind = kind.ensure_creatable()?;
        self.ctx.dispatch_as(kind.schema_prefix(), &CREATE, &[kind.as_str()], Payload::Body(data))
    }

    pub fn list(&self, params: Option<&Value>, kind: AccountKind) -> Result<Value> {
        self.ctx.dispatch_as(kind.schema_prefix(), &LIST, &[kind.as_str()], Payload::Query(params))
    }
}
