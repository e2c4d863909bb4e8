use std::sync::Arc;

use dinero_domain::{Endpoint, HttpMethod, Resource, Result};
use serde_json::Value;

use crate::api::{ApiContext, Payload};

const BIND: Endpoint = Endpoint::new(
    Resource::Attachments,
    HttpMethod::Post,
    "{document_guid}/{file_guid}/{file_name}",
    "bind",
);
const DELETE: Endpoint =
    Endpoint::new(Resource::Attachments, HttpMethod::Delete, "{document_guid}/{file_guid}", "delete");

/// Links between uploaded files and documents (invoices, vouchers)
#[derive(Debug, Clone)]
pub struct Attachments {
    ctx: Arc<ApiContext>,
}

impl Attachments {
    pub(crate) const fn new(ctx: Arc<ApiContext>) -> Self {
        Self { ctx }
    }

    /// Attach an uploaded file to a document under `file_name`.
    pub fn bind(&self, document_guid: &str, file_guid: &str, file_name: &str) -> Result<Value> {
        self.ctx.dispatch(&BIND, &[document_guid, file_guid, file_name], Payload::None)
    }

    pub fn delete(&self, document_guid: &str, file_guid: &str) -> Result<Value> {
        self.ctx.dispatch(&DELETE, &[document_guid, file_guid], Payload::None)
    }
}
