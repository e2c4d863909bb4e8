use std::sync::Arc;

use dinero_domain::{Endpoint, HttpMethod, Resource, Result};
use serde_json::Value;

use super::booking::{create_then_book, timestamp_body};
use crate::api::{ApiContext, Payload};

const CREATE: Endpoint = Endpoint::new(Resource::Invoices, HttpMethod::Post, "", "create").validated();
const UPDATE: Endpoint =
    Endpoint::new(Resource::Invoices, HttpMethod::Put, "{invoice_id}", "update").validated();
const DELETE: Endpoint = Endpoint::new(Resource::Invoices, HttpMethod::Delete, "{invoice_id}", "delete");
const GET: Endpoint = Endpoint::new(Resource::Invoices, HttpMethod::Get, "{invoice_id}", "get");
const LIST: Endpoint = Endpoint::new(Resource::Invoices, HttpMethod::Get, "", "list").validated();
const BOOK: Endpoint = Endpoint::new(Resource::Invoices, HttpMethod::Post, "{guid}/book", "book");

/// Sales invoices
///
/// `delete` and `book` take the invoice's last-known `Timestamp`; the server
/// rejects the call if the invoice changed since.
#[derive(Debug, Clone)]
pub struct Invoices {
    ctx: Arc<ApiContext>,
}

impl Invoices {
    pub(crate) const fn new(ctx: Arc<ApiContext>) -> Self {
        Self { ctx }
    }

    /// Create a draft invoice, optionally booking it straight away.
    ///
    /// With `auto_book`, a booking failure is returned as the error even
    /// though the draft has already been created remotely.
    pub fn create(&self, data: &Value, auto_book: bool) -> Result<Value> {
        create_then_book(&self.ctx, &CREATE, &BOOK, data, auto_book)
    }

    pub fn update(&self, invoice_id: &str, data: &Value) -> Result<Value> {
        self.ctx.dispatch(&UPDATE, &[invoice_id], Payload::Body(data))
    }

    pub fn delete(&self, invoice_id: &str, timestamp: &str) -> Result<Value> {
        self.ctx.dispatch(&DELETE, &[invoice_id], Payload::Body(&timestamp_body(timestamp)))
    }

    pub fn get(&self, invoice_id: &str) -> Result<Value> {
        self.ctx.dispatch(&GET, &[invoice_id], Payload::None)
    }

    pub fn list(&self, params: Option<&Value>) -> Result<Value> {
        self.ctx.dispatch(&LIST, &[], Payload::Query(params))
    }

    pub fn book(&self, guid: &str, timestamp: &str) -> Result<Value> {
        self.ctx.dispatch(&BOOK, &[guid], Payload::Body(&timestamp_body(timestamp)))
    }
}
