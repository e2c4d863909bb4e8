use std::sync::Arc;

use dinero_domain::{Endpoint, HttpMethod, Resource, Result};
use serde_json::Value;

use super::booking::{create_then_book, timestamp_body};
use crate::api::{ApiContext, Payload};

const CREATE: Endpoint = Endpoint::new(Resource::Vouchers, HttpMethod::Post, "", "create").validated();
const UPDATE: Endpoint =
    Endpoint::new(Resource::Vouchers, HttpMethod::Put, "{voucher_id}", "update").validated();
const DELETE: Endpoint = Endpoint::new(Resource::Vouchers, HttpMethod::Delete, "{voucher_id}", "delete");
const GET: Endpoint = Endpoint::new(Resource::Vouchers, HttpMethod::Get, "{voucher_id}", "get");
const BOOK: Endpoint = Endpoint::new(Resource::Vouchers, HttpMethod::Post, "{guid}/book", "book");

/// Manual vouchers (`vouchers/manuel`)
#[derive(Debug, Clone)]
pub struct Vouchers {
    ctx: Arc<ApiContext>,
}

impl Vouchers {
    pub(crate) const fn new(ctx: Arc<ApiContext>) -> Self {
        Self { ctx }
    }

    /// Create a manual voucher; see [`Invoices::create`](super::Invoices::create)
    /// for the `auto_book` failure semantics.
    pub fn create(&self, data: &Value, auto_book: bool) -> Result<Value> {
        create_then_book(&self.ctx, &CREATE, &BOOK, data, auto_book)
    }

    pub fn update(&self, voucher_id: &str, data: &Value) -> Result<Value> {
        self.ctx.dispatch(&UPDATE, &[voucher_id], Payload::Body(data))
    }

    pub fn delete(&self, voucher_id: &str, timestamp: &str) -> Result<Value> {
        self.ctx.dispatch(&DELETE, &[voucher_id], Payload::Body(&timestamp_body(timestamp)))
    }

    pub fn get(&self, voucher_id: &str) -> Result<Value> {
        self.ctx.dispatch(&GET, &[voucher_id], Payload::None)
    }

    pub fn book(&self, guid: &str, timestamp: &str) -> Result<Value> {
        self.ctx.dispatch(&BOOK, &[guid], Payload::Body(&timestamp_body(timestamp)))
    }
}
