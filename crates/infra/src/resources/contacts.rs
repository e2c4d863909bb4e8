use std::sync::Arc;

use dinero_domain::{Endpoint, HttpMethod, Resource, Result};
use serde_json::Value;

use crate::api::{ApiContext, Payload};

const CREATE: Endpoint =
    Endpoint::new(Resource::Contacts, HttpMethod::Post, "", "create").validated();
const UPDATE: Endpoint =
    Endpoint::new(Resource::Contacts, HttpMethod::Put, "{contact_id}", "update").validated();
const DELETE: Endpoint = Endpoint::new(Resource::Contacts, HttpMethod::Delete, "{contact_id}", "delete");
const GET: Endpoint = Endpoint::new(Resource::Contacts, HttpMethod::Get, "{contact_id}", "get");
const LIST: Endpoint = Endpoint::new(Resource::Contacts, HttpMethod::Get, "", "list").validated();

const STATE_GET: Endpoint =
    Endpoint::new(Resource::ContactStates, HttpMethod::Get, "{contact_guid}", "get").validated();

/// Customers and suppliers
#[derive(Debug, Clone)]
pub struct Contacts {
    ctx: Arc<ApiContext>,
}

impl Contacts {
    pub(crate) const fn new(ctx: Arc<ApiContext>) -> Self {
        Self { ctx }
    }

    pub fn create(&self, data: &Value) -> Result<Value> {
        self.ctx.dispatch(&CREATE, &[], Payload::Body(data))
    }

    pub fn update(&self, contact_id: &str, data: &Value) -> Result<Value> {
        self.ctx.dispatch(&UPDATE, &[contact_id], Payload::Body(data))
    }

    pub fn delete(&self, contact_id: &str) -> Result<Value> {
        self.ctx.dispatch(&DELETE, &[contact_id], Payload::None)
    }

    pub fn get(&self, contact_id: &str) -> Result<Value> {
        self.ctx.dispatch(&GET, &[contact_id], Payload::None)
    }

    pub fn list(&self, params: Option<&Value>) -> Result<Value> {
        self.ctx.dispatch(&LIST, &[], Payload::Query(params))
    }

    /// Statement-of-account sub-resource.
    #[must_use]
    pub fn state(&self) -> ContactStates {
        ContactStates { ctx: Arc::clone(&self.ctx) }
    }
}

/// Per-contact statement of account (`state-of-account/{contact_guid}`)
#[derive(Debug, Clone)]
pub struct ContactStates {
    ctx: Arc<ApiContext>,
}

impl ContactStates {
    pub fn get(&self, contact_guid: &str, params: Option<&Value>) -> Result<Value> {
        self.ctx.dispatch(&STATE_GET, &[contact_guid], Payload::Query(params))
    }
}
