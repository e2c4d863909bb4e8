//! Shared state behind every resource client

use std::borrow::Cow;

use dinero_core::SchemaValidator;
use dinero_domain::{Endpoint, Result, ValidationRequest};
use serde_json::{Map, Value};

use super::engine::{ApiCall, RequestEngine};

/// What a dispatched operation sends alongside its path
#[derive(Debug, Clone, Copy)]
pub enum Payload<'a> {
    None,
    /// JSON request body
    Body(&'a Value),
    /// Query parameters; validated as an empty object when absent
    Query(Option<&'a Value>),
}

/// Engine plus validator, shared by reference across resource clients
#[derive(Debug)]
pub struct ApiContext {
    engine: RequestEngine,
    validator: SchemaValidator,
}

impl ApiContext {
    pub const fn new(engine: RequestEngine, validator: SchemaValidator) -> Self {
        Self { engine, validator }
    }

    pub const fn engine(&self) -> &RequestEngine {
        &self.engine
    }

    /// Validate (when the endpoint asks for it) and then execute.
    pub fn dispatch(&self, endpoint: &Endpoint, args: &[&str], payload: Payload<'_>) -> Result<Value> {
        self.dispatch_as(endpoint.schema_prefix(), endpoint, args, payload)
    }

    /// Like [`ApiContext::dispatch`], validating under `schema_prefix`
    /// instead of the endpoint's own prefix.
    ///
    /// Path rendering and validation both happen before any network I/O.
    pub fn dispatch_as<'p>(
        &self,
        schema_prefix: impl Into<Cow<'p, str>>,
        endpoint: &Endpoint,
        args: &[&str],
        payload: Payload<'_>,
    ) -> Result<Value> {
        let call = ApiCall::endpoint(endpoint, args)?;

        if endpoint.validated {
            let schema_prefix = schema_prefix.into();
            let empty = Value::Object(Map::new());
            let candidate = match payload {
                Payload::Body(body) => body,
                Payload::Query(params) => params.unwrap_or(&empty),
                Payload::None => &empty,
            };
            self.validator.validate(&ValidationRequest::new(
                &*schema_prefix,
                endpoint.operation,
                candidate,
            ))?;
        }

        let call = match payload {
            Payload::None => call,
            Payload::Body(body) => call.json(body.clone()),
            Payload::Query(params) => call.query(params)?,
        };
        self.engine.execute(call)
    }
}
