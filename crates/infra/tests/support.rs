#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use dinero_core::{DebugExchange, DebugSink, HttpRequest, HttpResponse, HttpTransport};
use dinero_domain::{ClientConfig, Credentials, Result};
use dinero_infra::{DineroClient, StaticSchemas};
use parking_lot::Mutex;
use serde_json::{json, Value};

pub const AUTH_URL: &str = "https://auth.dinero.test/oauth/token";
pub const BASE_URL: &str = "https://api.dinero.test/v1";
pub const TOKEN: &str = "test-bearer-token";
pub const ORG: &str = "123456";

/// Transport double that answers the token exchange itself and replays
/// scripted responses for everything else.
pub struct MockTransport {
    token_response: HttpResponse,
    scripted: Mutex<VecDeque<HttpResponse>>,
    fallback: HttpResponse,
    auth_calls: Mutex<Vec<HttpRequest>>,
    calls: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    /// Resource calls answer `200 {}` unless scripted otherwise.
    pub fn new() -> Arc<Self> {
        Self::with_fallback(HttpResponse::json(200, &json!({})))
    }

    pub fn with_fallback(fallback: HttpResponse) -> Arc<Self> {
        Arc::new(Self {
            token_response: HttpResponse::json(
                200,
                &json!({"access_token": TOKEN, "token_type": "Bearer", "expires_in": 3600}),
            ),
            scripted: Mutex::new(VecDeque::new()),
            fallback,
            auth_calls: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Queue a response for the next resource call.
    pub fn push(&self, response: HttpResponse) {
        self.scripted.lock().push_back(response);
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push(HttpResponse::json(status, &body));
    }

    /// Resource calls seen so far (token exchange excluded).
    pub fn calls(&self) -> Vec<HttpRequest> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn last_call(&self) -> HttpRequest {
        self.calls.lock().last().cloned().expect("at least one resource call")
    }

    pub fn auth_calls(&self) -> Vec<HttpRequest> {
        self.auth_calls.lock().clone()
    }
}

impl HttpTransport for MockTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        if request.url == AUTH_URL {
            self.auth_calls.lock().push(request);
            return Ok(self.token_response.clone());
        }

        self.calls.lock().push(request);
        let scripted = self.scripted.lock().pop_front();
        Ok(scripted.unwrap_or_else(|| self.fallback.clone()))
    }
}

/// Debug sink that keeps every exchange for inspection.
#[derive(Default)]
pub struct RecordingSink {
    exchanges: Mutex<Vec<DebugExchange>>,
}

impl RecordingSink {
    pub fn exchanges(&self) -> Vec<DebugExchange> {
        self.exchanges.lock().clone()
    }
}

impl DebugSink for RecordingSink {
    fn record(&self, exchange: &DebugExchange) {
        self.exchanges.lock().push(exchange.clone());
    }
}

pub fn test_config(organization_id: Option<&str>) -> ClientConfig {
    ClientConfig {
        base_url: BASE_URL.to_string(),
        auth_url: AUTH_URL.to_string(),
        organization_id: organization_id.map(str::to_string),
        ..ClientConfig::default()
    }
}

pub fn credentials() -> Credentials {
    Credentials::new("api-key", "client-id", "client-secret")
}

/// Client scoped to [`ORG`] with no schemas registered.
pub fn client(transport: &Arc<MockTransport>) -> DineroClient {
    client_with(transport, Some(ORG), StaticSchemas::new())
}

pub fn client_with(
    transport: &Arc<MockTransport>,
    organization_id: Option<&str>,
    schemas: StaticSchemas,
) -> DineroClient {
    DineroClient::builder()
        .config(test_config(organization_id))
        .credentials(credentials())
        .transport(transport.clone())
        .schemas(Arc::new(schemas))
        .build()
        .expect("client should authenticate against the mock transport")
}

pub fn url(path: &str) -> String {
    format!("{BASE_URL}/{ORG}/{path}")
}
