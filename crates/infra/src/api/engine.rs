//! Request engine
//!
//! The single path every resource operation takes to the network. It owns
//! the session (bearer token plus organization scope), composes absolute
//! URLs, attaches headers, executes exactly one exchange through the
//! transport, and turns the response into a decoded JSON value or an error.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dinero_core::{
    flatten_query, DebugExchange, DebugSink, HttpRequest, HttpResponse, HttpTransport, RequestBody,
};
use dinero_domain::constants::{
    is_organization_agnostic, AUTHORIZATION_HEADER, CONTENT_TYPE_HEADER, REDACTED,
};
use dinero_domain::{ContentType, DineroError, Endpoint, HttpMethod, Result};
use parking_lot::RwLock;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::errors::InfraError;

/// Authenticated session state
///
/// The token is fixed for the session's lifetime. The organization scope can
/// be switched at any time, but switching is last-writer-wins: concurrent
/// callers changing it on a shared client must synchronize externally.
pub struct Session {
    token: SecretString,
    organization_id: RwLock<Option<String>>,
}

impl Session {
    pub fn new(token: SecretString, organization_id: Option<String>) -> Self {
        Self { token, organization_id: RwLock::new(organization_id) }
    }

    pub fn organization_id(&self) -> Option<String> {
        self.organization_id.read().clone()
    }

    pub fn set_organization_id(&self, organization_id: Option<String>) {
        *self.organization_id.write() = organization_id;
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token.expose_secret())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &REDACTED)
            .field("organization_id", &*self.organization_id.read())
            .finish()
    }
}

/// One resource call before URL composition
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    body: RequestBody,
    content_type: ContentType,
}

impl ApiCall {
    /// Call `path` (relative to the organization scope) with `method`.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            content_type: ContentType::Json,
        }
    }

    /// Call the path an endpoint renders for `args`.
    ///
    /// # Errors
    /// Returns `DineroError::Config` when `args` do not fit the template.
    pub fn endpoint(endpoint: &Endpoint, args: &[&str]) -> Result<Self> {
        Ok(Self::new(endpoint.method, endpoint.path(args)?))
    }

    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    /// Attach raw bytes, sent unencoded under `content_type`.
    #[must_use]
    pub fn bytes(mut self, bytes: Vec<u8>, content_type: ContentType) -> Self {
        self.body = RequestBody::Bytes(bytes);
        self.content_type = content_type;
        self
    }

    /// Attach query parameters from a JSON object; `None` adds nothing.
    ///
    /// # Errors
    /// Returns `DineroError::Config` if `params` is not a flat JSON object.
    pub fn query(mut self, params: Option<&Value>) -> Result<Self> {
        if let Some(params) = params {
            self.query = flatten_query(params)?;
        }
        Ok(self)
    }

    #[must_use]
    pub const fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Executes resource calls against the Dinero API
pub struct RequestEngine {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    session: Session,
    debug: AtomicBool,
    sink: Arc<dyn DebugSink>,
}

impl RequestEngine {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        base_url: impl Into<String>,
        session: Session,
        sink: Arc<dyn DebugSink>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { transport, base_url, session, debug: AtomicBool::new(false), sink }
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_debug(&self, enabled: bool) {
        self.debug.store(enabled, Ordering::Relaxed);
    }

    pub fn is_debug(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    /// Execute a call and decode its JSON body.
    ///
    /// An empty 2xx body decodes to an empty JSON object.
    ///
    /// # Errors
    /// - `Config` when the organization scope is required but unset (no I/O
    ///   happens)
    /// - `Transport` for any non-2xx status, carrying the raw body
    /// - `Network` when the transport cannot complete the exchange
    /// - `InvalidResponse` when a non-empty 2xx body is not JSON
    pub fn execute(&self, call: ApiCall) -> Result<Value> {
        let response = self.execute_raw(call)?;
        decode_body(&response.body)
    }

    /// Execute a call and return the undecoded 2xx response.
    ///
    /// # Errors
    /// Same as [`RequestEngine::execute`], minus decoding.
    #[instrument(skip_all, fields(method = %call.method, path = %call.path))]
    pub fn execute_raw(&self, call: ApiCall) -> Result<HttpResponse> {
        let url = self.url_for(&call.path)?;
        debug!(url = %url, "dispatching API call");

        let request = HttpRequest::new(call.method, url)
            .with_header(AUTHORIZATION_HEADER, self.session.bearer())
            .with_header(CONTENT_TYPE_HEADER, call.content_type.mime())
            .with_query(call.query)
            .with_body(call.body);

        let snapshot = self.is_debug().then(|| request.clone());
        let response = self.transport.send(request)?;
        debug!(status = response.status, "API call completed");

        if let Some(request) = snapshot {
            self.sink.record(&debug_exchange(request, &response));
        }

        if !response.is_success() {
            let err = DineroError::Transport { status: response.status, body: response.text() };
            debug!(status = response.status, error.kind = err.label(), "API call rejected");
            return Err(err);
        }

        Ok(response)
    }

    /// Absolute URL for a resource path under the current scope.
    ///
    /// # Errors
    /// Returns `DineroError::Config` when the path needs an organization
    /// scope and none is set.
    pub fn url_for(&self, path: &str) -> Result<String> {
        let path = path.trim_start_matches('/');
        if is_organization_agnostic(path) {
            return Ok(format!("{}/{path}", self.base_url));
        }

        let organization_id = self.session.organization_id().ok_or_else(|| {
            DineroError::Config(format!(
                "Organization ID is not set; call set_organization before requesting {path}"
            ))
        })?;
        Ok(format!("{}/{organization_id}/{path}", self.base_url))
    }
}

impl std::fmt::Debug for RequestEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestEngine")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .field("debug", &self.is_debug())
            .finish_non_exhaustive()
    }
}

/// Decode a 2xx body: empty means an empty object, anything else must be JSON.
pub(crate) fn decode_body(body: &[u8]) -> Result<Value> {
    if body.is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(body).map_err(|err| DineroError::from(InfraError::from(err)))
}

fn debug_exchange(request: HttpRequest, response: &HttpResponse) -> DebugExchange {
    let headers = request
        .headers
        .into_iter()
        .map(|(name, value)| {
            if name.eq_ignore_ascii_case(AUTHORIZATION_HEADER) {
                (name, format!("Bearer {REDACTED}"))
            } else {
                (name, value)
            }
        })
        .collect();

    DebugExchange {
        method: request.method,
        url: request.url,
        headers,
        query: request.query,
        request_body: request.body.describe(),
        status: response.status,
        response_body: response.text(),
    }
}
