use std::time::Duration;

use dinero_core::{HttpRequest, HttpResponse, HttpTransport, RequestBody};
use dinero_domain::{DineroError, HttpMethod, Result};
use reqwest::blocking::{Client as BlockingClient, RequestBuilder};
use reqwest::Method;
use tracing::debug;

use crate::errors::InfraError;

/// Blocking HTTP transport over `reqwest`.
///
/// Issues exactly one exchange per call. Every status is returned to the
/// caller as an [`HttpResponse`]; only failures to obtain a response at all
/// become errors.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: BlockingClient,
}

impl ReqwestTransport {
    /// Start building a new transport.
    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::default()
    }

    /// Convenience constructor with default configuration (no timeout).
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    fn prepare(&self, request: HttpRequest) -> RequestBuilder {
        let mut builder = self.client.request(to_reqwest_method(request.method), &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.body(value.to_string()),
            RequestBody::Form(fields) => builder.form(&fields),
            RequestBody::Bytes(bytes) => builder.body(bytes),
        }
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let method = request.method;
        let url = request.url.clone();
        debug!(%method, %url, "sending HTTP request");

        let response = self.prepare(request).send().map_err(|err| {
            debug!(%method, %url, error = %err, "HTTP request failed");
            DineroError::from(InfraError::from(err))
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value.to_str().ok().map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.bytes().map_err(|err| DineroError::from(InfraError::from(err)))?;

        debug!(%method, %url, status, bytes = body.len(), "received HTTP response");
        Ok(HttpResponse { status, headers, body: body.to_vec() })
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

/// Builder for [`ReqwestTransport`].
#[derive(Debug, Default)]
pub struct ReqwestTransportBuilder {
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ReqwestTransportBuilder {
    /// Overall per-request timeout. `None` (the default) waits indefinitely.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<ReqwestTransport> {
        // reqwest's blocking client applies a 30s timeout unless told otherwise.
        let mut builder = BlockingClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder
            .build()
            .map_err(|err| DineroError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(ReqwestTransport { client })
    }
}

const fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}
