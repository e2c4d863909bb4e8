//! HTTP transport port.
//!
//! The request engine speaks to the network only through [`HttpTransport`].
//! Implementations return every HTTP status as a response; only
//! connection-level failures are errors. Status interpretation belongs to the
//! engine.
//!
//! # Example
//!
//! ```
//! use dinero_core::{HttpRequest, HttpResponse, HttpTransport};
//! use dinero_domain::{HttpMethod, Result};
//!
//! struct Offline;
//!
//! impl HttpTransport for Offline {
//!     fn send(&self, _request: HttpRequest) -> Result<HttpResponse> {
//!         Ok(HttpResponse::new(503, b"maintenance".to_vec()))
//!     }
//! }
//!
//! let response = Offline.send(HttpRequest::new(HttpMethod::Get, "https://example.test")).unwrap();
//! assert!(!response.is_success());
//! ```

use dinero_domain::{DineroError, HttpMethod, Result};
use serde_json::Value;

/// Body attached to an outgoing request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Serialized as a JSON document
    Json(Value),
    /// URL-encoded form fields
    Form(Vec<(String, String)>),
    /// Raw byte stream
    Bytes(Vec<u8>),
}

impl RequestBody {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Short human-readable rendering for diagnostics. Byte bodies are
    /// summarized, never dumped.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Empty => "<empty>".to_string(),
            Self::Json(value) => value.to_string(),
            Self::Form(fields) => {
                let names: Vec<&str> = fields.iter().map(|(name, _)| name.as_str()).collect();
                format!("<form fields: {}>", names.join(", "))
            }
            Self::Bytes(bytes) => format!("<{} bytes>", bytes.len()),
        }
    }
}

/// A fully composed HTTP request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// A raw HTTP response: status, headers, and undecoded body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub const fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, headers: Vec::new(), body }
    }

    /// Response with a JSON body and matching content type.
    #[must_use]
    pub fn json(status: u16, value: &Value) -> Self {
        Self::new(status, value.to_string().into_bytes())
            .with_header("Content-Type", "application/json")
    }

    /// Response without a body.
    #[must_use]
    pub const fn empty(status: u16) -> Self {
        Self::new(status, Vec::new())
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Port for executing HTTP exchanges.
///
/// Each call is exactly one blocking exchange; implementations must not
/// retry.
pub trait HttpTransport: Send + Sync {
    /// Execute the request and return the response, whatever its status.
    ///
    /// # Errors
    /// Returns `DineroError::Network` when no response could be obtained.
    fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Flatten a JSON object of query parameters into ordered pairs.
///
/// Strings are used verbatim, numbers and booleans via their JSON text,
/// arrays repeat the key once per element, and nulls are dropped.
///
/// # Errors
/// Returns `DineroError::Config` if `params` is not an object, or an array
/// element is itself an object or array.
pub fn flatten_query(params: &Value) -> Result<Vec<(String, String)>> {
    let Value::Object(map) = params else {
        return Err(DineroError::Config(format!(
            "Query parameters must be a JSON object, got {params}"
        )));
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    if let Some(rendered) = scalar_text(item)? {
                        pairs.push((key.clone(), rendered));
                    }
                }
            }
            other => {
                if let Some(rendered) = scalar_text(other)? {
                    pairs.push((key.clone(), rendered));
                }
            }
        }
    }
    Ok(pairs)
}

fn scalar_text(value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text.clone())),
        Value::Bool(_) | Value::Number(_) => Ok(Some(value.to_string())),
        Value::Array(_) | Value::Object(_) => Err(DineroError::Config(format!(
            "Nested query parameter values are not supported: {value}"
        ))),
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}
