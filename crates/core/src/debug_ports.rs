//! Debug trace port
//!
//! When debug mode is on, the request engine hands every completed exchange
//! to a [`DebugSink`]. The sink decides how and where to render it.

use dinero_domain::HttpMethod;

/// One request/response pair as observed by the engine
///
/// `headers` is captured after redaction; the bearer token never reaches a
/// sink.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugExchange {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub request_body: String,
    pub status: u16,
    pub response_body: String,
}

/// Port for emitting request/response traces
pub trait DebugSink: Send + Sync {
    /// Record a completed exchange.
    fn record(&self, exchange: &DebugExchange);
}

/// Sink that drops every exchange
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDebugSink;

impl DebugSink for NullDebugSink {
    fn record(&self, _exchange: &DebugExchange) {}
}
