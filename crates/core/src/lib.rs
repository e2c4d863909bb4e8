//! # Dinero Core
//!
//! Ports and pure services for the Dinero API client.
//!
//! This crate contains:
//! - The HTTP transport port and request/response model
//! - The debug trace port
//! - Schema lookup port and the validation service
//!
//! ## Architecture Principles
//! - Only depends on `dinero-domain`
//! - No network or filesystem code
//! - All external dependencies via traits

pub mod validation;

// Infrastructure ports
pub mod debug_ports;
pub mod transport_ports;

pub use debug_ports::{DebugExchange, DebugSink, NullDebugSink};
pub use transport_ports::{flatten_query, HttpRequest, HttpResponse, HttpTransport, RequestBody};
pub use validation::{NoSchemas, SchemaSource, SchemaValidator, ValidationOutcome};
