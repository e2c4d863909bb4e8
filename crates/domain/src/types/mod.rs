//! Domain types and models
//!
//! Value types shared by the transport, validation and resource layers.

pub mod credentials;
pub mod endpoint;
pub mod http;
pub mod validation;

pub use credentials::Credentials;
pub use endpoint::{AccountKind, Endpoint, Resource};
pub use http::{ContentType, HttpMethod};
pub use validation::ValidationRequest;
