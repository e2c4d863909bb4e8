//! # Dinero Infrastructure
//!
//! Blocking client for the Dinero accounting REST API.
//!
//! This crate contains:
//! - The reqwest-backed HTTP transport
//! - OAuth2 password-grant authentication
//! - The request engine and the `DineroClient` facade
//! - One resource client per API resource family
//! - Schema sources and configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `dinero-core`
//! - Depends on `dinero-domain` and `dinero-core`
//! - Contains all "impure" code (network, filesystem, environment)
//!
//! ## Example
//!
//! ```no_run
//! use dinero_infra::DineroClient;
//! use serde_json::json;
//!
//! # fn main() -> dinero_domain::Result<()> {
//! let client = DineroClient::from_env()?;
//! client.set_organization("12345")?;
//!
//! let contacts = client.contacts().list(Some(&json!({"fields": "Name,ContactGuid"})))?;
//! println!("{contacts}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod resources;
pub mod schemas;

// Re-export commonly used items
pub use api::{DineroClient, DineroClientBuilder, PasswordGrantProvider, TokenProvider};
pub use http::{ReqwestTransport, ReqwestTransportBuilder};
pub use resources::*;
pub use schemas::{SchemaDirectory, StaticSchemas};
