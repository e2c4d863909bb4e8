//! # Dinero Domain
//!
//! Domain types and models for the Dinero API client.
//!
//! This crate contains:
//! - The error taxonomy and `Result` alias
//! - Client configuration and credentials
//! - Endpoint descriptors and resource selectors
//! - Fixed endpoints and well-known paths
//!
//! ## Architecture
//! - No dependencies on other client crates
//! - No I/O
//! - Pure data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
