//! Dinero API client
//!
//! Authentication, the shared request engine, and the client facade.
//!
//! # Architecture
//!
//! - One token exchange at construction, no refresh
//! - One engine per client, shared by every resource client through
//!   [`ApiContext`]
//! - Schema validation before any network I/O
//! - Structured tracing only (no println!)

pub mod auth;
pub mod client;
pub mod context;
pub mod debug_sink;
pub mod engine;

pub use auth::{PasswordGrantProvider, TokenProvider};
pub use client::{DineroClient, DineroClientBuilder};
pub use context::{ApiContext, Payload};
pub use debug_sink::{TracingDebugSink, DEBUG_TARGET};
pub use engine::{ApiCall, RequestEngine, Session};
