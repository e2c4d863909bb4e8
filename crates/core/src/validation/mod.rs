//! Pre-flight payload validation against JSON schemas

pub mod ports;
pub mod service;

pub use ports::*;
pub use service::*;
