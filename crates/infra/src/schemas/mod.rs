//! Schema sources
//!
//! Implementations of [`dinero_core::SchemaSource`]: a directory of
//! `{name}.json` documents and an in-memory registry.

pub mod directory;
pub mod registry;

pub use directory::SchemaDirectory;
pub use registry::StaticSchemas;
