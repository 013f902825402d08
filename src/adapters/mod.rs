//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory registry store and its YAML seed loader
//! - `http` - REST API over the registration handlers

pub mod http;
pub mod memory;

pub use memory::InMemoryRegistry;
