//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod registration;

// Re-export key types for convenience
pub use registration::{app_router, registration_router, RegistrationAppState};
