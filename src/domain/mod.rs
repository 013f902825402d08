//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, errors)
//! - `registration` - Users, lectures, and the reservation engine

pub mod foundation;
pub mod registration;
