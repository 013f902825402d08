//! Foundation module - Shared domain primitives.
//!
//! Contains the identifier value objects and error types
//! that form the vocabulary of the registration domain.

mod errors;
mod ids;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{Email, LectureKey, Login};
