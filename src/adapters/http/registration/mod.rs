//! HTTP adapter for registration endpoints.
//!
//! Exposes the registration domain via REST API:
//! - `GET /api/users` - List all users
//! - `GET /api/users/registered` - List users holding at least one reservation
//! - `GET /api/users/:login/lectures` - List a user's lectures
//! - `PUT /api/users/:login/email` - Change a user's email
//! - `POST /api/users/:login/reservations` - Register for a lecture
//! - `DELETE /api/users/:login/reservations/:path_number/:lecture_number` - Cancel
//! - `GET /health` - Liveness probe

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{RegistrationApiError, RegistrationAppState};
pub use routes::{app_router, registration_router};
