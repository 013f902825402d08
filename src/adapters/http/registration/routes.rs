//! Axum router configuration for registration endpoints.
//!
//! This module defines the route structure for the registration API and
//! wires it to the corresponding handlers.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{
    cancel_reservation, get_user_lectures, health, list_registered_users, list_users,
    register_for_lecture, update_email, RegistrationAppState,
};

/// Create the user API router.
///
/// # Routes
///
/// ## Queries
/// - `GET /` - List all users
/// - `GET /registered` - List users holding at least one reservation
/// - `GET /:login/lectures` - List the lectures a user is registered for
///
/// ## Commands
/// - `PUT /:login/email` - Change a user's email
/// - `POST /:login/reservations` - Register for a lecture
/// - `DELETE /:login/reservations/:path_number/:lecture_number` - Cancel a reservation
pub fn user_routes() -> Router<RegistrationAppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/registered", get(list_registered_users))
        .route("/:login/lectures", get(get_user_lectures))
        .route("/:login/email", put(update_email))
        .route("/:login/reservations", post(register_for_lecture))
        .route(
            "/:login/reservations/:path_number/:lecture_number",
            delete(cancel_reservation),
        )
}

/// Create the registration module router, suitable for mounting at `/api`.
pub fn registration_router() -> Router<RegistrationAppState> {
    Router::new().nest("/users", user_routes())
}

/// Create the complete application router with state applied.
///
/// Serves the registration API under `/api` and a liveness probe at
/// `/health`. Every request is traced.
///
/// # Example
///
/// ```ignore
/// let registry = InMemoryRegistry::new();
/// let state = RegistrationAppState::new(Arc::new(registry.clone()), Arc::new(registry));
/// let app = app_router(state);
/// ```
pub fn app_router(state: RegistrationAppState) -> Router {
    Router::new()
        .nest("/api", registration_router())
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
