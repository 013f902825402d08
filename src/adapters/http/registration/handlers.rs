//! HTTP handlers for registration endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{
    CancelReservationCommand, CancelReservationHandler, GetUserLecturesHandler,
    GetUserLecturesQuery, ListUsersHandler, ListUsersQuery, RegisterForLectureCommand,
    RegisterForLectureHandler, UpdateEmailCommand, UpdateEmailHandler, UserFilter,
};
use crate::domain::foundation::{Email, Login, ValidationError};
use crate::domain::registration::{LectureRequest, RegistrationError};
use crate::ports::{LectureStore, UserStore};

use super::dto::{
    ErrorResponse, HealthResponse, LectureResponse, ReservationResponse, UpdateEmailRequest,
    UserResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned for each request; the stores are Arc-wrapped.
#[derive(Clone)]
pub struct RegistrationAppState {
    pub users: Arc<dyn UserStore>,
    pub lectures: Arc<dyn LectureStore>,
}

impl RegistrationAppState {
    pub fn new(users: Arc<dyn UserStore>, lectures: Arc<dyn LectureStore>) -> Self {
        Self { users, lectures }
    }

    /// Create handlers on demand from the shared state.
    pub fn list_users_handler(&self) -> ListUsersHandler {
        ListUsersHandler::new(self.users.clone())
    }

    pub fn user_lectures_handler(&self) -> GetUserLecturesHandler {
        GetUserLecturesHandler::new(self.users.clone(), self.lectures.clone())
    }

    pub fn update_email_handler(&self) -> UpdateEmailHandler {
        UpdateEmailHandler::new(self.users.clone())
    }

    pub fn register_handler(&self) -> RegisterForLectureHandler {
        RegisterForLectureHandler::new(self.users.clone(), self.lectures.clone())
    }

    pub fn cancel_handler(&self) -> CancelReservationHandler {
        CancelReservationHandler::new(self.users.clone(), self.lectures.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// GET /api/users - List all users
pub async fn list_users(
    State(state): State<RegistrationAppState>,
) -> Result<impl IntoResponse, RegistrationApiError> {
    list_with(state, UserFilter::All).await
}

/// GET /api/users/registered - List users holding at least one reservation
pub async fn list_registered_users(
    State(state): State<RegistrationAppState>,
) -> Result<impl IntoResponse, RegistrationApiError> {
    list_with(state, UserFilter::Registered).await
}

async fn list_with(
    state: RegistrationAppState,
    filter: UserFilter,
) -> Result<Json<Vec<UserResponse>>, RegistrationApiError> {
    let users = state
        .list_users_handler()
        .handle(ListUsersQuery { filter })
        .await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// GET /api/users/:login/lectures - List a user's lectures
pub async fn get_user_lectures(
    State(state): State<RegistrationAppState>,
    Path(login): Path<String>,
) -> Result<impl IntoResponse, RegistrationApiError> {
    let query = GetUserLecturesQuery {
        login: Login::new(login)?,
    };

    let lectures = state.user_lectures_handler().handle(query).await?;

    let response: Vec<LectureResponse> = lectures.iter().map(LectureResponse::from).collect();
    Ok(Json(response))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (PUT/POST/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// PUT /api/users/:login/email - Change a user's email
pub async fn update_email(
    State(state): State<RegistrationAppState>,
    Path(login): Path<String>,
    Json(request): Json<UpdateEmailRequest>,
) -> Result<impl IntoResponse, RegistrationApiError> {
    let cmd = UpdateEmailCommand {
        login: Login::new(login)?,
        new_email: Email::new(request.email)?,
    };

    let user = state.update_email_handler().handle(cmd).await?;

    Ok(Json(UserResponse::from(user)))
}

/// POST /api/users/:login/reservations - Register for a lecture
pub async fn register_for_lecture(
    State(state): State<RegistrationAppState>,
    Path(login): Path<String>,
    Json(request): Json<LectureRequest>,
) -> Result<impl IntoResponse, RegistrationApiError> {
    let cmd = RegisterForLectureCommand {
        login: Login::new(login)?,
        request,
    };

    let result = state.register_handler().handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(ReservationResponse::from(&result))))
}

/// DELETE /api/users/:login/reservations/:path_number/:lecture_number - Cancel
///
/// Answers 204 whether or not a reservation existed.
pub async fn cancel_reservation(
    State(state): State<RegistrationAppState>,
    Path((login, path_number, lecture_number)): Path<(String, i32, i32)>,
) -> Result<impl IntoResponse, RegistrationApiError> {
    let cmd = CancelReservationCommand {
        login: Login::new(login)?,
        request: LectureRequest::new(path_number, lecture_number),
    };

    state.cancel_handler().handle(cmd).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct RegistrationApiError(RegistrationError);

impl RegistrationApiError {
    /// Rule violations and lost concurrent updates share 409.
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            err if err.is_not_found() => StatusCode::NOT_FOUND,
            RegistrationError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            RegistrationError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::CONFLICT,
        }
    }
}

impl From<RegistrationError> for RegistrationApiError {
    fn from(err: RegistrationError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for RegistrationApiError {
    fn from(err: ValidationError) -> Self {
        Self(RegistrationError::from(err))
    }
}

impl IntoResponse for RegistrationApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        } else if self.0.is_retryable() {
            tracing::warn!("Request lost a concurrent update, client may retry: {}", self.0);
        }

        let body = ErrorResponse::new(self.0.code().to_string(), self.0.message());
        (status, Json(body)).into_response()
    }
}
