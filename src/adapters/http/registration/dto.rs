//! HTTP DTOs (Data Transfer Objects) for registration endpoints.
//!
//! These types define the JSON request/response structure for the registration API.
//! The reservation body itself is the domain `LectureRequest`.

use serde::{Deserialize, Serialize};

use crate::application::RegisterForLectureResult;
use crate::domain::registration::{Lecture, User};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to change a user's email.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEmailRequest {
    /// The new address. Validated before reaching the handler.
    pub email: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A user as shown by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub login: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            login: user.login().to_string(),
            email: user.email.to_string(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

/// A lecture slot as shown by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureResponse {
    pub path_number: i32,
    pub lecture_number: i32,
    /// Seats still open.
    pub capacity: u32,
}

impl From<&Lecture> for LectureResponse {
    fn from(lecture: &Lecture) -> Self {
        let key = lecture.key();
        Self {
            path_number: key.path_number,
            lecture_number: key.lecture_number,
            capacity: lecture.capacity,
        }
    }
}

/// Confirmation of a new reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub login: String,
    pub lecture: LectureResponse,
}

impl From<&RegisterForLectureResult> for ReservationResponse {
    fn from(result: &RegisterForLectureResult) -> Self {
        Self {
            login: result.user.login().to_string(),
            lecture: LectureResponse::from(&result.lecture),
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Email, LectureKey, Login};

    #[test]
    fn user_response_serializes_login_and_email() {
        let user = User::new(Login::new("alice").unwrap(), Email::new("a@x.com").unwrap());

        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();

        assert_eq!(json, serde_json::json!({ "login": "alice", "email": "a@x.com" }));
    }

    #[test]
    fn lecture_response_uses_camel_case() {
        let lecture = Lecture::new(LectureKey::new(2, 3), 7);

        let json = serde_json::to_value(LectureResponse::from(&lecture)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "pathNumber": 2, "lectureNumber": 3, "capacity": 7 })
        );
    }

    #[test]
    fn error_response_keeps_code_and_message() {
        let response = ErrorResponse::new("NO_CAPACITY", "No available seats");
        assert_eq!(response.error_code, "NO_CAPACITY");
        assert_eq!(response.message, "No available seats");
    }

    #[test]
    fn update_email_request_deserializes() {
        let request: UpdateEmailRequest =
            serde_json::from_str(r#"{"email": "b@x.com"}"#).unwrap();
        assert_eq!(request.email, "b@x.com");
    }
}
