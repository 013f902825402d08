//! Registration-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | UserNotFound | 404 |
//! | LectureNotFound | 404 |
//! | NoCapacity | 409 |
//! | AlreadyRegistered | 409 |
//! | EmailInUse | 409 |
//! | Conflict | 409 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, Email, ErrorCode, LectureKey, Login, ValidationError};

/// Registration-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// No user has this login.
    UserNotFound(Login),

    /// No lecture has this `(path, lecture)` key.
    LectureNotFound(LectureKey),

    /// The lecture has no remaining seats.
    NoCapacity(LectureKey),

    /// The user already holds a reservation for the lecture.
    AlreadyRegistered { login: Login, lecture: LectureKey },

    /// Another user already owns the email address.
    EmailInUse(Email),

    /// The lecture changed between read and write.
    Conflict(String),

    /// Input failed validation.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl RegistrationError {
    pub fn user_not_found(login: Login) -> Self {
        RegistrationError::UserNotFound(login)
    }

    pub fn lecture_not_found(key: LectureKey) -> Self {
        RegistrationError::LectureNotFound(key)
    }

    pub fn no_capacity(key: LectureKey) -> Self {
        RegistrationError::NoCapacity(key)
    }

    pub fn already_registered(login: Login, lecture: LectureKey) -> Self {
        RegistrationError::AlreadyRegistered { login, lecture }
    }

    pub fn email_in_use(email: Email) -> Self {
        RegistrationError::EmailInUse(email)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        RegistrationError::Conflict(message.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        RegistrationError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        RegistrationError::Infrastructure(message.into())
    }

    /// True for the two `NotFound` kinds.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistrationError::UserNotFound(_) | RegistrationError::LectureNotFound(_)
        )
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RegistrationError::UserNotFound(_) => ErrorCode::UserNotFound,
            RegistrationError::LectureNotFound(_) => ErrorCode::LectureNotFound,
            RegistrationError::NoCapacity(_) => ErrorCode::NoCapacity,
            RegistrationError::AlreadyRegistered { .. } => ErrorCode::AlreadyRegistered,
            RegistrationError::EmailInUse(_) => ErrorCode::EmailInUse,
            RegistrationError::Conflict(_) => ErrorCode::ConcurrencyConflict,
            RegistrationError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            RegistrationError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            RegistrationError::UserNotFound(login) => {
                format!("No user found with login: {}", login)
            }
            RegistrationError::LectureNotFound(key) => {
                format!("No lecture found for path and lecture number {}", key)
            }
            RegistrationError::NoCapacity(key) => {
                format!("No available seats for lecture {}", key)
            }
            RegistrationError::AlreadyRegistered { login, lecture } => {
                format!("User {} is already registered for lecture {}", login, lecture)
            }
            RegistrationError::EmailInUse(email) => {
                format!("Email {} is already in use", email)
            }
            RegistrationError::Conflict(msg) => format!("Concurrent update: {}", msg),
            RegistrationError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            RegistrationError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Returns true if the caller may retry the whole operation.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RegistrationError::Conflict(_) | RegistrationError::Infrastructure(_)
        )
    }
}

impl std::fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RegistrationError {}

impl From<ValidationError> for RegistrationError {
    fn from(err: ValidationError) -> Self {
        RegistrationError::validation(err.field().to_string(), err.to_string())
    }
}

/// Store errors carry the details needed to rebuild the typed variants.
/// Anything missing a detail degrades to `Infrastructure`.
impl From<DomainError> for RegistrationError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::EmailInUse => match err.detail("email").map(Email::new) {
                Some(Ok(email)) => RegistrationError::EmailInUse(email),
                _ => RegistrationError::Infrastructure(err.to_string()),
            },
            ErrorCode::ConcurrencyConflict => RegistrationError::Conflict(err.message),
            ErrorCode::ValidationFailed => RegistrationError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => RegistrationError::Infrastructure(err.to_string()),
        }
    }
}

impl From<RegistrationError> for DomainError {
    fn from(err: RegistrationError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
