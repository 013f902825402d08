//! RegisterForLectureHandler - Command handler for reserving a lecture seat.

use std::sync::Arc;

use crate::domain::foundation::Login;
use crate::domain::registration::{register, Lecture, LectureRequest, RegistrationError, User};
use crate::ports::{LectureStore, UserStore};

/// Command to register a user for a lecture.
#[derive(Debug, Clone)]
pub struct RegisterForLectureCommand {
    pub login: Login,
    pub request: LectureRequest,
}

/// Result of a successful registration.
#[derive(Debug, Clone)]
pub struct RegisterForLectureResult {
    pub user: User,
    pub lecture: Lecture,
}

/// Handler for registering users for lectures.
///
/// The lecture is saved before the user. A store rejecting the lecture
/// write (for example on a version conflict) leaves nothing persisted.
pub struct RegisterForLectureHandler {
    users: Arc<dyn UserStore>,
    lectures: Arc<dyn LectureStore>,
}

impl RegisterForLectureHandler {
    pub fn new(users: Arc<dyn UserStore>, lectures: Arc<dyn LectureStore>) -> Self {
        Self { users, lectures }
    }

    pub async fn handle(
        &self,
        cmd: RegisterForLectureCommand,
    ) -> Result<RegisterForLectureResult, RegistrationError> {
        let key = cmd.request.key();

        // 1. Resolve both sides
        let mut user = self
            .users
            .find_by_login(&cmd.login)
            .await?
            .ok_or_else(|| RegistrationError::user_not_found(cmd.login.clone()))?;
        let mut lecture = self
            .lectures
            .find_by_key(key)
            .await?
            .ok_or_else(|| RegistrationError::lecture_not_found(key))?;

        // 2. Apply the reservation rules
        if let Err(err) = register(&mut user, &mut lecture) {
            tracing::warn!(login = %cmd.login, lecture = %key, "Registration rejected: {}", err);
            return Err(err);
        }

        // 3. Persist, lecture first
        let lecture = self.lectures.save(&lecture).await?;
        let user = self.users.save(&user).await?;

        tracing::info!(
            login = %cmd.login,
            lecture = %key,
            remaining = lecture.capacity,
            "Registered for lecture"
        );

        Ok(RegisterForLectureResult { user, lecture })
    }
}
