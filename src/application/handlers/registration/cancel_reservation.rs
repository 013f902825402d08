//! CancelReservationHandler - Command handler for releasing a lecture seat.

use std::sync::Arc;

use crate::domain::foundation::Login;
use crate::domain::registration::{cancel, CancelOutcome, Lecture, LectureRequest, RegistrationError};
use crate::ports::{LectureStore, UserStore};

/// Command to cancel a user's reservation.
#[derive(Debug, Clone)]
pub struct CancelReservationCommand {
    pub login: Login,
    pub request: LectureRequest,
}

/// Result of a cancellation.
#[derive(Debug, Clone)]
pub struct CancelReservationResult {
    pub outcome: CancelOutcome,
    /// Lecture state after the call (unchanged for `NotRegistered`).
    pub lecture: Lecture,
}

/// Handler for cancelling reservations.
///
/// The seat is returned to the lecture and the membership is removed from
/// both sides. Cancelling a reservation the user does not hold succeeds
/// without writing anything.
pub struct CancelReservationHandler {
    users: Arc<dyn UserStore>,
    lectures: Arc<dyn LectureStore>,
}

impl CancelReservationHandler {
    pub fn new(users: Arc<dyn UserStore>, lectures: Arc<dyn LectureStore>) -> Self {
        Self { users, lectures }
    }

    pub async fn handle(
        &self,
        cmd: CancelReservationCommand,
    ) -> Result<CancelReservationResult, RegistrationError> {
        let key = cmd.request.key();

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

        let outcome = cancel(&mut user, &mut lecture);
        if !outcome.changed() {
            tracing::debug!(login = %cmd.login, lecture = %key, "No reservation to cancel");
            return Ok(CancelReservationResult { outcome, lecture });
        }

        let lecture = self.lectures.save(&lecture).await?;
        self.users.save(&user).await?;

        tracing::info!(
            login = %cmd.login,
            lecture = %key,
            remaining = lecture.capacity,
            "Reservation cancelled"
        );

        Ok(CancelReservationResult { outcome, lecture })
    }
}
