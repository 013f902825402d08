//! Reservation engine.
//!
//! Rules that span a user and a lecture. Both sides are passed in already
//! resolved; callers persist them only when an operation reports a change.
//!
//! # Invariant
//!
//! For every user `u` and lecture `l`:
//! `l.key() ∈ u.lectures ⇔ u.login() ∈ l.attendees`.

use super::{Lecture, RegistrationError, User};

/// What `cancel` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The reservation existed and was released.
    Cancelled,
    /// The user held no reservation for the lecture. Nothing changed.
    NotRegistered,
}

impl CancelOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, CancelOutcome::Cancelled)
    }
}

/// Reserves one seat of `lecture` for `user`.
///
/// Checks run in a fixed order: capacity first, then duplicate
/// registration. On error neither side is modified.
///
/// # Errors
///
/// - `NoCapacity` when `lecture.capacity == 0`
/// - `AlreadyRegistered` when the user already holds the reservation
pub fn register(user: &mut User, lecture: &mut Lecture) -> Result<(), RegistrationError> {
    let key = lecture.key();

    if !lecture.has_open_seats() {
        return Err(RegistrationError::no_capacity(key));
    }
    if user.is_registered_for(&key) {
        return Err(RegistrationError::already_registered(user.login().clone(), key));
    }

    lecture.capacity -= 1;
    user.lectures.insert(key);
    lecture.attendees.insert(user.login().clone());
    Ok(())
}

/// Releases `user`'s reservation of `lecture`, returning the seat.
///
/// Cancelling a reservation the user does not hold is not an error.
pub fn cancel(user: &mut User, lecture: &mut Lecture) -> CancelOutcome {
    let key = lecture.key();

    if !user.lectures.remove(&key) {
        return CancelOutcome::NotRegistered;
    }

    // Seats only come back for attendees the lecture actually counted.
    if lecture.attendees.remove(user.login()) {
        lecture.capacity = lecture.capacity.saturating_add(1);
    }
    CancelOutcome::Cancelled
}
