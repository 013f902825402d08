//! User aggregate entity.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Email, LectureKey, Login};

use super::RegistrationError;

/// User aggregate - a conference attendee.
///
/// # Invariants
///
/// - `login` never changes after creation
/// - `email` is unique across users (checked against the store)
/// - `lectures` holds keys, not lecture values; a key appears at most once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    login: Login,
    pub email: Email,
    pub lectures: BTreeSet<LectureKey>,
}

impl User {
    /// Creates a user with no reservations.
    pub fn new(login: Login, email: Email) -> Self {
        Self {
            login,
            email,
            lectures: BTreeSet::new(),
        }
    }

    pub fn login(&self) -> &Login {
        &self.login
    }

    /// True when the user holds a reservation for `key`.
    pub fn is_registered_for(&self, key: &LectureKey) -> bool {
        self.lectures.contains(key)
    }

    /// True when the user holds at least one reservation.
    pub fn has_reservations(&self) -> bool {
        !self.lectures.is_empty()
    }

    /// Changes the email address.
    ///
    /// `current_owner` is the login currently holding `new_email`, if any.
    /// Keeping one's own address is accepted and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `EmailInUse` when a different user owns `new_email`. The
    /// user is left untouched.
    pub fn change_email(
        &mut self,
        new_email: Email,
        current_owner: Option<&Login>,
    ) -> Result<(), RegistrationError> {
        if let Some(owner) = current_owner {
            if owner != &self.login {
                return Err(RegistrationError::email_in_use(new_email));
            }
        }
        self.email = new_email;
        Ok(())
    }
}
