//! GetUserLecturesHandler - Query handler for a user's reserved lectures.

use std::sync::Arc;

use crate::domain::foundation::Login;
use crate::domain::registration::{Lecture, RegistrationError};
use crate::ports::{LectureStore, UserStore};

/// Query for the lectures a user is registered for.
#[derive(Debug, Clone)]
pub struct GetUserLecturesQuery {
    pub login: Login,
}

/// Handler resolving a user's lecture keys into lectures, ordered by key.
pub struct GetUserLecturesHandler {
    users: Arc<dyn UserStore>,
    lectures: Arc<dyn LectureStore>,
}

impl GetUserLecturesHandler {
    pub fn new(users: Arc<dyn UserStore>, lectures: Arc<dyn LectureStore>) -> Self {
        Self { users, lectures }
    }

    pub async fn handle(
        &self,
        query: GetUserLecturesQuery,
    ) -> Result<Vec<Lecture>, RegistrationError> {
        let user = self
            .users
            .find_by_login(&query.login)
            .await?
            .ok_or_else(|| RegistrationError::user_not_found(query.login.clone()))?;

        let mut lectures = Vec::with_capacity(user.lectures.len());
        for key in &user.lectures {
            // A dangling key means the store lost one side of a membership.
            let lecture = self.lectures.find_by_key(*key).await?.ok_or_else(|| {
                RegistrationError::infrastructure(format!(
                    "user {} references missing lecture {}",
                    query.login, key
                ))
            })?;
            lectures.push(lecture);
        }

        tracing::debug!(login = %query.login, count = lectures.len(), "Listed user lectures");
        Ok(lectures)
    }
}
