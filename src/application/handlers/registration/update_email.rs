//! UpdateEmailHandler - Command handler for changing a user's email.

use std::sync::Arc;

use crate::domain::foundation::{Email, Login};
use crate::domain::registration::{RegistrationError, User};
use crate::ports::UserStore;

/// Command to change a user's email address.
#[derive(Debug, Clone)]
pub struct UpdateEmailCommand {
    pub login: Login,
    pub new_email: Email,
}

/// Handler for email changes.
///
/// Uniqueness is checked against the current owner of the new address. A
/// store that enforces uniqueness itself closes the gap between that check
/// and the write.
pub struct UpdateEmailHandler {
    users: Arc<dyn UserStore>,
}

impl UpdateEmailHandler {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: UpdateEmailCommand) -> Result<User, RegistrationError> {
        let mut user = self
            .users
            .find_by_login(&cmd.login)
            .await?
            .ok_or_else(|| RegistrationError::user_not_found(cmd.login.clone()))?;

        let owner = self.users.find_by_email(&cmd.new_email).await?;
        let owner_login = owner.as_ref().map(|u| u.login());

        if let Err(err) = user.change_email(cmd.new_email.clone(), owner_login) {
            tracing::warn!(login = %cmd.login, "Email change rejected: {}", err);
            return Err(err);
        }

        let user = self.users.save(&user).await?;
        tracing::info!(login = %cmd.login, "Email updated");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{login, user, MockUserStore};
    use super::*;

    fn command(login_value: &str, email: &str) -> UpdateEmailCommand {
        UpdateEmailCommand {
            login: login(login_value),
            new_email: Email::new(email).unwrap(),
        }
    }

    #[tokio::test]
    async fn updates_email() {
        let users = Arc::new(MockUserStore::with_users(vec![user("alice", "a@x.com")]));
        let handler = UpdateEmailHandler::new(users.clone());

        let updated = handler.handle(command("alice", "new@x.com")).await.unwrap();

        assert_eq!(updated.email.as_str(), "new@x.com");
        assert_eq!(users.saved().len(), 1);
    }

    #[tokio::test]
    async fn fails_when_email_owned_by_other_user() {
        let users = Arc::new(MockUserStore::with_users(vec![
            user("alice", "a@x.com"),
            user("bob", "b@x.com"),
        ]));
        let handler = UpdateEmailHandler::new(users.clone());

        let result = handler.handle(command("alice", "b@x.com")).await;

        assert_eq!(
            result.unwrap_err(),
            RegistrationError::email_in_use(Email::new("b@x.com").unwrap())
        );
        assert!(users.saved().is_empty());
    }

    #[tokio::test]
    async fn other_users_are_not_modified() {
        let users = Arc::new(MockUserStore::with_users(vec![
            user("alice", "a@x.com"),
            user("bob", "b@x.com"),
        ]));
        let handler = UpdateEmailHandler::new(users.clone());

        handler.handle(command("alice", "c@x.com")).await.unwrap();

        let saved = users.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].login(), &login("alice"));
    }

    #[tokio::test]
    async fn keeping_own_email_succeeds() {
        let users = Arc::new(MockUserStore::with_users(vec![user("alice", "a@x.com")]));
        let handler = UpdateEmailHandler::new(users);

        let updated = handler.handle(command("alice", "a@x.com")).await.unwrap();

        assert_eq!(updated.email.as_str(), "a@x.com");
    }

    #[tokio::test]
    async fn fails_when_user_not_found() {
        let users = Arc::new(MockUserStore::new());
        let handler = UpdateEmailHandler::new(users.clone());

        let result = handler.handle(command("ghost", "g@x.com")).await;

        assert!(matches!(result, Err(RegistrationError::UserNotFound(_))));
        assert!(users.saved().is_empty());
    }

    #[tokio::test]
    async fn save_failure_is_infrastructure_error() {
        let users = Arc::new(MockUserStore::failing_save(vec![user("alice", "a@x.com")]));
        let handler = UpdateEmailHandler::new(users);

        let result = handler.handle(command("alice", "new@x.com")).await;

        assert!(matches!(result, Err(RegistrationError::Infrastructure(_))));
    }
}
