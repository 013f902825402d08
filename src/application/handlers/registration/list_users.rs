//! ListUsersHandler - Query handler for user listings.

use std::sync::Arc;

use crate::domain::registration::{RegistrationError, User};
use crate::ports::UserStore;

/// Which users a listing includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserFilter {
    /// Every user.
    #[default]
    All,
    /// Only users holding at least one reservation.
    Registered,
}

/// Query to list users.
#[derive(Debug, Clone, Default)]
pub struct ListUsersQuery {
    pub filter: UserFilter,
}

/// Handler for user listings. Order follows the store.
pub struct ListUsersHandler {
    users: Arc<dyn UserStore>,
}

impl ListUsersHandler {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: ListUsersQuery) -> Result<Vec<User>, RegistrationError> {
        let users = self.users.find_all().await?;

        let users: Vec<User> = match query.filter {
            UserFilter::All => users,
            UserFilter::Registered => users.into_iter().filter(User::has_reservations).collect(),
        };

        tracing::debug!(filter = ?query.filter, count = users.len(), "Listed users");
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{user, MockUserStore};
    use super::*;
    use crate::domain::foundation::LectureKey;

    fn store() -> Arc<MockUserStore> {
        let mut alice = user("alice", "a@x.com");
        alice.lectures.insert(LectureKey::new(1, 1));
        Arc::new(MockUserStore::with_users(vec![alice, user("bob", "b@x.com")]))
    }

    #[tokio::test]
    async fn lists_all_users() {
        let handler = ListUsersHandler::new(store());

        let users = handler.handle(ListUsersQuery::default()).await.unwrap();

        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn lists_only_registered_users() {
        let handler = ListUsersHandler::new(store());

        let users = handler
            .handle(ListUsersQuery {
                filter: UserFilter::Registered,
            })
            .await
            .unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].login().as_str(), "alice");
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let handler = ListUsersHandler::new(Arc::new(MockUserStore::new()));

        let users = handler.handle(ListUsersQuery::default()).await.unwrap();

        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn read_failure_is_infrastructure_error() {
        let handler = ListUsersHandler::new(Arc::new(MockUserStore::failing_read()));

        let result = handler.handle(ListUsersQuery::default()).await;

        assert!(matches!(result, Err(RegistrationError::Infrastructure(_))));
    }
}
