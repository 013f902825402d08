//! UserStore port for user persistence operations.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Email, Login};
use crate::domain::registration::User;

/// Store for user aggregates.
///
/// A user's `lectures` set is read back with the aggregate, but memberships
/// are owned by the lecture side: `LectureStore::save` records them
/// together with the seat count, and `save` here must not add or drop any.
/// A caller holding an older copy of the user therefore cannot undo a
/// reservation committed in the meantime.
///
/// # Errors
///
/// `Err` is reserved for infrastructure failures and store-level
/// constraints. A missing user is `Ok(None)`.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by login.
    async fn find_by_login(&self, login: &Login) -> Result<Option<User>, DomainError>;

    /// Find the user currently owning an email address.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError>;

    /// All users, in no particular order.
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Insert or replace a user, returning the stored state.
    ///
    /// Implementations enforcing email uniqueness fail with
    /// `ErrorCode::EmailInUse` and an `email` detail.
    async fn save(&self, user: &User) -> Result<User, DomainError>;
}
