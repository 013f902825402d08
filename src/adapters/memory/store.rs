//! In-Memory Registry Adapter
//!
//! Arena-and-index storage for users and lectures. Entities live in maps
//! keyed by login and lecture key; memberships live only in the
//! `enrollments` join index. A user's `lectures` and a lecture's
//! `attendees` are rebuilt from the index on every read, so neither side
//! can drift from the other.
//!
//! Only a lecture save writes the index. That save is version-checked and
//! moves the seat count together with the attendee set. A user save
//! persists the email and leaves memberships alone.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Email, ErrorCode, LectureKey, Login};
use crate::domain::registration::{Enrollment, Lecture, User};
use crate::ports::{LectureStore, UserStore};

#[derive(Debug, Clone)]
struct UserRow {
    login: Login,
    email: Email,
}

#[derive(Debug, Clone)]
struct LectureRow {
    key: LectureKey,
    capacity: u32,
    version: u64,
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<Login, UserRow>,
    lectures: BTreeMap<LectureKey, LectureRow>,
    enrollments: BTreeSet<Enrollment>,
}

impl Tables {
    fn hydrate_user(&self, row: &UserRow) -> User {
        let mut user = User::new(row.login.clone(), row.email.clone());
        user.lectures = self
            .enrollments
            .iter()
            .filter(|e| e.login == row.login)
            .map(|e| e.lecture)
            .collect();
        user
    }

    fn hydrate_lecture(&self, row: &LectureRow) -> Lecture {
        let mut lecture = Lecture::new(row.key, row.capacity);
        lecture.version = row.version;
        lecture.attendees = self
            .enrollments
            .iter()
            .filter(|e| e.lecture == row.key)
            .map(|e| e.login.clone())
            .collect();
        lecture
    }

    fn email_owner(&self, email: &Email) -> Option<&UserRow> {
        self.users.values().find(|row| &row.email == email)
    }
}

/// In-memory implementation of both store ports.
///
/// Cloning shares the underlying tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from fully-formed aggregates.
    ///
    /// Memberships are read from both sides and must agree: every key in a
    /// user's `lectures` needs the matching login in that lecture's
    /// `attendees`, and the other way round.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` for duplicate logins, emails, or lecture
    /// keys, for memberships naming unknown entities, and for one-sided
    /// memberships.
    pub fn from_parts(users: Vec<User>, lectures: Vec<Lecture>) -> Result<Self, DomainError> {
        let mut tables = Tables::default();

        for lecture in &lectures {
            let row = LectureRow {
                key: lecture.key(),
                capacity: lecture.capacity,
                version: lecture.version,
            };
            if tables.lectures.insert(lecture.key(), row).is_some() {
                return Err(invalid(format!("duplicate lecture {}", lecture.key())));
            }
        }

        for user in &users {
            if tables.email_owner(&user.email).is_some() {
                return Err(invalid(format!("duplicate email {}", user.email)));
            }
            let row = UserRow {
                login: user.login().clone(),
                email: user.email.clone(),
            };
            if tables.users.insert(user.login().clone(), row).is_some() {
                return Err(invalid(format!("duplicate login {}", user.login())));
            }
        }

        let from_users: BTreeSet<Enrollment> = users
            .iter()
            .flat_map(|u| u.lectures.iter().map(|k| Enrollment::new(u.login().clone(), *k)))
            .collect();
        let from_lectures: BTreeSet<Enrollment> = lectures
            .iter()
            .flat_map(|l| l.attendees.iter().map(|a| Enrollment::new(a.clone(), l.key())))
            .collect();

        if let Some(e) = from_users.symmetric_difference(&from_lectures).next() {
            return Err(invalid(format!(
                "membership of {} in lecture {} is recorded on one side only",
                e.login, e.lecture
            )));
        }
        for e in &from_users {
            if !tables.users.contains_key(&e.login) || !tables.lectures.contains_key(&e.lecture) {
                return Err(invalid(format!(
                    "membership of {} in lecture {} references an unknown entity",
                    e.login, e.lecture
                )));
            }
        }
        tables.enrollments = from_users;

        Ok(Self {
            tables: Arc::new(RwLock::new(tables)),
        })
    }

    // === Inspection ===

    /// Snapshot of the join index.
    pub async fn enrollments(&self) -> Vec<Enrollment> {
        self.tables.read().await.enrollments.iter().cloned().collect()
    }

    /// Number of stored users.
    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }

    /// Number of stored lectures.
    pub async fn lecture_count(&self) -> usize {
        self.tables.read().await.lectures.len()
    }
}

fn invalid(message: String) -> DomainError {
    DomainError::new(ErrorCode::ValidationFailed, message)
}

#[async_trait]
impl UserStore for InMemoryRegistry {
    async fn find_by_login(&self, login: &Login) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.users.get(login).map(|row| tables.hydrate_user(row)))
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.email_owner(email).map(|row| tables.hydrate_user(row)))
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().map(|row| tables.hydrate_user(row)).collect())
    }

    async fn save(&self, user: &User) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;
        let login = user.login();

        if let Some(owner) = tables.email_owner(&user.email) {
            if &owner.login != login {
                return Err(DomainError::new(
                    ErrorCode::EmailInUse,
                    format!("email {} belongs to another user", user.email),
                )
                .with_detail("email", user.email.as_str()));
            }
        }

        let row = UserRow {
            login: login.clone(),
            email: user.email.clone(),
        };
        tables.users.insert(login.clone(), row.clone());
        Ok(tables.hydrate_user(&row))
    }
}

#[async_trait]
impl LectureStore for InMemoryRegistry {
    async fn find_by_key(&self, key: LectureKey) -> Result<Option<Lecture>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.lectures.get(&key).map(|row| tables.hydrate_lecture(row)))
    }

    async fn save(&self, lecture: &Lecture) -> Result<Lecture, DomainError> {
        let mut tables = self.tables.write().await;
        let key = lecture.key();

        if let Some(stored) = tables.lectures.get(&key) {
            if stored.version != lecture.version {
                return Err(DomainError::new(
                    ErrorCode::ConcurrencyConflict,
                    format!(
                        "lecture {} is at version {}, update was based on {}",
                        key, stored.version, lecture.version
                    ),
                ));
            }
        }
        if let Some(login) = lecture.attendees.iter().find(|l| !tables.users.contains_key(*l)) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("lecture {} references unknown user {}", key, login),
            ));
        }

        tables.enrollments.retain(|e| e.lecture != key);
        for login in &lecture.attendees {
            tables.enrollments.insert(Enrollment::new(login.clone(), key));
        }

        let row = LectureRow {
            key,
            capacity: lecture.capacity,
            version: lecture.version + 1,
        };
        tables.lectures.insert(key, row.clone());
        Ok(tables.hydrate_lecture(&row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registration::register;

    fn user(login: &str, email: &str) -> User {
        User::new(Login::new(login).unwrap(), Email::new(email).unwrap())
    }

    fn key(path: i32, number: i32) -> LectureKey {
        LectureKey::new(path, number)
    }

    fn seeded() -> InMemoryRegistry {
        InMemoryRegistry::from_parts(
            vec![user("alice", "a@x.com"), user("bob", "b@x.com")],
            vec![Lecture::new(key(1, 1), 5), Lecture::new(key(2, 3), 0)],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn finds_users_by_login_and_email() {
        let store = seeded();
        let alice = Login::new("alice").unwrap();

        let by_login = store.find_by_login(&alice).await.unwrap().unwrap();
        let by_email = store
            .find_by_email(&Email::new("a@x.com").unwrap())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(by_login, by_email);
        assert!(store
            .find_by_login(&Login::new("carol").unwrap())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn find_all_returns_every_user() {
        let store = seeded();
        assert_eq!(store.find_all().await.unwrap().len(), 2);
        assert_eq!(store.user_count().await, 2);
        assert_eq!(store.lecture_count().await, 2);
    }

    #[tokio::test]
    async fn saving_both_sides_records_one_enrollment() {
        let store = seeded();
        let mut alice = store
            .find_by_login(&Login::new("alice").unwrap())
            .await
            .unwrap()
            .unwrap();
        let mut talk = store.find_by_key(key(1, 1)).await.unwrap().unwrap();

        register(&mut alice, &mut talk).unwrap();
        LectureStore::save(&store, &talk).await.unwrap();
        UserStore::save(&store, &alice).await.unwrap();

        let enrollments = store.enrollments().await;
        assert_eq!(enrollments, vec![Enrollment::new(alice.login().clone(), key(1, 1))]);

        let reloaded = store.find_by_key(key(1, 1)).await.unwrap().unwrap();
        assert_eq!(reloaded.capacity, 4);
        assert!(reloaded.is_attended_by(alice.login()));
    }

    #[tokio::test]
    async fn lecture_save_bumps_version() {
        let store = seeded();
        let talk = store.find_by_key(key(1, 1)).await.unwrap().unwrap();
        assert_eq!(talk.version, 0);

        let saved = LectureStore::save(&store, &talk).await.unwrap();

        assert_eq!(saved.version, 1);
    }

    #[tokio::test]
    async fn stale_lecture_save_is_rejected() {
        let store = seeded();
        let first = store.find_by_key(key(1, 1)).await.unwrap().unwrap();
        let mut second = first.clone();
        LectureStore::save(&store, &first).await.unwrap();

        second.capacity = 0;
        let err = LectureStore::save(&store, &second).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ConcurrencyConflict);
        let stored = store.find_by_key(key(1, 1)).await.unwrap().unwrap();
        assert_eq!(stored.capacity, 5);
    }

    #[tokio::test]
    async fn saving_user_with_taken_email_fails() {
        let store = seeded();
        let mut alice = store
            .find_by_login(&Login::new("alice").unwrap())
            .await
            .unwrap()
            .unwrap();
        alice.email = Email::new("b@x.com").unwrap();

        let err = UserStore::save(&store, &alice).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::EmailInUse);
        assert_eq!(err.detail("email"), Some("b@x.com"));
    }

    #[tokio::test]
    async fn user_save_does_not_write_memberships() {
        let store = seeded();
        let mut alice = user("alice", "a@x.com");
        alice.lectures.insert(key(1, 1));
        alice.lectures.insert(key(9, 9));

        let saved = UserStore::save(&store, &alice).await.unwrap();

        assert!(!saved.has_reservations());
        assert!(store.enrollments().await.is_empty());
        let talk = store.find_by_key(key(1, 1)).await.unwrap().unwrap();
        assert_eq!(talk.capacity, 5);
    }

    #[tokio::test]
    async fn interleaved_registrations_from_stale_user_copies_keep_every_seat() {
        let store = InMemoryRegistry::from_parts(
            vec![user("alice", "a@x.com")],
            vec![Lecture::new(key(1, 1), 5), Lecture::new(key(1, 2), 5)],
        )
        .unwrap();
        let alice = Login::new("alice").unwrap();

        let mut first_copy = store.find_by_login(&alice).await.unwrap().unwrap();
        let mut second_copy = store.find_by_login(&alice).await.unwrap().unwrap();
        let mut talk_a = store.find_by_key(key(1, 1)).await.unwrap().unwrap();
        let mut talk_b = store.find_by_key(key(1, 2)).await.unwrap().unwrap();

        register(&mut first_copy, &mut talk_a).unwrap();
        register(&mut second_copy, &mut talk_b).unwrap();
        LectureStore::save(&store, &talk_a).await.unwrap();
        LectureStore::save(&store, &talk_b).await.unwrap();
        UserStore::save(&store, &first_copy).await.unwrap();
        let saved = UserStore::save(&store, &second_copy).await.unwrap();

        for k in [key(1, 1), key(1, 2)] {
            let talk = store.find_by_key(k).await.unwrap().unwrap();
            assert_eq!(talk.capacity + talk.attendees.len() as u32, 5);
            assert!(talk.is_attended_by(&alice));
            assert!(saved.is_registered_for(&k));
        }
    }

    #[test]
    fn from_parts_rejects_one_sided_membership() {
        let mut alice = user("alice", "a@x.com");
        alice.lectures.insert(key(1, 1));

        let result = InMemoryRegistry::from_parts(vec![alice], vec![Lecture::new(key(1, 1), 5)]);

        assert!(result.is_err());
    }

    #[test]
    fn from_parts_rejects_duplicate_emails() {
        let result = InMemoryRegistry::from_parts(
            vec![user("alice", "a@x.com"), user("alias", "a@x.com")],
            vec![],
        );
        assert!(result.is_err());
    }

    #[test]
    fn from_parts_rejects_duplicate_lectures() {
        let result = InMemoryRegistry::from_parts(
            vec![],
            vec![Lecture::new(key(1, 1), 5), Lecture::new(key(1, 1), 3)],
        );
        assert!(result.is_err());
    }
}
