//! Mock stores shared by the registration handler tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, Email, ErrorCode, LectureKey, Login};
use crate::domain::registration::{Lecture, User};
use crate::ports::{LectureStore, UserStore};

// ════════════════════════════════════════════════════════════════════════════════
// Mock Implementations
// ════════════════════════════════════════════════════════════════════════════════

pub struct MockUserStore {
    users: Mutex<Vec<User>>,
    saved: Mutex<Vec<User>>,
    fail_read: bool,
    fail_save: bool,
}

impl MockUserStore {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            saved: Mutex::new(Vec::new()),
            fail_read: false,
            fail_save: false,
        }
    }

    pub fn failing_read() -> Self {
        Self {
            fail_read: true,
            ..Self::new()
        }
    }

    pub fn failing_save(users: Vec<User>) -> Self {
        Self {
            fail_save: true,
            ..Self::with_users(users)
        }
    }

    /// Users passed to `save`, in call order.
    pub fn saved(&self) -> Vec<User> {
        self.saved.lock().unwrap().clone()
    }

    fn check_read(&self) -> Result<(), DomainError> {
        if self.fail_read {
            return Err(DomainError::new(ErrorCode::DatabaseError, "Simulated read failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn find_by_login(&self, login: &Login) -> Result<Option<User>, DomainError> {
        self.check_read()?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.login() == login).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        self.check_read()?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        self.check_read()?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn save(&self, user: &User) -> Result<User, DomainError> {
        if self.fail_save {
            return Err(DomainError::new(ErrorCode::DatabaseError, "Simulated save failure"));
        }
        self.saved.lock().unwrap().push(user.clone());
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.login() == user.login()) {
            Some(existing) => *existing = user.clone(),
            None => users.push(user.clone()),
        }
        Ok(user.clone())
    }
}

pub struct MockLectureStore {
    lectures: Mutex<Vec<Lecture>>,
    saved: Mutex<Vec<Lecture>>,
    fail_save: Option<ErrorCode>,
}

impl MockLectureStore {
    pub fn new() -> Self {
        Self::with_lectures(Vec::new())
    }

    pub fn with_lectures(lectures: Vec<Lecture>) -> Self {
        Self {
            lectures: Mutex::new(lectures),
            saved: Mutex::new(Vec::new()),
            fail_save: None,
        }
    }

    /// Every `save` fails with `code`.
    pub fn failing_save(lectures: Vec<Lecture>, code: ErrorCode) -> Self {
        Self {
            fail_save: Some(code),
            ..Self::with_lectures(lectures)
        }
    }

    /// Lectures passed to `save`, in call order.
    pub fn saved(&self) -> Vec<Lecture> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl LectureStore for MockLectureStore {
    async fn find_by_key(&self, key: LectureKey) -> Result<Option<Lecture>, DomainError> {
        let lectures = self.lectures.lock().unwrap();
        Ok(lectures.iter().find(|l| l.key() == key).cloned())
    }

    async fn save(&self, lecture: &Lecture) -> Result<Lecture, DomainError> {
        if let Some(code) = self.fail_save {
            return Err(DomainError::new(code, "Simulated save failure"));
        }
        self.saved.lock().unwrap().push(lecture.clone());
        let mut lectures = self.lectures.lock().unwrap();
        match lectures.iter_mut().find(|l| l.key() == lecture.key()) {
            Some(existing) => *existing = lecture.clone(),
            None => lectures.push(lecture.clone()),
        }
        Ok(lecture.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Test Helpers
// ════════════════════════════════════════════════════════════════════════════════

pub fn login(value: &str) -> Login {
    Login::new(value).unwrap()
}

pub fn user(login_value: &str, email: &str) -> User {
    User::new(login(login_value), Email::new(email).unwrap())
}

pub fn lecture(path: i32, number: i32, capacity: u32) -> Lecture {
    Lecture::new(LectureKey::new(path, number), capacity)
}
