//! YAML seed data for the in-memory registry.
//!
//! ```yaml
//! users:
//!   - login: alice
//!     email: a@x.com
//! lectures:
//!   - path_number: 1
//!     lecture_number: 1
//!     capacity: 5
//! registrations:
//!   - login: alice
//!     path_number: 1
//!     lecture_number: 1
//! ```
//!
//! Registrations go through the reservation engine, so each one consumes a
//! seat and a seed that overbooks a lecture is rejected.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::foundation::{DomainError, Email, ErrorCode, LectureKey, Login};
use crate::domain::registration::{register, Lecture, RegistrationError, User};

use super::InMemoryRegistry;

/// Errors raised while loading seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Registration for {login} in lecture {lecture} rejected: {source}")]
    Registration {
        login: Login,
        lecture: LectureKey,
        source: RegistrationError,
    },

    #[error("Invalid seed data: {0}")]
    Invalid(#[from] DomainError),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<SeedUser>,
    #[serde(default)]
    pub lectures: Vec<SeedLecture>,
    #[serde(default)]
    pub registrations: Vec<SeedRegistration>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    pub login: Login,
    pub email: Email,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedLecture {
    pub path_number: i32,
    pub lecture_number: i32,
    pub capacity: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedRegistration {
    pub login: Login,
    pub path_number: i32,
    pub lecture_number: i32,
}

impl SeedData {
    /// Parse seed data from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SeedError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML seed file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Apply registrations and build the registry.
    pub fn into_registry(self) -> Result<InMemoryRegistry, SeedError> {
        let mut users: BTreeMap<Login, User> = BTreeMap::new();
        for seed in self.users {
            let login = seed.login.clone();
            if users.insert(login.clone(), User::new(seed.login, seed.email)).is_some() {
                return Err(duplicate(format!("user {} is listed twice", login)));
            }
        }

        let mut lectures: BTreeMap<LectureKey, Lecture> = BTreeMap::new();
        for seed in self.lectures {
            let key = LectureKey::new(seed.path_number, seed.lecture_number);
            if lectures.insert(key, Lecture::new(key, seed.capacity)).is_some() {
                return Err(duplicate(format!("lecture {} is listed twice", key)));
            }
        }

        for seed in self.registrations {
            let key = LectureKey::new(seed.path_number, seed.lecture_number);
            let rejected = |source| SeedError::Registration {
                login: seed.login.clone(),
                lecture: key,
                source,
            };

            let user = users
                .get_mut(&seed.login)
                .ok_or_else(|| rejected(RegistrationError::user_not_found(seed.login.clone())))?;
            let lecture = lectures
                .get_mut(&key)
                .ok_or_else(|| rejected(RegistrationError::lecture_not_found(key)))?;

            register(user, lecture).map_err(rejected)?;
        }

        let registry = InMemoryRegistry::from_parts(
            users.into_values().collect(),
            lectures.into_values().collect(),
        )?;
        Ok(registry)
    }
}

fn duplicate(message: String) -> SeedError {
    SeedError::Invalid(DomainError::new(ErrorCode::ValidationFailed, message))
}

/// Load a registry from a seed file.
pub fn load_registry(path: impl AsRef<Path>) -> Result<InMemoryRegistry, SeedError> {
    let path = path.as_ref();
    let seed = SeedData::from_file(path)?;
    let (users, lectures, registrations) = (
        seed.users.len(),
        seed.lectures.len(),
        seed.registrations.len(),
    );

    let registry = seed.into_registry()?;
    tracing::info!(
        path = %path.display(),
        users,
        lectures,
        registrations,
        "Loaded seed data"
    );
    Ok(registry)
}
