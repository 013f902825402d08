//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Unique, immutable login of a user.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Login(String);

impl Login {
    /// Creates a new Login, returning error if blank.
    pub fn new(login: impl Into<String>) -> Result<Self, ValidationError> {
        let login = login.into();
        if login.trim().is_empty() {
            return Err(ValidationError::empty_field("login"));
        }
        Ok(Self(login))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Login {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Login> for String {
    fn from(login: Login) -> Self {
        login.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Email address of a user. Unique across users, but mutable.
///
/// Only the basic `local@domain` shape is checked; deliverability is not.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Creates a new Email after a shape check.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into().trim().to_string();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }

        let mut parts = email.split('@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next();

        match domain {
            None => Err(ValidationError::invalid_format("email", "missing @ symbol")),
            Some(_) if parts.next().is_some() => {
                Err(ValidationError::invalid_format("email", "more than one @ symbol"))
            }
            Some(domain) if local.is_empty() || domain.is_empty() => Err(
                ValidationError::invalid_format("email", "local part and domain are required"),
            ),
            Some(_) if email.chars().any(char::is_whitespace) => {
                Err(ValidationError::invalid_format("email", "contains whitespace"))
            }
            Some(_) => Ok(Self(email)),
        }
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Composite key of a lecture slot: `(path number, lecture number)`.
///
/// Ordering is by path first, then lecture number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LectureKey {
    pub path_number: i32,
    pub lecture_number: i32,
}

impl LectureKey {
    pub fn new(path_number: i32, lecture_number: i32) -> Self {
        Self {
            path_number,
            lecture_number,
        }
    }
}

impl fmt::Display for LectureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.path_number, self.lecture_number)
    }
}
