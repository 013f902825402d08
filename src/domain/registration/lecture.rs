//! Lecture aggregate entity.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LectureKey, Login};

/// Lecture aggregate - one slot on a conference path.
///
/// # Invariants
///
/// - `key` is unique across the system
/// - `capacity` counts remaining seats and is never negative
/// - `attendees` mirrors the users whose `lectures` contain `key`
///
/// `version` is owned by the store. Stores that support optimistic
/// concurrency reject a save whose version is stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    key: LectureKey,
    pub capacity: u32,
    pub attendees: BTreeSet<Login>,
    pub version: u64,
}

impl Lecture {
    /// Creates a lecture with `capacity` open seats and no attendees.
    pub fn new(key: LectureKey, capacity: u32) -> Self {
        Self {
            key,
            capacity,
            attendees: BTreeSet::new(),
            version: 0,
        }
    }

    pub fn key(&self) -> LectureKey {
        self.key
    }

    pub fn has_open_seats(&self) -> bool {
        self.capacity > 0
    }

    pub fn is_attended_by(&self, login: &Login) -> bool {
        self.attendees.contains(login)
    }
}
