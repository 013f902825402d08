//! Reservation inputs and join-index entries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LectureKey, Login};

/// Identifies the lecture slot a register/cancel call targets.
///
/// Any integer is accepted; numbers naming no lecture, negative ones
/// included, fail the lookup as `LectureNotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureRequest {
    pub path_number: i32,
    pub lecture_number: i32,
}

impl LectureRequest {
    pub fn new(path_number: i32, lecture_number: i32) -> Self {
        Self {
            path_number,
            lecture_number,
        }
    }

    pub fn key(&self) -> LectureKey {
        LectureKey::new(self.path_number, self.lecture_number)
    }
}

/// One `(login, lecture)` pair of the membership join index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Enrollment {
    pub login: Login,
    pub lecture: LectureKey,
}

impl Enrollment {
    pub fn new(login: Login, lecture: LectureKey) -> Self {
        Self { login, lecture }
    }
}
