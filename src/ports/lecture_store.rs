//! LectureStore port for lecture persistence operations.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, LectureKey};
use crate::domain::registration::Lecture;

/// Store for lecture aggregates.
///
/// A lecture save is the writer of record for memberships: the stored
/// attendee set and the user side of each membership follow `attendees`.
#[async_trait]
pub trait LectureStore: Send + Sync {
    /// Find a lecture by its `(path, lecture)` key.
    async fn find_by_key(&self, key: LectureKey) -> Result<Option<Lecture>, DomainError>;

    /// Insert or replace a lecture, returning the stored state.
    ///
    /// Stores with optimistic concurrency compare `lecture.version` with
    /// the stored version, fail with `ErrorCode::ConcurrencyConflict` on a
    /// mismatch, and return the lecture with its version bumped.
    async fn save(&self, lecture: &Lecture) -> Result<Lecture, DomainError>;
}
