//! Review aggregate root.

use super::{RatingScore, ReviewId};
use crate::chore::domain::ChoreId;
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;

/// A rating left by one participant of a completed chore for the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    id: ReviewId,
    chore_id: ChoreId,
    reviewer: UserId,
    reviewee: UserId,
    rating: RatingScore,
    comment: Option<String>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedReviewData {
    /// Persisted review identifier.
    pub id: ReviewId,
    /// Persisted chore identifier.
    pub chore_id: ChoreId,
    /// Persisted reviewer identifier.
    pub reviewer: UserId,
    /// Persisted reviewee identifier.
    pub reviewee: UserId,
    /// Persisted rating.
    pub rating: RatingScore,
    /// Persisted comment, if any.
    pub comment: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Creates a new review stamped with the current time.
    #[must_use]
    pub fn new(
        chore_id: ChoreId,
        reviewer: UserId,
        reviewee: UserId,
        rating: RatingScore,
        comment: Option<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: ReviewId::new(),
            chore_id,
            reviewer,
            reviewee,
            rating,
            comment,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a review from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedReviewData) -> Self {
        Self {
            id: data.id,
            chore_id: data.chore_id,
            reviewer: data.reviewer,
            reviewee: data.reviewee,
            rating: data.rating,
            comment: data.comment,
            created_at: data.created_at,
        }
    }

    /// Returns the review identifier.
    #[must_use]
    pub const fn id(&self) -> ReviewId {
        self.id
    }

    /// Returns the chore the review is about.
    #[must_use]
    pub const fn chore_id(&self) -> ChoreId {
        self.chore_id
    }

    /// Returns the user who wrote the review.
    #[must_use]
    pub const fn reviewer(&self) -> UserId {
        self.reviewer
    }

    /// Returns the user the review is about.
    #[must_use]
    pub const fn reviewee(&self) -> UserId {
        self.reviewee
    }

    /// Returns the rating.
    #[must_use]
    pub const fn rating(&self) -> RatingScore {
        self.rating
    }

    /// Returns the comment, if any.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
