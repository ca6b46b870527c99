//! Service layer for submitting reviews and deriving reputation.

use crate::chore::{
    domain::{Chore, ChoreId, ChoreStatus},
    ports::{ChoreRepository, ChoreRepositoryError},
};
use crate::identity::domain::UserId;
use crate::review::{
    domain::{RatingScore, Review, ReviewDomainError},
    ports::{ReviewRepository, ReviewRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Rating reported for a user who has not been reviewed yet.
pub const NEUTRAL_RATING: f64 = 3.0;

/// Request payload for submitting a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddReviewRequest {
    chore_id: ChoreId,
    rating: i32,
    comment: Option<String>,
}

impl AddReviewRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub const fn new(chore_id: ChoreId, rating: i32) -> Self {
        Self {
            chore_id,
            rating,
            comment: None,
        }
    }

    /// Sets the free-text comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Service-level errors for review operations.
#[derive(Debug, Error)]
pub enum ReputationError {
    /// The rating falls outside the 1 to 5 scale.
    #[error(transparent)]
    Domain(#[from] ReviewDomainError),
    /// The chore does not exist.
    #[error("chore not found: {0}")]
    ChoreNotFound(ChoreId),
    /// Reviews are only allowed once the chore is completed.
    #[error("chore {chore_id} is not completed")]
    ChoreNotCompleted {
        /// Chore the review targeted.
        chore_id: ChoreId,
        /// Status the chore was actually in.
        status: ChoreStatus,
    },
    /// The reviewer took no part in the chore.
    #[error("only participants of a chore may review it")]
    NotParticipant,
    /// The reviewer has already reviewed this chore.
    #[error("chore {0} already reviewed")]
    AlreadyReviewed(ChoreId),
    /// Chore lookup failed.
    #[error(transparent)]
    Chores(ChoreRepositoryError),
    /// Review persistence failed.
    #[error(transparent)]
    Reviews(ReviewRepositoryError),
}

/// Result type for reputation service operations.
pub type ReputationResult<T> = Result<T, ReputationError>;

/// Review orchestration and reputation derivation service.
#[derive(Clone)]
pub struct ReputationService<CR, RR, C>
where
    CR: ChoreRepository + ?Sized,
    RR: ReviewRepository + ?Sized,
    C: Clock + Send + Sync,
{
    chores: Arc<CR>,
    reviews: Arc<RR>,
    clock: Arc<C>,
}

impl<CR, RR, C> ReputationService<CR, RR, C>
where
    CR: ChoreRepository + ?Sized,
    RR: ReviewRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new reputation service.
    #[must_use]
    pub const fn new(chores: Arc<CR>, reviews: Arc<RR>, clock: Arc<C>) -> Self {
        Self {
            chores,
            reviews,
            clock,
        }
    }

    /// Submits a review of the other participant in a completed chore.
    ///
    /// The reviewee is derived rather than supplied: the poster reviews the
    /// completer and the completer reviews the poster.
    ///
    /// # Errors
    ///
    /// Returns [`ReputationError::ChoreNotFound`] when the chore does not
    /// exist, [`ReputationError::ChoreNotCompleted`] when it has not been
    /// completed, [`ReputationError::NotParticipant`] when the reviewer took
    /// no part in it, and [`ReputationError::AlreadyReviewed`] on a repeat
    /// submission.
    pub async fn add_review(
        &self,
        reviewer: UserId,
        request: AddReviewRequest,
    ) -> ReputationResult<Review> {
        let rating = RatingScore::new(request.rating)?;
        let chore = self
            .chores
            .find_by_id(request.chore_id)
            .await
            .map_err(ReputationError::Chores)?
            .ok_or(ReputationError::ChoreNotFound(request.chore_id))?;

        if chore.status() != ChoreStatus::Completed {
            return Err(ReputationError::ChoreNotCompleted {
                chore_id: request.chore_id,
                status: chore.status(),
            });
        }
        let reviewee = counterpart(&chore, reviewer).ok_or(ReputationError::NotParticipant)?;

        let review = Review::new(
            request.chore_id,
            reviewer,
            reviewee,
            rating,
            request.comment,
            &*self.clock,
        );
        self.reviews.store(&review).await.map_err(|err| match err {
            ReviewRepositoryError::DuplicateReview { chore_id, .. } => {
                ReputationError::AlreadyReviewed(chore_id)
            }
            other => ReputationError::Reviews(other),
        })?;
        Ok(review)
    }

    /// Lists the reviews a user has received, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ReputationError::Reviews`] when the lookup fails.
    pub async fn reviews_for(&self, reviewee: UserId) -> ReputationResult<Vec<Review>> {
        self.reviews
            .list_for_reviewee(reviewee)
            .await
            .map_err(ReputationError::Reviews)
    }

    /// Derives a user's reputation as the mean of received ratings, or
    /// [`NEUTRAL_RATING`] when none exist.
    ///
    /// # Errors
    ///
    /// Returns [`ReputationError::Reviews`] when the lookup fails.
    pub async fn rating_for(&self, reviewee: UserId) -> ReputationResult<f64> {
        let reviews = self.reviews_for(reviewee).await?;
        if reviews.is_empty() {
            return Ok(NEUTRAL_RATING);
        }
        let total: i32 = reviews.iter().map(|review| review.rating().value()).sum();
        #[expect(clippy::cast_precision_loss, reason = "review counts stay far below 2^52")]
        Ok(f64::from(total) / reviews.len() as f64)
    }
}

/// Returns the other participant of a completed chore, or `None` when the
/// user took no part in it.
fn counterpart(chore: &Chore, user: UserId) -> Option<UserId> {
    let completer = chore.completed_by()?;
    if user == chore.posted_by() {
        Some(completer)
    } else if user == completer {
        Some(chore.posted_by())
    } else {
        None
    }
}
