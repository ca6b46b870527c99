//! Repository port for review persistence.

use crate::chore::domain::ChoreId;
use crate::identity::domain::UserId;
use crate::review::domain::Review;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for review repository operations.
pub type ReviewRepositoryResult<T> = Result<T, ReviewRepositoryError>;

/// Review persistence contract.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Stores a new review.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewRepositoryError::DuplicateReview`] when the reviewer
    /// has already reviewed the chore.
    async fn store(&self, review: &Review) -> ReviewRepositoryResult<()>;

    /// Lists the reviews received by a user, newest first.
    async fn list_for_reviewee(&self, reviewee: UserId) -> ReviewRepositoryResult<Vec<Review>>;
}

/// Errors returned by review repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ReviewRepositoryError {
    /// The reviewer has already reviewed this chore.
    #[error("chore {chore_id} already reviewed by {reviewer}")]
    DuplicateReview {
        /// Chore the duplicate review targets.
        chore_id: ChoreId,
        /// Reviewer who already submitted one.
        reviewer: UserId,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReviewRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
