//! In-memory repository for review tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::domain::UserId;
use crate::review::{
    domain::{Review, ReviewId},
    ports::{ReviewRepository, ReviewRepositoryError, ReviewRepositoryResult},
};

/// Thread-safe in-memory review repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReviewRepository {
    reviews: Arc<RwLock<HashMap<ReviewId, Review>>>,
}

impl InMemoryReviewRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn store(&self, review: &Review) -> ReviewRepositoryResult<()> {
        let mut reviews = self.reviews.write().map_err(|err| {
            ReviewRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let duplicate = reviews.values().any(|existing| {
            existing.chore_id() == review.chore_id() && existing.reviewer() == review.reviewer()
        });
        if duplicate {
            return Err(ReviewRepositoryError::DuplicateReview {
                chore_id: review.chore_id(),
                reviewer: review.reviewer(),
            });
        }
        reviews.insert(review.id(), review.clone());
        Ok(())
    }

    async fn list_for_reviewee(&self, reviewee: UserId) -> ReviewRepositoryResult<Vec<Review>> {
        let reviews = self.reviews.read().map_err(|err| {
            ReviewRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut received: Vec<Review> = reviews
            .values()
            .filter(|review| review.reviewee() == reviewee)
            .cloned()
            .collect();
        received.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(received)
    }
}
