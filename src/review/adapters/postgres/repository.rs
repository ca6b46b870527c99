//! `PostgreSQL` repository implementation for review persistence.
//!
//! The one-review-per-chore-per-reviewer rule rides on a unique index over
//! `(chore_id, reviewer_id)`.

use super::{
    models::{NewReviewRow, ReviewRow},
    schema::reviews,
};
use crate::identity::domain::UserId;
use crate::review::{
    domain::{PersistedReviewData, RatingScore, Review, ReviewId},
    ports::{ReviewRepository, ReviewRepositoryError, ReviewRepositoryResult},
};
use crate::chore::domain::ChoreId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by review adapters.
pub type ReviewPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed review repository.
#[derive(Debug, Clone)]
pub struct PostgresReviewRepository {
    pool: ReviewPgPool,
}

impl PostgresReviewRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ReviewPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ReviewRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ReviewRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ReviewRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ReviewRepositoryError::persistence)?
    }
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    async fn store(&self, review: &Review) -> ReviewRepositoryResult<()> {
        let chore_id = review.chore_id();
        let reviewer = review.reviewer();
        let new_row = NewReviewRow {
            id: review.id().into_inner(),
            chore_id: chore_id.into_inner(),
            reviewer_id: reviewer.into_inner(),
            reviewee_id: review.reviewee().into_inner(),
            rating: review.rating().value(),
            comment: review.comment().map(str::to_owned),
            created_at: review.created_at(),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(reviews::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ReviewRepositoryError::DuplicateReview { chore_id, reviewer }
                    }
                    _ => ReviewRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn list_for_reviewee(&self, reviewee: UserId) -> ReviewRepositoryResult<Vec<Review>> {
        let reviewee_id = reviewee.into_inner();
        self.run_blocking(move |connection| {
            let rows = reviews::table
                .filter(reviews::reviewee_id.eq(reviewee_id))
                .order(reviews::created_at.desc())
                .select(ReviewRow::as_select())
                .load::<ReviewRow>(connection)
                .map_err(ReviewRepositoryError::persistence)?;
            rows.into_iter().map(row_to_review).collect()
        })
        .await
    }
}

fn row_to_review(row: ReviewRow) -> ReviewRepositoryResult<Review> {
    let rating = RatingScore::new(row.rating).map_err(ReviewRepositoryError::persistence)?;
    let data = PersistedReviewData {
        id: ReviewId::from_uuid(row.id),
        chore_id: ChoreId::from_uuid(row.chore_id),
        reviewer: UserId::from_uuid(row.reviewer_id),
        reviewee: UserId::from_uuid(row.reviewee_id),
        rating,
        comment: row.comment,
        created_at: row.created_at,
    };
    Ok(Review::from_persisted(data))
}
