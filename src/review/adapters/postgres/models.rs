//! Row types mapping review aggregates onto the Diesel schema.

use super::schema::reviews;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// Row loaded from the `reviews` table.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReviewRow {
    /// Review identifier.
    pub id: Uuid,
    /// Chore the review is about.
    pub chore_id: Uuid,
    /// User who wrote the review.
    pub reviewer_id: Uuid,
    /// User the review is about.
    pub reviewee_id: Uuid,
    /// Rating on the 1 to 5 scale.
    pub rating: i32,
    /// Free-text comment, if any.
    pub comment: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Row inserted into the `reviews` table.
#[derive(Debug, Insertable)]
#[diesel(table_name = reviews)]
pub struct NewReviewRow {
    /// Review identifier.
    pub id: Uuid,
    /// Chore the review is about.
    pub chore_id: Uuid,
    /// User who wrote the review.
    pub reviewer_id: Uuid,
    /// User the review is about.
    pub reviewee_id: Uuid,
    /// Rating on the 1 to 5 scale.
    pub rating: i32,
    /// Free-text comment, if any.
    pub comment: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
