//! Diesel row models for chore persistence.

use super::schema::{chore_applications, chores};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for chore records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = chores)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ChoreRow {
    /// Chore identifier.
    pub id: uuid::Uuid,
    /// Short title.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Where the chore takes place.
    pub location: String,
    /// Offered payment amount.
    pub payment: f64,
    /// Category label.
    pub category: String,
    /// Urgency label.
    pub urgency: String,
    /// Optional free-form time estimate.
    pub estimated_time: Option<String>,
    /// Lifecycle status.
    pub status: String,
    /// Poster reference.
    pub posted_by: uuid::Uuid,
    /// Accepter reference.
    pub accepted_by: Option<uuid::Uuid>,
    /// Completer reference.
    pub completed_by: Option<uuid::Uuid>,
    /// Posting timestamp.
    pub posted_at: DateTime<Utc>,
    /// Acceptance timestamp.
    pub accepted_at: Option<DateTime<Utc>>,
    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
}

/// Insert model for chore records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = chores)]
pub struct NewChoreRow {
    /// Chore identifier.
    pub id: uuid::Uuid,
    /// Short title.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Where the chore takes place.
    pub location: String,
    /// Offered payment amount.
    pub payment: f64,
    /// Category label.
    pub category: String,
    /// Urgency label.
    pub urgency: String,
    /// Optional free-form time estimate.
    pub estimated_time: Option<String>,
    /// Lifecycle status.
    pub status: String,
    /// Poster reference.
    pub posted_by: uuid::Uuid,
    /// Accepter reference.
    pub accepted_by: Option<uuid::Uuid>,
    /// Completer reference.
    pub completed_by: Option<uuid::Uuid>,
    /// Posting timestamp.
    pub posted_at: DateTime<Utc>,
    /// Acceptance timestamp.
    pub accepted_at: Option<DateTime<Utc>>,
    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
}

/// Query result row for application records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = chore_applications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ApplicationRow {
    /// Application identifier.
    pub id: uuid::Uuid,
    /// Chore reference.
    pub chore_id: uuid::Uuid,
    /// Applicant reference.
    pub applicant_id: uuid::Uuid,
    /// Optional free-text message.
    pub message: Option<String>,
    /// Review status.
    pub status: String,
    /// Application timestamp.
    pub applied_at: DateTime<Utc>,
}

/// Insert model for application records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = chore_applications)]
pub struct NewApplicationRow {
    /// Application identifier.
    pub id: uuid::Uuid,
    /// Chore reference.
    pub chore_id: uuid::Uuid,
    /// Applicant reference.
    pub applicant_id: uuid::Uuid,
    /// Optional free-text message.
    pub message: Option<String>,
    /// Review status.
    pub status: String,
    /// Application timestamp.
    pub applied_at: DateTime<Utc>,
}
