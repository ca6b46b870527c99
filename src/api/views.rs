//! JSON views assembled from domain aggregates.
//!
//! Chore views use the camelCase wire names clients already depend on; user
//! views use snake_case and carry the derived rating. Related names are
//! resolved by explicit follow-up lookups.

use super::{ApiError, AppState};
use crate::chore::domain::{Chore, ChoreApplication, ChoreStatus, Urgency};
use crate::identity::domain::{User, UserId};
use crate::review::domain::Review;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// User as serialized on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    /// User identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number, if provided.
    pub phone: Option<String>,
    /// Location, if provided.
    pub location: Option<String>,
    /// Bio, if provided.
    pub bio: Option<String>,
    /// Derived mean rating.
    pub rating: f64,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

/// User plus a freshly issued bearer token.
#[derive(Debug, Clone, Serialize)]
pub struct AuthView {
    /// The authenticated user.
    pub user: UserView,
    /// Bearer token for subsequent requests.
    pub token: String,
}

/// Poster summary embedded in chore views.
#[derive(Debug, Clone, Serialize)]
pub struct PosterDetailsView {
    /// Poster display name.
    pub name: String,
    /// Poster derived mean rating.
    pub rating: f64,
}

/// Chore as serialized on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoreView {
    /// Chore identifier.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Location.
    pub location: String,
    /// Offered payment amount.
    pub payment: f64,
    /// Category.
    pub category: String,
    /// Urgency label.
    pub urgency: Urgency,
    /// Free-form estimated-time label, if any.
    pub estimated_time: Option<String>,
    /// Due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Lifecycle status.
    pub status: ChoreStatus,
    /// Poster identifier.
    pub posted_by: Uuid,
    /// Accepter identifier, once accepted.
    pub accepted_by: Option<Uuid>,
    /// Completer identifier, once completed.
    pub completed_by: Option<Uuid>,
    /// Posting timestamp.
    pub posted_at: DateTime<Utc>,
    /// Acceptance timestamp, once accepted.
    pub accepted_at: Option<DateTime<Utc>>,
    /// Completion timestamp, once completed.
    pub completed_at: Option<DateTime<Utc>>,
    /// Poster name and rating.
    pub poster_details: PosterDetailsView,
}

/// Chore application as serialized on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationView {
    /// Application identifier.
    pub id: Uuid,
    /// Chore applied for.
    pub chore_id: Uuid,
    /// Applicant identifier.
    pub user_id: Uuid,
    /// Applicant display name.
    pub user_name: String,
    /// Title of the chore applied for.
    pub chore_title: String,
    /// Free-text message, if any.
    pub message: Option<String>,
    /// Review status.
    pub status: &'static str,
    /// Application timestamp.
    pub applied_at: DateTime<Utc>,
}

/// Review as serialized on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewView {
    /// Review identifier.
    pub id: Uuid,
    /// Chore reviewed.
    pub chore_id: Uuid,
    /// Reviewer identifier.
    pub reviewer_id: Uuid,
    /// Reviewee identifier.
    pub reviewee_id: Uuid,
    /// Rating on the 1 to 5 scale.
    pub rating: i32,
    /// Free-text comment, if any.
    pub comment: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Health probe response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthView {
    /// Always `"ok"` when the server answers.
    pub status: &'static str,
    /// Server time at the probe.
    pub timestamp: DateTime<Utc>,
}

/// Assembles a user view with its derived rating.
pub async fn user_view(state: &AppState, user: &User) -> Result<UserView, ApiError> {
    let rating = state.reputation.rating_for(user.id()).await?;
    Ok(UserView {
        id: user.id().into_inner(),
        name: user.name().to_owned(),
        email: user.email().as_str().to_owned(),
        phone: user.phone().map(str::to_owned),
        location: user.location().map(str::to_owned),
        bio: user.bio().map(str::to_owned),
        rating,
        created_at: user.created_at(),
    })
}

/// Assembles a chore view, resolving the poster by explicit lookup.
pub async fn chore_view(state: &AppState, chore: &Chore) -> Result<ChoreView, ApiError> {
    let poster = require_user(state, chore.posted_by()).await?;
    let poster_rating = state.reputation.rating_for(poster.id()).await?;
    Ok(ChoreView {
        id: chore.id().into_inner(),
        title: chore.title().to_owned(),
        description: chore.description().to_owned(),
        location: chore.location().to_owned(),
        payment: chore.payment().amount(),
        category: chore.category().to_owned(),
        urgency: chore.urgency(),
        estimated_time: chore.estimated_time().map(str::to_owned),
        due_date: chore.due_date(),
        status: chore.status(),
        posted_by: chore.posted_by().into_inner(),
        accepted_by: chore.accepted_by().map(UserId::into_inner),
        completed_by: chore.completed_by().map(UserId::into_inner),
        posted_at: chore.posted_at(),
        accepted_at: chore.accepted_at(),
        completed_at: chore.completed_at(),
        poster_details: PosterDetailsView {
            name: poster.name().to_owned(),
            rating: poster_rating,
        },
    })
}

/// Assembles chore views for a listing, in the listing's order.
pub async fn chore_views(state: &AppState, chores: &[Chore]) -> Result<Vec<ChoreView>, ApiError> {
    let mut assembled = Vec::with_capacity(chores.len());
    for chore in chores {
        assembled.push(chore_view(state, chore).await?);
    }
    Ok(assembled)
}

/// Assembles an application view, resolving applicant and chore names.
pub async fn application_view(
    state: &AppState,
    application: &ChoreApplication,
    chore_title: &str,
) -> Result<ApplicationView, ApiError> {
    let applicant = require_user(state, application.applicant()).await?;
    Ok(ApplicationView {
        id: application.id().into_inner(),
        chore_id: application.chore_id().into_inner(),
        user_id: application.applicant().into_inner(),
        user_name: applicant.name().to_owned(),
        chore_title: chore_title.to_owned(),
        message: application.message().map(str::to_owned),
        status: application.status().as_str(),
        applied_at: application.applied_at(),
    })
}

/// Assembles a review view.
#[must_use]
pub fn review_view(review: &Review) -> ReviewView {
    ReviewView {
        id: review.id().into_inner(),
        chore_id: review.chore_id().into_inner(),
        reviewer_id: review.reviewer().into_inner(),
        reviewee_id: review.reviewee().into_inner(),
        rating: review.rating().value(),
        comment: review.comment().map(str::to_owned),
        created_at: review.created_at(),
    }
}

/// Loads a user that views expect to exist; absence is an internal error,
/// never a 404 to the client.
async fn require_user(state: &AppState, user_id: UserId) -> Result<User, ApiError> {
    state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::internal(&format!("dangling user reference: {user_id}")))
}
