//! Route handlers.
//!
//! Handlers stay thin: decode the request, call one service, assemble a
//! view. Field-presence checks happen here so a missing field reads as a
//! clean 400 rather than a deserialization failure.

use super::{
    ApiError, AppState, AuthUser,
    views::{
        self, ApplicationView, AuthView, ChoreView, HealthView, ReviewView, UserView,
    },
};
use crate::chore::{
    domain::{ChoreId, ChoreStatus, ParticipantRole},
    ports::{ChoreFilter, Page},
    services::PostChoreRequest,
};
use crate::identity::{
    domain::ProfileUpdate,
    services::{LoginRequest, RegisterRequest},
};
use crate::review::services::AddReviewRequest;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PER_PAGE: u32 = 20;

fn require<T>(field: Option<T>, name: &'static str) -> Result<T, ApiError> {
    field.ok_or_else(|| ApiError::bad_request(format!("{name} is required")))
}

/// Liveness probe.
pub async fn health() -> Json<HealthView> {
    Json(HealthView {
        status: "ok",
        timestamp: Utc::now(),
    })
}

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    phone: Option<String>,
    location: Option<String>,
    bio: Option<String>,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<(StatusCode, Json<AuthView>), ApiError> {
    let mut request = RegisterRequest::new(
        require(body.name, "name")?,
        require(body.email, "email")?,
        require(body.password, "password")?,
    );
    if let Some(phone) = body.phone {
        request = request.with_phone(phone);
    }
    if let Some(location) = body.location {
        request = request.with_location(location);
    }
    if let Some(bio) = body.bio {
        request = request.with_bio(bio);
    }

    let authenticated = state.accounts.register(request).await?;
    let user = views::user_view(&state, &authenticated.user).await?;
    Ok((
        StatusCode::CREATED,
        Json(AuthView {
            user,
            token: authenticated.token,
        }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    email: Option<String>,
    password: Option<String>,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<AuthView>, ApiError> {
    let request = LoginRequest::new(
        require(body.email, "email")?,
        require(body.password, "password")?,
    );
    let authenticated = state.accounts.login(request).await?;
    let user = views::user_view(&state, &authenticated.user).await?;
    Ok(Json(AuthView {
        user,
        token: authenticated.token,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ListChoresQuery {
    status: Option<String>,
    category: Option<String>,
    location: Option<String>,
    page: Option<u32>,
    per_page: Option<u32>,
}

pub async fn list_chores(
    State(state): State<AppState>,
    Query(query): Query<ListChoresQuery>,
) -> Result<Json<Vec<ChoreView>>, ApiError> {
    let mut filter = ChoreFilter::default();
    if let Some(status) = query.status.as_deref() {
        filter.status = ChoreStatus::try_from(status)
            .map_err(|err| ApiError::bad_request(err.to_string()))?;
    }
    filter.category = query.category;
    filter.location = query.location;
    let page = Page::new(
        query.page.unwrap_or(DEFAULT_PAGE),
        query.per_page.unwrap_or(DEFAULT_PER_PAGE),
    )?;

    let chores = state.listing.browse(&filter, page).await?;
    Ok(Json(views::chore_views(&state, &chores).await?))
}

#[derive(Debug, Deserialize)]
pub struct PostChoreBody {
    title: Option<String>,
    description: Option<String>,
    location: Option<String>,
    payment: Option<f64>,
    category: Option<String>,
    urgency: Option<String>,
    #[serde(alias = "estimatedTime")]
    estimated_time: Option<String>,
    #[serde(alias = "dueDate")]
    due_date: Option<String>,
}

pub async fn post_chore(
    State(state): State<AppState>,
    AuthUser(poster): AuthUser,
    Json(body): Json<PostChoreBody>,
) -> Result<(StatusCode, Json<ChoreView>), ApiError> {
    let mut request = PostChoreRequest::new(
        require(body.title, "title")?,
        require(body.description, "description")?,
        require(body.location, "location")?,
        require(body.payment, "payment")?,
        require(body.category, "category")?,
        require(body.urgency, "urgency")?,
    );
    if let Some(estimated_time) = body.estimated_time {
        request = request.with_estimated_time(estimated_time);
    }
    if let Some(due_date) = body.due_date {
        request = request.with_due_date(due_date);
    }

    let chore = state.lifecycle.post(poster, request).await?;
    let view = views::chore_view(&state, &chore).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn accept_chore(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ChoreView>, ApiError> {
    let chore = state.lifecycle.accept(actor, ChoreId::from_uuid(id)).await?;
    Ok(Json(views::chore_view(&state, &chore).await?))
}

pub async fn complete_chore(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ChoreView>, ApiError> {
    let chore = state
        .lifecycle
        .complete(actor, ChoreId::from_uuid(id))
        .await?;
    Ok(Json(views::chore_view(&state, &chore).await?))
}

pub async fn cancel_chore(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ChoreView>, ApiError> {
    let chore = state.lifecycle.cancel(actor, ChoreId::from_uuid(id)).await?;
    Ok(Json(views::chore_view(&state, &chore).await?))
}

#[derive(Debug, Deserialize)]
pub struct ApplyBody {
    message: Option<String>,
}

pub async fn apply_for_chore(
    State(state): State<AppState>,
    AuthUser(applicant): AuthUser,
    Path(id): Path<Uuid>,
    body: Option<Json<ApplyBody>>,
) -> Result<(StatusCode, Json<ApplicationView>), ApiError> {
    let chore_id = ChoreId::from_uuid(id);
    let message = body.and_then(|Json(apply)| apply.message);
    let application = state.applications.apply(applicant, chore_id, message).await?;
    let chore = state.lifecycle.get(chore_id).await?;
    let view = views::application_view(&state, &application, chore.title()).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn chore_applications(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ApplicationView>>, ApiError> {
    let chore_id = ChoreId::from_uuid(id);
    let applications = state.applications.applications_for(chore_id).await?;
    let chore = state.lifecycle.get(chore_id).await?;
    let mut assembled = Vec::with_capacity(applications.len());
    for application in &applications {
        assembled.push(views::application_view(&state, application, chore.title()).await?);
    }
    Ok(Json(assembled))
}

#[derive(Debug, Deserialize)]
pub struct ReviewBody {
    #[serde(alias = "choreId")]
    chore_id: Option<Uuid>,
    rating: Option<i32>,
    comment: Option<String>,
}

pub async fn post_review(
    State(state): State<AppState>,
    AuthUser(reviewer): AuthUser,
    Json(body): Json<ReviewBody>,
) -> Result<(StatusCode, Json<ReviewView>), ApiError> {
    let chore_id = ChoreId::from_uuid(require(body.chore_id, "choreId")?);
    let rating = require(body.rating, "rating")?;
    let mut request = AddReviewRequest::new(chore_id, rating);
    if let Some(comment) = body.comment {
        request = request.with_comment(comment);
    }
    let review = state.reputation.add_review(reviewer, request).await?;
    Ok((StatusCode::CREATED, Json(views::review_view(&review))))
}

pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserView>, ApiError> {
    let user = state.accounts.profile(user_id).await?;
    Ok(Json(views::user_view(&state, &user).await?))
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileBody {
    name: Option<String>,
    phone: Option<String>,
    location: Option<String>,
    bio: Option<String>,
}

pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<UpdateProfileBody>,
) -> Result<Json<UserView>, ApiError> {
    let update = ProfileUpdate {
        name: body.name,
        phone: body.phone,
        location: body.location,
        bio: body.bio,
    };
    let user = state.accounts.update_profile(user_id, update).await?;
    Ok(Json(views::user_view(&state, &user).await?))
}

#[derive(Debug, Deserialize)]
pub struct UserChoresQuery {
    #[serde(rename = "type")]
    kind: Option<String>,
}

pub async fn user_chores(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(query): Query<UserChoresQuery>,
) -> Result<Json<Vec<ChoreView>>, ApiError> {
    let role = ParticipantRole::try_from(query.kind.as_deref().unwrap_or("all"))
        .map_err(|err| ApiError::bad_request(err.to_string()))?;
    let chores = state.listing.for_user(user_id, role).await?;
    Ok(Json(views::chore_views(&state, &chores).await?))
}
