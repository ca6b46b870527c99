//! HTTP boundary.
//!
//! Routing, bearer-token extraction, central error-to-status mapping, and
//! JSON view assembly live here; everything below this module speaks domain
//! types only.

mod auth;
pub mod error;
mod handlers;
pub mod views;

pub use auth::AuthUser;
pub use error::ApiError;

use crate::chore::{
    ports::{ChoreApplicationRepository, ChoreRepository},
    services::{ChoreApplicationService, ChoreLifecycleService, ChoreQueryService},
};
use crate::identity::{
    ports::{TokenIssuer, UserRepository},
    services::AccountService,
};
use crate::review::{ports::ReviewRepository, services::ReputationService};
use axum::{
    Router,
    routing::{get, patch, post},
};
use mockable::DefaultClock;
use std::sync::Arc;

/// Account service over trait-object ports.
pub type Accounts = AccountService<dyn UserRepository, dyn TokenIssuer, DefaultClock>;
/// Lifecycle service over trait-object ports.
pub type Lifecycle = ChoreLifecycleService<dyn ChoreRepository, DefaultClock>;
/// Listing service over trait-object ports.
pub type Listing = ChoreQueryService<dyn ChoreRepository>;
/// Application service over trait-object ports.
pub type Applications =
    ChoreApplicationService<dyn ChoreRepository, dyn ChoreApplicationRepository, DefaultClock>;
/// Reputation service over trait-object ports.
pub type Reputation =
    ReputationService<dyn ChoreRepository, dyn ReviewRepository, DefaultClock>;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Registration, login, and profile service.
    pub accounts: Arc<Accounts>,
    /// Posting and lifecycle transition service.
    pub lifecycle: Arc<Lifecycle>,
    /// Browsing and per-user listing service.
    pub listing: Arc<Listing>,
    /// Chore application service.
    pub applications: Arc<Applications>,
    /// Review and derived-rating service.
    pub reputation: Arc<Reputation>,
    /// User lookup for view assembly.
    pub users: Arc<dyn UserRepository>,
    /// Token verification for the bearer extractor.
    pub tokens: Arc<dyn TokenIssuer>,
}

/// Builds the application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/register", post(handlers::register))
        .route("/api/login", post(handlers::login))
        .route(
            "/api/chores",
            get(handlers::list_chores).post(handlers::post_chore),
        )
        .route("/api/chores/:id/accept", patch(handlers::accept_chore))
        .route("/api/chores/:id/complete", patch(handlers::complete_chore))
        .route("/api/chores/:id/cancel", patch(handlers::cancel_chore))
        .route("/api/chores/:id/apply", post(handlers::apply_for_chore))
        .route(
            "/api/chores/:id/applications",
            get(handlers::chore_applications),
        )
        .route("/api/reviews", post(handlers::post_review))
        .route(
            "/api/user/profile",
            get(handlers::get_profile).put(handlers::update_profile),
        )
        .route("/api/user/chores", get(handlers::user_chores))
        .with_state(state)
}
