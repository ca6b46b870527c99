//! Central mapping from service and domain errors to HTTP responses.
//!
//! Every error crosses the boundary as `{"message": "..."}`. Internal
//! failures are logged here and surface with a generic message so nothing
//! from the persistence layer leaks to clients.

use crate::chore::{
    domain::ChoreDomainError,
    ports::{ApplicationRepositoryError, ChoreRepositoryError},
    services::{ChoreApplicationError, ChoreLifecycleError, ChoreQueryError},
};
use crate::identity::{
    ports::{TokenError, UserRepositoryError},
    services::AccountError,
};
use crate::review::services::ReputationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// An error ready to cross the HTTP boundary.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    /// Creates an error with an explicit status and client-visible message.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// A 400 validation failure.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// A 401 authentication failure.
    #[must_use]
    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "authentication required")
    }

    /// A 403 ownership or role failure.
    #[must_use]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    /// A 404 for a missing resource.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// A 500 with a generic client message; the cause is logged here.
    #[must_use]
    pub fn internal(cause: &dyn std::fmt::Display) -> Self {
        tracing::error!(error = %cause, "internal server error");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }

    /// Returns the HTTP status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the client-visible message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ChoreDomainError> for ApiError {
    fn from(err: ChoreDomainError) -> Self {
        match &err {
            ChoreDomainError::EmptyField(_)
            | ChoreDomainError::NonPositivePayment(_)
            | ChoreDomainError::InvalidUrgency(_)
            | ChoreDomainError::InvalidDueDate(_)
            | ChoreDomainError::InvalidPagination(_)
            | ChoreDomainError::NotAvailable { .. }
            | ChoreDomainError::NotAccepted { .. }
            | ChoreDomainError::NotCancellable { .. } => Self::bad_request(err.to_string()),
            ChoreDomainError::CannotAcceptOwnChore(_)
            | ChoreDomainError::NotAccepter(_)
            | ChoreDomainError::NotPoster(_) => Self::forbidden(err.to_string()),
        }
    }
}

impl From<ChoreLifecycleError> for ApiError {
    fn from(err: ChoreLifecycleError) -> Self {
        match err {
            ChoreLifecycleError::Domain(domain) => domain.into(),
            ChoreLifecycleError::NotFound(_) => Self::not_found("chore not found"),
            ChoreLifecycleError::Repository(repo) => Self::internal(&repo),
        }
    }
}

impl From<ChoreQueryError> for ApiError {
    fn from(err: ChoreQueryError) -> Self {
        match err {
            ChoreQueryError::Repository(repo) => Self::internal(&repo),
        }
    }
}

impl From<ChoreApplicationError> for ApiError {
    fn from(err: ChoreApplicationError) -> Self {
        match err {
            ChoreApplicationError::ChoreNotFound(_) => Self::not_found("chore not found"),
            ChoreApplicationError::Chores(repo) => Self::internal(&repo),
            ChoreApplicationError::Applications(repo) => Self::internal(&repo),
        }
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::Domain(domain) => Self::bad_request(domain.to_string()),
            AccountError::Repository(UserRepositoryError::DuplicateEmail(_)) => {
                Self::bad_request("email already registered")
            }
            AccountError::Repository(UserRepositoryError::NotFound(_))
            | AccountError::NotFound(_) => Self::not_found("user not found"),
            AccountError::Repository(repo) => Self::internal(&repo),
            AccountError::Token(TokenError::Invalid) => Self::unauthorized(),
            AccountError::Token(token) => Self::internal(&token),
            AccountError::Credential(credential) => Self::internal(&credential),
            AccountError::InvalidCredentials => {
                Self::new(StatusCode::UNAUTHORIZED, "invalid credentials")
            }
        }
    }
}

impl From<ReputationError> for ApiError {
    fn from(err: ReputationError) -> Self {
        match &err {
            ReputationError::Domain(_) => Self::bad_request(err.to_string()),
            ReputationError::ChoreNotFound(_) => Self::not_found("chore not found"),
            ReputationError::ChoreNotCompleted { .. } | ReputationError::AlreadyReviewed(_) => {
                Self::bad_request(err.to_string())
            }
            ReputationError::NotParticipant => Self::forbidden(err.to_string()),
            ReputationError::Chores(repo) => Self::internal(repo),
            ReputationError::Reviews(repo) => Self::internal(repo),
        }
    }
}

impl From<UserRepositoryError> for ApiError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::NotFound(_) => Self::not_found("user not found"),
            UserRepositoryError::DuplicateEmail(_) => Self::bad_request("email already registered"),
            UserRepositoryError::Persistence(_) => Self::internal(&err),
        }
    }
}

impl From<ChoreRepositoryError> for ApiError {
    fn from(err: ChoreRepositoryError) -> Self {
        match err {
            ChoreRepositoryError::NotFound(_) => Self::not_found("chore not found"),
            _ => Self::internal(&err),
        }
    }
}

impl From<ApplicationRepositoryError> for ApiError {
    fn from(err: ApplicationRepositoryError) -> Self {
        Self::internal(&err)
    }
}
