//! Repository ports for chore and application persistence.

use crate::chore::domain::{
    ApplicationId, Chore, ChoreApplication, ChoreDomainError, ChoreId, ChoreStatus,
    ParticipantRole,
};
use crate::identity::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for chore repository operations.
pub type ChoreRepositoryResult<T> = Result<T, ChoreRepositoryError>;

/// Filter parameters for browsing chore listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoreFilter {
    /// Status to match; listings default to active chores.
    pub status: ChoreStatus,
    /// Exact category match, when present.
    pub category: Option<String>,
    /// Case-insensitive location substring match, when present.
    pub location: Option<String>,
}

impl Default for ChoreFilter {
    fn default() -> Self {
        Self {
            status: ChoreStatus::Active,
            category: None,
            location: None,
        }
    }
}

/// Validated pagination window. Out-of-range pages yield empty results,
/// never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    page: u32,
    per_page: u32,
}

impl Page {
    /// Creates a validated pagination window.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreDomainError::InvalidPagination`] when either value is
    /// zero.
    pub const fn new(page: u32, per_page: u32) -> Result<Self, ChoreDomainError> {
        if page == 0 {
            return Err(ChoreDomainError::InvalidPagination("page"));
        }
        if per_page == 0 {
            return Err(ChoreDomainError::InvalidPagination("per_page"));
        }
        Ok(Self { page, per_page })
    }

    /// Returns the number of records to skip.
    #[must_use]
    pub fn offset(self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.per_page)
    }

    /// Returns the maximum number of records to return.
    #[must_use]
    pub fn limit(self) -> i64 {
        i64::from(self.per_page)
    }
}

/// Chore persistence contract.
///
/// `update_transition` is the compare-and-set that serialises concurrent
/// lifecycle transitions: the naive read-then-write sequence must never be
/// reproduced by an adapter.
#[async_trait]
pub trait ChoreRepository: Send + Sync {
    /// Stores a new chore.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreRepositoryError::DuplicateChore`] when the identifier
    /// already exists.
    async fn store(&self, chore: &Chore) -> ChoreRepositoryResult<()>;

    /// Finds a chore by identifier.
    ///
    /// Returns `None` when the chore does not exist.
    async fn find_by_id(&self, id: ChoreId) -> ChoreRepositoryResult<Option<Chore>>;

    /// Persists an already-transitioned chore, but only if the stored status
    /// still equals `expected`.
    ///
    /// The check and the write are atomic, so of two racing transitions on
    /// the same chore exactly one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreRepositoryError::NotFound`] when the chore does not
    /// exist, or [`ChoreRepositoryError::StatusConflict`] when the stored
    /// status no longer equals `expected`.
    async fn update_transition(
        &self,
        chore: &Chore,
        expected: ChoreStatus,
    ) -> ChoreRepositoryResult<()>;

    /// Returns chores matching `filter`, ordered by posting time descending,
    /// windowed by `page`.
    async fn list(&self, filter: &ChoreFilter, page: Page) -> ChoreRepositoryResult<Vec<Chore>>;

    /// Returns chores where `user` plays `role`, ordered by posting time
    /// descending.
    ///
    /// For [`ParticipantRole::All`] the result is the de-duplicated union of
    /// the three roles, sorted as a whole.
    async fn list_for_user(
        &self,
        user: UserId,
        role: ParticipantRole,
    ) -> ChoreRepositoryResult<Vec<Chore>>;
}

/// Errors returned by chore repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ChoreRepositoryError {
    /// A chore with the same identifier already exists.
    #[error("duplicate chore identifier: {0}")]
    DuplicateChore(ChoreId),

    /// The chore was not found.
    #[error("chore not found: {0}")]
    NotFound(ChoreId),

    /// The stored status no longer matches the expected transition source.
    #[error("chore {} is no longer {}", .chore_id, .actual.as_str())]
    StatusConflict {
        /// Chore whose conditional update failed.
        chore_id: ChoreId,
        /// Status actually stored at update time.
        actual: ChoreStatus,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ChoreRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

/// Result type for application repository operations.
pub type ApplicationRepositoryResult<T> = Result<T, ApplicationRepositoryError>;

/// Chore application persistence contract.
#[async_trait]
pub trait ChoreApplicationRepository: Send + Sync {
    /// Stores a new application.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationRepositoryError::DuplicateApplication`] when the
    /// identifier already exists.
    async fn store(&self, application: &ChoreApplication) -> ApplicationRepositoryResult<()>;

    /// Returns all applications for a chore, ordered by application time
    /// ascending.
    async fn list_for_chore(
        &self,
        chore_id: ChoreId,
    ) -> ApplicationRepositoryResult<Vec<ChoreApplication>>;
}

/// Errors returned by application repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ApplicationRepositoryError {
    /// An application with the same identifier already exists.
    #[error("duplicate application identifier: {0}")]
    DuplicateApplication(ApplicationId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ApplicationRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
