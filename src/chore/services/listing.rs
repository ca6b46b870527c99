//! Read-only filtered, paginated views over the chore store.

use crate::chore::{
    domain::{Chore, ParticipantRole},
    ports::{ChoreFilter, ChoreRepository, ChoreRepositoryError, Page},
};
use crate::identity::domain::UserId;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for listing operations.
#[derive(Debug, Error)]
pub enum ChoreQueryError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ChoreRepositoryError),
}

/// Chore listing service.
#[derive(Clone)]
pub struct ChoreQueryService<R>
where
    R: ChoreRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> ChoreQueryService<R>
where
    R: ChoreRepository + ?Sized,
{
    /// Creates a new listing service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns chores matching `filter`, newest first, windowed by `page`.
    ///
    /// Out-of-range pages return an empty page, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreQueryError::Repository`] when the lookup fails.
    pub async fn browse(
        &self,
        filter: &ChoreFilter,
        page: Page,
    ) -> Result<Vec<Chore>, ChoreQueryError> {
        Ok(self.repository.list(filter, page).await?)
    }

    /// Returns chores where `user` plays `role`, newest first.
    ///
    /// For [`ParticipantRole::All`] the union is de-duplicated and sorted as
    /// a whole.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreQueryError::Repository`] when the lookup fails.
    pub async fn for_user(
        &self,
        user: UserId,
        role: ParticipantRole,
    ) -> Result<Vec<Chore>, ChoreQueryError> {
        Ok(self.repository.list_for_user(user, role).await?)
    }
}
