//! Service layer for chore applications.

use crate::chore::{
    domain::{ChoreApplication, ChoreId},
    ports::{
        ApplicationRepositoryError, ChoreApplicationRepository, ChoreRepository,
        ChoreRepositoryError,
    },
};
use crate::identity::domain::UserId;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for chore application operations.
#[derive(Debug, Error)]
pub enum ChoreApplicationError {
    /// The referenced chore does not exist.
    #[error("chore not found: {0}")]
    ChoreNotFound(ChoreId),
    /// Chore lookup failed.
    #[error(transparent)]
    Chores(#[from] ChoreRepositoryError),
    /// Application persistence failed.
    #[error(transparent)]
    Applications(#[from] ApplicationRepositoryError),
}

/// Chore application service.
///
/// Applications are loosely coupled records: they never gate a lifecycle
/// transition, and accepting a chore directly does not touch them.
#[derive(Clone)]
pub struct ChoreApplicationService<R, A, C>
where
    R: ChoreRepository + ?Sized,
    A: ChoreApplicationRepository + ?Sized,
    C: Clock + Send + Sync,
{
    chores: Arc<R>,
    applications: Arc<A>,
    clock: Arc<C>,
}

impl<R, A, C> ChoreApplicationService<R, A, C>
where
    R: ChoreRepository + ?Sized,
    A: ChoreApplicationRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new application service.
    #[must_use]
    pub const fn new(chores: Arc<R>, applications: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            chores,
            applications,
            clock,
        }
    }

    /// Records a pending application by `applicant` for an existing chore.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreApplicationError::ChoreNotFound`] when the chore does
    /// not exist.
    pub async fn apply(
        &self,
        applicant: UserId,
        chore_id: ChoreId,
        message: Option<String>,
    ) -> Result<ChoreApplication, ChoreApplicationError> {
        self.require_chore(chore_id).await?;
        let application = ChoreApplication::new(chore_id, applicant, message, &*self.clock);
        self.applications.store(&application).await?;
        Ok(application)
    }

    /// Returns all applications for an existing chore, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreApplicationError::ChoreNotFound`] when the chore does
    /// not exist.
    pub async fn applications_for(
        &self,
        chore_id: ChoreId,
    ) -> Result<Vec<ChoreApplication>, ChoreApplicationError> {
        self.require_chore(chore_id).await?;
        Ok(self.applications.list_for_chore(chore_id).await?)
    }

    async fn require_chore(&self, chore_id: ChoreId) -> Result<(), ChoreApplicationError> {
        self.chores
            .find_by_id(chore_id)
            .await?
            .map(|_| ())
            .ok_or(ChoreApplicationError::ChoreNotFound(chore_id))
    }
}
