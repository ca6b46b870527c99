//! In-memory repositories for chore lifecycle tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::chore::{
    domain::{
        ApplicationId, Chore, ChoreApplication, ChoreId, ChoreStatus, ParticipantRole,
    },
    ports::{
        ApplicationRepositoryError, ApplicationRepositoryResult, ChoreApplicationRepository,
        ChoreFilter, ChoreRepository, ChoreRepositoryError, ChoreRepositoryResult, Page,
    },
};
use crate::identity::domain::UserId;

/// Thread-safe in-memory chore repository.
///
/// `update_transition` holds the write lock across the status check and the
/// write, which gives the same compare-and-set guarantee as the conditional
/// SQL update in the `PostgreSQL` adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChoreRepository {
    state: Arc<RwLock<HashMap<ChoreId, Chore>>>,
}

impl InMemoryChoreRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_filter(chore: &Chore, filter: &ChoreFilter) -> bool {
    if chore.status() != filter.status {
        return false;
    }
    if let Some(category) = &filter.category {
        if chore.category() != category {
            return false;
        }
    }
    if let Some(location) = &filter.location {
        let needle = location.to_lowercase();
        if !chore.location().to_lowercase().contains(&needle) {
            return false;
        }
    }
    true
}

fn plays_role(chore: &Chore, user: UserId, role: ParticipantRole) -> bool {
    match role {
        ParticipantRole::Posted => chore.posted_by() == user,
        ParticipantRole::Accepted => chore.accepted_by() == Some(user),
        ParticipantRole::Completed => chore.completed_by() == Some(user),
        ParticipantRole::All => {
            chore.posted_by() == user
                || chore.accepted_by() == Some(user)
                || chore.completed_by() == Some(user)
        }
    }
}

fn newest_first(chores: &mut [Chore]) {
    chores.sort_by(|a, b| b.posted_at().cmp(&a.posted_at()));
}

#[async_trait]
impl ChoreRepository for InMemoryChoreRepository {
    async fn store(&self, chore: &Chore) -> ChoreRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ChoreRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(&chore.id()) {
            return Err(ChoreRepositoryError::DuplicateChore(chore.id()));
        }
        state.insert(chore.id(), chore.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ChoreId) -> ChoreRepositoryResult<Option<Chore>> {
        let state = self.state.read().map_err(|err| {
            ChoreRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn update_transition(
        &self,
        chore: &Chore,
        expected: ChoreStatus,
    ) -> ChoreRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ChoreRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let stored = state
            .get(&chore.id())
            .ok_or(ChoreRepositoryError::NotFound(chore.id()))?;
        if stored.status() != expected {
            return Err(ChoreRepositoryError::StatusConflict {
                chore_id: chore.id(),
                actual: stored.status(),
            });
        }
        state.insert(chore.id(), chore.clone());
        Ok(())
    }

    async fn list(&self, filter: &ChoreFilter, page: Page) -> ChoreRepositoryResult<Vec<Chore>> {
        let state = self.state.read().map_err(|err| {
            ChoreRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut chores: Vec<Chore> = state
            .values()
            .filter(|chore| matches_filter(chore, filter))
            .cloned()
            .collect();
        newest_first(&mut chores);
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        Ok(chores.into_iter().skip(offset).take(limit).collect())
    }

    async fn list_for_user(
        &self,
        user: UserId,
        role: ParticipantRole,
    ) -> ChoreRepositoryResult<Vec<Chore>> {
        let state = self.state.read().map_err(|err| {
            ChoreRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut chores: Vec<Chore> = state
            .values()
            .filter(|chore| plays_role(chore, user, role))
            .cloned()
            .collect();
        newest_first(&mut chores);
        Ok(chores)
    }
}

/// Thread-safe in-memory chore application repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChoreApplicationRepository {
    state: Arc<RwLock<HashMap<ApplicationId, ChoreApplication>>>,
}

impl InMemoryChoreApplicationRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChoreApplicationRepository for InMemoryChoreApplicationRepository {
    async fn store(&self, application: &ChoreApplication) -> ApplicationRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ApplicationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(&application.id()) {
            return Err(ApplicationRepositoryError::DuplicateApplication(
                application.id(),
            ));
        }
        state.insert(application.id(), application.clone());
        Ok(())
    }

    async fn list_for_chore(
        &self,
        chore_id: ChoreId,
    ) -> ApplicationRepositoryResult<Vec<ChoreApplication>> {
        let state = self.state.read().map_err(|err| {
            ApplicationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut applications: Vec<ChoreApplication> = state
            .values()
            .filter(|application| application.chore_id() == chore_id)
            .cloned()
            .collect();
        applications.sort_by(|a, b| a.applied_at().cmp(&b.applied_at()));
        Ok(applications)
    }
}
