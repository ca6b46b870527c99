//! Service layer for posting chores and driving lifecycle transitions.

use crate::chore::{
    domain::{
        Chore, ChoreDetails, ChoreDomainError, ChoreId, ChoreStatus, Payment, Urgency,
    },
    ports::{ChoreRepository, ChoreRepositoryError},
};
use crate::identity::domain::UserId;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for posting a new chore.
#[derive(Debug, Clone, PartialEq)]
pub struct PostChoreRequest {
    title: String,
    description: String,
    location: String,
    payment: f64,
    category: String,
    urgency: String,
    estimated_time: Option<String>,
    due_date: Option<String>,
}

impl PostChoreRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        payment: f64,
        category: impl Into<String>,
        urgency: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            location: location.into(),
            payment,
            category: category.into(),
            urgency: urgency.into(),
            estimated_time: None,
            due_date: None,
        }
    }

    /// Sets the free-form estimated-time label.
    #[must_use]
    pub fn with_estimated_time(mut self, estimated_time: impl Into<String>) -> Self {
        self.estimated_time = Some(estimated_time.into());
        self
    }

    /// Sets the due date as an RFC 3339 timestamp or `YYYY-MM-DD` date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }
}

/// Service-level errors for chore lifecycle operations.
#[derive(Debug, Error)]
pub enum ChoreLifecycleError {
    /// Domain validation or a transition guard failed.
    #[error(transparent)]
    Domain(#[from] ChoreDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(ChoreRepositoryError),
    /// The chore does not exist.
    #[error("chore not found: {0}")]
    NotFound(ChoreId),
}

/// Result type for chore lifecycle service operations.
pub type ChoreLifecycleResult<T> = Result<T, ChoreLifecycleError>;

/// Chore lifecycle orchestration service.
///
/// Guards are evaluated on the loaded aggregate; persistence then happens
/// through the repository's conditional update, so a transition that lost a
/// race fails exactly like one that arrived late.
#[derive(Clone)]
pub struct ChoreLifecycleService<R, C>
where
    R: ChoreRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ChoreLifecycleService<R, C>
where
    R: ChoreRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new chore lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Posts a new chore owned by `poster`.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreLifecycleError::Domain`] when a required field is
    /// missing or malformed, or [`ChoreLifecycleError::Repository`] when
    /// persistence fails.
    pub async fn post(
        &self,
        poster: UserId,
        request: PostChoreRequest,
    ) -> ChoreLifecycleResult<Chore> {
        let urgency = Urgency::try_from(request.urgency.as_str())
            .map_err(ChoreDomainError::from)?;
        let payment = Payment::new(request.payment)?;

        let mut details = ChoreDetails::new(
            request.title,
            request.description,
            request.location,
            payment,
            request.category,
            urgency,
        )?;
        if let Some(estimated_time) = request.estimated_time {
            details = details.with_estimated_time(estimated_time);
        }
        if let Some(raw) = request.due_date {
            details = details.with_due_date(parse_due_date(&raw)?);
        }

        let chore = Chore::post(poster, details, &*self.clock);
        self.repository
            .store(&chore)
            .await
            .map_err(ChoreLifecycleError::Repository)?;
        Ok(chore)
    }

    /// Retrieves a chore by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreLifecycleError::NotFound`] when the chore does not
    /// exist.
    pub async fn get(&self, chore_id: ChoreId) -> ChoreLifecycleResult<Chore> {
        self.load(chore_id).await
    }

    /// Transitions an active chore to accepted on behalf of `actor`.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreLifecycleError::NotFound`] when the chore does not
    /// exist, or [`ChoreLifecycleError::Domain`] when a guard rejects the
    /// transition, including the case where a racing accept won the
    /// conditional update first.
    pub async fn accept(&self, actor: UserId, chore_id: ChoreId) -> ChoreLifecycleResult<Chore> {
        let mut chore = self.load(chore_id).await?;
        chore.accept(actor, &*self.clock)?;
        self.persist_transition(chore, ChoreStatus::Active, |id, actual| {
            ChoreDomainError::NotAvailable {
                chore_id: id,
                status: actual,
            }
        })
        .await
    }

    /// Transitions an accepted chore to completed on behalf of `actor`.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreLifecycleError::NotFound`] when the chore does not
    /// exist, or [`ChoreLifecycleError::Domain`] when a guard rejects the
    /// transition.
    pub async fn complete(&self, actor: UserId, chore_id: ChoreId) -> ChoreLifecycleResult<Chore> {
        let mut chore = self.load(chore_id).await?;
        chore.complete(actor, &*self.clock)?;
        self.persist_transition(chore, ChoreStatus::Accepted, |id, actual| {
            ChoreDomainError::NotAccepted {
                chore_id: id,
                status: actual,
            }
        })
        .await
    }

    /// Cancels an active chore on behalf of its poster.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreLifecycleError::NotFound`] when the chore does not
    /// exist, or [`ChoreLifecycleError::Domain`] when a guard rejects the
    /// cancellation.
    pub async fn cancel(&self, actor: UserId, chore_id: ChoreId) -> ChoreLifecycleResult<Chore> {
        let mut chore = self.load(chore_id).await?;
        chore.cancel(actor)?;
        self.persist_transition(chore, ChoreStatus::Active, |id, actual| {
            ChoreDomainError::NotCancellable {
                chore_id: id,
                status: actual,
            }
        })
        .await
    }

    async fn load(&self, chore_id: ChoreId) -> ChoreLifecycleResult<Chore> {
        self.repository
            .find_by_id(chore_id)
            .await
            .map_err(ChoreLifecycleError::Repository)?
            .ok_or(ChoreLifecycleError::NotFound(chore_id))
    }

    /// Persists a transitioned aggregate, folding a lost conditional update
    /// back into the domain error a late caller would have seen.
    async fn persist_transition(
        &self,
        chore: Chore,
        expected: ChoreStatus,
        conflict: impl FnOnce(ChoreId, ChoreStatus) -> ChoreDomainError,
    ) -> ChoreLifecycleResult<Chore> {
        match self.repository.update_transition(&chore, expected).await {
            Ok(()) => Ok(chore),
            Err(ChoreRepositoryError::StatusConflict { chore_id, actual }) => {
                Err(conflict(chore_id, actual).into())
            }
            Err(ChoreRepositoryError::NotFound(id)) => Err(ChoreLifecycleError::NotFound(id)),
            Err(err) => Err(ChoreLifecycleError::Repository(err)),
        }
    }
}

/// Parses a due date from an RFC 3339 timestamp or a bare `YYYY-MM-DD` date.
fn parse_due_date(raw: &str) -> Result<DateTime<Utc>, ChoreDomainError> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| ChoreDomainError::InvalidDueDate(raw.to_owned()))
}
