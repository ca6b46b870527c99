//! Chore aggregate root and lifecycle state machine.

use super::{
    ChoreDomainError, ChoreId, ParseChoreStatusError, ParseParticipantRoleError,
    ParseUrgencyError, Payment,
};
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Chore lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoreStatus {
    /// Posted and open for acceptance.
    Active,
    /// Claimed by an accepter, work pending.
    Accepted,
    /// Marked done by the accepter.
    Completed,
    /// Withdrawn by the poster.
    Cancelled,
}

impl ChoreStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Accepted => "accepted",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns whether no further transitions are possible from this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl TryFrom<&str> for ChoreStatus {
    type Error = ParseChoreStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "accepted" => Ok(Self::Accepted),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseChoreStatusError(value.to_owned())),
        }
    }
}

/// Priority label attached to a chore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// Can wait.
    Low,
    /// Should happen soon.
    Medium,
    /// Needs doing now.
    High,
}

impl Urgency {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for Urgency {
    type Error = ParseUrgencyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseUrgencyError(value.to_owned())),
        }
    }
}

/// Role a user plays in a chore, used for per-user listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantRole {
    /// Chores the user posted.
    Posted,
    /// Chores the user accepted.
    Accepted,
    /// Chores the user completed.
    Completed,
    /// Union of all three, de-duplicated.
    All,
}

impl TryFrom<&str> for ParticipantRole {
    type Error = ParseParticipantRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "posted" => Ok(Self::Posted),
            "accepted" => Ok(Self::Accepted),
            "completed" => Ok(Self::Completed),
            "all" => Ok(Self::All),
            _ => Err(ParseParticipantRoleError(value.to_owned())),
        }
    }
}

/// Validated descriptive fields of a chore, fixed at posting time.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoreDetails {
    title: String,
    description: String,
    location: String,
    payment: Payment,
    category: String,
    urgency: Urgency,
    estimated_time: Option<String>,
    due_date: Option<DateTime<Utc>>,
}

impl ChoreDetails {
    /// Creates validated chore details from the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreDomainError::EmptyField`] when any required text field
    /// is empty after trimming.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        payment: Payment,
        category: impl Into<String>,
        urgency: Urgency,
    ) -> Result<Self, ChoreDomainError> {
        let details = Self {
            title: title.into(),
            description: description.into(),
            location: location.into(),
            payment,
            category: category.into(),
            urgency,
            estimated_time: None,
            due_date: None,
        };
        require_non_empty(&details.title, "title")?;
        require_non_empty(&details.description, "description")?;
        require_non_empty(&details.location, "location")?;
        require_non_empty(&details.category, "category")?;
        Ok(details)
    }

    /// Sets the free-form estimated-time label.
    #[must_use]
    pub fn with_estimated_time(mut self, estimated_time: impl Into<String>) -> Self {
        self.estimated_time = Some(estimated_time.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

fn require_non_empty(value: &str, field: &'static str) -> Result<(), ChoreDomainError> {
    if value.trim().is_empty() {
        return Err(ChoreDomainError::EmptyField(field));
    }
    Ok(())
}

/// Chore aggregate root.
///
/// Transition guards are enforced here; atomicity against racing callers is
/// enforced by the repository's conditional update.
#[derive(Debug, Clone, PartialEq)]
pub struct Chore {
    id: ChoreId,
    title: String,
    description: String,
    location: String,
    payment: Payment,
    category: String,
    urgency: Urgency,
    estimated_time: Option<String>,
    due_date: Option<DateTime<Utc>>,
    status: ChoreStatus,
    posted_by: UserId,
    accepted_by: Option<UserId>,
    completed_by: Option<UserId>,
    posted_at: DateTime<Utc>,
    accepted_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted chore aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedChoreData {
    /// Persisted chore identifier.
    pub id: ChoreId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted location.
    pub location: String,
    /// Persisted payment amount.
    pub payment: Payment,
    /// Persisted category.
    pub category: String,
    /// Persisted urgency.
    pub urgency: Urgency,
    /// Persisted estimated-time label, if any.
    pub estimated_time: Option<String>,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted lifecycle status.
    pub status: ChoreStatus,
    /// Persisted poster reference.
    pub posted_by: UserId,
    /// Persisted accepter reference, if any.
    pub accepted_by: Option<UserId>,
    /// Persisted completer reference, if any.
    pub completed_by: Option<UserId>,
    /// Persisted posting timestamp.
    pub posted_at: DateTime<Utc>,
    /// Persisted acceptance timestamp, if any.
    pub accepted_at: Option<DateTime<Utc>>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Chore {
    /// Creates a new active chore owned by `posted_by`.
    #[must_use]
    pub fn post(posted_by: UserId, details: ChoreDetails, clock: &impl Clock) -> Self {
        let ChoreDetails {
            title,
            description,
            location,
            payment,
            category,
            urgency,
            estimated_time,
            due_date,
        } = details;
        Self {
            id: ChoreId::new(),
            title,
            description,
            location,
            payment,
            category,
            urgency,
            estimated_time,
            due_date,
            status: ChoreStatus::Active,
            posted_by,
            accepted_by: None,
            completed_by: None,
            posted_at: clock.utc(),
            accepted_at: None,
            completed_at: None,
        }
    }

    /// Reconstructs a chore from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedChoreData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            location: data.location,
            payment: data.payment,
            category: data.category,
            urgency: data.urgency,
            estimated_time: data.estimated_time,
            due_date: data.due_date,
            status: data.status,
            posted_by: data.posted_by,
            accepted_by: data.accepted_by,
            completed_by: data.completed_by,
            posted_at: data.posted_at,
            accepted_at: data.accepted_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the chore identifier.
    #[must_use]
    pub const fn id(&self) -> ChoreId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the payment amount.
    #[must_use]
    pub const fn payment(&self) -> Payment {
        self.payment
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the urgency.
    #[must_use]
    pub const fn urgency(&self) -> Urgency {
        self.urgency
    }

    /// Returns the estimated-time label, if any.
    #[must_use]
    pub fn estimated_time(&self) -> Option<&str> {
        self.estimated_time.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ChoreStatus {
        self.status
    }

    /// Returns the poster reference.
    #[must_use]
    pub const fn posted_by(&self) -> UserId {
        self.posted_by
    }

    /// Returns the accepter reference, if any.
    #[must_use]
    pub const fn accepted_by(&self) -> Option<UserId> {
        self.accepted_by
    }

    /// Returns the completer reference, if any.
    #[must_use]
    pub const fn completed_by(&self) -> Option<UserId> {
        self.completed_by
    }

    /// Returns the posting timestamp.
    #[must_use]
    pub const fn posted_at(&self) -> DateTime<Utc> {
        self.posted_at
    }

    /// Returns the acceptance timestamp, if any.
    #[must_use]
    pub const fn accepted_at(&self) -> Option<DateTime<Utc>> {
        self.accepted_at
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Transitions `active → accepted`, claiming the chore for `actor`.
    ///
    /// Guards, checked in order: the chore must be active, and the actor
    /// must not be the poster. The accepter reference and acceptance
    /// timestamp are stamped together with the status change.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreDomainError::NotAvailable`] when the chore is not
    /// active, or [`ChoreDomainError::CannotAcceptOwnChore`] when the actor
    /// posted it.
    pub fn accept(&mut self, actor: UserId, clock: &impl Clock) -> Result<(), ChoreDomainError> {
        if self.status != ChoreStatus::Active {
            return Err(ChoreDomainError::NotAvailable {
                chore_id: self.id,
                status: self.status,
            });
        }
        if actor == self.posted_by {
            return Err(ChoreDomainError::CannotAcceptOwnChore(self.id));
        }
        self.status = ChoreStatus::Accepted;
        self.accepted_by = Some(actor);
        self.accepted_at = Some(clock.utc());
        Ok(())
    }

    /// Transitions `accepted → completed`.
    ///
    /// Only the accepter may complete; the completer reference equals the
    /// accepter by construction.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreDomainError::NotAccepted`] when the chore is not in
    /// the accepted state, or [`ChoreDomainError::NotAccepter`] when the
    /// actor is not the accepter.
    pub fn complete(&mut self, actor: UserId, clock: &impl Clock) -> Result<(), ChoreDomainError> {
        if self.status != ChoreStatus::Accepted {
            return Err(ChoreDomainError::NotAccepted {
                chore_id: self.id,
                status: self.status,
            });
        }
        if self.accepted_by != Some(actor) {
            return Err(ChoreDomainError::NotAccepter(self.id));
        }
        self.status = ChoreStatus::Completed;
        self.completed_by = Some(actor);
        self.completed_at = Some(clock.utc());
        Ok(())
    }

    /// Transitions `active → cancelled`.
    ///
    /// Only the poster of an active chore may cancel it.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreDomainError::NotCancellable`] when the chore is not
    /// active, or [`ChoreDomainError::NotPoster`] when the actor did not
    /// post it.
    pub fn cancel(&mut self, actor: UserId) -> Result<(), ChoreDomainError> {
        if self.status != ChoreStatus::Active {
            return Err(ChoreDomainError::NotCancellable {
                chore_id: self.id,
                status: self.status,
            });
        }
        if actor != self.posted_by {
            return Err(ChoreDomainError::NotPoster(self.id));
        }
        self.status = ChoreStatus::Cancelled;
        Ok(())
    }
}
