//! Chore application records.
//!
//! An application is a bid on a chore prior to direct acceptance. It is a
//! loosely coupled record: the lifecycle transition guards never consult it.

use super::{ApplicationId, ChoreId, ParseApplicationStatusError};
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Application review status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Awaiting a decision from the poster.
    Pending,
    /// Picked by the poster.
    Accepted,
    /// Declined by the poster.
    Rejected,
}

impl ApplicationStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl TryFrom<&str> for ApplicationStatus {
    type Error = ParseApplicationStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(ParseApplicationStatusError(value.to_owned())),
        }
    }
}

/// Application record tying an applicant to a chore.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoreApplication {
    id: ApplicationId,
    chore_id: ChoreId,
    applicant: UserId,
    message: Option<String>,
    status: ApplicationStatus,
    applied_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted application record.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedApplicationData {
    /// Persisted application identifier.
    pub id: ApplicationId,
    /// Persisted chore reference.
    pub chore_id: ChoreId,
    /// Persisted applicant reference.
    pub applicant: UserId,
    /// Persisted free-text message, if any.
    pub message: Option<String>,
    /// Persisted review status.
    pub status: ApplicationStatus,
    /// Persisted application timestamp.
    pub applied_at: DateTime<Utc>,
}

impl ChoreApplication {
    /// Creates a new pending application.
    #[must_use]
    pub fn new(
        chore_id: ChoreId,
        applicant: UserId,
        message: Option<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: ApplicationId::new(),
            chore_id,
            applicant,
            message,
            status: ApplicationStatus::Pending,
            applied_at: clock.utc(),
        }
    }

    /// Reconstructs an application from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedApplicationData) -> Self {
        Self {
            id: data.id,
            chore_id: data.chore_id,
            applicant: data.applicant,
            message: data.message,
            status: data.status,
            applied_at: data.applied_at,
        }
    }

    /// Returns the application identifier.
    #[must_use]
    pub const fn id(&self) -> ApplicationId {
        self.id
    }

    /// Returns the chore reference.
    #[must_use]
    pub const fn chore_id(&self) -> ChoreId {
        self.chore_id
    }

    /// Returns the applicant reference.
    #[must_use]
    pub const fn applicant(&self) -> UserId {
        self.applicant
    }

    /// Returns the free-text message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the review status.
    #[must_use]
    pub const fn status(&self) -> ApplicationStatus {
        self.status
    }

    /// Returns the application timestamp.
    #[must_use]
    pub const fn applied_at(&self) -> DateTime<Utc> {
        self.applied_at
    }
}
