//! Domain model for the chore lifecycle.
//!
//! The chore domain models posting, acceptance, completion, and cancellation
//! of paid chores while keeping all infrastructure concerns outside of the
//! domain boundary. Transition guards live on the [`Chore`] aggregate; the
//! repository port provides the conditional update that makes transitions
//! atomic against racing callers.

mod application;
mod chore;
mod error;
mod ids;

pub use application::{ApplicationStatus, ChoreApplication, PersistedApplicationData};
pub use chore::{Chore, ChoreDetails, ChoreStatus, ParticipantRole, PersistedChoreData, Urgency};
pub use error::{
    ChoreDomainError, ParseApplicationStatusError, ParseChoreStatusError,
    ParseParticipantRoleError, ParseUrgencyError,
};
pub use ids::{ApplicationId, ChoreId, Payment};
