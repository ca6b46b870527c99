//! Application services for chore lifecycle orchestration and listings.

mod applications;
mod lifecycle;
mod listing;

pub use applications::{ChoreApplicationError, ChoreApplicationService};
pub use lifecycle::{ChoreLifecycleError, ChoreLifecycleResult, ChoreLifecycleService, PostChoreRequest};
pub use listing::{ChoreQueryError, ChoreQueryService};
