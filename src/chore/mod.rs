//! Chore lifecycle management for ChoreRun.
//!
//! A chore is a postable, paid task that moves through `active → accepted →
//! completed`, with `active → cancelled` as an alternate terminal branch.
//! This module owns the lifecycle state machine and its consistency rules
//! (role-based transition guards, ownership checks, timestamp bookkeeping),
//! filtered and paginated listings, and the loosely coupled chore
//! application records. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
