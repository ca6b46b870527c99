//! ChoreRun: a marketplace-style task board.
//!
//! Users register, post paid chores, other users accept and complete them,
//! and reviews feed a derived reputation score.
//!
//! # Architecture
//!
//! ChoreRun follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, tokens, etc.)
//!
//! # Modules
//!
//! - [`identity`]: User accounts, credentials, and bearer tokens
//! - [`chore`]: Chore lifecycle state machine, listings, and applications
//! - [`review`]: Reviews and derived reputation scores
//! - [`api`]: HTTP boundary mapping domain operations onto REST routes

pub mod api;
pub mod chore;
pub mod identity;
pub mod review;
