//! Identity management for ChoreRun.
//!
//! Covers user registration, credential verification, bearer-token issuance,
//! and profile maintenance. Credentials are stored as salted one-way hashes;
//! plaintext passwords never persist and never reach the logs. The module
//! follows hexagonal architecture:
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
