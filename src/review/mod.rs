//! Review and reputation module.
//!
//! Participants in a completed chore rate each other on a 1 to 5 scale; a
//! user's reputation is the mean of the ratings they have received.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
