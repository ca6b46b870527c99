//! Adapter implementations of the identity ports.

mod jwt;
pub mod memory;
pub mod postgres;

pub use jwt::JwtTokenIssuer;
