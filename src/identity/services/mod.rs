//! Application services for identity management.

mod accounts;
mod password;

pub use accounts::{
    AccountError, AccountResult, AccountService, AuthenticatedUser, LoginRequest, RegisterRequest,
};
pub use password::{CredentialHashError, hash_password, verify_password};
