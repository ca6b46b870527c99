//! Tests for the identity module.

mod accounts_tests;
mod domain_tests;
