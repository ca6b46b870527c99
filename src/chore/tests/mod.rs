//! Tests for the chore module.

mod applications_tests;
mod domain_tests;
mod lifecycle_tests;
