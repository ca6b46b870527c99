//! Tests for the review module.

mod reputation_tests;
