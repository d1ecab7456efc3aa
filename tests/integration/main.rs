//! Integration test harness; tests run against live servers with
//! `cargo test -- --ignored`

mod api_tests;
mod visit_allocation;
