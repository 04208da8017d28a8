//! Unit and orchestration tests for the task engine.
//!
//! Tests are organized into modules by functionality:
//! - `domain_tests`: Parse round-trips, catalog mapping, audited mutations
//! - `window_tests`: Date-window relevance predicate table
//! - `repository_tests`: In-memory store semantics and id allocation
//! - `service_tests`: Lifecycle service orchestration
//! - `assignment_tests`: Reconciliation scenarios
//! - `daily_view_tests`: Date-window selection through the service

mod domain_tests;
mod support;
