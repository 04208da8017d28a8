//! Foreman: workforce task lifecycle and assignment reconciliation engine.
//!
//! This crate tracks operational tasks (invoicing, pickup arrangement,
//! customer assignment) tied to business references such as orders and
//! entities, and manages their lifecycle: creation, status transitions,
//! reassignment, prioritisation, commentary, and an append-only audit
//! trail.
//!
//! # Architecture
//!
//! Foreman follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store)
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle, assignment reconciliation, and daily view

pub mod task;
