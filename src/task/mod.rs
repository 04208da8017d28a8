//! Task lifecycle management for Foreman.
//!
//! This module implements the engine behind the workforce task tracker:
//! creating task records against business references, applying audited
//! field mutations, reconciling duplicate open tasks down to a single
//! active assignment per reference and kind, and selecting the tasks
//! relevant to a date window under still-active semantics. The module
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
