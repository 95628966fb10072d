//! Account management for TaskHub.
//!
//! Covers the user-facing flows that surround the task board: registration,
//! login, profile updates, and the assignee directory search used when
//! handing tasks to other users. All persistence lives behind the remote
//! user API; this module owns form validation, the session hand-off, and
//! the debounced search. The module follows hexagonal architecture:
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
