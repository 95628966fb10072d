//! Task board state for TaskHub.
//!
//! Implements the two halves of the client-side board: the task store,
//! which owns the four per-user partitions (`assignee`, `creator`,
//! `completed`, `cancelled`) and answers grouping queries, and the
//! mutation coordinator, which drives confirmed status/priority edits
//! against the remote task API and resynchronizes the derived partitions
//! when an edit crosses a partition boundary. The module follows
//! hexagonal architecture:
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
