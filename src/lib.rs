//! TaskHub client core.
//!
//! This crate is the headless core of a browser-style task-management front
//! end: session handling, account operations, and an in-memory task board
//! fed by a remote REST API. The crate owns view state, form validation,
//! and the HTTP calls behind them; persistence and business rules live on
//! the remote side.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure view-state and validation logic with no
//!   infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the remote API surface and
//!   client-local storage
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`remote`]: Thin HTTP client wrapper shared by the outbound adapters
//! - [`session`]: Explicit session context over client-local storage
//! - [`account`]: Registration, login, profile updates, and assignee
//!   directory search
//! - [`task`]: Task partitions, the task store, and the mutation
//!   coordinator for inline status/priority edits

pub mod account;
pub mod remote;
pub mod session;
pub mod task;
