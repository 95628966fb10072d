//! Client session state for TaskHub.
//!
//! The original front end scattered ambient local-storage lookups across
//! its views; here the session is an explicit context object with a
//! `load`/`clear` lifecycle handed to views at construction. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The session context service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
