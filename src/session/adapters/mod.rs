//! Adapter implementations for session storage ports.

pub mod memory;
