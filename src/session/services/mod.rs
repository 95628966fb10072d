//! Session context service.

mod context;

pub use context::{SessionContext, SessionError, SessionResult};
