//! Port contracts for the remote task API.

mod task_api;

pub use task_api::{TaskApi, TaskApiError, TaskApiResult};
