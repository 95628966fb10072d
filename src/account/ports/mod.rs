//! Port contracts for the remote user API.

mod user_api;

pub use user_api::{UserApi, UserApiError, UserApiResult};

#[cfg(test)]
pub use user_api::MockUserApi;
