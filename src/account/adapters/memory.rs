//! In-memory user API for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::account::domain::{Credentials, ProfileUpdate, RegistrationRequest, UserId, UserRecord};
use crate::account::ports::{UserApi, UserApiError, UserApiResult};

/// Thread-safe in-memory stand-in for the remote user API.
///
/// Supports scripted failures and an optional artificial latency so the
/// debounced search can be exercised against late-resolving responses.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserApi {
    state: Arc<RwLock<InMemoryUserState>>,
    latency: Option<Duration>,
}

#[derive(Debug, Default)]
struct InMemoryUserState {
    directory: Vec<UserRecord>,
    passwords: HashMap<UserId, String>,
    next_id: i64,
    failure: Option<UserApiError>,
}

impl InMemoryUserApi {
    /// Creates an empty in-memory user API.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a directory entry without login credentials.
    #[must_use]
    pub fn with_user(self, record: UserRecord) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.next_id = state.next_id.max(record.id.value());
            state.directory.push(record);
        }
        self
    }

    /// Seeds a directory entry that can also log in.
    #[must_use]
    pub fn with_account(self, record: UserRecord, password: impl Into<String>) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.next_id = state.next_id.max(record.id.value());
            state.passwords.insert(record.id, password.into());
            state.directory.push(record);
        }
        self
    }

    /// Delays every response by the given duration.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Scripts the next responses to fail with the given error.
    ///
    /// Passing `None` restores normal behaviour.
    pub fn set_failure(&self, failure: Option<UserApiError>) {
        if let Ok(mut state) = self.state.write() {
            state.failure = failure;
        }
    }

    async fn simulate_conditions(&self) -> UserApiResult<()> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        let state = self.state.read().map_err(lock_failure)?;
        state.failure.clone().map_or(Ok(()), Err)
    }
}

#[async_trait]
impl UserApi for InMemoryUserApi {
    async fn register(&self, request: &RegistrationRequest) -> UserApiResult<UserRecord> {
        self.simulate_conditions().await?;
        let mut state = self.state.write().map_err(lock_failure)?;
        state.next_id += 1;
        let record = UserRecord {
            id: UserId::new(state.next_id),
            username: request.username().to_owned(),
            email: request.email().to_owned(),
        };
        state.directory.push(record.clone());
        Ok(record)
    }

    async fn login(&self, credentials: &Credentials) -> UserApiResult<UserRecord> {
        self.simulate_conditions().await?;
        let state = self.state.read().map_err(lock_failure)?;
        state
            .directory
            .iter()
            .find(|record| record.username == credentials.username())
            .filter(|record| {
                state
                    .passwords
                    .get(&record.id)
                    .is_some_and(|stored| stored == credentials.password())
            })
            .cloned()
            .ok_or(UserApiError::Status(401))
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        update: &ProfileUpdate,
    ) -> UserApiResult<UserRecord> {
        self.simulate_conditions().await?;
        let mut state = self.state.write().map_err(lock_failure)?;
        let record = state
            .directory
            .iter_mut()
            .find(|record| record.id == user_id)
            .ok_or(UserApiError::Status(404))?;
        record.username = update.username().to_owned();
        record.email = update.email().to_owned();
        Ok(record.clone())
    }

    async fn list_directory(&self) -> UserApiResult<Vec<UserRecord>> {
        self.simulate_conditions().await?;
        let state = self.state.read().map_err(lock_failure)?;
        Ok(state.directory.clone())
    }
}

/// Maps lock poisoning onto a transport failure.
fn lock_failure<T>(err: std::sync::PoisonError<T>) -> UserApiError {
    UserApiError::transport(std::io::Error::other(err.to_string()))
}
