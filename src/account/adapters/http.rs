//! HTTP adapter for the remote user API.

use async_trait::async_trait;

use crate::account::domain::{Credentials, ProfileUpdate, RegistrationRequest, UserId, UserRecord};
use crate::account::ports::{UserApi, UserApiError, UserApiResult};
use crate::remote::{RemoteClient, RemoteError};

/// User API adapter over the shared remote client.
#[derive(Debug, Clone)]
pub struct HttpUserApi {
    client: RemoteClient,
}

impl HttpUserApi {
    /// Creates an adapter over the given remote client.
    #[must_use]
    pub const fn new(client: RemoteClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn register(&self, request: &RegistrationRequest) -> UserApiResult<UserRecord> {
        self.client
            .post_json("api/users/v1/register", request)
            .await
            .map_err(map_remote)
    }

    async fn login(&self, credentials: &Credentials) -> UserApiResult<UserRecord> {
        self.client
            .post_json("api/users/v1/login", credentials)
            .await
            .map_err(map_remote)
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        update: &ProfileUpdate,
    ) -> UserApiResult<UserRecord> {
        let path = format!("api/users/v1/{user_id}/profile");
        self.client
            .put_json(&path, update)
            .await
            .map_err(map_remote)
    }

    async fn list_directory(&self) -> UserApiResult<Vec<UserRecord>> {
        self.client
            .get_json("api/users/v1", &[])
            .await
            .map_err(map_remote)
    }
}

/// Maps remote-client failures onto the port error taxonomy.
fn map_remote(err: RemoteError) -> UserApiError {
    match err {
        RemoteError::Status(code) => UserApiError::Status(code),
        RemoteError::Transport(inner) => UserApiError::Transport(inner),
        RemoteError::Decode(inner) => UserApiError::Decode(inner),
        RemoteError::InvalidPath(path) => {
            UserApiError::transport(std::io::Error::other(format!("invalid path: {path}")))
        }
    }
}
