//! Thin HTTP client wrapper for the remote TaskHub API.
//!
//! Every outbound adapter funnels through [`RemoteClient`]: one base URL,
//! JSON bodies in and out, and a three-way error taxonomy (transport
//! failure, non-success status, undecodable payload). The wrapper performs
//! no retries and no backoff; callers decide what a failure means for their
//! view.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Result type for remote API calls.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Errors produced by the remote client wrapper.
#[derive(Debug, Clone, Error)]
pub enum RemoteError {
    /// The request never produced an HTTP response.
    #[error("transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The endpoint answered with a non-success status code.
    #[error("remote endpoint returned status {0}")]
    Status(u16),

    /// The response body could not be decoded as the expected shape.
    #[error("malformed response payload: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),

    /// The request path could not be joined onto the base URL.
    #[error("invalid request path: {0}")]
    InvalidPath(String),
}

impl RemoteError {
    /// Wraps a transport-level failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a payload-decoding failure.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }
}

/// Connection settings for the remote API.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    base_url: Url,
    timeout: Option<Duration>,
}

impl RemoteConfig {
    /// Creates a configuration pointing at the given API origin.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: None,
        }
    }

    /// Bounds every request with a client-side timeout.
    ///
    /// Without one, a hung request is only bounded by the transport
    /// defaults.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the configured API origin.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the configured request timeout, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// JSON-over-HTTP client shared by the outbound adapters.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RemoteClient {
    /// Builds a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Transport`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &RemoteConfig) -> RemoteResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(RemoteError::transport)?;
        Ok(Self {
            http,
            base_url: config.base_url().clone(),
        })
    }

    /// Issues a GET and decodes the JSON response body.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on transport failure, non-success status, or
    /// an undecodable body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> RemoteResult<T> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(RemoteError::transport)?;
        read_json(response).await
    }

    /// Issues a POST with a JSON body and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on transport failure, non-success status, or
    /// an undecodable body.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> RemoteResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "POST");
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(RemoteError::transport)?;
        read_json(response).await
    }

    /// Issues a PUT with a JSON body and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on transport failure, non-success status, or
    /// an undecodable body.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> RemoteResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "PUT");
        let response = self
            .http
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(RemoteError::transport)?;
        read_json(response).await
    }

    /// Issues a PATCH with a JSON body, ignoring any response body.
    ///
    /// Partial-update endpoints acknowledge with a status code only.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on transport failure or non-success status.
    pub async fn patch_json<B>(&self, path: &str, body: &B) -> RemoteResult<()>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "PATCH");
        let response = self
            .http
            .patch(url)
            .json(body)
            .send()
            .await
            .map_err(RemoteError::transport)?;
        expect_success(&response)
    }

    /// Issues a DELETE, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on transport failure or non-success status.
    pub async fn delete(&self, path: &str) -> RemoteResult<()> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "DELETE");
        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(RemoteError::transport)?;
        expect_success(&response)
    }

    /// Resolves a relative API path against the base URL.
    fn endpoint(&self, path: &str) -> RemoteResult<Url> {
        self.base_url
            .join(path)
            .map_err(|_| RemoteError::InvalidPath(path.to_owned()))
    }
}

/// Rejects non-success responses.
fn expect_success(response: &reqwest::Response) -> RemoteResult<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(RemoteError::Status(status.as_u16()))
    }
}

/// Rejects non-success responses, then decodes the JSON body.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> RemoteResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(RemoteError::Status(status.as_u16()));
    }
    response.json::<T>().await.map_err(RemoteError::decode)
}
