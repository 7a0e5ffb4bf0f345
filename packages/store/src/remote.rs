//! HTTP backend for the remote collection endpoint.
//!
//! The contract is replace-all: `GET` returns the full collection as a
//! JSON array, `PUT` replaces it with the request body and echoes the
//! stored collection back. No partial or delta updates exist: every
//! save transmits everything. Both verbs carry a static credential
//! header.

use crate::error::RemoteError;
use crate::sync::RemoteCollection;
use async_trait::async_trait;
use pagecraft_document::PageDocument;
use tracing::debug;

/// Header carrying the static credential.
pub const ACCESS_KEY_HEADER: &str = "X-Access-Key";

#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Full URL of the collection endpoint.
    pub endpoint: String,
    /// Static credential sent with every request.
    pub access_key: String,
}

impl RemoteConfig {
    pub fn new(endpoint: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_key: access_key.into(),
        }
    }

    /// Read `PAGECRAFT_ENDPOINT` and `PAGECRAFT_ACCESS_KEY` from the
    /// environment; `None` when either is unset.
    pub fn from_env() -> Option<Self> {
        let endpoint = std::env::var("PAGECRAFT_ENDPOINT").ok()?;
        let access_key = std::env::var("PAGECRAFT_ACCESS_KEY").ok()?;
        Some(Self::new(endpoint, access_key))
    }
}

#[derive(Debug, Clone)]
pub struct HttpRemote {
    client: reqwest::Client,
    config: RemoteConfig,
}

impl HttpRemote {
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl RemoteCollection for HttpRemote {
    async fn fetch(&self) -> Result<Vec<PageDocument>, RemoteError> {
        debug!(endpoint = %self.config.endpoint, "GET collection");

        let response = self
            .client
            .get(&self.config.endpoint)
            .header(ACCESS_KEY_HEADER, &self.config.access_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    async fn replace(
        &self,
        pages: Vec<PageDocument>,
    ) -> Result<Vec<PageDocument>, RemoteError> {
        debug!(endpoint = %self.config.endpoint, pages = pages.len(), "PUT collection");

        let response = self
            .client
            .put(&self.config.endpoint)
            .header(ACCESS_KEY_HEADER, &self.config.access_key)
            .json(&pages)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}
