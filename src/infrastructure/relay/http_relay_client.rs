//! reqwest-backed relay client.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::domain::{RelayClient, RelayError};

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Transport(err.to_string())
    }
}

/// Relay client issuing a single GET per lookup.
///
/// No retries are attempted. Without a timeout a stalled relay holds the
/// calling request until the connection is closed.
pub struct HttpRelayClient {
    client: reqwest::Client,
}

impl HttpRelayClient {
    /// Creates a relay client with an optional per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Transport`] if the TLS backend cannot be
    /// initialised.
    pub fn new(timeout: Option<Duration>) -> Result<Self, RelayError> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::from_client(builder.build()?))
    }

    /// Wraps an already configured reqwest client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    async fn fetch(&self, url: &Url) -> Result<Option<String>, RelayError> {
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!("Relay request to {} failed: {}", url, e);
            RelayError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            debug!("Relay answered {} for {}", status, url);
            return Ok(None);
        }

        let body = response.text().await?;
        debug!("Relay answered {} for {} ({} bytes)", status, url, body.len());

        Ok(Some(body))
    }
}
