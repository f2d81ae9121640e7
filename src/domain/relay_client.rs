//! Contract for talking to the external relay.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// Errors raised while contacting the relay.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The request could not be sent or its body could not be read.
    #[error("Relay request failed: {0}")]
    Transport(String),

    /// The relay URL could not be built for an identifier.
    #[error("Invalid relay URL: {0}")]
    InvalidUrl(String),
}

/// Client for the external relay that resolves identifiers.
///
/// The relay protocol is opaque: a lookup is a single GET of the relay URL,
/// and the caller interprets the returned text.
///
/// # Implementations
///
/// - [`crate::infrastructure::relay::HttpRelayClient`] - reqwest-backed client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RelayClient: Send + Sync {
    /// Fetches `url` from the relay.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(body))` if the relay answered with a success status
    /// - `Ok(None)` if the relay answered with any other status
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Transport`] if the relay is unreachable, the
    /// request times out, or the body cannot be read.
    async fn fetch(&self, url: &Url) -> Result<Option<String>, RelayError>;
}
