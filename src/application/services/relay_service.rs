//! Shortening and expansion through the external relay.

use std::sync::Arc;

use tracing::info;
use url::Url;

use crate::domain::entities::ShortLink;
use crate::domain::{RelayClient, RelayError};
use crate::error::AppError;
use crate::utils::identifier::generate_identifier;
use crate::utils::scraper::extract_trailing_url;

/// Service deriving short links and resolving them via the relay.
///
/// Holds no per-request state; the only thing shared between requests is the
/// relay client and the relay base URL.
pub struct RelayService {
    client: Arc<dyn RelayClient>,
    base_url: Url,
}

impl RelayService {
    /// Creates a new relay service.
    pub fn new(client: Arc<dyn RelayClient>, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Builds the canonical relay URL for an identifier.
    ///
    /// The identifier becomes a single, percent-encoded path segment appended
    /// to the base URL's path.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::InvalidUrl`] if the base URL cannot carry a path
    /// (e.g. `mailto:`); [`crate::config::Config::validate`] rejects such bases
    /// at startup.
    pub fn relay_url(&self, identifier: &str) -> Result<Url, RelayError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| RelayError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(identifier);

        Ok(url)
    }

    /// Derives the short link for `original_url`.
    ///
    /// Never contacts the relay.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `original_url` is empty.
    pub fn shorten(&self, original_url: String) -> Result<ShortLink, AppError> {
        if original_url.is_empty() {
            return Err(AppError::bad_request("URL is required"));
        }

        let identifier = generate_identifier(&original_url);
        let short_url = self.relay_url(&identifier)?;

        Ok(ShortLink::new(identifier, short_url, original_url))
    }

    /// Resolves an identifier to the original URL through the relay.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the relay answers with a non-success
    /// status.
    /// Returns [`AppError::Internal`] if the relay cannot be reached or its
    /// response does not end with a URL.
    pub async fn expand(&self, identifier: &str) -> Result<String, AppError> {
        let relay_url = self.relay_url(identifier)?;

        let Some(body) = self.client.fetch(&relay_url).await? else {
            info!("Relay has no mapping for {}", identifier);
            return Err(AppError::not_found("URL not found"));
        };

        let original_url = extract_trailing_url(&body)?;

        Ok(original_url.to_string())
    }
}
