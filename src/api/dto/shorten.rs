//! DTOs for link shortening endpoint.

use serde::Serialize;
use serde_json::Value;

use crate::domain::entities::ShortLink;
use crate::error::AppError;

/// Request to shorten a single URL.
///
/// `url` stays optional here so a missing field surfaces as a
/// "URL is required" error from the service.
#[derive(Debug)]
pub struct ShortenRequest {
    pub url: Option<String>,
}

impl ShortenRequest {
    /// Parses a raw request body.
    ///
    /// Any JSON value other than `null` is accepted; `url` is looked up only on
    /// objects, so arrays and scalars read as a missing `url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the body is not JSON, is `null`, or
    /// carries a non-string `url`.
    pub fn from_slice(body: &[u8]) -> Result<Self, AppError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| AppError::internal(e.to_string()))?;

        if value.is_null() {
            return Err(AppError::internal("Request body is null"));
        }

        let url = match value.get("url") {
            None | Some(Value::Null) => None,
            Some(Value::String(url)) => Some(url.clone()),
            Some(other) => {
                return Err(AppError::internal(format!(
                    "url must be a string, got {}",
                    other
                )));
            }
        };

        Ok(Self { url })
    }
}

/// Shortened URL returned to the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
    pub original_url: String,
}

impl From<ShortLink> for ShortenResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            short_url: link.short_url.into(),
            original_url: link.original_url,
        }
    }
}
