//! Handler for link shortening endpoint.

use axum::{Json, body::Bytes, extract::State};
use tracing::debug;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Derives the relay short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// The body is parsed as JSON regardless of `Content-Type`.
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "shortUrl": "https://relay.pkarr.org/aHR0cHM6Ly9leGFtcGxlLmNvbQ",
///   "originalUrl": "https://example.com"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing, `null` or empty.
/// Returns 500 Internal Server Error if the body is not JSON, is `null`, or
/// `url` is not a string.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ShortenResponse>, AppError> {
    let payload = ShortenRequest::from_slice(&body)?;

    let link = state
        .relay_service
        .shorten(payload.url.unwrap_or_default())?;

    debug!("Shortened {} as {}", link.original_url, link.identifier);

    Ok(Json(link.into()))
}
