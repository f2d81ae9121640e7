//! Handler for identifier expansion.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

/// Resolves an identifier through the relay and redirects to the result.
///
/// # Endpoint
///
/// `GET /expand/{identifier}`
///
/// # Request Flow
///
/// 1. Build the relay URL for the identifier
/// 2. Fetch it (no retry, no cache)
/// 3. Take the URL the response text ends with
/// 4. Return 302 Found pointing at it
///
/// # Errors
///
/// Returns 404 Not Found if the relay answers with a non-success status.
/// Returns 500 Internal Server Error if the identifier is not valid
/// percent-encoded UTF-8, the relay is unreachable, or its response does not
/// end with a URL.
pub async fn expand_handler(
    identifier: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Path(identifier) = identifier.map_err(|e| AppError::internal(e.body_text()))?;

    let original_url = state.relay_service.expand(&identifier).await?;

    let location = HeaderValue::from_str(&original_url)
        .map_err(|e| AppError::internal(format!("Invalid redirect target: {}", e)))?;

    info!("Expanded {} -> {}", identifier, original_url);

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
