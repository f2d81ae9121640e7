//! API route configuration.

use crate::api::handlers::{expand_handler, health_handler, not_found_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All gateway routes.
///
/// # Endpoints
///
/// - `GET  /health`              - Liveness probe
/// - `POST /shorten`             - Derive a relay short URL
/// - `GET  /expand/{identifier}` - Resolve through the relay and redirect
///
/// A known path requested with the wrong method falls through to
/// [`not_found_handler`] instead of answering 405. `HEAD` is routed there
/// explicitly since axum would otherwise serve it from the `GET` handler.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/health",
            get(health_handler)
                .head(not_found_handler)
                .fallback(not_found_handler),
        )
        .route("/shorten", post(shorten_handler).fallback(not_found_handler))
        .route(
            "/expand/{identifier}",
            get(expand_handler)
                .head(not_found_handler)
                .fallback(not_found_handler),
        )
}
