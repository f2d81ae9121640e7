//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`              - Health check (see [`crate::api::routes`])
//! - `POST /shorten`             - Shorten a URL
//! - `GET  /expand/{identifier}` - Redirect through the relay
//! - anything else               - 404 `Not Found`
//!
//! # Middleware
//!
//! Outermost first:
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive headers on every response; answers all `OPTIONS`
//! - **Panic recovery** - Handler panics become 500 responses

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::middleware::{cors, panic, tracing};
use crate::state::AppState;
use axum::Router;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    api::routes::routes()
        .fallback(not_found_handler)
        .with_state(state)
        .layer(panic::layer())
        .layer(cors::layer())
        .layer(tracing::layer())
}
