//! # Relay Gateway
//!
//! A stateless URL shortening gateway built with Axum.
//!
//! Shortening is local and deterministic: the identifier is the URL itself,
//! base64url-encoded and truncated. Expansion is delegated to an external
//! relay whose response text is expected to end with the original URL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the relay client trait
//! - **Application Layer** ([`application`]) - Shorten/expand orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest relay client
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `GET /health`
//! - `POST /shorten` with `{"url": "..."}`
//! - `GET /expand/{identifier}` redirecting (302) to the original URL
//!
//! ## Quick Start
//!
//! ```bash
//! export RELAY_BASE_URL="https://relay.pkarr.org"  # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::RelayService;
    pub use crate::domain::entities::ShortLink;
    pub use crate::domain::{RelayClient, RelayError};
    pub use crate::error::AppError;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
