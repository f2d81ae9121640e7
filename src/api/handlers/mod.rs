//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a single endpoint.

pub mod expand;
pub mod fallback;
pub mod health;
pub mod shorten;

pub use expand::expand_handler;
pub use fallback::not_found_handler;
pub use health::health_handler;
pub use shorten::shorten_handler;
