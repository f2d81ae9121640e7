//! Application layer services implementing business logic.
//!
//! Services consume domain traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::relay_service::RelayService`] - Short link derivation and relay lookups

pub mod services;
