//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! - [`relay`] - HTTP client for the external relay

pub mod relay;
