//! Domain layer containing entities and the relay contract.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. The relay is reached through the [`relay_client::RelayClient`]
//! trait, implemented in [`crate::infrastructure::relay`].
//!
//! - [`entities`] - Request-scoped data structures
//! - [`relay_client`] - Relay trait and error type

pub mod entities;
pub mod relay_client;

pub use relay_client::{RelayClient, RelayError};

#[cfg(test)]
pub use relay_client::MockRelayClient;
