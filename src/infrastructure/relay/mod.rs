//! Relay client implementations.
//!
//! - [`HttpRelayClient`] - Production client backed by `reqwest`

mod http_relay_client;

pub use http_relay_client::HttpRelayClient;
