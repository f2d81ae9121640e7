//! Pure helper functions used by the relay service.
//!
//! - [`identifier`] - Deterministic identifier derivation
//! - [`scraper`] - Extraction of the trailing URL from relay responses

pub mod identifier;
pub mod scraper;
