//! Core domain entities.
//!
//! Nothing here is persisted; entities live for a single request.
//!
//! - [`ShortLink`] - A URL paired with its relay address

pub mod short_link;

pub use short_link::ShortLink;
