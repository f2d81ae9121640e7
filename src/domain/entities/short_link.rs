//! Short link entity produced by the shorten operation.

use url::Url;

/// A URL paired with its relay address.
///
/// Exists only for the duration of a request. The relay URL is recomputed
/// from the original URL every time, so two links built from the same URL and
/// relay base are always equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub identifier: String,
    pub short_url: Url,
    pub original_url: String,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(identifier: String, short_url: Url, original_url: String) -> Self {
        Self {
            identifier,
            short_url,
            original_url,
        }
    }
}
