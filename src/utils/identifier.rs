//! Relay identifier derivation.
//!
//! Identifiers are derived from the URL itself rather than generated, so the
//! same URL always maps to the same identifier. Truncation means two URLs that
//! share a long enough prefix map to the same identifier; nothing here detects
//! or resolves that.

use base64::Engine as _;

/// Maximum number of characters kept from the encoded URL.
pub const IDENTIFIER_MAX_LEN: usize = 32;

/// Derives the relay identifier for a URL.
///
/// Encodes the raw UTF-8 bytes of `url` as URL-safe base64 without padding and
/// keeps the first [`IDENTIFIER_MAX_LEN`] characters.
///
/// # Examples
///
/// ```
/// use relay_gateway::utils::identifier::generate_identifier;
///
/// assert_eq!(generate_identifier("http://example.com"), "aHR0cDovL2V4YW1wbGUuY29t");
/// ```
pub fn generate_identifier(url: &str) -> String {
    let mut encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(url.as_bytes());
    // base64 output is ASCII, so truncating by bytes never splits a char
    encoded.truncate(IDENTIFIER_MAX_LEN);
    encoded
}
