//! Extraction of the target URL from relay response text.
//!
//! The relay's response body has no documented format. The only thing relied
//! upon is that a successful response ends with the original URL.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// An `http`/`https` URL running up to the very end of the text.
static TRAILING_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(https?://[^\s]+)$").unwrap());

/// The relay response did not end with a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Could not extract URL from response")]
pub struct ScrapeError;

/// Extracts the URL that terminates `text`.
///
/// `$` is not multi-line, so trailing whitespace (including a final newline)
/// prevents a match.
///
/// # Errors
///
/// Returns [`ScrapeError`] if `text` does not end with an `http://` or
/// `https://` URL.
pub fn extract_trailing_url(text: &str) -> Result<&str, ScrapeError> {
    TRAILING_URL_REGEX
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
        .ok_or(ScrapeError)
}
