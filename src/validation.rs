//! Client-side URL format check.
//!
//! This is a syntactic filter applied before the backend is contacted. It does
//! not verify that the host exists, is registered or is reachable; the backend
//! does that and reports failures through its `error` field.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::URL_FORMAT_PATTERN;

static URL_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(URL_FORMAT_PATTERN).expect("URL_FORMAT_PATTERN is a valid regex")
});

/// Returns true if `url` looks like a host name with an optional http(s) scheme.
///
/// Accepted: an optional `http://` or `https://`, then one or more labels of
/// ASCII letters, digits and hyphens each followed by a dot, then a final
/// label of at least two ASCII letters. Any space character rejects the input.
///
/// # Examples
///
/// ```
/// use sentinel_scan::validate_format;
///
/// assert!(validate_format("example.com"));
/// assert!(validate_format("http://sub.example.co"));
/// assert!(!validate_format("notaurl"));
/// assert!(!validate_format("exa mple.com"));
/// ```
pub fn validate_format(url: &str) -> bool {
    if url.contains(' ') {
        return false;
    }
    URL_FORMAT.is_match(url)
}
