//! Transport failure categorization.
//!
//! This module maps `reqwest` errors onto `FailureKind` so a connectivity
//! failure can be logged with a useful category.

use super::types::FailureKind;

/// Categorizes a `reqwest::Error` into a `FailureKind`.
///
/// Status errors come from `error_for_status()`, so any non-success code
/// (including redirects the client refused to follow) lands in
/// `HttpRequestStatusError`.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `FailureKind` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FailureKind {
    if error.is_builder() {
        FailureKind::HttpRequestBuilderError
    } else if error.is_status() {
        FailureKind::HttpRequestStatusError
    } else if error.is_timeout() {
        FailureKind::HttpRequestTimeoutError
    } else if error.is_connect() {
        FailureKind::HttpRequestConnectError
    } else if error.is_redirect() {
        FailureKind::HttpRequestRedirectError
    } else if error.is_decode() {
        FailureKind::HttpRequestDecodeError
    } else if error.is_body() {
        FailureKind::HttpRequestBodyError
    } else {
        FailureKind::HttpRequestOtherError
    }
}
