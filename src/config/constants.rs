//! Configuration constants.
//!
//! This module defines the backend contract (origin, paths, query keys) and
//! every fixed string the client can put on the display surface.

/// Default backend origin.
///
/// The hosted deployment is expected to be passed explicitly (`--base-url` or
/// `SENTINEL_BASE_URL`); the default points at a backend running locally on
/// the port the service listens on during development.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Path of the scanning endpoint, relative to the base origin.
pub const SCAN_PATH: &str = "scan";
/// Query parameter carrying the candidate URL.
pub const SCAN_QUERY_KEY: &str = "url";

/// Default User-Agent string for requests to the backend.
pub const DEFAULT_USER_AGENT: &str = concat!("sentinel_scan/", env!("CARGO_PKG_VERSION"));

/// Regex for the syntactic URL check: optional http(s) scheme, one or more
/// `label.` segments and an alphabetic final label of at least two characters.
pub const URL_FORMAT_PATTERN: &str = r"^(?:https?://)?(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}$";

// Display messages
/// Shown when the input is empty or whitespace only.
pub const MSG_EMPTY_INPUT: &str = "Please enter a URL.";
/// Shown when the input fails the format check.
pub const MSG_INVALID_FORMAT: &str =
    "❌ Invalid URL format. Please enter a valid URL (e.g. https://example.com).";
/// Shown for any transport failure; details go to the log.
pub const MSG_CONNECTIVITY: &str =
    "❌ Could not reach the backend. Please check that the scanning service is running.";
/// Prefix placed in front of an error string returned by the backend.
pub const MSG_BACKEND_ERROR_PREFIX: &str = "❌ Error: ";

// Result template labels, in display order
/// Label for the normalized domain.
pub const LABEL_DOMAIN: &str = "Domain";
/// Label for the trust status.
pub const LABEL_TRUST_STATUS: &str = "Trust Status";
/// Label for the URL classification.
pub const LABEL_URL_TYPE: &str = "URL Type";
/// Label for the risk level.
pub const LABEL_RISK_LEVEL: &str = "Risk Level";
/// Label for the numeric risk score.
pub const LABEL_RISK_SCORE: &str = "Risk Score";
/// Label for the reachability line.
pub const LABEL_REACHABILITY: &str = "Reachability";
/// Label for the verdict text.
pub const LABEL_VERDICT: &str = "Verdict";
/// Heading of the WHOIS summary block.
pub const LABEL_WHOIS: &str = "WHOIS Summary";
/// Heading of the DNS summary block.
pub const LABEL_DNS: &str = "DNS Summary";

/// Reachability value when the target responded.
pub const REACHABLE_TEXT: &str = "✅ Reachable";
/// Reachability value when the target did not respond.
pub const NOT_REACHABLE_TEXT: &str = "❌ Not Reachable";
