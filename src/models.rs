//! Request and response records exchanged with the scanning backend.
//!
//! All records are built per call and dropped afterwards; nothing here is
//! cached or persisted.

use serde::Deserialize;

/// The outbound query: a single URL supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    /// Trimmed candidate URL, sent as the `url` query parameter
    pub url: String,
}

impl ScanRequest {
    /// Creates a request for `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// A complete scan result as produced by the backend.
///
/// Categorical fields are opaque labels: they are displayed, never interpreted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScanReport {
    /// Normalized domain extracted from the URL
    pub domain: String,
    /// Categorical trust label
    pub trust_status: String,
    /// Categorical classification of the URL
    pub url_type: String,
    /// Categorical risk label
    pub risk_level: String,
    /// Numeric risk score
    pub risk_score: f64,
    /// Free-text summary verdict
    pub verdict: String,
    /// Free-text WHOIS lookup summary
    pub whois_summary: String,
    /// Free-text DNS lookup summary
    pub dns_summary: String,
    /// Only sent by newer backends
    #[serde(default)]
    pub reachable: Option<bool>,
}

/// A request the backend refused, with its reason.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendRejection {
    /// Reason given by the backend, shown verbatim
    pub error: String,
}

/// Body of a `200 OK` from `/scan`.
///
/// The `error` field is the only discriminant: any body carrying a string
/// `error` is a rejection, whatever else it contains. Variant order matters
/// for the untagged decoder.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScanResponse {
    /// The backend refused the URL
    Rejected(BackendRejection),
    /// The backend scored the URL
    Completed(ScanReport),
}

/// Body of `GET /` on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceStatus {
    /// Short state, e.g. "running"
    pub status: String,
    /// Human-readable description
    pub message: String,
    /// Example request path
    #[serde(default)]
    pub usage: Option<String>,
}
