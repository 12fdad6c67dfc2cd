//! The scan client: validate, query the backend, decode, render.
//!
//! A `ScanClient` holds no per-scan state. Every call to [`ScanClient::scan`]
//! is independent, so overlapping calls never share data; the caller decides
//! what to do when completions interleave.

use log::{debug, info, warn};
use url::Url;

use crate::config::{Config, SCAN_PATH, SCAN_QUERY_KEY};
use crate::error_handling::{categorize_reqwest_error, FailureKind, InitializationError, ScanError};
use crate::initialization::init_client;
use crate::models::{ScanReport, ScanRequest, ScanResponse, ServiceStatus};
use crate::output::render_outcome;
use crate::validation::validate_format;

/// Client for the remote URL risk-scanning service.
#[derive(Debug, Clone)]
pub struct ScanClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ScanClient {
    /// Builds a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::ConfigError` if the configuration is
    /// rejected, or `HttpClientError` if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        config.validate()?;
        let http = init_client(config)?;
        Ok(Self::with_http_client(http, config.base_url.clone()))
    }

    /// Builds a client around an existing `reqwest::Client`.
    ///
    /// The base URL is used as given; call [`Config::validate`] first if it
    /// comes from user input.
    pub fn with_http_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The backend origin this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Scans `input` and returns the text to display.
    ///
    /// Never fails: every error is turned into its user-facing message.
    pub async fn scan(&self, input: &str) -> String {
        render_outcome(&self.try_scan(input).await)
    }

    /// Scans `input` and returns the backend's result.
    ///
    /// The input is trimmed first. Empty and malformed inputs are rejected
    /// without contacting the network.
    ///
    /// # Errors
    ///
    /// - `ScanError::EmptyInput` for empty or whitespace-only input
    /// - `ScanError::InvalidFormat` if the input fails [`validate_format`]
    /// - `ScanError::Connectivity` on transport failure, non-success status or
    ///   an undecodable body
    /// - `ScanError::Backend` if the backend answered with an `error` field
    pub async fn try_scan(&self, input: &str) -> Result<ScanReport, ScanError> {
        let url = input.trim();
        if url.is_empty() {
            debug!("Rejecting empty scan input");
            return Err(ScanError::EmptyInput);
        }
        if !validate_format(url) {
            debug!("Rejecting malformed scan input: {url}");
            return Err(ScanError::InvalidFormat);
        }

        let request = ScanRequest::new(url);
        match self.fetch(&request).await? {
            ScanResponse::Rejected(rejection) => {
                info!("Backend rejected {}: {}", request.url, rejection.error);
                Err(ScanError::Backend(rejection.error))
            }
            ScanResponse::Completed(report) => {
                debug!(
                    "Scan of {} completed: risk_level={} risk_score={}",
                    request.url, report.risk_level, report.risk_score
                );
                Ok(report)
            }
        }
    }

    /// Queries the backend's root endpoint for its status.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::Connectivity` if the backend cannot be reached or
    /// does not answer with a status record.
    pub async fn service_status(&self) -> Result<ServiceStatus, ScanError> {
        let target = self.base_url.clone();
        debug!("Checking backend status at {target}");
        self.get_json(target).await
    }

    /// Builds `<base>/scan?url=<percent-encoded url>`.
    pub fn scan_target(&self, request: &ScanRequest) -> Url {
        build_scan_url(&self.base_url, &request.url)
    }

    async fn fetch(&self, request: &ScanRequest) -> Result<ScanResponse, ScanError> {
        let target = self.scan_target(request);
        debug!("Requesting scan: GET {target}");
        self.get_json(target).await
    }

    /// Single await point for the network: GET, status check, JSON decode.
    async fn get_json<T>(&self, target: Url) -> Result<T, ScanError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .http
            .get(target.clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| connectivity_failure(&target, &e))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| connectivity_failure(&target, &e))?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!(
                "{} from {target}: {e}",
                FailureKind::MalformedResponse.as_str()
            );
            ScanError::Connectivity(FailureKind::MalformedResponse)
        })
    }
}

/// Appends the scan path and the encoded query to a base origin.
///
/// The query value is percent-encoded the way a browser's
/// `encodeURIComponent` would for the characters a valid input can contain
/// (`:` and `/` become `%3A` and `%2F`).
pub fn build_scan_url(base: &Url, url: &str) -> Url {
    let mut target = base.clone();
    target.set_path(SCAN_PATH);
    target.set_fragment(None);
    target
        .query_pairs_mut()
        .clear()
        .append_pair(SCAN_QUERY_KEY, url);
    target
}

fn connectivity_failure(target: &Url, error: &reqwest::Error) -> ScanError {
    let kind = categorize_reqwest_error(error);
    match error.status() {
        Some(status) => warn!("{kind} from {target}: HTTP {status}"),
        None => warn!("{kind} from {target}: {error}"),
    }
    ScanError::Connectivity(kind)
}
