//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the HTTP client used to talk to the scanning backend.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - A request timeout only when `timeout_seconds` is set
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = ClientBuilder::new()
        .use_rustls_tls()
        .user_agent(config.user_agent.clone());

    if let Some(secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}
