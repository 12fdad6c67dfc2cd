//! sentinel_scan library: client for a remote URL risk-scanning service
//!
//! This library validates a candidate URL, asks the scanning backend about it
//! (`GET /scan?url=...`) and turns the JSON verdict into display text. It holds
//! no state between calls; each scan is one independent request.
//!
//! # Example
//!
//! ```no_run
//! use sentinel_scan::{Config, ScanClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ScanClient::new(&Config::default())?;
//!
//! // Either the rendered verdict or a short error message
//! println!("{}", client.scan("https://example.com").await);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod client;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod output;
mod validation;

// Re-export public API
pub use client::{build_scan_url, ScanClient};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{FailureKind, ScanError};
pub use models::{BackendRejection, ScanReport, ScanRequest, ScanResponse, ServiceStatus};
pub use output::{render_outcome, render_report};
pub use validation::validate_format;
