//! Error handling for the scan client.
//!
//! This module provides:
//! - The `ScanError` taxonomy returned by a scan
//! - Initialization and configuration error types
//! - Categorization of transport failures for diagnostics
//!
//! Every `ScanError` is terminal for the call that produced it; none are retried.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{ConfigValidationError, FailureKind, InitializationError, ScanError};
