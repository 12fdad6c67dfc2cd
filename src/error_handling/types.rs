//! Error type definitions.
//!
//! This module defines all error types used throughout the client.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::{MSG_BACKEND_ERROR_PREFIX, MSG_CONNECTIVITY, MSG_EMPTY_INPUT, MSG_INVALID_FORMAT};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configuration was rejected before any resource was built.
    #[error("Invalid configuration: {0}")]
    ConfigError(#[from] ConfigValidationError),
}

/// A configuration value that cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what would be accepted
    pub message: String,
}

impl ConfigValidationError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Why a scan ended without a result.
///
/// The `Display` implementation yields the text shown to the user. Transport
/// details carried by `Connectivity` are for logs only and never appear in it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// No URL was supplied (input was empty or whitespace only).
    #[error("{}", MSG_EMPTY_INPUT)]
    EmptyInput,

    /// The input failed the syntactic URL check.
    #[error("{}", MSG_INVALID_FORMAT)]
    InvalidFormat,

    /// The backend could not be reached or answered with something unusable.
    #[error("{}", MSG_CONNECTIVITY)]
    Connectivity(FailureKind),

    /// The backend rejected the request with its own error message.
    #[error("{}{}", MSG_BACKEND_ERROR_PREFIX, .0)]
    Backend(String),
}

impl ScanError {
    /// Returns true if the error was produced locally, without any network call.
    pub fn is_local(&self) -> bool {
        matches!(self, ScanError::EmptyInput | ScanError::InvalidFormat)
    }
}

/// Categories of transport failure, used when logging a connectivity error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(missing_docs)]
pub enum FailureKind {
    HttpRequestBuilderError,
    HttpRequestConnectError,
    HttpRequestTimeoutError,
    HttpRequestRedirectError,
    HttpRequestStatusError, // Non-success HTTP status
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    /// The body was JSON but matched neither a result nor a rejection record.
    MalformedResponse,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureKind {
    /// Returns a human-readable description of the failure kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::HttpRequestBuilderError => "HTTP request builder error",
            FailureKind::HttpRequestConnectError => "HTTP request connect error",
            FailureKind::HttpRequestTimeoutError => "HTTP request timeout error",
            FailureKind::HttpRequestRedirectError => "HTTP request redirect error",
            FailureKind::HttpRequestStatusError => "HTTP request status error",
            FailureKind::HttpRequestBodyError => "HTTP request body error",
            FailureKind::HttpRequestDecodeError => "HTTP request decode error",
            FailureKind::HttpRequestOtherError => "HTTP request other error",
            FailureKind::MalformedResponse => "Malformed scan response",
        }
    }
}
