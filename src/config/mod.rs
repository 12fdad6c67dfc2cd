//! Client configuration and constants.
//!
//! This module provides:
//! - Constants for the backend contract and the display surface
//! - The `Config` struct and its validation
//! - Log level and format options shared with the CLI

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
