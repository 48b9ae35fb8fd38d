//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, page markers, defaults)
//! - The library `Config` shared by the scraper and the API client
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Command, Config, LogFormat, LogLevel, Opt};
