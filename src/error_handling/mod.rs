//! Error handling.
//!
//! This module provides the error types of the library:
//! - **Scrape errors**: page-level outcomes (`Unauthorized`, `NotFound`,
//!   `Unknown`) recognized from the website's error banner, plus `Transport`
//!   when no page could be fetched
//! - **API errors**: failures of the JSON API client, including the decoded
//!   error envelope
//! - **Initialization errors**: logger and HTTP client setup
//!
//! Fields that merely fail to parse (query parameters, timestamps, captions)
//! are never errors; extraction leaves them unset and moves on.

mod types;

// Re-export public API
pub use types::{ApiError, ErrorKind, ErrorResponse, InitializationError, ScrapeError};
