//! Library initialization.
//!
//! This module provides functions to initialize shared resources:
//! - HTTP clients (user agent, timeout, auth cookie)
//! - Logger
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::{init_api_client, init_client};
pub use logger::init_logger_with;
