//! HTTP client initialization.
//!
//! This module provides the two HTTP clients of the library: one for website
//! pages (sends the auth cookie) and one for the JSON API.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for website pages.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Timeout from the configuration
/// - The auth cookie, if any, as a default `Cookie` header on every request
///
/// # Errors
///
/// Returns `InitializationError::HeaderValueError` if the cookie is not a
/// valid header value, or `InitializationError::HttpClientError` if client
/// creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let mut headers = HeaderMap::new();
    if let Some(cookie) = &config.auth_cookie {
        let mut value = HeaderValue::from_str(cookie)
            .map_err(|_| InitializationError::HeaderValueError("Cookie"))?;
        value.set_sensitive(true);
        headers.insert(COOKIE, value);
    }

    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// Initializes the HTTP client used for the JSON API.
///
/// Same user agent and timeout as [`init_client`], without the site cookie.
///
/// # Errors
///
/// Returns a `InitializationError::HttpClientError` if client creation fails.
pub fn init_api_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_without_cookie() {
        assert!(init_client(&Config::default()).is_ok());
    }

    #[test]
    fn test_init_client_rejects_invalid_cookie() {
        let config = Config {
            auth_cookie: Some("session=abc\nInjected: yes".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            init_client(&config),
            Err(InitializationError::HeaderValueError("Cookie"))
        ));
    }

    #[test]
    fn test_init_api_client() {
        assert!(init_api_client(&Config::default()).is_ok());
    }
}
