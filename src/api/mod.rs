//! Client for the VGMdb JSON API (`vgmdb.info`).
//!
//! Requests are built relative to the configured API base URL and always ask
//! for JSON (`?format=json`). Responses are returned as untyped
//! `serde_json::Value` documents, or decoded into any caller-supplied type via
//! [`Client::get_json`].

mod envelope;
mod resources;

use std::sync::Arc;

use log::debug;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Method, Request};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{Config, API_SUCCESS_STATUSES};
use crate::error_handling::{ApiError, InitializationError};
use crate::initialization::init_api_client;
use crate::utils::normalize_api_url;

pub use resources::{AlbumsService, ProductsService};

/// Manages communication with the VGMdb API.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Arc<Url>,
}

impl Client {
    /// Creates an API client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL is invalid or the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let base_url = normalize_api_url(&config.api_url)?;
        let http = init_api_client(config)?;
        Ok(Self {
            http,
            base_url: Arc::new(base_url),
        })
    }

    /// Returns a copy of the base URL (always ends with a slash).
    pub fn base_url(&self) -> Url {
        (*self.base_url).clone()
    }

    /// Creates an API request for a path relative to the base URL.
    ///
    /// `path` must not start with a slash (`album/79`). The request asks for
    /// JSON through both the `format` query parameter and the `Accept` header.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidPath` if `path` cannot be joined to the base URL.
    pub fn new_request(&self, method: Method, path: &str) -> Result<Request, ApiError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|source| ApiError::InvalidPath {
                path: path.to_string(),
                source,
            })?;
        url.query_pairs_mut().append_pair("format", "json");

        let mut request = Request::new(method, url);
        request
            .headers_mut()
            .insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(request)
    }

    /// Sends an API request and decodes the JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Request` if the request fails, `ApiError::Response`
    /// (with the message from the error page) for a non-success status, and
    /// `ApiError::Decode` if the body is not a valid `T`.
    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!("{method} {url}");

        let response = self.http.execute(request).await?;
        let status = response.status();

        if !API_SUCCESS_STATUSES.contains(&status.as_u16()) {
            // The error page is best effort; a broken body still yields an ErrorResponse.
            let body = response.text().await.unwrap_or_default();
            return Err(envelope::error_response(&method, &url, status, body).into());
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// GETs `path` and decodes the JSON body into `T`.
    ///
    /// # Errors
    ///
    /// See [`new_request`](Self::new_request) and [`execute`](Self::execute).
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.new_request(Method::GET, path)?;
        self.execute(request).await
    }

    /// Album endpoints.
    pub fn albums(&self) -> AlbumsService<'_> {
        AlbumsService::new(self)
    }

    /// Product endpoints.
    pub fn products(&self) -> ProductsService<'_> {
        ProductsService::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_url: &str) -> Client {
        Client::new(&Config {
            api_url: api_url.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        assert_eq!(
            client("http://localhost:9990/api").base_url().as_str(),
            "http://localhost:9990/api/"
        );
    }

    #[test]
    fn test_new_request_sets_format_and_accept() {
        let request = client("https://vgmdb.info/")
            .new_request(Method::GET, "album/79")
            .unwrap();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url().as_str(), "https://vgmdb.info/album/79?format=json");
        assert_eq!(request.headers()[ACCEPT], "application/json");
    }

    #[test]
    fn test_new_request_keeps_base_path() {
        let request = client("http://localhost:9990/api/")
            .new_request(Method::GET, "product/1")
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:9990/api/product/1?format=json"
        );
    }

    #[test]
    fn test_new_request_preserves_escaped_path() {
        let request = client("https://vgmdb.info/")
            .new_request(Method::GET, "search/a%2Fb")
            .unwrap();
        assert_eq!(request.url().path(), "/search/a%2Fb");
    }

    #[test]
    fn test_client_rejects_invalid_base_url() {
        let result = Client::new(&Config {
            api_url: "::not a url".to_string(),
            ..Default::default()
        });
        assert!(matches!(
            result,
            Err(InitializationError::BaseUrlError { .. })
        ));
    }
}
