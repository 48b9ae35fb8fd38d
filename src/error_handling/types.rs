//! Error type definitions.
//!
//! This module defines all error types used throughout the library.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::{NOT_FOUND_BANNER_TEXT, UNAUTHORIZED_BANNER_TEXT, UNKNOWN_BANNER_TEXT};

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

    /// A configured base URL could not be parsed.
    #[error("Invalid base URL '{url}': {source}")]
    BaseUrlError {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A configured header value (user agent, cookie) is not a valid HTTP header value.
    #[error("Invalid header value for {0}")]
    HeaderValueError(&'static str),
}

/// Discriminant of a [`ScrapeError`], for callers that branch on the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    /// The page is restricted to registered members.
    Unauthorized,
    /// The requested entry does not exist.
    NotFound,
    /// The page shows an error banner with an unrecognized message.
    Unknown,
    /// The page could not be fetched at all.
    Transport,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::NotFound => "Not found",
            ErrorKind::Unknown => "Unknown error",
            ErrorKind::Transport => "Transport error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure outcome of scraping one page.
///
/// The first three variants come from the error banner the website renders in
/// place of normal content; their messages are the banner phrases themselves.
/// `Transport` means no page was obtained and nothing was classified.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("{}", UNAUTHORIZED_BANNER_TEXT)]
    Unauthorized,

    #[error("{}", NOT_FOUND_BANNER_TEXT)]
    NotFound,

    #[error("{}", UNKNOWN_BANNER_TEXT)]
    Unknown,

    #[error("unable to visit role page: {0}")]
    Transport(#[from] ReqwestError),
}

impl ScrapeError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScrapeError::Unauthorized => ErrorKind::Unauthorized,
            ScrapeError::NotFound => ErrorKind::NotFound,
            ScrapeError::Unknown => ErrorKind::Unknown,
            ScrapeError::Transport(_) => ErrorKind::Transport,
        }
    }
}

/// Error types for the JSON API client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The relative path could not be turned into a request URL.
    #[error("Invalid request path '{path}': {source}")]
    InvalidPath {
        path: String,
        #[source]
        source: url::ParseError,
    },

    /// The request never completed (connection, timeout, body read).
    #[error("HTTP request error: {0}")]
    Request(#[from] ReqwestError),

    /// The API answered with a non-success status.
    #[error(transparent)]
    Response(#[from] ErrorResponse),

    /// The body was not the expected JSON document.
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A non-success answer from the JSON API.
///
/// Renders as `GET https://vgmdb.info/album/1: 404 Item not found`.
#[derive(Error, Debug, Clone)]
#[error("{method} {url}: {status} {message}")]
pub struct ErrorResponse {
    /// HTTP method of the failed request
    pub method: String,
    /// Request URL without query string, path unescaped
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Message extracted from the error page
    pub message: String,
    /// Raw response body
    pub body: String,
}
