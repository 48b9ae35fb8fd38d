//! Error envelope of the JSON API.
//!
//! Failed API requests come back as small HTML pages rather than JSON, e.g.
//!
//! ```html
//! <h1>Error: 404 Not Found</h1>
//! <p>Sorry, the requested URL <tt>'https://vgmdb.info/album/01'</tt> caused an error:</p>
//! <pre>Item not found</pre>
//! ```
//!
//! or a bare proxy page (`502 Bad Gateway`) without any `<pre>` block.

use reqwest::{Method, StatusCode};
use url::Url;

use crate::error_handling::ErrorResponse;

const MESSAGE_OPEN_TAG: &str = "<pre>";
const MESSAGE_CLOSE_TAG: &str = "</pre>";

/// Extracts the error message of an API error page.
///
/// Returns the text between the first `<pre>` and the first `</pre>`, or a
/// `failed to parse unknown error format` message carrying the whole body.
pub(crate) fn parse_error_message(body: &str) -> String {
    if let (Some(open), Some(close)) = (body.find(MESSAGE_OPEN_TAG), body.find(MESSAGE_CLOSE_TAG)) {
        let start = open + MESSAGE_OPEN_TAG.len();
        if start < close {
            return body[start..close].to_string();
        }
    }
    format!("failed to parse unknown error format: {body}")
}

/// Builds the error for a non-success API answer.
pub fn error_response(method: &Method, url: &Url, status: StatusCode, body: String) -> ErrorResponse {
    ErrorResponse {
        method: method.to_string(),
        url: display_url(url),
        status: status.as_u16(),
        message: parse_error_message(&body),
        body,
    }
}

/// `scheme://host[:port]/path` with the path query-unescaped (`+` is a space,
/// `%XX` is decoded) and no query.
fn display_url(url: &Url) -> String {
    let host = match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    };
    let raw_path = url.path().replace('+', " ");
    let path = urlencoding::decode(&raw_path)
        .map(|p| p.into_owned())
        .unwrap_or_else(|_| url.path().to_string());
    format!("{}://{}{}", url.scheme(), host, path)
}
