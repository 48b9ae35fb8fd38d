//! Page fetching.
//!
//! Performs the HTTP GET for a page and hands back the body. Anything that
//! keeps a body from arriving (connection failure, timeout, non-success
//! status) is reported as the underlying `reqwest::Error`; the body itself is
//! never inspected here.

mod request;

use log::{debug, info};

use request::RequestHeaders;

/// Fetches a page and returns its body.
///
/// The client carries the configured user agent, cookie and timeout (see
/// [`init_client`](crate::initialization::init_client)).
///
/// # Errors
///
/// Returns a `reqwest::Error` if the request fails, the server answers with a
/// non-success status, or the body cannot be read.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, reqwest::Error> {
    info!("Visiting {url}");

    let response = RequestHeaders::apply_to_request_builder(client.get(url))
        .send()
        .await?
        .error_for_status()?;

    debug!("{url} answered {}", response.status());
    let body = response.text().await?;
    debug!("Fetched {} bytes from {url}", body.len());
    Ok(body)
}
