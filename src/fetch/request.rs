//! Request headers for page fetches.

/// Headers sent with every page request.
///
/// The website serves the same markup to every client; these headers only ask
/// for HTML in English so banner phrases and dates come out as expected.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Applies the page request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
    }
}
