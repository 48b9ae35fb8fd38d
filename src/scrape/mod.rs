//! Web scraping of VGMdb pages that the JSON API does not cover.
//!
//! A [`Scraper`] owns the HTTP client and the site base URL. It is cheap to
//! clone and safe to share between tasks: each request builds its own record
//! and nothing of one request is visible to another.

mod request;
mod roles;

use std::sync::Arc;

use url::Url;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::initialization::init_client;
use crate::utils::normalize_site_url;

pub use request::PageRequest;
pub use roles::{parse_role_page, RolesService};

/// Scraper for the VGMdb website.
#[derive(Debug, Clone)]
pub struct Scraper {
    client: reqwest::Client,
    site_url: Arc<Url>,
}

impl Scraper {
    /// Creates a scraper from the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the site URL is invalid or the HTTP client cannot be
    /// built from the configured user agent, cookie and timeout.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let site_url = normalize_site_url(&config.site_url)?;
        let client = init_client(config)?;
        Ok(Self::with_client(client, site_url))
    }

    /// Creates a scraper around an existing HTTP client.
    pub fn with_client(client: reqwest::Client, site_url: Url) -> Self {
        Self {
            client,
            site_url: Arc::new(site_url),
        }
    }

    /// Base URL of the website.
    pub fn site_url(&self) -> &Url {
        &self.site_url
    }

    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Role pages.
    pub fn roles(&self) -> RolesService<'_> {
        RolesService::new(self)
    }
}
