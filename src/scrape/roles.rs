//! Role pages (`/role/{id}`).

use scraper::Html;
use tokio_util::sync::CancellationToken;

use crate::error_handling::ScrapeError;
use crate::fetch::fetch_page;
use crate::models::Role;
use crate::parse::{
    classify_error_banner, extract_main_content, extract_sidebar_meta, find_main_content,
    find_sidebar,
};
use crate::scrape::{PageRequest, Scraper};

/// In-progress state of one role extraction.
///
/// Owned by a single call; never shared between requests.
#[derive(Debug)]
struct RoleBuilder {
    role: Role,
    error: Option<ScrapeError>,
}

impl RoleBuilder {
    fn new(request: &PageRequest) -> Self {
        Self {
            role: Role {
                id: request.id(),
                url: request.url().to_string(),
                aliases: Vec::new(),
                ..Default::default()
            },
            error: None,
        }
    }

    /// A classified error page always wins over whatever was extracted.
    fn finish(self) -> Result<Role, ScrapeError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.role),
        }
    }
}

/// Extracts a role from the markup of its page.
///
/// Classification and extraction both run against the whole document; if the
/// page carries an error banner the partially extracted record is dropped and
/// the banner's error is returned.
///
/// # Errors
///
/// Returns [`ScrapeError::Unauthorized`], [`ScrapeError::NotFound`] or
/// [`ScrapeError::Unknown`] when the page shows an error banner.
pub fn parse_role_page(body: &str, request: &PageRequest) -> Result<Role, ScrapeError> {
    let document = Html::parse_document(body);
    let mut builder = RoleBuilder::new(request);

    builder.error = classify_error_banner(&document);

    if let Some(main) = find_main_content(&document) {
        extract_main_content(main, request, &mut builder.role);
    }

    if let Some(sidebar) = find_sidebar(&document) {
        extract_sidebar_meta(sidebar, request.base(), &mut builder.role);
    }

    builder.finish()
}

/// Scrapes role pages.
#[derive(Debug, Clone, Copy)]
pub struct RolesService<'a> {
    scraper: &'a Scraper,
}

impl<'a> RolesService<'a> {
    pub(crate) fn new(scraper: &'a Scraper) -> Self {
        Self { scraper }
    }

    /// Retrieves a role by its ID.
    ///
    /// Scraped page: `{site_url}/role/{id}`. Dropping the returned future
    /// aborts the fetch.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Transport`] if the page could not be fetched, or
    /// the error announced by the page's error banner.
    pub async fn get_role(&self, id: u32) -> Result<Role, ScrapeError> {
        let request = PageRequest::role(self.scraper.site_url(), id);
        let body = fetch_page(self.scraper.client(), request.url()).await?;

        let result = parse_role_page(&body, &request);
        match &result {
            Ok(role) => log::debug!(
                "Scraped role {} ({:?}, {} aliases)",
                role.id,
                role.name,
                role.aliases.len()
            ),
            Err(e) => log::warn!("Role {} page reports: {}", id, e),
        }
        result
    }

    /// Like [`get_role`](Self::get_role), abandoning the request when `cancel` fires.
    ///
    /// # Returns
    ///
    /// `None` if cancelled before the page was fetched and parsed; no partial
    /// record is ever returned.
    pub async fn get_role_with_cancel(
        &self,
        id: u32,
        cancel: &CancellationToken,
    ) -> Option<Result<Role, ScrapeError>> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                log::info!("Role {} request cancelled", id);
                None
            }
            result = self.get_role(id) => Some(result),
        }
    }
}
