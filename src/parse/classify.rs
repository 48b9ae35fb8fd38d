//! Error page classification.
//!
//! VGMdb answers requests for restricted or missing entries with a normal
//! `200 OK` page carrying an error banner: a borderless layout table that
//! contains the banner-error image. The banner text tells the cases apart.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::config::{ERROR_BANNER_IMAGE, NOT_FOUND_BANNER_TEXT, UNAUTHORIZED_BANNER_TEXT};
use crate::error_handling::ScrapeError;
use crate::utils::{element_text, parse_selector_unsafe};

static LAYOUT_TABLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(
        r#"table[cellpadding="0"][cellspacing="0"]"#,
        "error banner table",
    )
});

static BANNER_IMAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(
        &format!(r#"img[src="{ERROR_BANNER_IMAGE}"]"#),
        "error banner image",
    )
});

/// Finds the error banner table of a page, if any.
///
/// When layout tables are nested, the innermost one holding the banner image
/// (the last match in document order) is the banner.
pub fn find_error_banner(document: &Html) -> Option<ElementRef<'_>> {
    document
        .select(&LAYOUT_TABLE_SELECTOR)
        .filter(|table| table.select(&BANNER_IMAGE_SELECTOR).next().is_some())
        .last()
}

/// Maps the trimmed text of an error banner to the error it announces.
///
/// Known phrases are checked in a fixed order (unauthorized, then not found);
/// any other banner is [`ScrapeError::Unknown`].
pub fn classify_banner_text(text: &str) -> ScrapeError {
    if text.contains(UNAUTHORIZED_BANNER_TEXT) {
        ScrapeError::Unauthorized
    } else if text.contains(NOT_FOUND_BANNER_TEXT) {
        ScrapeError::NotFound
    } else {
        ScrapeError::Unknown
    }
}

/// Classifies a page by its error banner.
///
/// # Returns
///
/// `None` when the page has no error banner, otherwise the announced error.
pub fn classify_error_banner(document: &Html) -> Option<ScrapeError> {
    let banner = find_error_banner(document)?;
    let text = element_text(banner);
    let error = classify_banner_text(&text);
    log::debug!("Error banner found ({}): '{}'", error.kind(), text);
    Some(error)
}
