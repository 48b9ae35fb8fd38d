//! Micro-format parsers for the small text fragments found on VGMdb pages.
//!
//! Every parser here degrades instead of failing: a fragment that does not
//! match its expected shape yields `None` for the affected values.

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::config::{PAGE_DATE_FORMAT, USER_QUERY_PARAM};
use crate::models::UserRef;
use crate::utils::{element_text, parse_selector_unsafe, query_param_u32, resolve_href};

static CAPTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Submitted by (.+) on (.+)")
        .unwrap_or_else(|e| panic!("Invalid caption regex: {e}. This is a programming error."))
});

// chrono accepts `3:04 pm` for `%I:%M %p`; pages always render `03:04 PM`.
static TIMESTAMP_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{3} \d{1,2}, \d{4} \d{2}:\d{2} [AP]M$")
        .unwrap_or_else(|e| panic!("Invalid timestamp regex: {e}. This is a programming error."))
});

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a", "user reference anchor"));

/// Submission provenance read from an image caption.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub submitted_by: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Parses a page timestamp such as `Jan 2, 2006 03:04 PM`.
///
/// Pages render timestamps without a zone; they are read as UTC.
///
/// # Returns
///
/// The timestamp, or `None` if `text` does not follow the page date layout
/// (two-digit hour, uppercase `AM`/`PM`).
pub fn parse_page_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if !TIMESTAMP_SHAPE_REGEX.is_match(text) {
        log::debug!("Page timestamp '{}' does not match the page date layout", text);
        return None;
    }
    match NaiveDateTime::parse_from_str(text, PAGE_DATE_FORMAT) {
        Ok(naive) => Some(naive.and_utc()),
        Err(e) => {
            log::debug!("Unparsable page timestamp '{}': {}", text, e);
            None
        }
    }
}

/// Parses an image caption of the form `Submitted by {who} on {when}`.
///
/// `who` is kept verbatim; `when` goes through [`parse_page_timestamp`]. A
/// caption that does not match leaves both values unset.
pub fn parse_caption(caption: &str) -> Submission {
    let Some(captures) = CAPTION_REGEX.captures(caption) else {
        log::debug!("Caption does not name a submitter: '{}'", caption);
        return Submission::default();
    };

    Submission {
        submitted_by: captures.get(1).map(|m| m.as_str().to_string()),
        submitted_at: captures
            .get(2)
            .and_then(|m| parse_page_timestamp(m.as_str())),
    }
}

/// Reads the member linked from a sidebar row.
///
/// The username is the text of the row's first anchor and the URL is that
/// anchor's href resolved against `base`. The identifier comes from the
/// profile link's `u` query parameter.
///
/// # Returns
///
/// `None` if the row contains no anchor.
pub fn parse_user_ref(row: ElementRef<'_>, base: &Url) -> Option<UserRef> {
    let anchor = row.select(&ANCHOR_SELECTOR).next()?;
    let profile = anchor
        .value()
        .attr("href")
        .and_then(|href| resolve_href(base, href));

    Some(UserRef {
        id: profile
            .as_ref()
            .and_then(|url| query_param_u32(url, USER_QUERY_PARAM)),
        username: element_text(anchor),
        url: profile.map(String::from).unwrap_or_default(),
    })
}
