//! Sidebar metadata extraction (`#rightcolumn`).
//!
//! The sidebar lists who added and last edited the entry, and how long the
//! page took to render. Each row renders as two lines of text, a label and a
//! value:
//!
//! ```text
//! Added by <a href="/forums/member.php?u=7">jane</a>
//! Jan 2, 2006 03:04 PM
//! ```

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::models::{PageMeta, Role};
use crate::parse::formats::{parse_page_timestamp, parse_user_ref};
use crate::utils::{element_text, parse_selector_unsafe};

static SIDEBAR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("#rightcolumn", "sidebar"));

static META_ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(
        r#"div.smallfont > div[style="padding: 6px 10px 6px 10px"] > div"#,
        "sidebar rows",
    )
});

/// Returns the sidebar region of a page (first `#rightcolumn`).
pub fn find_sidebar(document: &Html) -> Option<ElementRef<'_>> {
    document.select(&SIDEBAR_SELECTOR).next()
}

/// Splits a row's text into its label and value lines.
///
/// Returns `None` unless the text is exactly two lines, both non-empty once trimmed.
pub fn split_row_text(text: &str) -> Option<(&str, &str)> {
    let mut lines = text.trim().split('\n');
    let label = lines.next()?.trim();
    let value = lines.next()?.trim();
    if lines.next().is_some() || label.is_empty() || value.is_empty() {
        return None;
    }
    Some((label, value))
}

/// Fills `role.meta` from the sidebar rows.
///
/// `meta` is created on the first recognized row; a sidebar without any
/// recognized row leaves it unset. Malformed and unknown rows are skipped.
pub fn extract_sidebar_meta(sidebar: ElementRef<'_>, base: &Url, role: &mut Role) {
    for row in sidebar.select(&META_ROW_SELECTOR) {
        let text = element_text(row);
        let Some((label, value)) = split_row_text(&text) else {
            log::debug!("Skipping malformed sidebar row: {:?}", text);
            continue;
        };

        if label.starts_with("Added by") {
            let meta = role.meta.get_or_insert_with(PageMeta::default);
            meta.added_by = parse_user_ref(row, base);
            meta.added_at = parse_page_timestamp(value);
        } else if label.starts_with("Edited by") {
            let meta = role.meta.get_or_insert_with(PageMeta::default);
            meta.edited_by = parse_user_ref(row, base);
            meta.edited_at = parse_page_timestamp(value);
        } else if label.starts_with("Page built in") {
            let meta = role.meta.get_or_insert_with(PageMeta::default);
            meta.page_built_in = Some(value.to_string());
        } else {
            log::debug!("Ignoring sidebar row '{}'", label);
        }
    }
}
