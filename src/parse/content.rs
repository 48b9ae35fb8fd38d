//! Main content extraction (`#innermain`).
//!
//! Reads the role name, its aliases, the picture block and the notes.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::config::{ALIAS_QUERY_PARAM, FULL_MEDIA_PREFIX, NO_NOTES_PLACEHOLDER, THUMB_MEDIA_PREFIX};
use crate::models::{ImageInfo, Role, RoleAlias};
use crate::parse::formats::parse_caption;
use crate::scrape::PageRequest;
use crate::utils::{
    child_attr, child_text, element_text, parse_selector_unsafe, parse_selector_with_fallback,
    query_param_u32, resolve_href,
};

static MAIN_CONTENT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("#innermain", "main content"));

static THUMB_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(
        &format!(r#"#leftfloat img[src^="{THUMB_MEDIA_PREFIX}"]"#),
        "thumbnail image",
    )
});

static FULL_IMAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(
        &format!(r#"#leftfloat a[href^="{FULL_MEDIA_PREFIX}"]"#),
        "full image link",
    )
});

static CAPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe("#leftfloat div.highslide-caption", "image caption")
});

static NOTES_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(
        r##"#rightfloat > div[style="background-color: #2F364F;"] > div.smallfont"##,
        "notes block",
    )
});

/// Returns the main content region of a page (first `#innermain`).
pub fn find_main_content(document: &Html) -> Option<ElementRef<'_>> {
    document.select(&MAIN_CONTENT_SELECTOR).next()
}

/// Fills `role` from the main content region.
///
/// Elements missing from the page leave their fields at the values `role`
/// already holds; nothing here fails.
pub fn extract_main_content(main: ElementRef<'_>, request: &PageRequest, role: &mut Role) {
    if let Some(name) = extract_name(main, request) {
        role.name = name;
    }

    role.aliases.extend(extract_aliases(main, request));
    log::debug!("Extracted {} aliases for {}", role.aliases.len(), request.path());

    if let Some(image) = extract_image(main) {
        role.image = Some(image);
    }

    role.notes = extract_notes(main);
}

/// Text of the anchor linking to `{path}?alias=0`.
fn extract_name(main: ElementRef<'_>, request: &PageRequest) -> Option<String> {
    let selector = parse_selector_with_fallback(
        &format!(r#"a[href="{}?{ALIAS_QUERY_PARAM}=0"]"#, request.path()),
        "role name",
    );
    let name = child_text(main, &selector);
    if name.is_none() {
        log::debug!("No name link found for {}", request.path());
    }
    name
}

/// Every alias link of the left column, in document order.
fn extract_aliases(main: ElementRef<'_>, request: &PageRequest) -> Vec<RoleAlias> {
    let selector = parse_selector_with_fallback(
        &format!(r#"#leftfloat a[href^="{}?{ALIAS_QUERY_PARAM}="]"#, request.path()),
        "role aliases",
    );

    main.select(&selector)
        .map(|anchor| {
            let url = anchor
                .value()
                .attr("href")
                .and_then(|href| resolve_href(request.base(), href));
            RoleAlias {
                id: url
                    .as_ref()
                    .and_then(|url| query_param_u32(url, ALIAS_QUERY_PARAM)),
                name: anchor.text().collect(),
                url: url.map(String::from).unwrap_or_default(),
            }
        })
        .collect()
}

/// The picture block, present only when a thumbnail from the media host is shown.
fn extract_image(main: ElementRef<'_>) -> Option<ImageInfo> {
    let thumb_url = child_attr(main, &THUMB_SELECTOR, "src")?;

    let mut image = ImageInfo {
        thumb_url: thumb_url.to_string(),
        full_url: child_attr(main, &FULL_IMAGE_SELECTOR, "href")
            .unwrap_or_default()
            .to_string(),
        ..Default::default()
    };

    if let Some(caption) = child_text(main, &CAPTION_SELECTOR).filter(|c| !c.is_empty()) {
        let submission = parse_caption(&caption);
        image.submitted_by = submission.submitted_by;
        image.submitted_at = submission.submitted_at;
    }

    Some(image)
}

/// Notes text, unless the block is missing or shows the "no notes" placeholder.
fn extract_notes(main: ElementRef<'_>) -> Option<String> {
    let notes = main.select(&NOTES_SELECTOR).next().map(element_text)?;
    if notes == NO_NOTES_PLACEHOLDER {
        None
    } else {
        Some(notes)
    }
}
