//! CSS selector parsing and element accessors.
//!
//! Extraction code is written against these few primitives: compile a
//! selector, then read the text or an attribute of the first match under an
//! element.

use scraper::{ElementRef, Selector};

/// Parses a CSS selector with a safe fallback.
///
/// Meant for selectors built at runtime (for example from a page path). If
/// parsing fails, logs an error and returns a selector that matches nothing
/// (`*:not(*)`), so the affected field is simply left unset.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error logging (e.g., "role name")
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' in {}: {}. Using fallback selector.",
            selector_str,
            context,
            e
        );
        parse_selector_unsafe("*:not(*)", "fallback selector")
    })
}

/// Parses a CSS selector that must succeed.
///
/// For the constant selectors behind the `LazyLock` statics in `parse`.
///
/// # Panics
///
/// Panics if the selector cannot be parsed (indicates a programming error).
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

/// Concatenated text of an element and its descendants, trimmed.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first descendant of `element` matching `selector`.
///
/// Returns `None` when nothing matches.
pub fn child_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(element_text)
}

/// Value of `attr` on the first descendant of `element` matching `selector`.
///
/// Returns `None` when nothing matches or the attribute is missing.
pub fn child_attr<'a>(element: ElementRef<'a>, selector: &Selector, attr: &str) -> Option<&'a str> {
    element
        .select(selector)
        .next()
        .and_then(|child| child.value().attr(attr))
}
