//! Shared helpers for page extraction.
//!
//! This module provides:
//! - CSS selector compilation and element text/attribute accessors
//! - Base URL normalization, link resolution and query parameter parsing

mod links;
mod selector;

pub use links::{
    normalize_api_url, normalize_site_url, query_param_u32, resolve_href, site_path_url,
};
pub use selector::{
    child_attr, child_text, element_text, parse_selector_unsafe, parse_selector_with_fallback,
};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
