//! URL helpers: base URL normalization, link resolution and query parameters.

use url::Url;

use crate::error_handling::InitializationError;

/// Parses the website base URL, dropping any trailing slash.
///
/// Page paths (`/role/{id}`) are appended verbatim, so
/// `https://vgmdb.net/` and `https://vgmdb.net` yield the same base.
pub fn normalize_site_url(site_url: &str) -> Result<Url, InitializationError> {
    let trimmed = site_url.trim().trim_end_matches('/');
    Url::parse(trimmed).map_err(|source| InitializationError::BaseUrlError {
        url: site_url.to_string(),
        source,
    })
}

/// Parses the JSON API base URL, making sure it ends with a slash.
///
/// Relative API paths (`album/1`) are resolved against it, and `Url::join`
/// would otherwise replace the last path segment of a base like
/// `http://host/api`.
pub fn normalize_api_url(api_url: &str) -> Result<Url, InitializationError> {
    let mut owned = api_url.trim().to_string();
    if !owned.ends_with('/') {
        owned.push('/');
    }
    Url::parse(&owned).map_err(|source| InitializationError::BaseUrlError {
        url: api_url.to_string(),
        source,
    })
}

/// Absolute URL of a root-relative site path (`/role/1`).
///
/// The path is appended to the base, so a mirror mounted under a path
/// prefix (`http://mirror/vgmdb`) keeps its prefix.
pub fn site_path_url(base: &Url, path: &str) -> String {
    format!("{}{}", base.as_str().trim_end_matches('/'), path)
}

/// Resolves a link target found in a page against the website base.
///
/// Root-relative hrefs (`/role/1?alias=2`) are appended to the base like
/// [`site_path_url`], anything else is joined per RFC 3986 (absolute hrefs
/// are kept as they are). Returns `None` for an href that cannot be resolved.
pub fn resolve_href(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.starts_with('/') && !href.starts_with("//") {
        return Url::parse(&site_path_url(base, href)).ok();
    }
    base.join(href).ok()
}

/// Integer value of query parameter `key`, or `None` when it is missing or
/// not a non-negative integer.
pub fn query_param_u32(url: &Url, key: &str) -> Option<u32> {
    url.query_pairs()
        .find(|(name, _)| name == key)
        .and_then(|(_, value)| value.trim().parse().ok())
}
