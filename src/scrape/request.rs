//! Page requests.

use url::Url;

use crate::utils::site_path_url;

/// One page to scrape: an identifier and the canonical location derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    id: u32,
    path: String,
    url: String,
    base: Url,
}

impl PageRequest {
    /// Request for the role page `/role/{id}` on the site at `base`.
    pub fn role(base: &Url, id: u32) -> Self {
        let path = format!("/role/{id}");
        Self {
            id,
            url: site_path_url(base, &path),
            path,
            base: base.clone(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Root-relative canonical path, e.g. `/role/42`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Absolute canonical URL, e.g. `https://vgmdb.net/role/42`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Site base that relative links on the page resolve against.
    pub fn base(&self) -> &Url {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::normalize_site_url;

    #[test]
    fn test_role_request_paths() {
        let base = normalize_site_url("https://vgmdb.net").unwrap();
        let request = PageRequest::role(&base, 42);
        assert_eq!(request.id(), 42);
        assert_eq!(request.path(), "/role/42");
        assert_eq!(request.url(), "https://vgmdb.net/role/42");
    }

    #[test]
    fn test_role_request_keeps_mirror_prefix() {
        let base = normalize_site_url("http://127.0.0.1:8080/mirror/").unwrap();
        let request = PageRequest::role(&base, 0);
        assert_eq!(request.url(), "http://127.0.0.1:8080/mirror/role/0");
    }
}
