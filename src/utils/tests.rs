// Utils module tests.

use scraper::Html;
use url::Url;

use super::*;

fn base() -> Url {
    normalize_site_url("https://vgmdb.net").unwrap()
}

#[test]
fn test_normalize_site_url_strips_trailing_slash() {
    let url = normalize_site_url("https://vgmdb.net/").unwrap();
    assert_eq!(site_path_url(&url, "/role/1"), "https://vgmdb.net/role/1");

    let mirror = normalize_site_url("http://mirror.local/vgmdb/").unwrap();
    assert_eq!(site_path_url(&mirror, "/role/1"), "http://mirror.local/vgmdb/role/1");

    assert!(normalize_site_url("not a url").is_err());
}

#[test]
fn test_normalize_api_url_adds_trailing_slash() {
    let url = normalize_api_url("http://localhost:9990/api").unwrap();
    assert_eq!(url.as_str(), "http://localhost:9990/api/");
    assert_eq!(url.join("album/1").unwrap().as_str(), "http://localhost:9990/api/album/1");
}

#[test]
fn test_resolve_href_relative_and_absolute() {
    let base = base();
    assert_eq!(
        resolve_href(&base, "/role/12?alias=3").unwrap().as_str(),
        "https://vgmdb.net/role/12?alias=3"
    );
    assert_eq!(
        resolve_href(&base, "https://media.vgm.io/x.jpg").unwrap().as_str(),
        "https://media.vgm.io/x.jpg"
    );

    let mirror = normalize_site_url("http://mirror.local/vgmdb").unwrap();
    assert_eq!(
        resolve_href(&mirror, "/forums/member.php?u=9").unwrap().as_str(),
        "http://mirror.local/vgmdb/forums/member.php?u=9"
    );
}

#[test]
fn test_query_param_u32() {
    let url = Url::parse("https://vgmdb.net/role/12?alias=3").unwrap();
    assert_eq!(query_param_u32(&url, "alias"), Some(3));
    assert_eq!(query_param_u32(&url, "u"), None);

    let url = Url::parse("https://vgmdb.net/role/12?alias=abc").unwrap();
    assert_eq!(query_param_u32(&url, "alias"), None);

    let url = Url::parse("https://vgmdb.net/forums/member.php?u=-4").unwrap();
    assert_eq!(query_param_u32(&url, "u"), None);
}

#[test]
fn test_parse_selector_with_fallback_matches_nothing_on_error() {
    let document = Html::parse_document("<div><a>x</a></div>");
    let selector = parse_selector_with_fallback("a[href=", "test");
    assert_eq!(document.select(&selector).count(), 0);
}

#[test]
#[should_panic(expected = "programming error")]
fn test_parse_selector_unsafe_panics_on_error() {
    parse_selector_unsafe(":::", "test");
}

#[test]
fn test_child_text_and_attr() {
    let document = Html::parse_document(
        r#"<div id="c"><a href="/one"> First </a><a href="/two">Second</a></div>"#,
    );
    let root = document.root_element();
    let anchor = parse_selector_unsafe("a", "test");
    assert_eq!(child_text(root, &anchor).as_deref(), Some("First"));
    assert_eq!(child_attr(root, &anchor, "href"), Some("/one"));
    assert_eq!(child_attr(root, &anchor, "title"), None);

    let missing = parse_selector_unsafe("span", "test");
    assert_eq!(child_text(root, &missing), None);
}
