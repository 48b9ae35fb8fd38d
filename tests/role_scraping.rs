//! Integration tests for role page scraping against a mock website.
//!
//! These tests verify the full fetch, classify and extract path:
//! - Successful pages produce complete records
//! - Error banners map to their error kinds
//! - Failed fetches surface as transport errors
//! - The configured cookie reaches the website

use vgmdb::{Config, ErrorKind, LogFormat, LogLevel, ScrapeError, Scraper};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper function to create a Config pointing at the mock server
fn create_test_config(site_url: &str, auth_cookie: Option<&str>) -> Config {
    Config {
        site_url: site_url.to_string(),
        auth_cookie: auth_cookie.map(str::to_string),
        timeout_seconds: 5,
        user_agent: "vgmdb_test/1.0".to_string(),
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
        ..Default::default()
    }
}

fn role_page(id: u32, name: &str) -> String {
    format!(
        r##"<html><body>
        <div id="innermain">
            <h1><a href="/role/{id}?alias=0">{name}</a></h1>
            <div id="leftfloat">
                <a href="https://media.vgm.io/roles/{id}.jpg"><img src="https://thumb-media.vgm.io/roles/{id}.jpg"></a>
                <div class="highslide-caption">Submitted by Jane Doe on Jan 2, 2006 03:04 PM</div>
                <a href="/role/{id}?alias=1">{name} (alt)</a>
            </div>
            <div id="rightfloat">
                <div style="background-color: #2F364F;"><div class="smallfont">No notes available.</div></div>
            </div>
        </div>
        <div id="rightcolumn"><div class="smallfont"><div style="padding: 6px 10px 6px 10px">
            <div><b>Added by <a href="/forums/member.php?u=7">jane</a></b>
Jan 2, 2006 03:04 PM</div>
        </div></div></div>
        </body></html>"##
    )
}

fn error_page(text: &str) -> String {
    format!(
        r#"<html><body><table cellpadding="0" cellspacing="0"><tr>
            <td><img src="/db/img/banner-error.gif"></td><td>{text}</td>
        </tr></table></body></html>"#
    )
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8")
}

#[tokio::test]
async fn test_get_role_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/role/42"))
        .respond_with(html(role_page(42, "Sound Team")))
        .expect(1)
        .mount(&server)
        .await;

    let scraper = Scraper::new(&create_test_config(&server.uri(), None)).unwrap();
    let role = scraper.roles().get_role(42).await.unwrap();

    assert_eq!(role.id, 42);
    assert_eq!(role.url, format!("{}/role/42", server.uri()));
    assert_eq!(role.name, "Sound Team");
    assert_eq!(role.aliases.len(), 1);
    assert_eq!(role.aliases[0].id, Some(1));
    assert!(role.notes.is_none());
    assert_eq!(
        role.image.as_ref().unwrap().submitted_by.as_deref(),
        Some("Jane Doe")
    );

    let added_by = role.meta.unwrap().added_by.unwrap();
    assert_eq!(added_by.id, Some(7));
    assert_eq!(added_by.url, format!("{}/forums/member.php?u=7", server.uri()));
}

#[tokio::test]
async fn test_get_role_serializes_with_camel_case() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/role/42"))
        .respond_with(html(role_page(42, "Sound Team")))
        .mount(&server)
        .await;

    let scraper = Scraper::new(&create_test_config(&server.uri(), None)).unwrap();
    let role = scraper.roles().get_role(42).await.unwrap();
    let json = serde_json::to_value(&role).unwrap();

    assert_eq!(json["image"]["submittedAt"], "2006-01-02T15:04:00Z");
    assert_eq!(json["meta"]["addedBy"]["username"], "jane");
    assert!(json["notes"].is_null());
    assert!(json["meta"]["editedBy"].is_null());
}

#[tokio::test]
async fn test_get_role_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/role/7"))
        .respond_with(html(error_page(
            "Only registered members can view role information.",
        )))
        .mount(&server)
        .await;

    let scraper = Scraper::new(&create_test_config(&server.uri(), None)).unwrap();
    let err = scraper.roles().get_role(7).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert_eq!(
        err.to_string(),
        "Only registered members can view role information."
    );
}

#[tokio::test]
async fn test_get_role_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/role/999999"))
        .respond_with(html(error_page("Role not found!")))
        .mount(&server)
        .await;

    let scraper = Scraper::new(&create_test_config(&server.uri(), None)).unwrap();
    let err = scraper.roles().get_role(999_999).await.unwrap_err();
    assert!(matches!(err, ScrapeError::NotFound));
}

#[tokio::test]
async fn test_get_role_unknown_banner() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/role/3"))
        .respond_with(html(error_page("Database maintenance in progress")))
        .mount(&server)
        .await;

    let scraper = Scraper::new(&create_test_config(&server.uri(), None)).unwrap();
    let err = scraper.roles().get_role(3).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unknown);
    assert_eq!(err.to_string(), "An error has occurred!");
}

#[tokio::test]
async fn test_get_role_server_error_is_transport() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/role/42"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let scraper = Scraper::new(&create_test_config(&server.uri(), None)).unwrap();
    let err = scraper.roles().get_role(42).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.to_string().starts_with("unable to visit role page"));
}

#[tokio::test]
async fn test_get_role_unreachable_host_is_transport() {
    // Nothing listens on port 9 of the loopback interface
    let scraper = Scraper::new(&create_test_config("http://127.0.0.1:9", None)).unwrap();
    let err = scraper.roles().get_role(1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_get_role_sends_cookie_and_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/role/42"))
        .and(header("cookie", "bbsessionhash=abc123"))
        .and(header("user-agent", "vgmdb_test/1.0"))
        .respond_with(html(role_page(42, "Sound Team")))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&server.uri(), Some("bbsessionhash=abc123"));
    let scraper = Scraper::new(&config).unwrap();
    let role = scraper.roles().get_role(42).await.unwrap();
    assert_eq!(role.name, "Sound Team");
}

#[tokio::test]
async fn test_get_role_under_site_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mirror/role/42"))
        .respond_with(html(role_page(42, "Sound Team")))
        .expect(1)
        .mount(&server)
        .await;

    let site_url = format!("{}/mirror/", server.uri());
    let scraper = Scraper::new(&create_test_config(&site_url, None)).unwrap();
    let role = scraper.roles().get_role(42).await.unwrap();
    assert_eq!(role.url, format!("{}/mirror/role/42", server.uri()));
}
