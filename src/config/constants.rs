//! Configuration constants.
//!
//! This module defines the default endpoints, the request defaults, and the
//! fixed markers used when reading pages from the VGMdb website.

// Endpoints
/// Canonical host of the VGMdb website (HTML pages).
///
/// Page paths such as `/role/{id}` are appended directly to this value, so it
/// carries no trailing slash.
pub const DEFAULT_SITE_URL: &str = "https://vgmdb.net";

/// Public VGMdb JSON API.
///
/// Relative API paths are resolved against this value, so it always ends with
/// a trailing slash.
pub const DEFAULT_API_URL: &str = "https://vgmdb.info/";

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("vgmdb-rs/", env!("CARGO_PKG_VERSION"));

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Page markers
/// Layout of every timestamp rendered on VGMdb pages ("Jan 2, 2006 03:04 PM").
pub const PAGE_DATE_FORMAT: &str = "%b %d, %Y %I:%M %p";

/// Banner text of pages restricted to registered members.
pub const UNAUTHORIZED_BANNER_TEXT: &str = "Only registered members can view role information.";

/// Banner text of pages for identifiers that do not exist.
pub const NOT_FOUND_BANNER_TEXT: &str = "Role not found!";

/// Message for an error banner with any other text.
pub const UNKNOWN_BANNER_TEXT: &str = "An error has occurred!";

/// Image shown inside the error banner table.
pub const ERROR_BANNER_IMAGE: &str = "/db/img/banner-error.gif";

/// Host prefix of thumbnail images.
pub const THUMB_MEDIA_PREFIX: &str = "https://thumb-media.vgm.io";

/// Host prefix of full-size images.
pub const FULL_MEDIA_PREFIX: &str = "https://media.vgm.io";

/// Text rendered in the notes block when a page has no notes.
pub const NO_NOTES_PLACEHOLDER: &str = "No notes available.";

/// Query parameter carrying an alias identifier on role links.
pub const ALIAS_QUERY_PARAM: &str = "alias";

/// Query parameter carrying a member identifier on forum profile links.
pub const USER_QUERY_PARAM: &str = "u";

// JSON API
/// HTTP statuses the JSON API treats as success.
pub const API_SUCCESS_STATUSES: &[u16] = &[200, 201, 202, 204, 304];
