//! Records scraped from VGMdb pages.
//!
//! All types serialize with camelCase field names. Optional fields are always
//! written (as `null` when unset) so consumers can tell an absent value from an
//! empty one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A role entry (`/role/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Identifier the page was requested with
    pub id: u32,
    /// Primary name; empty when the page has no name link
    pub name: String,
    /// Alternate names, in document order
    pub aliases: Vec<RoleAlias>,
    /// Free-text notes; unset when the page shows the "no notes" placeholder
    pub notes: Option<String>,
    pub image: Option<ImageInfo>,
    pub meta: Option<PageMeta>,
    /// Canonical absolute URL of the page
    pub url: String,
}

/// An alternate name of a role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAlias {
    /// Value of the link's `alias` query parameter, unset when not an integer
    pub id: Option<u32>,
    pub name: String,
    pub url: String,
}

/// Picture attached to a page, with its submission caption.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInfo {
    pub thumb_url: String,
    /// Link to the full-size picture; empty when the page has none
    pub full_url: String,
    pub submitted_by: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
}

/// The "Added by / Edited by / Page built in" sidebar block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub added_by: Option<UserRef>,
    pub added_at: Option<DateTime<Utc>>,
    pub edited_by: Option<UserRef>,
    pub edited_at: Option<DateTime<Utc>>,
    /// Raw render-duration text, e.g. "0.12 seconds"
    pub page_built_in: Option<String>,
}

/// A link to a forum member profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    /// Value of the profile link's `u` query parameter, unset when not an integer
    pub id: Option<u32>,
    pub username: String,
    pub url: String,
}
