//! HTML page parsing and record extraction.
//!
//! This module turns a fetched VGMdb page into record fields:
//! - Error banner classification (unauthorized, not found, unknown)
//! - Main content: name, aliases, picture, notes
//! - Sidebar: added/edited by, page render time
//! - Micro-formats: page timestamps, image captions, member links
//!
//! All parsing is done using CSS selectors via the `scraper` crate. Extraction
//! never fails: anything the markup does not provide is left unset.

mod classify;
mod content;
mod formats;
mod sidebar;

// Re-export public API
pub use classify::{classify_banner_text, classify_error_banner, find_error_banner};
pub use content::{extract_main_content, find_main_content};
pub use formats::{parse_caption, parse_page_timestamp, parse_user_ref, Submission};
pub use sidebar::{extract_sidebar_meta, find_sidebar, split_row_text};
