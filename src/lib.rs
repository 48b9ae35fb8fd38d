//! vgmdb library: VGMdb API client and web scraper
//!
//! VGMdb exposes most entries (albums, products) through a JSON API, while some
//! information (roles) is only available as HTML pages. This library provides
//! both: a small [`api::Client`] for the JSON API and a [`Scraper`] that turns
//! website pages into typed records.
//!
//! # Example
//!
//! ```no_run
//! use vgmdb::{Config, ErrorKind, Scraper};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     auth_cookie: std::env::var("AUTH_COOKIE").ok(),
//!     ..Default::default()
//! };
//! let scraper = Scraper::new(&config)?;
//!
//! match scraper.roles().get_role(42).await {
//!     Ok(role) => println!("{} has {} aliases", role.name, role.aliases.len()),
//!     Err(e) if e.kind() == ErrorKind::Unauthorized => eprintln!("log in first: {e}"),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod api;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;
pub mod parse;
pub mod scrape;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ApiError, ErrorKind, ErrorResponse, InitializationError, ScrapeError};
pub use models::{ImageInfo, PageMeta, Role, RoleAlias, UserRef};
pub use scrape::{parse_role_page, PageRequest, RolesService, Scraper};
