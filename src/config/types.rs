//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_API_URL, DEFAULT_SITE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// One `Config` is shared, read-only, by every operation of a
/// [`Scraper`](crate::Scraper) or [`Client`](crate::api::Client). It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use vgmdb::Config;
///
/// let config = Config {
///     site_url: "http://127.0.0.1:8080".to_string(),
///     auth_cookie: Some("bbsessionhash=abc".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the HTML website (pages are fetched from `{site_url}/role/{id}`)
    pub site_url: String,

    /// Base URL of the JSON API
    pub api_url: String,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Raw `Cookie` header sent with every page request (needed for member-only pages)
    pub auth_cookie: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            auth_cookie: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Scrape a role page (member-only pages need the forum session cookie)
/// AUTH_COOKIE='bbsessionhash=...' vgmdb role 42
///
/// # Query the JSON API
/// vgmdb album 79
/// vgmdb product 1 --api-url http://localhost:9990/
/// ```
#[derive(Debug, Parser)]
#[command(name = "vgmdb", about = "A VGMdb API client and web scraper.")]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Website base URL (HTML pages)
    #[arg(long, global = true, default_value = DEFAULT_SITE_URL)]
    pub site_url: String,

    /// JSON API base URL
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// HTTP User-Agent header value
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Cookie header sent with page requests
    #[arg(long, global = true, env = "AUTH_COOKIE", hide_env_values = true)]
    pub cookie: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,
}

/// Resources the CLI can fetch.
#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Get a role by its ID (scraped from the website)
    Role {
        /// Role ID
        id: u32,
    },
    /// Get an album by its ID (JSON API)
    Album {
        /// Album ID
        id: u32,
    },
    /// Get a product by its ID (JSON API)
    Product {
        /// Product ID
        id: u32,
    },
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Self {
            site_url: opt.site_url.clone(),
            api_url: opt.api_url.clone(),
            user_agent: opt.user_agent.clone(),
            // An empty AUTH_COOKIE in .env means "no cookie"
            auth_cookie: opt.cookie.clone().filter(|c| !c.trim().is_empty()),
            timeout_seconds: opt.timeout_seconds,
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
        }
    }
}
