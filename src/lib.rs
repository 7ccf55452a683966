//! pydocs-scraper: a Python documentation scraper
//!
//! This crate fetches pages from docs.python.org and peps.python.org through a
//! cached HTTP session, extracts tabular facts from them (what's-new articles,
//! version statuses, the documentation archive, PEP status counts) and renders
//! the resulting tables.

pub mod cache;
pub mod config;
pub mod logging;
pub mod modes;
pub mod output;
pub mod progress;
pub mod runner;
pub mod session;
pub mod status;
pub mod url;

use thiserror::Error;

/// Main error type for scraper operations
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Page {url} is unavailable: {cause}")]
    PageUnavailable { url: String, cause: FetchFailure },

    #[error("Tag not found: <{tag}> {attrs}")]
    TagNotFound { tag: String, attrs: String },

    #[error("Attribute `{attr}` missing on <{tag}>")]
    MissingAttribute { tag: String, attr: String },

    #[error("Required section missing: {0}")]
    RequiredSectionMissing(String),

    #[error("No status field found on {url}")]
    StatusNotFound { url: String },

    #[error("Row has {found} columns, header has {expected}")]
    RowArity { expected: usize, found: usize },

    #[error("Cache error: {0}")]
    Cache(#[from] cache::CacheError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a page could not be fetched
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// Network-level failure (DNS, connection, TLS, body read)
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with something other than 200 OK
    #[error("unexpected status {0}")]
    Status(u16),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Cannot resolve `{href}` against {base}: {reason}")]
    Resolve {
        base: String,
        href: String,
        reason: String,
    },

    #[error("URL has no file name: {0}")]
    NoFileName(String),
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScraperError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use modes::Mode;
pub use output::{OutputMode, ResultTable};
pub use session::{Document, FetchResult, Session};
