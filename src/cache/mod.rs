//! Persistent HTTP response cache
//!
//! This module stores successful responses so that repeated runs do not hit
//! the documentation sites again:
//! - SQLite-backed storage with an in-memory variant for tests
//! - Request keys derived from the normalized URL
//! - Optional expiry of old entries

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteCache;
pub use traits::{CacheError, CacheResult, ResponseCache};

use crate::url::normalize_url;
use crate::UrlResult;
use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use std::path::Path;

/// A response as stored in the cache
#[derive(Debug, Clone, PartialEq)]
pub struct CachedResponse {
    /// The URL that was requested
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Content-Type header value
    pub content_type: Option<String>,
    /// Charset declared in the Content-Type header, if any
    pub declared_encoding: Option<String>,
    /// Raw response body
    pub body: Vec<u8>,
    /// When the response was fetched from the network
    pub fetched_at: DateTime<Utc>,
}

impl CachedResponse {
    /// Checks whether the entry is older than `max_age` at `now`
    ///
    /// Entries never expire when `max_age` is `None`.
    pub fn is_expired(&self, max_age: Option<Duration>, now: DateTime<Utc>) -> bool {
        match max_age {
            Some(max_age) => now - self.fetched_at > max_age,
            None => false,
        }
    }
}

/// Builds the cache key for a GET request
///
/// Equivalent URLs (differing only in fragment, query order, host case or
/// default port) share a key.
///
/// # Examples
///
/// ```
/// use pydocs_scraper::cache::cache_key;
///
/// let a = cache_key("https://PEPS.python.org/pep-0008/#intro").unwrap();
/// let b = cache_key("https://peps.python.org/pep-0008/").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 64);
/// ```
pub fn cache_key(url: &str) -> UrlResult<String> {
    let normalized = normalize_url(url)?;
    let mut hasher = Sha256::new();
    hasher.update(b"GET ");
    hasher.update(normalized.as_str().as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// Opens (or creates) the on-disk cache
///
/// Parent directories of `path` are created when missing.
pub fn open_cache(path: &Path) -> CacheResult<SqliteCache> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    SqliteCache::new(path)
}
