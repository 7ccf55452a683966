//! Cache traits and error types
//!
//! This module defines the trait interface for response cache backends and
//! associated error types.

use crate::cache::CachedResponse;
use thiserror::Error;

/// Errors that can occur during cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Corrupt cache entry for {key}: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Key-value store of HTTP responses keyed by request
///
/// Keys come from [`crate::cache::cache_key`]; the cache never interprets them.
pub trait ResponseCache {
    /// Looks up a stored response
    fn get(&self, key: &str) -> CacheResult<Option<CachedResponse>>;

    /// Stores a response, replacing any previous entry for the key
    fn put(&mut self, key: &str, response: &CachedResponse) -> CacheResult<()>;

    /// Purges every entry
    fn clear(&mut self) -> CacheResult<()>;

    /// Number of stored entries
    fn len(&self) -> CacheResult<u64>;
}
