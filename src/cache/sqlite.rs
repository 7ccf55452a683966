//! SQLite cache implementation
//!
//! This module provides a SQLite-based implementation of the ResponseCache trait.

use crate::cache::schema::initialize_schema;
use crate::cache::traits::{CacheError, CacheResult, ResponseCache};
use crate::cache::CachedResponse;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite response cache backend
pub struct SqliteCache {
    conn: Connection,
}

impl SqliteCache {
    /// Opens or creates a cache database at `path`
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteCache)` - Successfully opened/created database
    /// * `Err(CacheError)` - Failed to open database
    pub fn new(path: &Path) -> CacheResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory cache that disappears when dropped
    pub fn new_in_memory() -> CacheResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }
}

impl ResponseCache for SqliteCache {
    fn get(&self, key: &str) -> CacheResult<Option<CachedResponse>> {
        let row = self
            .conn
            .query_row(
                "SELECT url, status, content_type, declared_encoding, body, fetched_at
                 FROM responses WHERE cache_key = ?1",
                params![key],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, u16>(1)?,
                        row.get::<_, Option<String>>(2)?,
                        row.get::<_, Option<String>>(3)?,
                        row.get::<_, Vec<u8>>(4)?,
                        row.get::<_, String>(5)?,
                    ))
                },
            )
            .optional()?;

        let Some((url, status, content_type, declared_encoding, body, fetched_at)) = row else {
            return Ok(None);
        };

        let fetched_at = fetched_at
            .parse::<DateTime<Utc>>()
            .map_err(|e| CacheError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Some(CachedResponse {
            url,
            status,
            content_type,
            declared_encoding,
            body,
            fetched_at,
        }))
    }

    fn put(&mut self, key: &str, response: &CachedResponse) -> CacheResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO responses
             (cache_key, url, status, content_type, declared_encoding, body, fetched_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                key,
                response.url,
                response.status,
                response.content_type,
                response.declared_encoding,
                response.body,
                response.fetched_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    fn clear(&mut self) -> CacheResult<()> {
        self.conn.execute("DELETE FROM responses", [])?;
        Ok(())
    }

    fn len(&self) -> CacheResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM responses", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
