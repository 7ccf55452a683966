//! Cache-aware HTTP session and page parsing
//!
//! This module contains the fetch/parse layer every extractor goes through:
//! - HTTP fetching with uniform `PageUnavailable` errors
//! - A persistent response cache consulted before the network
//! - HTML parsing with tag-and-attribute lookups

mod document;
mod fetcher;

pub use document::{attr, find, find_all, find_child, text, Document, TagQuery};
pub use fetcher::{build_http_client, fetch_url, FetchResult};

use crate::cache::{cache_key, open_cache, ResponseCache};
use crate::config::Config;
use crate::Result;
use chrono::{Duration, Utc};
use reqwest::Client;
use std::path::Path;
use url::Url;

/// HTTP client plus response cache
///
/// The session owns the cache exclusively; extractors borrow the session
/// mutably for the duration of one run.
pub struct Session {
    client: Client,
    cache: Box<dyn ResponseCache + Send>,
    charset: String,
    max_age: Option<Duration>,
}

impl Session {
    /// Creates a session around an existing client and cache
    pub fn new(client: Client, cache: Box<dyn ResponseCache + Send>) -> Self {
        Self {
            client,
            cache,
            charset: "utf-8".to_string(),
            max_age: None,
        }
    }

    /// Builds the HTTP client and opens the on-disk cache described by `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = build_http_client(&config.user_agent, &config.http)?;
        let cache = open_cache(Path::new(&config.cache.path))?;

        let max_age = config.cache.expire_after_secs.and_then(max_age_from_secs);

        Ok(Self::new(client, Box::new(cache))
            .with_charset(config.http.charset.clone())
            .with_max_age(max_age))
    }

    /// Sets the character set used to decode pages
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Sets how long cache entries stay valid
    pub fn with_max_age(mut self, max_age: Option<Duration>) -> Self {
        self.max_age = max_age;
        self
    }

    /// Purges every cached response
    pub fn clear_cache(&mut self) -> Result<()> {
        self.cache.clear()?;
        tracing::info!("Response cache cleared");
        Ok(())
    }

    /// Number of responses currently cached
    pub fn cached_entries(&self) -> Result<u64> {
        Ok(self.cache.len()?)
    }

    /// Fetches a URL, answering from the cache when possible
    ///
    /// Only 200 responses are stored. Any other outcome surfaces as
    /// `ScraperError::PageUnavailable`.
    pub async fn fetch(&mut self, url: &Url) -> Result<FetchResult> {
        let key = cache_key(url.as_str())?;

        if let Some(cached) = self.cache.get(&key)? {
            if !cached.is_expired(self.max_age, Utc::now()) {
                tracing::debug!("Cache hit for {}", url);
                return Ok(FetchResult::from_cached(url.clone(), cached));
            }
            tracing::debug!("Cache entry for {} expired", url);
        }

        let result = fetch_url(&self.client, url).await?;
        self.cache.put(&key, &result.to_cached())?;
        Ok(result)
    }

    /// Fetches a page and parses it as HTML
    pub async fn get_document(&mut self, url: &Url) -> Result<Document> {
        let page = self.fetch(url).await?;
        Ok(Document::parse(&page.text(&self.charset)))
    }
}

/// Entry lifetime for `expire-after-secs`
///
/// Values beyond what `chrono::Duration` can hold mean "never expire".
fn max_age_from_secs(secs: u64) -> Option<Duration> {
    i64::try_from(secs).ok().and_then(Duration::try_seconds)
}
