//! HTTP fetcher implementation
//!
//! This module handles all network requests for the scraper, including:
//! - Building HTTP clients with proper user agent strings
//! - GET requests for pages and binary payloads
//! - Mapping transport failures and non-200 answers to `PageUnavailable`

use crate::cache::CachedResponse;
use crate::config::{HttpConfig, UserAgentConfig};
use crate::{FetchFailure, ScraperError};
use chrono::Utc;
use encoding_rs::{Encoding, UTF_8};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// A successfully fetched response
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// The URL that was requested
    pub url: Url,
    /// HTTP status code (always 200 for results handed to callers)
    pub status: u16,
    /// Content-Type header value
    pub content_type: Option<String>,
    /// Charset declared by the server, if any
    pub declared_encoding: Option<String>,
    /// Raw response body
    pub body: Vec<u8>,
    /// Whether the response came from the cache
    pub from_cache: bool,
}

impl FetchResult {
    /// Decodes the body using `charset` instead of whatever the server declared
    ///
    /// Unknown labels fall back to UTF-8; malformed sequences are replaced.
    pub fn text(&self, charset: &str) -> String {
        let encoding = Encoding::for_label(charset.as_bytes()).unwrap_or(UTF_8);
        let (text, _, _) = encoding.decode(&self.body);
        text.into_owned()
    }

    /// Rebuilds a fetch result from a cache entry
    pub fn from_cached(url: Url, cached: CachedResponse) -> Self {
        Self {
            url,
            status: cached.status,
            content_type: cached.content_type,
            declared_encoding: cached.declared_encoding,
            body: cached.body,
            from_cache: true,
        }
    }

    /// Converts the result into a cache entry stamped with the current time
    pub fn to_cached(&self) -> CachedResponse {
        CachedResponse {
            url: self.url.to_string(),
            status: self.status,
            content_type: self.content_type.clone(),
            declared_encoding: self.declared_encoding.clone(),
            body: self.body.clone(),
            fetched_at: Utc::now(),
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `http` - Timeouts for the transport
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use pydocs_scraper::config::{HttpConfig, UserAgentConfig};
/// use pydocs_scraper::session::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), &HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    http: &HttpConfig,
) -> Result<Client, reqwest::Error> {
    // Format: Name/Version (+ContactURL)
    let user_agent = format!(
        "{}/{} (+{})",
        user_agent.crawler_name, user_agent.crawler_version, user_agent.contact_url
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(http.timeout_secs))
        .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL over the network, bypassing any cache
///
/// # Error Mapping
///
/// | Condition | Result |
/// |-----------|--------|
/// | Connection refused, DNS, TLS, timeout | `PageUnavailable` / `Transport` |
/// | Status other than 200 | `PageUnavailable` / `Status(code)` |
/// | Body read interrupted | `PageUnavailable` / `Transport` |
pub async fn fetch_url(client: &Client, url: &Url) -> Result<FetchResult, ScraperError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| unavailable(url, FetchFailure::Transport(e)))?;

    let status = response.status();
    tracing::debug!("GET {} -> {}", url, status);

    if status != StatusCode::OK {
        return Err(unavailable(url, FetchFailure::Status(status.as_u16())));
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let declared_encoding = content_type.as_deref().and_then(charset_from_content_type);

    let body = response
        .bytes()
        .await
        .map_err(|e| unavailable(url, FetchFailure::Transport(e)))?
        .to_vec();

    Ok(FetchResult {
        url: url.clone(),
        status: status.as_u16(),
        content_type,
        declared_encoding,
        body,
        from_cache: false,
    })
}

fn unavailable(url: &Url, cause: FetchFailure) -> ScraperError {
    ScraperError::PageUnavailable {
        url: url.to_string(),
        cause,
    }
}

/// Extracts the `charset` parameter from a Content-Type header value
fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if name.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches('"').to_ascii_lowercase())
        } else {
            None
        }
    })
}
