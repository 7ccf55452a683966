//! URL handling module
//!
//! This module provides cache-key normalization, relative link resolution
//! and file-name extraction for downloaded payloads.

mod normalize;

use crate::{UrlError, UrlResult};
use url::Url;

pub use normalize::normalize_url;

/// Resolves an `href` found on `base` into an absolute URL
///
/// # Examples
///
/// ```
/// use pydocs_scraper::url::resolve_href;
/// use url::Url;
///
/// let base = Url::parse("https://docs.python.org/3/whatsnew/").unwrap();
/// let url = resolve_href(&base, "3.12.html").unwrap();
/// assert_eq!(url.as_str(), "https://docs.python.org/3/whatsnew/3.12.html");
/// ```
pub fn resolve_href(base: &Url, href: &str) -> UrlResult<Url> {
    base.join(href.trim()).map_err(|e| UrlError::Resolve {
        base: base.to_string(),
        href: href.to_string(),
        reason: e.to_string(),
    })
}

/// Returns the last non-empty path segment of a URL
///
/// # Examples
///
/// ```
/// use pydocs_scraper::url::file_name;
/// use url::Url;
///
/// let url = Url::parse("https://docs.python.org/3/archives/python-3.12-docs-pdf-a4.zip").unwrap();
/// assert_eq!(file_name(&url).unwrap(), "python-3.12-docs-pdf-a4.zip");
/// ```
pub fn file_name(url: &Url) -> UrlResult<String> {
    url.path_segments()
        .and_then(|segments| segments.last())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .ok_or_else(|| UrlError::NoFileName(url.to_string()))
}
