use crate::UrlError;
use url::Url;

/// Normalizes a URL into the form used as a response-cache key
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Require an http or https scheme
/// 3. Lowercase the host (done by the parser) and drop default ports
/// 4. Empty path becomes `/`; trailing slashes are kept, since
///    `/3/` and `/3` are different documents on a docs site
/// 5. Remove fragment (everything after #)
/// 6. Sort query parameters alphabetically, dropping an empty query
///
/// # Examples
///
/// ```
/// use pydocs_scraper::url::normalize_url;
///
/// let url = normalize_url("HTTPS://Docs.Python.org:443/3/?b=2&a=1#top").unwrap();
/// assert_eq!(url.as_str(), "https://docs.python.org/3/?a=1&b=2");
/// ```
pub fn normalize_url(url_str: &str) -> Result<Url, UrlError> {
    let mut url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.path().is_empty() {
        url.set_path("/");
    }

    url.set_fragment(None);

    if url.query().is_some() {
        let params = sorted_query_params(&url);

        if params.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut()
                .clear()
                .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
    }

    Ok(url)
}

/// Query parameters sorted by key, then value; empty keys are dropped
fn sorted_query_params(url: &Url) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !key.is_empty())
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    params.sort();
    params
}
