//! Shared fixtures for the integration tests

use pydocs_scraper::cache::SqliteCache;
use pydocs_scraper::config::{Config, HttpConfig, UserAgentConfig};
use pydocs_scraper::session::build_http_client;
use pydocs_scraper::Session;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Log output captured from the current thread's subscriber
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Routes this thread's tracing output into a buffer until the guard drops
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}

/// A session backed by an in-memory cache
pub fn test_session() -> Session {
    let user_agent = UserAgentConfig {
        crawler_name: "TestBot".to_string(),
        crawler_version: "1.0.0".to_string(),
        contact_url: "https://example.com/contact".to_string(),
    };
    let client = build_http_client(&user_agent, &HttpConfig::default())
        .expect("Failed to build HTTP client");
    let cache = SqliteCache::new_in_memory().expect("Failed to open in-memory cache");
    Session::new(client, Box::new(cache))
}

/// A configuration pointing both sites at the mock server
pub fn test_config(server: &MockServer, work_dir: &Path) -> Config {
    let mut config = Config::default();
    config.sites.main_doc_url = format!("{}/3/", server.uri());
    config.sites.peps_url = format!("{}/peps/", server.uri());
    config.output.results_dir = work_dir.join("results").display().to_string();
    config.output.downloads_dir = work_dir.join("downloads").display().to_string();
    config
}

/// Wraps a body fragment in a minimal Sphinx-like page
pub fn html_page(body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>test</title></head><body>{}</body></html>",
        body
    )
}

/// Serves `body` as HTML at `route`, expecting exactly `times` requests
pub async fn mount_page(server: &MockServer, route: &str, body: String, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(body),
        )
        .expect(times)
        .mount(server)
        .await;
}

/// Serves a bare status code at `route`
pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// The what's-new index linking to one article per version
pub fn whats_new_index(versions: &[&str]) -> String {
    whats_new_index_grouped(&[versions])
}

/// The what's-new index with one toctree wrapper per group
pub fn whats_new_index_grouped(groups: &[&[&str]]) -> String {
    let wrappers: String = groups
        .iter()
        .map(|versions| {
            format!(
                r#"<div class="toctree-wrapper compound"><ul>{}</ul></div>"#,
                toctree_items(versions)
            )
        })
        .collect();

    html_page(&format!(
        r#"<section id="what-s-new-in-python">
            <h1>What's New in Python</h1>
            {wrappers}
        </section>"#
    ))
}

fn toctree_items(versions: &[&str]) -> String {
    versions
        .iter()
        .map(|v| {
            format!(
                r#"<li class="toctree-l1"><a class="reference internal" href="{v}.html">What's New In Python {v}</a>
                   <ul><li class="toctree-l2"><a class="reference internal" href="{v}.html#summary">Summary</a></li></ul>
                </li>"#
            )
        })
        .collect()
}

pub fn whats_new_article(version: &str, editor: &str) -> String {
    html_page(&format!(
        r#"<section><h1>What's New In Python {version}</h1><dl class="field-list simple"><dt>Editor:</dt><dd>{editor}</dd></dl></section>"#
    ))
}

/// Landing page whose sidebar carries the version list
pub fn landing_page(with_versions: bool) -> String {
    let versions = if with_versions {
        r#"<ul>
            <li><a href="https://docs.python.org/3.14/">Python 3.14 (in development)</a></li>
            <li><a href="https://docs.python.org/3.13/">Python 3.13 (stable)</a></li>
            <li><a href="https://docs.python.org/3.8/">Python 3.8 (security-fixes)</a></li>
            <li><a href="https://docs.python.org/3.7/">Python 3.7</a></li>
            <li><a href="https://www.python.org/doc/versions/">All versions</a></li>
        </ul>"#
    } else {
        ""
    };

    html_page(&format!(
        r#"<div class="sphinxsidebar"><div class="sphinxsidebarwrapper">
            <h3>Navigation</h3>
            <ul><li><a href="genindex.html">Index</a></li><li><a href="modindex.html">Modules</a></li></ul>
            {versions}
        </div></div>"#
    ))
}

/// Numerical PEP index; each entry is (index abbreviation, PEP number)
pub fn pep_index(entries: &[(&str, u32)]) -> String {
    let rows: String = entries
        .iter()
        .map(|(abbr, number)| {
            format!(
                r#"<tr><td><abbr title="PEP type and status">{abbr}</abbr></td>
                   <td class="num"><a class="pep reference internal" href="pep-{number:04}/">{number}</a></td>
                   <td>Title {number}</td></tr>"#
            )
        })
        .collect();

    html_page(&format!(
        r#"<section id="numerical-index"><h2>Numerical Index</h2>
            <table class="pep-zero-table docutils align-default">
                <thead><tr><th>PEP</th><th>Title</th></tr></thead>
                <tbody>{rows}</tbody>
            </table>
        </section>"#
    ))
}

pub fn pep_page(status: &str) -> String {
    html_page(&format!(
        r#"<section id="pep-content"><h1>PEP</h1>
            <dl class="rfc2822 field-list simple">
                <dt class="field-odd">Author<span class="colon">:</span></dt>
                <dd class="field-odd">Someone</dd>
                <dt class="field-even">Status<span class="colon">:</span></dt>
                <dd class="field-even"><abbr title="Normative proposal">{status}</abbr></dd>
                <dt class="field-odd">Type<span class="colon">:</span></dt>
                <dd class="field-odd">Process</dd>
            </dl>
        </section>"#
    ))
}
