//! End-to-end runs of each scraping mode against a mock server

use crate::common::*;
use pydocs_scraper::modes::{article_changes, download_archive, pep_census, version_status};
use pydocs_scraper::status::ExpectedStatusTable;
use pydocs_scraper::ScraperError;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn docs_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/3/", server.uri())).expect("Failed to parse docs URL")
}

fn peps_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/peps/", server.uri())).expect("Failed to parse PEPs URL")
}

#[tokio::test]
async fn test_article_changes_collects_every_article() {
    let server = MockServer::start().await;
    mount_page(&server, "/3/whatsnew/", whats_new_index(&["3.12", "3.11"]), 1).await;
    mount_page(&server, "/3/whatsnew/3.12.html", whats_new_article("3.12", "Adam Turner"), 1).await;
    mount_page(&server, "/3/whatsnew/3.11.html", whats_new_article("3.11", "Pablo Galindo"), 1).await;

    let mut session = test_session();
    let extraction = article_changes(&mut session, &docs_url(&server))
        .await
        .expect("article-changes failed");

    let table = extraction.table;
    assert_eq!(table.header(), ["article URL", "title", "editor/author"]);
    assert_eq!(table.len(), 2);

    let first = &table.rows()[0];
    assert_eq!(first[0], format!("{}/3/whatsnew/3.12.html", server.uri()));
    assert_eq!(first[1], "What's New In Python 3.12");
    assert_eq!(first[2], "Editor:Adam Turner");

    assert!(table.rows()[1][0].ends_with("/3/whatsnew/3.11.html"));
    assert!(extraction.diagnostics.is_empty());
}

#[tokio::test]
async fn test_article_changes_skips_unavailable_article() {
    let server = MockServer::start().await;
    let versions = ["3.13", "3.12", "3.11", "3.10", "3.9"];
    mount_page(&server, "/3/whatsnew/", whats_new_index(&versions), 1).await;

    for (i, version) in versions.iter().enumerate() {
        let route = format!("/3/whatsnew/{}.html", version);
        if i == 2 {
            mount_status(&server, &route, 500).await;
        } else {
            mount_page(&server, &route, whats_new_article(version, "Editor"), 1).await;
        }
    }

    let mut session = test_session();
    let extraction = article_changes(&mut session, &docs_url(&server))
        .await
        .expect("article-changes failed");

    assert_eq!(extraction.table.len(), 4);
    assert!(extraction
        .table
        .rows()
        .iter()
        .all(|row| !row[0].ends_with("3.11.html")));

    assert_eq!(extraction.diagnostics.len(), 1);
    assert!(extraction.diagnostics[0].contains("/3/whatsnew/3.11.html"));
    assert!(extraction.diagnostics[0].contains("500"));
}

#[tokio::test]
async fn test_article_changes_reads_every_toctree_wrapper() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/3/whatsnew/",
        whats_new_index_grouped(&[&["3.13", "3.12"][..], &["changelog"][..]]),
        1,
    )
    .await;
    mount_page(&server, "/3/whatsnew/3.13.html", whats_new_article("3.13", "A"), 1).await;
    mount_page(&server, "/3/whatsnew/3.12.html", whats_new_article("3.12", "B"), 1).await;
    mount_page(&server, "/3/whatsnew/changelog.html", whats_new_article("log", "C"), 1).await;

    let mut session = test_session();
    let extraction = article_changes(&mut session, &docs_url(&server))
        .await
        .expect("article-changes failed");

    let urls: Vec<&str> = extraction
        .table
        .rows()
        .iter()
        .map(|row| row[0].as_str())
        .collect();
    assert_eq!(urls.len(), 3);
    assert!(urls[0].ends_with("/3/whatsnew/3.13.html"));
    assert!(urls[1].ends_with("/3/whatsnew/3.12.html"));
    assert!(urls[2].ends_with("/3/whatsnew/changelog.html"));
}

#[tokio::test]
async fn test_article_changes_logs_skipped_articles_before_failing() {
    let server = MockServer::start().await;
    mount_page(&server, "/3/whatsnew/", whats_new_index(&["3.12", "3.11"]), 1).await;
    mount_status(&server, "/3/whatsnew/3.12.html", 404).await;
    mount_page(&server, "/3/whatsnew/3.11.html", html_page("<p>no heading</p>"), 1).await;

    let (logs, _guard) = capture_logs();
    let mut session = test_session();
    let err = article_changes(&mut session, &docs_url(&server))
        .await
        .unwrap_err();

    assert!(matches!(err, ScraperError::TagNotFound { .. }));
    let output = logs.contents();
    assert!(output.contains("/3/whatsnew/3.12.html"));
    assert!(output.contains("404"));
}

#[tokio::test]
async fn test_article_changes_second_run_served_from_cache() {
    let server = MockServer::start().await;
    // Each page may be requested once; the second run must hit the cache
    mount_page(&server, "/3/whatsnew/", whats_new_index(&["3.12", "3.11"]), 1).await;
    mount_page(&server, "/3/whatsnew/3.12.html", whats_new_article("3.12", "A"), 1).await;
    mount_page(&server, "/3/whatsnew/3.11.html", whats_new_article("3.11", "B"), 1).await;

    let mut session = test_session();
    let first = article_changes(&mut session, &docs_url(&server))
        .await
        .expect("first run failed");
    let second = article_changes(&mut session, &docs_url(&server))
        .await
        .expect("second run failed");

    assert_eq!(first.table, second.table);
    assert_eq!(session.cached_entries().unwrap(), 3);
}

#[tokio::test]
async fn test_article_changes_landing_page_down_is_fatal() {
    let server = MockServer::start().await;
    mount_status(&server, "/3/whatsnew/", 503).await;

    let mut session = test_session();
    let err = article_changes(&mut session, &docs_url(&server))
        .await
        .unwrap_err();

    assert!(matches!(err, ScraperError::PageUnavailable { .. }));
}

#[tokio::test]
async fn test_article_changes_missing_section() {
    let server = MockServer::start().await;
    mount_page(&server, "/3/whatsnew/", html_page("<h1>Moved</h1>"), 1).await;

    let mut session = test_session();
    let err = article_changes(&mut session, &docs_url(&server))
        .await
        .unwrap_err();

    match err {
        ScraperError::TagNotFound { tag, attrs } => {
            assert_eq!(tag, "section");
            assert!(attrs.contains("what-s-new-in-python"));
        }
        other => panic!("Expected TagNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_version_status_rows() {
    let server = MockServer::start().await;
    mount_page(&server, "/3/", landing_page(true), 1).await;

    let mut session = test_session();
    let extraction = version_status(&mut session, &docs_url(&server))
        .await
        .expect("version-status failed");

    let rows = extraction.table.rows();
    assert_eq!(extraction.table.header(), ["documentation URL", "version", "status"]);
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0], ["https://docs.python.org/3.14/", "3.14", "in development"]);
    assert_eq!(rows[1], ["https://docs.python.org/3.13/", "3.13", "stable"]);
    assert_eq!(rows[2], ["https://docs.python.org/3.8/", "3.8", "security-fixes"]);
    assert_eq!(rows[3], ["https://docs.python.org/3.7/", "Python 3.7", ""]);
    assert_eq!(rows[4], ["https://www.python.org/doc/versions/", "All versions", ""]);
}

#[tokio::test]
async fn test_version_status_without_all_versions() {
    let server = MockServer::start().await;
    mount_page(&server, "/3/", landing_page(false), 1).await;

    let mut session = test_session();
    let err = version_status(&mut session, &docs_url(&server))
        .await
        .unwrap_err();

    assert!(matches!(err, ScraperError::RequiredSectionMissing(_)));
}

#[tokio::test]
async fn test_download_archive_writes_file() {
    let server = MockServer::start().await;
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let downloads = temp_dir.path().join("downloads");

    mount_page(
        &server,
        "/3/download.html",
        html_page(
            r#"<table class="docutils align-default"><tbody>
                <tr><td>PDF (US-Letter)</td><td><a class="reference external" href="archives/python-3.12-docs-pdf-letter.zip">Download</a></td></tr>
                <tr><td>PDF (A4)</td><td><a class="reference external" href="archives/python-3.12-docs-pdf-a4.zip">Download</a></td></tr>
            </tbody></table>"#,
        ),
        1,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/3/archives/python-3.12-docs-pdf-a4.zip"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/zip")
                .set_body_bytes(b"PK\x03\x04archive".to_vec()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut session = test_session();
    let saved = download_archive(&mut session, &docs_url(&server), &downloads)
        .await
        .expect("download-archive failed");

    assert_eq!(saved, downloads.join("python-3.12-docs-pdf-a4.zip"));
    assert_eq!(std::fs::read(&saved).unwrap(), b"PK\x03\x04archive");
}

#[tokio::test]
async fn test_download_archive_overwrites_existing_file() {
    let server = MockServer::start().await;
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let downloads = temp_dir.path().join("downloads");
    let target = downloads.join("python-3.12-docs-pdf-a4.zip");

    std::fs::create_dir_all(&downloads).unwrap();
    std::fs::write(&target, b"stale bytes from an older release").unwrap();

    mount_page(
        &server,
        "/3/download.html",
        html_page(
            r#"<table class="docutils"><tr><td><a href="archives/python-3.12-docs-pdf-a4.zip">Download</a></td></tr></table>"#,
        ),
        1,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/3/archives/python-3.12-docs-pdf-a4.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"fresh".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = test_session();
    let saved = download_archive(&mut session, &docs_url(&server), &downloads)
        .await
        .expect("download-archive failed");

    assert_eq!(saved, target);
    assert_eq!(std::fs::read(&target).unwrap(), b"fresh");
}

#[tokio::test]
async fn test_download_archive_without_a4_link() {
    let server = MockServer::start().await;
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    mount_page(
        &server,
        "/3/download.html",
        html_page(
            r#"<table class="docutils"><tr><td><a href="archives/docs-html.zip">HTML</a></td></tr></table>"#,
        ),
        1,
    )
    .await;

    let mut session = test_session();
    let err = download_archive(&mut session, &docs_url(&server), temp_dir.path())
        .await
        .unwrap_err();

    assert!(matches!(err, ScraperError::TagNotFound { .. }));
}

#[tokio::test]
async fn test_pep_census_counts_and_mismatches() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/peps/",
        pep_index(&[("PA", 1), ("PA", 8), ("SF", 20), ("S", 999)]),
        1,
    )
    .await;
    mount_page(&server, "/peps/pep-0001/", pep_page("Active"), 1).await;
    mount_page(&server, "/peps/pep-0008/", pep_page("Active"), 1).await;
    mount_page(&server, "/peps/pep-0020/", pep_page("Draft"), 1).await;
    mount_page(&server, "/peps/pep-0999/", pep_page("Draft"), 1).await;

    let mut session = test_session();
    let extraction = pep_census(
        &mut session,
        &peps_url(&server),
        &ExpectedStatusTable::python_peps(),
    )
    .await
    .expect("pep-census failed");

    let rows = extraction.table.rows();
    assert_eq!(extraction.table.header(), ["Status", "Quantities"]);
    assert_eq!(rows[0], ["Active", "2"]);
    assert_eq!(rows[1], ["Draft", "2"]);
    assert_eq!(rows[2], ["Total", "4"]);
    assert_eq!(rows.len(), 3);

    assert_eq!(extraction.diagnostics.len(), 1);
    let mismatch = &extraction.diagnostics[0];
    assert!(mismatch.contains("/peps/pep-0020/"));
    assert!(mismatch.contains("Draft"));
    assert!(mismatch.contains("Final"));
}

#[tokio::test]
async fn test_pep_census_skips_unavailable_pep() {
    let server = MockServer::start().await;
    mount_page(&server, "/peps/", pep_index(&[("SF", 8), ("SF", 9)]), 1).await;
    mount_page(&server, "/peps/pep-0008/", pep_page("Final"), 1).await;
    mount_status(&server, "/peps/pep-0009/", 404).await;

    let mut session = test_session();
    let extraction = pep_census(
        &mut session,
        &peps_url(&server),
        &ExpectedStatusTable::python_peps(),
    )
    .await
    .expect("pep-census failed");

    assert_eq!(extraction.table.rows()[0], ["Final", "1"]);
    assert_eq!(extraction.table.rows()[1], ["Total", "1"]);
    assert_eq!(extraction.diagnostics.len(), 1);
    assert!(extraction.diagnostics[0].contains("/peps/pep-0009/"));
}

#[tokio::test]
async fn test_pep_census_logs_skipped_peps_before_failing() {
    let server = MockServer::start().await;
    mount_page(&server, "/peps/", pep_index(&[("SF", 8), ("SF", 9)]), 1).await;
    mount_status(&server, "/peps/pep-0008/", 404).await;
    mount_page(
        &server,
        "/peps/pep-0009/",
        html_page(r#"<dl class="rfc2822 field-list simple"><dt>Author:</dt><dd>Guido</dd></dl>"#),
        1,
    )
    .await;

    let (logs, _guard) = capture_logs();
    let mut session = test_session();
    let err = pep_census(
        &mut session,
        &peps_url(&server),
        &ExpectedStatusTable::python_peps(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ScraperError::StatusNotFound { .. }));
    assert!(logs.contents().contains("/peps/pep-0008/"));
}

#[tokio::test]
async fn test_pep_census_page_without_status_is_fatal() {
    let server = MockServer::start().await;
    mount_page(&server, "/peps/", pep_index(&[("SF", 8)]), 1).await;
    mount_page(
        &server,
        "/peps/pep-0008/",
        html_page(r#"<dl class="rfc2822 field-list simple"><dt>Author:</dt><dd>Guido</dd></dl>"#),
        1,
    )
    .await;

    let mut session = test_session();
    let err = pep_census(
        &mut session,
        &peps_url(&server),
        &ExpectedStatusTable::python_peps(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ScraperError::StatusNotFound { .. }));
}
