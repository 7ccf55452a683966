//! Documentation archive download

use crate::session::{find_all, Session, TagQuery};
use crate::url::{file_name, resolve_href};
use crate::{Result, ScraperError};
use std::path::{Path, PathBuf};
use url::Url;

/// Suffix of the A4 PDF archive link on the download page
pub const ARCHIVE_SUFFIX: &str = "pdf-a4.zip";

/// Downloads the PDF (A4) documentation archive into `downloads_dir`
///
/// The directory is created if missing and an existing file of the same
/// name is overwritten.
///
/// # Returns
///
/// The path the archive was written to
pub async fn download_archive(
    session: &mut Session,
    main_doc_url: &Url,
    downloads_dir: &Path,
) -> Result<PathBuf> {
    let downloads_url = resolve_href(main_doc_url, "download.html")?;

    let href = {
        let doc = session.get_document(&downloads_url).await?;
        doc.find_all(&TagQuery::new("table").class("docutils"))
            .into_iter()
            .flat_map(|table| find_all(table, &TagQuery::new("a")))
            .filter_map(|anchor| anchor.value().attr("href"))
            .find(|href| href.ends_with(ARCHIVE_SUFFIX))
            .map(str::to_string)
            .ok_or_else(|| ScraperError::TagNotFound {
                tag: "a".to_string(),
                attrs: format!("{{href$={:?}}} in table.docutils", ARCHIVE_SUFFIX),
            })?
    };

    let archive_url = resolve_href(&downloads_url, &href)?;
    let archive_path = downloads_dir.join(file_name(&archive_url)?);

    std::fs::create_dir_all(downloads_dir)?;
    let payload = session.fetch(&archive_url).await?;
    std::fs::write(&archive_path, &payload.body)?;

    tracing::info!(
        "Archive downloaded and saved to {} ({} bytes)",
        archive_path.display(),
        payload.body.len()
    );
    Ok(archive_path)
}
