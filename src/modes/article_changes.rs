//! What's-new article list

use crate::modes::{log_diagnostics, skip_unavailable, Extraction};
use crate::output::ResultTable;
use crate::progress::item_bar;
use crate::session::{attr, find_all, find_child, text, Session, TagQuery};
use crate::url::resolve_href;
use crate::Result;
use url::Url;

/// Collects every "What's New in Python X.Y" article with its title and editors
///
/// Articles that cannot be fetched are skipped and reported in the
/// diagnostics; the table holds the rest in index order.
pub async fn article_changes(session: &mut Session, main_doc_url: &Url) -> Result<Extraction> {
    let whats_new_url = resolve_href(main_doc_url, "whatsnew/")?;

    let hrefs = {
        let doc = session.get_document(&whats_new_url).await?;
        let section = doc.find(&TagQuery::new("section").id("what-s-new-in-python"))?;

        find_all(section, &TagQuery::new("div").class("toctree-wrapper"))
            .into_iter()
            .flat_map(|wrapper| find_all(wrapper, &TagQuery::new("li").class("toctree-l1")))
            .filter_map(|item| find_child(item, &TagQuery::new("a")))
            .map(|anchor| attr(anchor, "href").map(str::to_string))
            .collect::<Result<Vec<_>>>()?
    };
    tracing::debug!("Found {} what's-new articles", hrefs.len());

    let mut table = ResultTable::new(["article URL", "title", "editor/author"]);
    let mut diagnostics = Vec::new();

    let outcome =
        collect_articles(session, &whats_new_url, &hrefs, &mut table, &mut diagnostics).await;
    // Skipped articles are reported even when a later one aborts the run
    log_diagnostics(&diagnostics);
    outcome?;

    Ok(Extraction::new(table, diagnostics))
}

async fn collect_articles(
    session: &mut Session,
    whats_new_url: &Url,
    hrefs: &[String],
    table: &mut ResultTable,
    diagnostics: &mut Vec<String>,
) -> Result<()> {
    for href in item_bar(hrefs.len(), "article-changes").wrap_iter(hrefs.iter()) {
        let article_url = resolve_href(whats_new_url, href)?;

        let Some(doc) = skip_unavailable(session.get_document(&article_url).await, diagnostics)?
        else {
            continue;
        };

        let title = text(doc.find(&TagQuery::new("h1"))?);
        let editors = text(doc.find(&TagQuery::new("dl"))?);
        table.push([article_url.to_string(), title, editors])?;
    }
    Ok(())
}
