//! End-to-end orchestration: search, fetch, extract, report.
//!
//! One [`run`] call handles one term. The stages hand off in a strict
//! forward order: the search page is fetched and mined for competitor
//! URLs, each competitor page is fetched in turn, every fetch result is
//! extracted into a record, and every record becomes a set of HTML
//! reports on disk. Network failures degrade to empty records along the
//! way; only invalid configuration and report I/O abort a run.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::LensConfig;
use crate::error::Result;
use crate::extract::{extract_page, extract_search};
use crate::fetch::ContentGetter;
use crate::report::{page_tables, save_table, search_tables};

/// What a completed run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// The query term the run was for.
    pub term: String,
    /// How many competitor URLs the results page yielded.
    pub competitor_count: usize,
    /// Paths of every report file written, in write order.
    pub reports: Vec<PathBuf>,
}

/// Run the full pipeline for one search term.
///
/// Fetches the results page, extracts competitor URLs and widget data,
/// writes the search-scope reports, then fetches and reports each
/// competitor page in order. A competitor that cannot be fetched still
/// gets its reports, populated from an all-empty record.
///
/// # Errors
///
/// Returns [`crate::LensError::Config`] for invalid configuration,
/// [`crate::LensError::Http`] if the HTTP client cannot be built, and
/// [`crate::LensError::Report`] if a report file cannot be written.
pub async fn run(term: &str, config: &LensConfig) -> Result<RunSummary> {
    config.validate()?;
    let getter = ContentGetter::new(config)?;

    tracing::info!(%term, "pipeline run started");

    let search_fetch = getter.fetch_search_page(term).await;
    let result_set = extract_search(&search_fetch, config);
    tracing::info!(
        %term,
        competitors = result_set.competitor_urls.len(),
        related = result_set.related_searches.len(),
        paa = result_set.people_also_asked.len(),
        "search page extracted"
    );

    let mut reports: Vec<PathBuf> = Vec::new();
    for table in search_tables(&result_set, term) {
        reports.push(save_table(&table, &config.report_dir)?);
    }

    let page_fetches = getter.fetch_pages(&result_set.competitor_urls).await;
    for fetch in &page_fetches {
        let record = extract_page(fetch, config);
        if record.is_empty() {
            tracing::warn!(url = %record.url, "page produced an empty record");
        }
        for table in page_tables(&record) {
            reports.push(save_table(&table, &config.report_dir)?);
        }
    }

    tracing::info!(
        %term,
        reports = reports.len(),
        "pipeline run finished"
    );

    Ok(RunSummary {
        term: term.to_owned(),
        competitor_count: result_set.competitor_urls.len(),
        reports,
    })
}
