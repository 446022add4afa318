//! Structured extraction from fetched HTML.
//!
//! Each submodule handles one family of signals; [`extract_page`] and
//! [`extract_search`] assemble them into the records the report stage
//! consumes. Empty HTML (a failed fetch) flows through every function
//! and produces all-empty records — extraction never aborts a batch.

pub mod keywords;
pub mod page;
pub mod serp;
pub mod text;

use crate::config::LensConfig;
use crate::types::{FetchResult, PageRecord, SearchResultSet};

pub use keywords::rank_keywords;
pub use page::{element_details, meta_info, questions};
pub use serp::{competitor_urls, normalize_url, people_also_asked, related_searches};
pub use text::{count_terms, is_stopword, ngrams, tokenize};

/// Build the full signal record for one page.
///
/// A failed fetch (empty body) yields [`PageRecord::empty`] so every
/// requested URL still appears in the generated reports.
pub fn extract_page(fetch: &FetchResult, config: &LensConfig) -> PageRecord {
    if fetch.html.is_empty() {
        return PageRecord::empty(fetch.url.clone());
    }

    let elements = element_details(&fetch.html);
    let meta = meta_info(&fetch.html);
    let questions = questions(&elements);

    // One token stream per element; n-grams never join across elements.
    let mut words: Vec<String> = Vec::new();
    let mut grams: Vec<String> = Vec::new();
    for element in &elements {
        for field in [&element.text, &element.alt] {
            let tokens = tokenize(field);
            for &width in &config.ngram_widths {
                grams.extend(ngrams(&tokens, width));
            }
            words.extend(tokens);
        }
    }

    let keywords = rank_keywords(&elements, &meta, config.max_keywords);

    PageRecord {
        url: fetch.url.clone(),
        meta,
        elements,
        questions,
        word_counts: count_terms(words),
        ngram_counts: count_terms(grams),
        keywords,
    }
}

/// Build the [`SearchResultSet`] from the search-results page fetch.
pub fn extract_search(fetch: &FetchResult, config: &LensConfig) -> SearchResultSet {
    SearchResultSet {
        competitor_urls: competitor_urls(&fetch.html, &config.engine_host()),
        related_searches: related_searches(&fetch.html),
        people_also_asked: people_also_asked(&fetch.html),
        record: extract_page(fetch, config),
    }
}
