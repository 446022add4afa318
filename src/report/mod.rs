//! Tabular report building from extracted records.
//!
//! A [`Table`] is rows and columns plus a stable report name and a scope
//! (the search run or one competitor page). Row order always follows the
//! source record's order — insertion order for mappings, document order
//! for sequences, pre-sorted order for keywords. No sorting happens here.

pub mod style;
pub mod writer;

use serde::Serialize;

use crate::types::{PageRecord, SearchResultSet};

pub use writer::save_table;

/// Where a report's data came from: the search run itself or one
/// competitor page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Scope {
    /// The search-results page for a term.
    Search(String),
    /// A specific competitor page URL.
    Page(String),
}

impl Scope {
    /// Human-readable label used in table captions.
    pub fn label(&self) -> String {
        match self {
            Self::Search(term) => format!("search \"{term}\""),
            Self::Page(url) => url.clone(),
        }
    }
}

/// A named tabular artifact built from exactly one record set.
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    /// Stable report name (`element_details`, `meta_info`, …).
    pub name: &'static str,
    /// Source scope this table describes.
    pub scope: Scope,
    /// Column header labels, in order.
    pub columns: Vec<&'static str>,
    /// Data rows; each row has one cell per column.
    pub rows: Vec<Vec<String>>,
}

/// Element-details table: one row per extracted element, DOM order.
pub fn element_details_table(record: &PageRecord, scope: Scope) -> Table {
    Table {
        name: "element_details",
        scope,
        columns: vec!["Tag", "Class", "Id", "Alt", "Text"],
        rows: record
            .elements
            .iter()
            .map(|e| {
                vec![
                    e.tag.clone(),
                    e.class.clone(),
                    e.id.clone(),
                    e.alt.clone(),
                    e.text.clone(),
                ]
            })
            .collect(),
    }
}

/// Meta-information table in document order.
pub fn meta_info_table(record: &PageRecord, scope: Scope) -> Table {
    Table {
        name: "meta_info",
        scope,
        columns: vec!["Name", "Content"],
        rows: record
            .meta
            .iter()
            .map(|(name, content)| vec![name.clone(), content.clone()])
            .collect(),
    }
}

/// Word-frequency table in first-seen order.
pub fn word_counts_table(record: &PageRecord, scope: Scope) -> Table {
    Table {
        name: "word_counts",
        scope,
        columns: vec!["Word", "Count"],
        rows: count_rows(&record.word_counts),
    }
}

/// N-gram frequency table in first-seen order.
pub fn ngram_counts_table(record: &PageRecord, scope: Scope) -> Table {
    Table {
        name: "ngram_counts",
        scope,
        columns: vec!["N-gram", "Count"],
        rows: count_rows(&record.ngram_counts),
    }
}

/// Keyword table in the extractor's descending-score order.
pub fn keywords_table(record: &PageRecord, scope: Scope) -> Table {
    Table {
        name: "keywords",
        scope,
        columns: vec!["Keyword", "Score"],
        rows: record
            .keywords
            .iter()
            .map(|k| vec![k.term.clone(), format!("{:.4}", k.score)])
            .collect(),
    }
}

/// Questions mined from element text, first-seen order.
pub fn questions_table(record: &PageRecord, scope: Scope) -> Table {
    Table {
        name: "questions",
        scope,
        columns: vec!["Question"],
        rows: record.questions.iter().map(|q| vec![q.clone()]).collect(),
    }
}

/// Competitor URLs in first-seen page order.
pub fn competitor_urls_table(set: &SearchResultSet, scope: Scope) -> Table {
    Table {
        name: "competitor_urls",
        scope,
        columns: vec!["Position", "URL"],
        rows: set
            .competitor_urls
            .iter()
            .enumerate()
            .map(|(i, url)| vec![(i + 1).to_string(), url.clone()])
            .collect(),
    }
}

/// Related-search suggestions from the results page.
pub fn related_searches_table(set: &SearchResultSet, scope: Scope) -> Table {
    Table {
        name: "related_searches",
        scope,
        columns: vec!["Related Search"],
        rows: set
            .related_searches
            .iter()
            .map(|s| vec![s.clone()])
            .collect(),
    }
}

/// "People Also Asked" entries from the results page.
pub fn people_also_asked_table(set: &SearchResultSet, scope: Scope) -> Table {
    Table {
        name: "people_also_asked",
        scope,
        columns: vec!["Question"],
        rows: set
            .people_also_asked
            .iter()
            .map(|q| vec![q.clone()])
            .collect(),
    }
}

/// All tables written for the search scope of a run.
pub fn search_tables(set: &SearchResultSet, term: &str) -> Vec<Table> {
    let scope = Scope::Search(term.to_owned());
    let mut tables = page_tables_for_scope(&set.record, scope.clone());
    tables.push(competitor_urls_table(set, scope.clone()));
    tables.push(related_searches_table(set, scope.clone()));
    tables.push(people_also_asked_table(set, scope));
    tables
}

/// All tables written for one competitor page.
pub fn page_tables(record: &PageRecord) -> Vec<Table> {
    let scope = Scope::Page(record.url.clone());
    let mut tables = page_tables_for_scope(record, scope.clone());
    tables.push(meta_info_table(record, scope));
    tables
}

fn page_tables_for_scope(record: &PageRecord, scope: Scope) -> Vec<Table> {
    vec![
        element_details_table(record, scope.clone()),
        word_counts_table(record, scope.clone()),
        ngram_counts_table(record, scope.clone()),
        keywords_table(record, scope.clone()),
        questions_table(record, scope),
    ]
}

fn count_rows(counts: &[(String, usize)]) -> Vec<Vec<String>> {
    counts
        .iter()
        .map(|(term, count)| vec![term.clone(), count.to_string()])
        .collect()
}
