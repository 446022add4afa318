//! Core record types flowing through the fetch → extract → report pipeline.

use serde::{Deserialize, Serialize};

/// The raw outcome of a single HTTP fetch.
///
/// One is produced per request and consumed by extraction. A failed fetch
/// carries an empty body and `success = false` — downstream stages treat
/// it like a page with no content rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchResult {
    /// The URL that was requested.
    pub url: String,
    /// Raw response body, empty on failure.
    pub html: String,
    /// Whether the request completed with a 2xx status.
    pub success: bool,
}

impl FetchResult {
    /// A successful fetch carrying the response body.
    pub fn ok(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
            success: true,
        }
    }

    /// The empty-body substitute recorded when a request fails.
    pub fn failed(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: String::new(),
            success: false,
        }
    }
}

/// One extracted HTML element with the attributes relevant to SEO review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDetail {
    /// Tag name (`title`, `h1`, `img`, …).
    pub tag: String,
    /// Space-joined class list, possibly empty.
    pub class: String,
    /// The `id` attribute, possibly empty.
    pub id: String,
    /// The `alt` attribute (images), possibly empty.
    pub alt: String,
    /// Visible text content, trimmed.
    pub text: String,
}

/// A keyword proposed as representative of a page, with its relevance score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordCandidate {
    /// The candidate term (single word or n-gram).
    pub term: String,
    /// Frequency-based relevance score; higher is better.
    pub score: f64,
}

/// All signals extracted from one page.
///
/// A failed fetch yields a record whose containers are all empty; the
/// record itself is never omitted, so every requested URL appears in the
/// generated reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageRecord {
    /// The page URL this record describes.
    pub url: String,
    /// Meta tag name/property → content, in document order. Duplicate
    /// names keep their first position but carry the last-seen content.
    pub meta: Vec<(String, String)>,
    /// Matched elements in DOM order.
    pub elements: Vec<ElementDetail>,
    /// Question sentences mined from element text, first-seen order.
    pub questions: Vec<String>,
    /// Word → frequency, first-seen order.
    pub word_counts: Vec<(String, usize)>,
    /// N-gram → frequency, first-seen order.
    pub ngram_counts: Vec<(String, usize)>,
    /// Keyword candidates sorted by descending score; ties keep
    /// first-seen order.
    pub keywords: Vec<KeywordCandidate>,
}

impl PageRecord {
    /// The all-empty record substituted for a page that could not be
    /// fetched or parsed.
    pub fn empty(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// `true` if every extracted container is empty.
    pub fn is_empty(&self) -> bool {
        self.meta.is_empty()
            && self.elements.is_empty()
            && self.questions.is_empty()
            && self.word_counts.is_empty()
            && self.ngram_counts.is_empty()
            && self.keywords.is_empty()
    }
}

/// Everything extracted from the search-results page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResultSet {
    /// Competitor URLs in first-seen page order, normalised and
    /// deduplicated. This is the fetch plan for the page batch.
    pub competitor_urls: Vec<String>,
    /// Related-search suggestions from the results page widget.
    pub related_searches: Vec<String>,
    /// Entries from the "People Also Asked" widget.
    pub people_also_asked: Vec<String>,
    /// The search page's own signal record (elements, counts, keywords,
    /// questions). `record.questions` is the question sequence for the
    /// results page.
    pub record: PageRecord,
}
