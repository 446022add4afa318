//! Per-page extraction: element details, meta information, and questions.
//!
//! All functions accept raw HTML (or previously extracted elements) and
//! degrade to empty output on empty or unparseable input — a failed fetch
//! flows through extraction without special-casing.

use std::sync::OnceLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::types::ElementDetail;

/// Tags carried into the element-details report, in one combined selector
/// so matches come back in DOM order.
const DETAIL_SELECTOR: &str = "title, meta, a, h1, h2, h3, h4, h5, p, span, div, img";

/// Sentences starting with a capital letter and ending in a question mark.
fn question_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\b[A-Z][^.?!]*\?").expect("question pattern is valid")
    })
}

/// Extract one [`ElementDetail`] row per matched element, in DOM order.
///
/// Titles and headings are always kept; other elements must carry a
/// class or id — anonymous wrappers contribute nothing to an SEO review
/// and would drown the report.
pub fn element_details(html: &str) -> Vec<ElementDetail> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse(DETAIL_SELECTOR) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| {
            let value = element.value();
            let class = value.attr("class").unwrap_or_default().trim().to_owned();
            let id = value.attr("id").unwrap_or_default().trim().to_owned();
            let structural = matches!(
                value.name(),
                "title" | "h1" | "h2" | "h3" | "h4" | "h5"
            );
            if !structural && class.is_empty() && id.is_empty() {
                return None;
            }

            let alt = value.attr("alt").unwrap_or_default().trim().to_owned();
            let text = element.text().collect::<String>().trim().to_owned();

            Some(ElementDetail {
                tag: value.name().to_owned(),
                class,
                id,
                alt,
                text,
            })
        })
        .collect()
}

/// Extract meta information as ordered (name → content) pairs.
///
/// Keys come from the tag's `name` or `property` attribute, lowercased.
/// A duplicate key keeps its first position but takes the content of the
/// later tag in document order. The `<title>` element contributes a
/// `title` pseudo-entry so the report always leads with it.
pub fn meta_info(html: &str) -> Vec<(String, String)> {
    let document = Html::parse_document(html);
    let mut entries: Vec<(String, String)> = Vec::new();

    if let Ok(title_sel) = Selector::parse("title") {
        if let Some(title) = document.select(&title_sel).next() {
            let text = title.text().collect::<String>().trim().to_owned();
            if !text.is_empty() {
                entries.push(("title".to_owned(), text));
            }
        }
    }

    let Ok(meta_sel) = Selector::parse("meta") else {
        return entries;
    };

    for element in document.select(&meta_sel) {
        let value = element.value();
        let Some(key) = value.attr("name").or_else(|| value.attr("property")) else {
            continue;
        };
        let Some(content) = value.attr("content") else {
            continue;
        };

        let key = key.trim().to_lowercase();
        let content = content.trim().to_owned();
        if key.is_empty() {
            continue;
        }

        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = content,
            None => entries.push((key, content)),
        }
    }

    entries
}

/// Mine question sentences from element text and alt attributes.
///
/// Returns trimmed questions in first-seen order with duplicates removed.
pub fn questions(elements: &[ElementDetail]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();

    for element in elements {
        for field in [&element.text, &element.alt] {
            for found in question_pattern().find_iter(field) {
                let question = found.as_str().trim().to_owned();
                if !question.is_empty() && !seen.contains(&question) {
                    seen.push(question);
                }
            }
        }
    }

    seen
}
