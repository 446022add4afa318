//! Keyword candidate ranking from extracted elements.
//!
//! Scores are normalised term frequencies, boosted when a term also
//! appears in high-signal locations (title, headings, meta). The sort is
//! stable: candidates with equal scores keep first-seen text order.

use std::collections::HashSet;

use crate::types::{ElementDetail, KeywordCandidate};

use super::text::{count_terms, tokenize};

/// Boost for terms appearing in the page title.
const TITLE_BOOST: f64 = 2.0;
/// Boost for terms appearing in h1–h5 headings.
const HEADING_BOOST: f64 = 1.5;
/// Boost for terms appearing in meta content.
const META_BOOST: f64 = 1.25;

/// Rank keyword candidates for a page.
///
/// Frequency counts run over the visible text and alt attributes of all
/// extracted elements; each term's score is `count / total`, multiplied
/// by the boosts for any high-signal location it also appears in. At
/// most `max` candidates are returned, sorted by descending score.
pub fn rank_keywords(
    elements: &[ElementDetail],
    meta: &[(String, String)],
    max: usize,
) -> Vec<KeywordCandidate> {
    let mut stream: Vec<String> = Vec::new();
    for element in elements {
        stream.extend(tokenize(&element.text));
        stream.extend(tokenize(&element.alt));
    }

    let counts = count_terms(stream);
    let total: usize = counts.iter().map(|(_, c)| c).sum();
    if total == 0 {
        return Vec::new();
    }

    let title_terms = location_terms(elements, |e| e.tag == "title");
    let heading_terms = location_terms(elements, |e| {
        matches!(e.tag.as_str(), "h1" | "h2" | "h3" | "h4" | "h5")
    });
    let meta_terms: HashSet<String> = meta
        .iter()
        .flat_map(|(_, content)| tokenize(content))
        .collect();

    let mut candidates: Vec<KeywordCandidate> = counts
        .into_iter()
        .map(|(term, count)| {
            let mut weight = 1.0;
            if title_terms.contains(&term) {
                weight *= TITLE_BOOST;
            }
            if heading_terms.contains(&term) {
                weight *= HEADING_BOOST;
            }
            if meta_terms.contains(&term) {
                weight *= META_BOOST;
            }
            KeywordCandidate {
                score: count as f64 / total as f64 * weight,
                term,
            }
        })
        .collect();

    // Vec::sort_by is stable, so equal scores keep first-seen order.
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates.truncate(max);
    candidates
}

/// Tokens from all elements matching a location predicate.
fn location_terms<F>(elements: &[ElementDetail], matches: F) -> HashSet<String>
where
    F: Fn(&ElementDetail) -> bool,
{
    elements
        .iter()
        .filter(|e| matches(e))
        .flat_map(|e| tokenize(&e.text))
        .collect()
}
