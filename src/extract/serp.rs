//! Search-results page extraction: competitor URLs and SERP widgets.
//!
//! Competitor URLs become the fetch plan for the page batch, so ordering
//! and deduplication here are correctness-relevant: first-seen page order
//! is preserved, equivalent URLs (after normalisation) appear once.
//! Widget extraction is best-effort — an absent or redesigned widget
//! yields an empty vector, never an error.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

/// The organic-result container on the results page; falls back to the
/// whole document when absent (minimal or non-Google markup).
const ORGANIC_REGION_SELECTOR: &str = "#search a[href], #rso a[href]";

/// Class signatures of the related-searches widget.
const RELATED_SELECTOR: &str = ".Xe4YD, .k8XOCe";

/// Class signatures of the "People Also Asked" widget.
const PAA_SELECTOR: &str = ".JCzEY.tNxQIb, .fLtXsc.iIWm4b";

/// Tracking query parameters stripped during URL normalisation.
const TRACKING_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "fbclid",
    "gclid",
    "ref",
];

/// Redirect-wrapper parameter carrying the real destination
/// (`/url?q=https://…` and similar).
fn redirect_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[?&](?:q|url)=([^&]+)").expect("redirect pattern is valid"))
}

/// Extract competitor URLs from the organic-result region of a search page.
///
/// Anchors are unwrapped from redirect wrappers, restricted to http(s),
/// filtered against the engine's own domain, normalised, and deduplicated
/// while preserving first-seen order.
pub fn competitor_urls(html: &str, engine_host: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let mut anchors: Vec<String> = Vec::new();
    if let Ok(region) = Selector::parse(ORGANIC_REGION_SELECTOR) {
        anchors.extend(
            document
                .select(&region)
                .filter_map(|a| a.value().attr("href").map(str::to_owned)),
        );
    }
    if anchors.is_empty() {
        if let Ok(all) = Selector::parse("a[href]") {
            anchors.extend(
                document
                    .select(&all)
                    .filter_map(|a| a.value().attr("href").map(str::to_owned)),
            );
        }
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut urls: Vec<String> = Vec::new();

    for href in anchors {
        let Some(candidate) = unwrap_redirect(&href, engine_host) else {
            continue;
        };
        let Ok(parsed) = Url::parse(&candidate) else {
            continue;
        };
        if !matches!(parsed.scheme(), "http" | "https") {
            continue;
        }
        let Some(host) = parsed.host_str() else {
            continue;
        };
        if is_engine_host(host, engine_host) {
            continue;
        }

        let normalized = normalize_url(&candidate);
        if seen.insert(normalized.clone()) {
            urls.push(normalized);
        }
    }

    tracing::debug!(count = urls.len(), "competitor URLs extracted");
    urls
}

/// Related-search suggestions, trimmed, first-seen deduplicated.
pub fn related_searches(html: &str) -> Vec<String> {
    widget_texts(html, RELATED_SELECTOR)
}

/// "People Also Asked" entries, trimmed, first-seen deduplicated.
pub fn people_also_asked(html: &str) -> Vec<String> {
    widget_texts(html, PAA_SELECTOR)
}

/// Collect trimmed element texts matching a widget class signature.
fn widget_texts(html: &str, selector: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };

    let mut texts: Vec<String> = Vec::new();
    for element in document.select(&selector) {
        let text = element.text().collect::<String>().trim().to_owned();
        if !text.is_empty() && !texts.contains(&text) {
            texts.push(text);
        }
    }
    texts
}

/// Pull the destination out of a search-engine redirect wrapper, or pass
/// an already-absolute URL through unchanged.
///
/// Only relative hrefs and absolute hrefs on the engine's own host are
/// treated as redirect wrappers. A competitor URL that happens to carry
/// its own `q=` or `url=` parameter stays intact.
fn unwrap_redirect(href: &str, engine_host: &str) -> Option<String> {
    let absolute = href.starts_with("http://") || href.starts_with("https://");
    let on_engine = absolute
        && Url::parse(href)
            .ok()
            .and_then(|u| u.host_str().map(|h| is_engine_host(h, engine_host)))
            .unwrap_or(false);

    if !absolute || on_engine {
        if let Some(captures) = redirect_pattern().captures(href) {
            let raw = captures.get(1)?.as_str();
            let decoded = urlencoding::decode(raw).ok()?.into_owned();
            if decoded.starts_with("http://") || decoded.starts_with("https://") {
                return Some(decoded);
            }
        }
    }
    if absolute {
        return Some(href.to_owned());
    }
    None
}

/// `true` if `host` is the search engine's own domain or a subdomain of it.
fn is_engine_host(host: &str, engine_host: &str) -> bool {
    if engine_host.is_empty() {
        return false;
    }
    let host = host.trim_start_matches("www.");
    host == engine_host || host.ends_with(&format!(".{engine_host}"))
}

/// Normalise a URL so equivalent pages compare equal.
///
/// Lowercases scheme and host (via parsing), removes the fragment and
/// default ports, strips tracking parameters, sorts the remaining query
/// parameters, and drops a trailing slash from non-root paths. Unparseable
/// input is returned unchanged.
pub fn normalize_url(raw: &str) -> String {
    let Ok(mut parsed) = Url::parse(raw) else {
        return raw.to_string();
    };

    parsed.set_fragment(None);

    if matches!(
        (parsed.scheme(), parsed.port()),
        ("http", Some(80)) | ("https", Some(443))
    ) {
        let _ = parsed.set_port(None);
    }

    let mut params: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| !TRACKING_PARAMS.contains(&key.to_lowercase().as_str()))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    params.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    if params.is_empty() {
        parsed.set_query(None);
    } else {
        let qs: String = params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        parsed.set_query(Some(&qs));
    }

    let path = parsed.path().to_string();
    if path.len() > 1 && path.ends_with('/') {
        parsed.set_path(&path[..path.len() - 1]);
    }

    parsed.to_string()
}
