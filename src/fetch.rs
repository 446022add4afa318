//! Network fetches for the search page and competitor pages.
//!
//! [`ContentGetter`] turns a search term or a list of URLs into raw HTML
//! payloads. Every request failure is absorbed at its site: the batch
//! never aborts, a bad URL simply yields an empty-body [`FetchResult`].
//! There are no retries — a failed attempt is final for that URL within
//! one pipeline run.

use std::time::Duration;

use rand::seq::SliceRandom;
use reqwest::header::USER_AGENT;

use crate::config::LensConfig;
use crate::error::LensError;
use crate::types::FetchResult;

/// Realistic desktop-browser User-Agent strings, rotated per search request.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Select a random User-Agent string from the rotation list.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        .unwrap_or(USER_AGENTS[0])
}

/// Build a [`reqwest::Client`] configured for scraping.
///
/// Cookie store enabled (consent pages), gzip/brotli decompression,
/// limited redirects, and the given request timeout. No client-level
/// User-Agent — competitor pages are fetched with default headers, and
/// search requests attach one per request.
fn build_client(timeout_seconds: u64) -> Result<reqwest::Client, LensError> {
    reqwest::Client::builder()
        .cookie_store(true)
        .timeout(Duration::from_secs(timeout_seconds))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| LensError::Http(format!("failed to build HTTP client: {e}")))
}

/// Fetches the search-results page and competitor page bodies.
pub struct ContentGetter {
    client: reqwest::Client,
    header_client: reqwest::Client,
    search_endpoint: String,
    page_delay: Duration,
    user_agent: Option<String>,
}

impl ContentGetter {
    /// Construct a getter from pipeline configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LensError::Http`] if an HTTP client cannot be built.
    pub fn new(config: &LensConfig) -> Result<Self, LensError> {
        Ok(Self {
            client: build_client(config.timeout_seconds)?,
            header_client: build_client(config.header_timeout_seconds)?,
            search_endpoint: config.search_endpoint.clone(),
            page_delay: Duration::from_secs(config.page_delay_seconds),
            user_agent: config.user_agent.clone(),
        })
    }

    /// The query URL a term resolves to: `{endpoint}?q={percent-encoded term}`.
    pub fn search_url(&self, term: &str) -> String {
        format!("{}?q={}", self.search_endpoint, urlencoding::encode(term))
    }

    /// Fetch the search-results page for a term.
    ///
    /// Sends a GET with a browser User-Agent. Any transport failure or
    /// non-2xx status is logged and degraded to an empty-body
    /// [`FetchResult`] — never fatal to the caller.
    pub async fn fetch_search_page(&self, term: &str) -> FetchResult {
        let url = self.search_url(term);
        let ua = match self.user_agent {
            Some(ref custom) => custom.clone(),
            None => random_user_agent().to_owned(),
        };

        tracing::debug!(%url, "fetching search results page");
        match self.get_body(&url, Some(&ua)).await {
            Ok(html) => FetchResult::ok(url, html),
            Err(e) => {
                tracing::warn!(%url, error = %e, "search page fetch failed");
                FetchResult::failed(url)
            }
        }
    }

    /// Fetch each competitor page in order, one request at a time.
    ///
    /// The configured delay is awaited after **every** fetch, including
    /// the last — a deliberate throttle against anti-scraping defenses.
    /// Failures are substituted with empty-body results, so the output
    /// always has the same length and order as `urls`.
    pub async fn fetch_pages(&self, urls: &[String]) -> Vec<FetchResult> {
        let mut results = Vec::with_capacity(urls.len());

        for url in urls {
            tracing::debug!(%url, "fetching competitor page");
            let result = match self.get_body(url, None).await {
                Ok(html) => FetchResult::ok(url.clone(), html),
                Err(e) => {
                    tracing::warn!(%url, error = %e, "page fetch failed");
                    FetchResult::failed(url.clone())
                }
            };
            results.push(result);
            tokio::time::sleep(self.page_delay).await;
        }

        debug_assert_eq!(results.len(), urls.len());
        results
    }

    /// Diagnostic header probe: GET each URL with the longer timeout and
    /// log the response header map. Not part of the pipeline data flow;
    /// failures are logged and skipped.
    pub async fn fetch_headers(&self, urls: &[String]) {
        for url in urls {
            match self.header_client.get(url).send().await {
                Ok(response) => {
                    tracing::info!(%url, status = %response.status(), "response headers");
                    for (name, value) in response.headers() {
                        tracing::info!(%url, header = %name, value = ?value);
                    }
                }
                Err(e) => {
                    tracing::warn!(%url, error = %e, "header probe failed");
                }
            }
        }
    }

    /// Issue one GET and return the body, treating non-2xx as failure.
    async fn get_body(&self, url: &str, user_agent: Option<&str>) -> Result<String, LensError> {
        let mut request = self.client.get(url);
        if let Some(ua) = user_agent {
            request = request.header(USER_AGENT, ua);
        }

        let response = request
            .send()
            .await
            .map_err(|e| LensError::Http(format!("request failed: {e}")))?
            .error_for_status()
            .map_err(|e| LensError::Http(format!("bad status: {e}")))?;

        response
            .text()
            .await
            .map_err(|e| LensError::Http(format!("body read failed: {e}")))
    }
}
