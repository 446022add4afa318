//! Pipeline configuration with sensible defaults.
//!
//! [`LensConfig`] controls the search endpoint, timeouts, the fixed
//! inter-page delay, n-gram widths, and where report artifacts land.
//! The defaults are tuned for polite, retry-free scraping.

use std::path::PathBuf;

use url::Url;

use crate::error::LensError;

/// Configuration for a pipeline run.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct LensConfig {
    /// Search endpoint the query term is appended to as `?q={term}`.
    pub search_endpoint: String,
    /// Per-request HTTP timeout in seconds for search and page fetches.
    pub timeout_seconds: u64,
    /// HTTP timeout in seconds for the diagnostic header probe.
    pub header_timeout_seconds: u64,
    /// Fixed delay in seconds awaited after every competitor-page fetch,
    /// including the last. The only throttle between outbound requests.
    pub page_delay_seconds: u64,
    /// Directory report artifacts are written beneath.
    pub report_dir: PathBuf,
    /// N-gram widths counted in addition to single words.
    pub ngram_widths: Vec<usize>,
    /// Maximum number of keyword candidates kept per page.
    pub max_keywords: usize,
    /// Custom User-Agent for search-page requests. If `None`, rotates
    /// through a built-in list of realistic browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            search_endpoint: "https://www.google.com/search".to_string(),
            timeout_seconds: 10,
            header_timeout_seconds: 30,
            page_delay_seconds: 3,
            report_dir: PathBuf::from("reports"),
            ngram_widths: vec![2, 3],
            max_keywords: 30,
            user_agent: None,
        }
    }
}

impl LensConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `search_endpoint` must be a valid http(s) URL
    /// - `timeout_seconds` and `header_timeout_seconds` must be greater than 0
    /// - `ngram_widths` entries must be at least 2
    /// - `max_keywords` must be greater than 0
    pub fn validate(&self) -> Result<(), LensError> {
        let endpoint = Url::parse(&self.search_endpoint)
            .map_err(|e| LensError::Config(format!("invalid search_endpoint: {e}")))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(LensError::Config(
                "search_endpoint must use http or https".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(LensError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.header_timeout_seconds == 0 {
            return Err(LensError::Config(
                "header_timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.ngram_widths.iter().any(|&w| w < 2) {
            return Err(LensError::Config(
                "ngram_widths entries must be at least 2".into(),
            ));
        }
        if self.max_keywords == 0 {
            return Err(LensError::Config(
                "max_keywords must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Host of the search endpoint, with any leading `www.` stripped.
    ///
    /// Competitor-URL extraction uses this to filter out links that point
    /// back at the search engine itself.
    pub fn engine_host(&self) -> String {
        Url::parse(&self.search_endpoint)
            .ok()
            .and_then(|u| u.host_str().map(str::to_owned))
            .map(|h| h.trim_start_matches("www.").to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = LensConfig::default();
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.header_timeout_seconds, 30);
        assert_eq!(config.page_delay_seconds, 3);
        assert_eq!(config.ngram_widths, vec![2, 3]);
        assert_eq!(config.max_keywords, 30);
        assert!(config.user_agent.is_none());
        assert_eq!(config.report_dir, PathBuf::from("reports"));
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(LensConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = LensConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn zero_header_timeout_rejected() {
        let config = LensConfig {
            header_timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("header_timeout_seconds"));
    }

    #[test]
    fn bad_endpoint_rejected() {
        let config = LensConfig {
            search_endpoint: "not a url".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("search_endpoint"));
    }

    #[test]
    fn non_http_endpoint_rejected() {
        let config = LensConfig {
            search_endpoint: "ftp://example.com/search".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn unigram_width_rejected() {
        let config = LensConfig {
            ngram_widths: vec![1, 2],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ngram_widths"));
    }

    #[test]
    fn zero_max_keywords_rejected() {
        let config = LensConfig {
            max_keywords: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_keywords"));
    }

    #[test]
    fn zero_page_delay_valid() {
        let config = LensConfig {
            page_delay_seconds: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn engine_host_strips_www() {
        let config = LensConfig::default();
        assert_eq!(config.engine_host(), "google.com");
    }

    #[test]
    fn engine_host_plain_domain() {
        let config = LensConfig {
            search_endpoint: "https://search.example.net/find".into(),
            ..Default::default()
        };
        assert_eq!(config.engine_host(), "search.example.net");
    }
}
