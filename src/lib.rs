//! # serplens
//!
//! SEO signal extraction from search-engine results and competitor pages.
//!
//! Given a query term, serplens fetches the results page, mines it for
//! competitor URLs, related searches, and "People Also Asked" entries,
//! then fetches each competitor page in turn and extracts element
//! details, meta tags, questions, word and n-gram frequencies, and
//! ranked keyword candidates. Every record becomes a styled HTML table
//! report on disk.
//!
//! ## Example
//!
//! ```no_run
//! use serplens::{run, LensConfig};
//!
//! #[tokio::main]
//! async fn main() -> serplens::Result<()> {
//!     let config = LensConfig::default();
//!     let summary = run("rust web scraping", &config).await?;
//!     println!("{} reports written", summary.reports.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//!
//! The pipeline is a strict forward flow: fetch → extract → report.
//! Network failures never abort a run — a page that cannot be fetched
//! flows through as an all-empty record and still appears in the
//! reports. Requests are sequential with a fixed delay after every
//! page fetch; there are no retries.

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod report;
pub mod types;

pub use config::LensConfig;
pub use error::{LensError, Result};
pub use fetch::ContentGetter;
pub use pipeline::{run, RunSummary};
pub use report::{Scope, Table};
pub use types::{ElementDetail, FetchResult, KeywordCandidate, PageRecord, SearchResultSet};
