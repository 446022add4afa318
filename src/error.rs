//! Error types for the serplens crate.
//!
//! Transport and parse failures are absorbed close to where they occur
//! (logged, degraded to empty results) and never surface as errors. The
//! variants here cover the failures that do propagate: invalid
//! configuration and report I/O.

/// Errors that can occur during a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum LensError {
    /// An HTTP client could not be constructed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse HTML into the expected structure.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid pipeline configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Writing a report artifact to disk failed.
    #[error("report write failed: {0}")]
    Report(#[from] std::io::Error),
}

/// Convenience type alias for serplens results.
pub type Result<T> = std::result::Result<T, LensError>;
