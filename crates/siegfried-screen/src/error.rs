//! Error types for screening output and universe discovery.
//!
//! Per-ticker failures never surface here; they are recorded in the row's
//! status. These errors concern the run as a whole.

use thiserror::Error;

/// Errors raised while loading configuration, discovering the universe or
/// writing a report.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The universe page could not be interpreted.
    #[error("Universe error: {0}")]
    Universe(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScreenError::Universe("no constituents table".to_string());
        assert_eq!(err.to_string(), "Universe error: no constituents table");

        let err: ScreenError = std::io::Error::other("disk full").into();
        assert_eq!(err.to_string(), "I/O error: disk full");
    }
}
