//! Error types for the Siegfried screener.
//!
//! Errors here describe why data for a ticker could not be obtained or
//! interpreted. Degenerate arithmetic (zero invested capital, too few periods)
//! is never an error; it is represented by `None` values and a status.

use thiserror::Error;

/// The main error type for Siegfried operations.
#[derive(Debug, Error)]
pub enum SiegfriedError {
    /// The provider has no statements for the requested ticker.
    #[error("No financial data available for {0}")]
    NoFinancialData(String),

    /// The provider has no quote for the requested ticker.
    #[error("Quote unavailable for {0}")]
    QuoteUnavailable(String),

    /// The ticker is unknown to the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// Error fetching data from an external source.
    #[error("Data fetch error: {0}")]
    DataFetch(String),

    /// Error due to invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error when data is insufficient for the requested operation.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for SiegfriedError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for SiegfriedError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for Siegfried operations.
pub type Result<T> = std::result::Result<T, SiegfriedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiegfriedError::NoFinancialData("AAPL".to_string());
        assert_eq!(err.to_string(), "No financial data available for AAPL");

        let err = SiegfriedError::DataFetch("timeout".to_string());
        assert_eq!(err.to_string(), "Data fetch error: timeout");
    }

    #[test]
    fn test_error_from_string() {
        let err: SiegfriedError = "boom".into();
        assert!(matches!(err, SiegfriedError::Other(ref m) if m == "boom"));

        let err: SiegfriedError = String::from("bang").into();
        assert_eq!(err.to_string(), "Error: bang");
    }
}
