#![doc(issue_tracker_base_url = "https://github.com/siegfried-screener/siegfried/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # siegfried
//!
//! ROIC / price-to-book value screener.
//!
//! siegfried is an umbrella crate that re-exports all siegfried sub-crates for
//! convenience. It looks for companies that combine a high multi-year return
//! on invested capital with a low price-to-book ratio.
//!
//! ## Quick Start
//!
//! ```ignore
//! use siegfried::{FmpClient, ScreenConfig, Screener};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let provider = FmpClient::from_env()?;
//! let screener = Screener::new(provider, ScreenConfig::default());
//! let report = screener.screen(&["AAPL", "MSFT", "KO"]).await;
//!
//! println!("{}", report.render_table());
//! report.write_csv(std::path::Path::new("."))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Provider trait, statement model and errors
//! - [`fmp`] - Financial Modeling Prep provider
//! - [`metrics`] - Period extraction, ROIC and P/B computation
//! - [`screen`] - Universe discovery, screening, ranking and export
//!
//! ## Architecture
//!
//! 1. **Providers** supply statements and quotes per ticker
//! 2. **Metrics** turn statements into per-period ROIC and a geometric mean
//! 3. **Price-to-book** falls back through reported, balance-sheet and book value
//! 4. **Screener** joins both into one row per ticker and ranks the rows

/// Version information for the siegfried crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Traits
// ============================================================================

/// Provider trait, financial statement model and error types.
pub mod traits {
    pub use siegfried_traits::*;
}

pub use siegfried_traits::{
    Date, FinancialStatements, Frequency, FundamentalsProvider, InMemoryProvider, QuoteSnapshot,
    Result, SiegfriedError, StatementColumn, StatementTable, Symbol,
};

// ============================================================================
// Data Provider
// ============================================================================

/// Financial Modeling Prep client and provider.
pub mod fmp {
    pub use siegfried_fmp::*;
}

pub use siegfried_fmp::FmpClient;

// ============================================================================
// Metrics
// ============================================================================

/// ROIC and price-to-book computation.
///
/// ## Key Components
///
/// - **extract**: normalizes one period's statements into six variables
/// - **ratios**: invested capital, tax rate, NOPAT and ROIC
/// - **roic**: multi-year geometric-mean aggregation
/// - **price_to_book**: three-tier P/B resolution
pub mod metrics {
    pub use siegfried_metrics::*;
}

pub use siegfried_metrics::{
    MultiYearAggregator, MultiYearRoic, PbResult, PbSource, PriceToBookResolver, RoicStatus,
};

// ============================================================================
// Screening
// ============================================================================

/// Screening orchestration and reporting.
pub mod screen {
    pub use siegfried_screen::*;
}

pub use siegfried_screen::{ScreenConfig, Screener, ScreeningReport, ScreeningRow};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[tokio::test]
    async fn test_screen_from_fixture_json() {
        let json = r#"{
            "VALU": {
                "annual": {
                    "balance_sheet": {
                        "2022-12-31": {"Total Assets": 1000.0, "Cash And Cash Equivalents": 100.0, "Current Liabilities": 100.0},
                        "2023-12-31": {"Total Assets": 1000.0, "Cash And Cash Equivalents": 100.0, "Current Liabilities": 100.0}
                    },
                    "income_statement": {
                        "2022-12-31": {"Operating Income": 100.0, "Pretax Income": 100.0, "Tax Provision": 20.0},
                        "2023-12-31": {"Operating Income": 120.0, "Pretax Income": 100.0, "Tax Provision": 20.0}
                    }
                },
                "quote": {"currentPrice": 10.0, "priceToBook": 0.8}
            },
            "dear": {
                "quote": {"currentPrice": 50.0, "priceToBook": 6.0}
            }
        }"#;
        let provider = InMemoryProvider::from_json(json).unwrap();
        let screener = Screener::new(provider, ScreenConfig::default());
        let report = screener.screen(&["VALU", "DEAR"]).await;

        assert_eq!(report.len(), 2);
        let first = &report.rows()[0];
        assert_eq!(first.symbol, "VALU");
        assert_eq!(first.status, RoicStatus::Success);
        assert_eq!(first.years_available, 2);
        // 80/800 and 96/800
        let expected = (1.10_f64 * 1.12).sqrt() - 1.0;
        assert!((first.roic.unwrap() - expected).abs() < 1e-12);

        let second = &report.rows()[1];
        assert_eq!(second.symbol, "DEAR");
        assert_eq!(second.pb_ratio, Some(6.0));
        assert_eq!(second.status, RoicStatus::NoFinancialData);
        assert_eq!(report.successful().count(), 1);
    }
}
