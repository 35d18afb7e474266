//! Screening orchestration for Siegfried.
//!
//! This crate drives the ROIC and price-to-book pipeline across a universe of
//! tickers and turns the results into a ranked report:
//! - Universe discovery (S&P 500 constituents)
//! - Per-ticker screening with one row per input ticker, whatever happens
//! - Ranking by ascending P/B then descending ROIC, missing values last
//! - Text, JSON, DataFrame and dated CSV output
//!
//! # Example
//!
//! ```rust,ignore
//! use siegfried_screen::{ScreenConfig, Screener};
//!
//! let screener = Screener::new(provider, ScreenConfig::default());
//! let report = screener.screen(&["AAPL", "MSFT"]).await;
//! println!("{}", report.render_table());
//! report.write_csv(std::path::Path::new("."))?;
//! ```

pub mod error;
pub mod report;
pub mod row;
pub mod screener;
pub mod universe;

// Re-export main types
pub use error::ScreenError;
pub use report::ScreeningReport;
pub use row::{ScreeningRow, format_roic_percent, sort_rows};
pub use screener::{ScreenConfig, Screener};
pub use universe::{fetch_sp500_symbols, normalize_symbol, parse_constituents};
