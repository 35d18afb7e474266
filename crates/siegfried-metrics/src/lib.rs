//! Financial-ratio pipeline for the Siegfried screener.
//!
//! This crate turns raw statements into the two figures the screen ranks on:
//! - Extraction: normalize one period's statement rows into [`FinancialPeriod`]
//! - Ratios: invested capital, NOPAT and ROIC for a single period
//! - ROIC: multi-year geometric-mean aggregation with an insufficient-data policy
//! - Price-to-book: three-tier fallback resolution that never fails
//!
//! # Example
//!
//! ```ignore
//! use siegfried_metrics::{MultiYearAggregator, PriceToBookResolver};
//!
//! let roic = MultiYearAggregator::default().aggregate(&provider, "AAPL").await;
//! let pb = PriceToBookResolver::default().resolve(&provider, "AAPL").await;
//! println!("{} {:?} {:?}", roic.status(), roic.aggregate(), pb.ratio);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod extract;
pub mod price_to_book;
pub mod ratios;
pub mod roic;

// Re-export key types
pub use extract::{FinancialPeriod, extract_period, extract_periods};
pub use price_to_book::{PbResult, PbSource, PriceToBookConfig, PriceToBookResolver};
pub use ratios::{DEFAULT_TAX_RATE, RoicResult};
pub use roic::{
    MultiYearAggregator, MultiYearRoic, RoicConfig, RoicStatus, geometric_mean_return,
    latest_roic,
};
