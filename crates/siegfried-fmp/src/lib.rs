//! Financial Modeling Prep (FMP) API client for Siegfried.
//!
//! This crate provides a client for fetching statements and quotes from the
//! [Financial Modeling Prep](https://financialmodelingprep.com/) API, and
//! implements [`siegfried_traits::FundamentalsProvider`] on top of it so the
//! screener can run against live data.
//!
//! # Usage
//!
//! ```rust,ignore
//! use siegfried_fmp::{FmpClient, Period};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FmpClient::from_env()?;
//!
//!     // Fetch income statements
//!     let income = client.income_statement("AAPL", Period::Annual, Some(5)).await?;
//!
//!     // Fetch trailing ratios (P/B, book value per share)
//!     let ratios = client.ratios_ttm("AAPL").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FMP_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FMP_API_KEY=your_api_key_here
//! ```

mod client;
mod error;
mod provider;
mod types;

pub use client::FmpClient;
pub use error::FmpError;
pub use types::*;

/// Result type for FMP operations.
pub type Result<T> = std::result::Result<T, FmpError>;
