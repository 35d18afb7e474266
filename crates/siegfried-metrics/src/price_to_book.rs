//! Price-to-book resolution.
//!
//! Vendors publish P/B inconsistently, so the resolver walks three sources in
//! order and takes the first usable answer:
//! 1. The vendor's reported ratio, if above a placeholder floor
//! 2. Price over book value per share derived from the latest quarterly
//!    balance sheet
//! 3. Price over the vendor's book-value field, if it plausibly is per share
//!
//! Resolution never fails. Anything that goes wrong degrades to a `None`
//! ratio tagged [`PbSource::Unavailable`].

use serde::{Deserialize, Serialize};
use siegfried_traits::{
    Frequency, FundamentalsProvider, QuoteSnapshot, StatementTable, labels,
};
use std::fmt;
use tracing::{debug, warn};

/// Configuration for price-to-book resolution.
///
/// The two thresholds are empirical guards against vendor data quality
/// problems, not accounting rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceToBookConfig {
    /// Reported ratios at or below this are treated as placeholders (default: 0.01)
    pub min_reported_ratio: f64,

    /// Book value must be below this multiple of price to be taken as a
    /// per-share figure (default: 10.0)
    pub max_book_value_price_multiple: f64,

    /// Balance-sheet labels searched for equity, in priority order
    pub equity_labels: Vec<String>,
}

impl Default for PriceToBookConfig {
    fn default() -> Self {
        Self {
            min_reported_ratio: 0.01,
            max_book_value_price_multiple: 10.0,
            equity_labels: vec![
                labels::COMMON_STOCK_EQUITY.to_string(),
                labels::STOCKHOLDERS_EQUITY.to_string(),
            ],
        }
    }
}

/// Which source produced a P/B ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PbSource {
    /// Vendor-reported ratio.
    ReportedRatio,
    /// Derived from the quarterly balance sheet.
    BalanceSheet,
    /// Derived from the vendor's book-value field.
    BookValue,
    /// No source produced a usable ratio.
    Unavailable,
}

impl fmt::Display for PbSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ReportedRatio => "reported",
            Self::BalanceSheet => "balance_sheet",
            Self::BookValue => "book_value",
            Self::Unavailable => "unavailable",
        })
    }
}

/// Price-to-book ratio for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PbResult {
    /// Ticker symbol.
    pub ticker: String,
    /// Price-to-book ratio, if resolved.
    pub ratio: Option<f64>,
    /// Source of the ratio.
    pub source: PbSource,
}

impl PbResult {
    fn resolved(ticker: &str, ratio: f64, source: PbSource) -> Self {
        Self {
            ticker: ticker.to_string(),
            ratio: Some(ratio),
            source,
        }
    }

    fn unavailable(ticker: &str) -> Self {
        Self {
            ticker: ticker.to_string(),
            ratio: None,
            source: PbSource::Unavailable,
        }
    }
}

/// Resolves P/B through the three-source fallback chain.
#[derive(Debug, Clone, Default)]
pub struct PriceToBookResolver {
    config: PriceToBookConfig,
}

impl PriceToBookResolver {
    /// Create a resolver with the given configuration.
    #[must_use]
    pub const fn new(config: PriceToBookConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &PriceToBookConfig {
        &self.config
    }

    /// Resolve P/B for `ticker`.
    ///
    /// Without a current price nothing can be derived, so the result is
    /// unavailable regardless of what else the quote carries.
    pub async fn resolve<P: FundamentalsProvider>(&self, provider: &P, ticker: &str) -> PbResult {
        let quote = match provider.quote(ticker).await {
            Ok(quote) => quote,
            Err(e) => {
                warn!(ticker, error = %e, "price-to-book unavailable");
                return PbResult::unavailable(ticker);
            }
        };

        let Some(price) = quote.price() else {
            debug!(ticker, "no current price");
            return PbResult::unavailable(ticker);
        };

        if let Some(ratio) = self.reported_ratio(&quote) {
            return PbResult::resolved(ticker, ratio, PbSource::ReportedRatio);
        }
        debug!(ticker, reported = ?quote.price_to_book, "reported P/B rejected");

        match provider.balance_sheet(ticker, Frequency::Quarterly).await {
            Ok(table) => {
                let shares = quote.shares_outstanding;
                if let Some(ratio) = self.balance_sheet_ratio(price, shares, &table) {
                    return PbResult::resolved(ticker, ratio, PbSource::BalanceSheet);
                }
                debug!(ticker, "balance-sheet P/B unavailable");
            }
            Err(e) => debug!(ticker, error = %e, "quarterly balance sheet unavailable"),
        }

        if let Some(ratio) = self.book_value_ratio(price, quote.book_value) {
            return PbResult::resolved(ticker, ratio, PbSource::BookValue);
        }

        debug!(ticker, book_value = ?quote.book_value, "no usable P/B source");
        PbResult::unavailable(ticker)
    }

    /// Reported ratio, accepted only above the placeholder floor.
    #[must_use]
    pub fn reported_ratio(&self, quote: &QuoteSnapshot) -> Option<f64> {
        quote
            .price_to_book
            .filter(|r| r.is_finite() && *r > self.config.min_reported_ratio)
    }

    /// Price over book value per share from the latest balance-sheet period.
    ///
    /// Requires an equity row, positive shares outstanding and a positive book
    /// value per share.
    #[must_use]
    pub fn balance_sheet_ratio(
        &self,
        price: f64,
        shares_outstanding: Option<f64>,
        balance_sheet: &StatementTable,
    ) -> Option<f64> {
        let (_, column) = balance_sheet.latest()?;
        let (_, equity) = column.find_containing(&self.config.equity_labels)?;
        let shares = shares_outstanding.filter(|s| s.is_finite() && *s > 0.0)?;

        let book_value_per_share = equity / shares;
        (book_value_per_share.is_finite() && book_value_per_share > 0.0)
            .then_some(price / book_value_per_share)
    }

    /// Price over the vendor's book-value field.
    ///
    /// Rejected when the field is at least `max_book_value_price_multiple`
    /// times the price, which indicates a company total rather than a
    /// per-share value.
    #[must_use]
    pub fn book_value_ratio(&self, price: f64, book_value: Option<f64>) -> Option<f64> {
        let book_value = book_value.filter(|b| b.is_finite() && *b > 0.0)?;
        (book_value < self.config.max_book_value_price_multiple * price)
            .then_some(price / book_value)
    }
}
