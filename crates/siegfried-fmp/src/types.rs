//! Data types for FMP API responses.
//!
//! Statement fields are optional: FMP omits or nulls line items a filer does
//! not report, and the screener must be able to tell "absent" from "zero".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use siegfried_traits::Frequency;

/// Reporting period for financial statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    /// Annual reports (10-K filings).
    #[default]
    Annual,
    /// Quarterly reports (10-Q filings).
    Quarter,
}

impl Period {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarter => "quarter",
        }
    }
}

impl From<Frequency> for Period {
    fn from(frequency: Frequency) -> Self {
        match frequency {
            Frequency::Annual => Self::Annual,
            Frequency::Quarterly => Self::Quarter,
        }
    }
}

/// Income statement data from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    /// Fiscal period end date.
    pub date: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Reporting period (FY, Q1..Q4).
    #[serde(default)]
    pub period: String,
    /// Total revenue.
    #[serde(default)]
    pub revenue: Option<f64>,
    /// Operating income.
    #[serde(default)]
    pub operating_income: Option<f64>,
    /// Income before tax.
    #[serde(default)]
    pub income_before_tax: Option<f64>,
    /// Income tax expense.
    #[serde(default)]
    pub income_tax_expense: Option<f64>,
    /// Net income.
    #[serde(default)]
    pub net_income: Option<f64>,
}

impl IncomeStatement {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Balance sheet data from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    /// Fiscal period end date.
    pub date: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Reporting period.
    #[serde(default)]
    pub period: String,
    /// Total assets.
    #[serde(default)]
    pub total_assets: Option<f64>,
    /// Cash and cash equivalents.
    #[serde(default)]
    pub cash_and_cash_equivalents: Option<f64>,
    /// Total current liabilities.
    #[serde(default)]
    pub total_current_liabilities: Option<f64>,
    /// Total stockholders' equity.
    #[serde(default)]
    pub total_stockholders_equity: Option<f64>,
    /// Total equity (including non-controlling interests).
    #[serde(default)]
    pub total_equity: Option<f64>,
}

impl BalanceSheet {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Real-time quote data from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    #[serde(default)]
    pub name: String,
    /// Current price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Previous close.
    #[serde(default)]
    pub previous_close: Option<f64>,
    /// Market cap.
    #[serde(default)]
    pub market_cap: Option<f64>,
    /// Shares outstanding, when the endpoint reports it.
    #[serde(default)]
    pub shares_outstanding: Option<f64>,
}

impl Quote {
    /// Shares outstanding, derived from market cap and price when not reported.
    #[must_use]
    pub fn shares(&self) -> Option<f64> {
        self.shares_outstanding.filter(|s| *s > 0.0).or_else(|| {
            match (self.market_cap, self.price) {
                (Some(cap), Some(price)) if cap > 0.0 && price > 0.0 => Some(cap / price),
                _ => None,
            }
        })
    }
}

/// Trailing-twelve-month ratios from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatiosTtm {
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Price to book ratio.
    #[serde(rename = "priceToBookRatioTTM", default)]
    pub price_to_book_ratio: Option<f64>,
    /// Book value per share.
    #[serde(rename = "bookValuePerShareTTM", default)]
    pub book_value_per_share: Option<f64>,
}
