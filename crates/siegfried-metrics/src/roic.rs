//! Multi-year ROIC aggregation.
//!
//! The aggregator keeps the most recent `years` periods reported in both
//! statements, computes ROIC per period, and reduces the series to one figure
//! with a geometric mean of `(1 + roic)`. Periods with zero or negative ROIC
//! are left out of the mean rather than counted as zero.
//!
//! # Example
//!
//! ```ignore
//! use siegfried_metrics::{MultiYearAggregator, RoicConfig};
//!
//! let aggregator = MultiYearAggregator::new(RoicConfig { years: 5, ..Default::default() });
//! let roic = aggregator.aggregate(&provider, "MSFT").await;
//! println!("{}: {}", roic.ticker(), roic.status());
//! ```

use crate::{
    extract::{FinancialPeriod, extract_periods},
    ratios::RoicResult,
};
use serde::{Deserialize, Serialize};
use siegfried_traits::{Frequency, FundamentalsProvider, Result, SiegfriedError};
use std::fmt;
use tracing::{debug, warn};

/// Configuration for multi-year ROIC aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoicConfig {
    /// Number of most recent periods to keep (default: 4)
    pub years: usize,

    /// Minimum number of periods with a defined ROIC (default: 2)
    pub min_periods: usize,
}

impl Default for RoicConfig {
    fn default() -> Self {
        Self {
            years: 4,
            min_periods: 2,
        }
    }
}

/// Outcome of aggregating one ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoicStatus {
    /// Aggregate computed.
    Success,
    /// The provider returned an empty balance sheet or income statement.
    NoFinancialData,
    /// Fewer periods with a defined ROIC than required.
    InsufficientData {
        /// Periods that had a defined ROIC.
        periods: usize,
    },
    /// Enough periods, but none with a positive ROIC.
    NoPositiveRoic,
    /// Fetching or extraction failed.
    Error(String),
}

impl RoicStatus {
    /// Whether an aggregate was computed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for RoicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("Success"),
            Self::NoFinancialData => f.write_str("No financial data available"),
            Self::InsufficientData { periods } => {
                write!(f, "Insufficient Data ({periods} periods with ROIC)")
            }
            Self::NoPositiveRoic => f.write_str("No positive ROIC periods"),
            Self::Error(message) => write!(f, "Error: {message}"),
        }
    }
}

/// Multi-year ROIC for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiYearRoic {
    ticker: String,
    periods: Vec<RoicResult>,
    aggregate: Option<f64>,
    status: RoicStatus,
}

impl MultiYearRoic {
    fn empty(ticker: &str, status: RoicStatus) -> Self {
        Self {
            ticker: ticker.to_string(),
            periods: Vec::new(),
            aggregate: None,
            status,
        }
    }

    /// Ticker symbol.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Per-period results, oldest first.
    #[must_use]
    pub fn periods(&self) -> &[RoicResult] {
        &self.periods
    }

    /// Geometric-mean ROIC, if it could be computed.
    #[must_use]
    pub const fn aggregate(&self) -> Option<f64> {
        self.aggregate
    }

    /// Aggregation status.
    #[must_use]
    pub const fn status(&self) -> &RoicStatus {
        &self.status
    }

    /// Number of periods kept for aggregation.
    #[must_use]
    pub fn years_available(&self) -> usize {
        self.periods.len()
    }
}

/// Geometric mean of positive rates: `(Π(1 + v))^(1/n) − 1`.
///
/// Values that are not strictly positive (including `NaN`) are ignored.
/// Returns `None` when no positive value remains. Computed in log space so
/// long series cannot overflow the product.
#[must_use]
pub fn geometric_mean_return(values: &[f64]) -> Option<f64> {
    let logs: Vec<f64> = values
        .iter()
        .filter(|v| **v > 0.0 && v.is_finite())
        .map(|v| v.ln_1p())
        .collect();

    if logs.is_empty() {
        return None;
    }

    let mean_log = logs.iter().sum::<f64>() / logs.len() as f64;
    Some(mean_log.exp_m1())
}

/// Aggregates several years of ROIC into a single figure.
#[derive(Debug, Clone, Default)]
pub struct MultiYearAggregator {
    config: RoicConfig,
}

impl MultiYearAggregator {
    /// Create an aggregator with the given configuration.
    #[must_use]
    pub const fn new(config: RoicConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &RoicConfig {
        &self.config
    }

    /// Fetch annual statements and aggregate ROIC for `ticker`.
    ///
    /// Never fails: provider and extraction errors are reported through
    /// [`RoicStatus::Error`] with no aggregate.
    pub async fn aggregate<P: FundamentalsProvider>(
        &self,
        provider: &P,
        ticker: &str,
    ) -> MultiYearRoic {
        match self.try_aggregate(provider, ticker).await {
            Ok(result) => result,
            Err(SiegfriedError::NoFinancialData(_)) => {
                MultiYearRoic::empty(ticker, RoicStatus::NoFinancialData)
            }
            Err(e) => {
                warn!(ticker, error = %e, "ROIC aggregation failed");
                MultiYearRoic::empty(ticker, RoicStatus::Error(e.to_string()))
            }
        }
    }

    async fn try_aggregate<P: FundamentalsProvider>(
        &self,
        provider: &P,
        ticker: &str,
    ) -> Result<MultiYearRoic> {
        let statements = provider
            .financial_statements(ticker, Frequency::Annual)
            .await?;

        if statements.is_empty() {
            return Ok(MultiYearRoic::empty(ticker, RoicStatus::NoFinancialData));
        }

        let periods = extract_periods(&statements)?;
        Ok(self.summarize(ticker, periods))
    }

    /// Aggregate already-extracted periods.
    ///
    /// Keeps the `years` most recent periods, in any input order.
    #[must_use]
    pub fn summarize(&self, ticker: &str, mut periods: Vec<FinancialPeriod>) -> MultiYearRoic {
        periods.sort_by(|a, b| b.period.cmp(&a.period));
        periods.truncate(self.config.years);

        let mut results: Vec<RoicResult> = periods.iter().map(RoicResult::from_period).collect();
        results.sort_by_key(|r| r.period);

        let values: Vec<f64> = results.iter().filter_map(|r| r.roic).collect();
        debug!(ticker, periods = results.len(), with_roic = values.len(), "ROIC series");

        let (aggregate, status) = if values.len() < self.config.min_periods {
            (
                None,
                RoicStatus::InsufficientData {
                    periods: values.len(),
                },
            )
        } else {
            geometric_mean_return(&values).map_or((None, RoicStatus::NoPositiveRoic), |g| {
                (Some(g), RoicStatus::Success)
            })
        };

        MultiYearRoic {
            ticker: ticker.to_string(),
            periods: results,
            aggregate,
            status,
        }
    }
}

/// ROIC for the most recent period reported in both statements.
///
/// # Errors
///
/// Returns [`SiegfriedError::NoFinancialData`] when a statement is empty or
/// the two statements share no period, or any provider error.
pub async fn latest_roic<P: FundamentalsProvider>(
    provider: &P,
    ticker: &str,
) -> Result<RoicResult> {
    let statements = provider
        .financial_statements(ticker, Frequency::Annual)
        .await?;

    extract_periods(&statements)?
        .last()
        .map(RoicResult::from_period)
        .ok_or_else(|| {
            SiegfriedError::NoFinancialData(format!("{ticker}: no period in both statements"))
        })
}
