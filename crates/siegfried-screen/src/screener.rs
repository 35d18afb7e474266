//! The screening orchestrator.

use crate::{error::ScreenError, report::ScreeningReport, row::ScreeningRow};
use chrono::Local;
use serde::{Deserialize, Serialize};
use siegfried_metrics::{
    MultiYearAggregator, PriceToBookConfig, PriceToBookResolver, RoicConfig,
};
use siegfried_traits::FundamentalsProvider;
use std::path::Path;
use tracing::info;

/// Configuration for a screening run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Multi-year ROIC settings.
    pub roic: RoicConfig,
    /// Price-to-book fallback settings.
    pub price_to_book: PriceToBookConfig,
}

impl ScreenConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn from_json_file(path: &Path) -> Result<Self, ScreenError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Runs the ROIC and P/B pipeline over a list of tickers.
///
/// Tickers are processed one at a time. Each ticker's figures depend only on
/// that ticker's data, so the order of the input does not affect any row.
#[derive(Debug)]
pub struct Screener<P> {
    provider: P,
    aggregator: MultiYearAggregator,
    resolver: PriceToBookResolver,
}

impl<P: FundamentalsProvider> Screener<P> {
    /// Create a screener over `provider`.
    pub fn new(provider: P, config: ScreenConfig) -> Self {
        Self {
            provider,
            aggregator: MultiYearAggregator::new(config.roic),
            resolver: PriceToBookResolver::new(config.price_to_book),
        }
    }

    /// The underlying provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// The ROIC aggregator.
    pub const fn aggregator(&self) -> &MultiYearAggregator {
        &self.aggregator
    }

    /// The P/B resolver.
    pub const fn resolver(&self) -> &PriceToBookResolver {
        &self.resolver
    }

    /// Screen a single ticker. Always produces a row.
    pub async fn screen_symbol(&self, symbol: &str) -> ScreeningRow {
        let roic = self.aggregator.aggregate(&self.provider, symbol).await;
        let pb = self.resolver.resolve(&self.provider, symbol).await;
        ScreeningRow::new(&roic, &pb)
    }

    /// Screen every ticker and return the ranked report.
    ///
    /// The report has exactly one row per input ticker.
    pub async fn screen<S: AsRef<str>>(&self, symbols: &[S]) -> ScreeningReport {
        let total = symbols.len();
        let mut rows = Vec::with_capacity(total);

        for (i, symbol) in symbols.iter().enumerate() {
            let symbol = symbol.as_ref();
            let row = self.screen_symbol(symbol).await;
            info!(
                symbol,
                progress = i + 1,
                total,
                roic = %row.roic_percent,
                pb = ?row.pb_ratio,
                status = %row.status,
                "screened"
            );
            rows.push(row);
        }

        ScreeningReport::new(rows, Local::now().date_naive())
    }
}
