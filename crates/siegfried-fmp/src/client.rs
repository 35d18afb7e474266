//! FMP API client implementation.

use crate::{
    Result,
    error::FmpError,
    types::{BalanceSheet, IncomeStatement, Period, Quote, RatiosTtm},
};
use reqwest::Client;
use std::env;
use tracing::debug;

/// Base URL for the FMP stable API.
const FMP_BASE_URL: &str = "https://financialmodelingprep.com/stable";

/// Financial Modeling Prep API client.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FmpClient {
    /// Create a new FMP client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: FMP_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different base URL (proxies, recorded servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Create a new FMP client from the `FMP_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_key = env::var("FMP_API_KEY").map_err(|_| FmpError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Build a URL with the API key.
    fn url(&self, endpoint: &str) -> String {
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}/{endpoint}{separator}apikey={}",
            self.base_url, self.api_key
        )
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        debug!(endpoint, "FMP request");
        let response = self.client.get(self.url(endpoint)).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FmpError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FmpError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;

        // Check for error responses
        if text.contains("\"Error Message\"") || text.contains("\"error\"") {
            return Err(FmpError::Api(text));
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Get income statements for a symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Stock ticker symbol (e.g., "AAPL")
    /// * `period` - Annual or quarterly
    /// * `limit` - Number of periods to return (most recent first)
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn income_statement(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<IncomeStatement>> {
        let endpoint = statement_endpoint("income-statement", symbol, period, limit);
        self.get(&endpoint).await
    }

    /// Get balance sheets for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn balance_sheet(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<BalanceSheet>> {
        let endpoint = statement_endpoint("balance-sheet-statement", symbol, period, limit);
        self.get(&endpoint).await
    }

    /// Get real-time quote for a symbol.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::SymbolNotFound`] when FMP returns no quote.
    pub async fn quote(&self, symbol: &str) -> Result<Quote> {
        let endpoint = format!("quote?symbol={}", symbol.to_uppercase());
        let quotes: Vec<Quote> = self.get(&endpoint).await?;
        quotes
            .into_iter()
            .next()
            .ok_or_else(|| FmpError::SymbolNotFound(symbol.to_string()))
    }

    /// Get trailing-twelve-month ratios for a symbol.
    ///
    /// Returns `None` when FMP has no ratios on record.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn ratios_ttm(&self, symbol: &str) -> Result<Option<RatiosTtm>> {
        let endpoint = format!("ratios-ttm?symbol={}", symbol.to_uppercase());
        let ratios: Vec<RatiosTtm> = self.get(&endpoint).await?;
        Ok(ratios.into_iter().next())
    }
}

fn statement_endpoint(kind: &str, symbol: &str, period: Period, limit: Option<u32>) -> String {
    let limit_param = limit.map(|l| format!("&limit={l}")).unwrap_or_default();
    format!(
        "{kind}?symbol={}&period={}{limit_param}",
        symbol.to_uppercase(),
        period.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = FmpClient::new("test_key");
        assert_eq!(
            client.url("quote?symbol=AAPL"),
            "https://financialmodelingprep.com/stable/quote?symbol=AAPL&apikey=test_key"
        );
        assert_eq!(
            client.url("profile"),
            "https://financialmodelingprep.com/stable/profile?apikey=test_key"
        );
    }

    #[test]
    fn test_custom_base_url() {
        let client = FmpClient::new("k").with_base_url("http://localhost:8080/");
        assert_eq!(
            client.url("quote?symbol=AAPL"),
            "http://localhost:8080/quote?symbol=AAPL&apikey=k"
        );
    }

    #[test]
    fn test_statement_endpoint() {
        assert_eq!(
            statement_endpoint("income-statement", "aapl", Period::Annual, Some(5)),
            "income-statement?symbol=AAPL&period=annual&limit=5"
        );
        assert_eq!(
            statement_endpoint("balance-sheet-statement", "msft", Period::Quarter, None),
            "balance-sheet-statement?symbol=MSFT&period=quarter"
        );
    }
}
