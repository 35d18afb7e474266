//! Provider abstraction for fundamental data.
//!
//! Every computation in the screener reaches statements and quotes through
//! [`FundamentalsProvider`]. A live HTTP client implements it in
//! `siegfried-fmp`; [`InMemoryProvider`] serves fabricated or recorded data
//! for tests and offline runs.

use crate::{
    Result, SiegfriedError,
    types::{FinancialStatements, Frequency, QuoteSnapshot, StatementTable},
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, future::Future};

/// A source of financial statements and quotes keyed by ticker.
///
/// Implementations signal unavailability through errors; an empty table is
/// also a valid answer and means the provider knows the ticker but has no
/// periods on record.
///
/// # Example
///
/// ```no_run
/// use siegfried_traits::{FundamentalsProvider, Frequency, InMemoryProvider};
///
/// # async fn run() -> siegfried_traits::Result<()> {
/// let provider = InMemoryProvider::default();
/// let statements = provider.financial_statements("AAPL", Frequency::Annual).await?;
/// println!("{} balance sheet periods", statements.balance_sheet.len());
/// # Ok(())
/// # }
/// ```
pub trait FundamentalsProvider: Send + Sync {
    /// Balance sheet for `symbol` at the given frequency.
    fn balance_sheet(
        &self,
        symbol: &str,
        frequency: Frequency,
    ) -> impl Future<Output = Result<StatementTable>> + Send;

    /// Income statement for `symbol` at the given frequency.
    fn income_statement(
        &self,
        symbol: &str,
        frequency: Frequency,
    ) -> impl Future<Output = Result<StatementTable>> + Send;

    /// Latest quote for `symbol`.
    fn quote(&self, symbol: &str) -> impl Future<Output = Result<QuoteSnapshot>> + Send;

    /// Balance sheet and income statement together.
    fn financial_statements(
        &self,
        symbol: &str,
        frequency: Frequency,
    ) -> impl Future<Output = Result<FinancialStatements>> + Send {
        async move {
            let balance_sheet = self.balance_sheet(symbol, frequency).await?;
            let income_statement = self.income_statement(symbol, frequency).await?;
            Ok(FinancialStatements::new(balance_sheet, income_statement))
        }
    }
}

/// Recorded data for a single company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyFixture {
    /// Annual statements.
    pub annual: FinancialStatements,
    /// Quarterly statements.
    pub quarterly: FinancialStatements,
    /// Quote snapshot, if the company has one.
    pub quote: Option<QuoteSnapshot>,
    /// When set, every request for this company fails with this message.
    pub failure: Option<String>,
}

impl CompanyFixture {
    const fn statements(&self, frequency: Frequency) -> &FinancialStatements {
        match frequency {
            Frequency::Annual => &self.annual,
            Frequency::Quarterly => &self.quarterly,
        }
    }
}

/// A provider backed by in-memory fixtures.
///
/// The JSON form is a map from ticker to [`CompanyFixture`]:
///
/// ```json
/// {
///   "ACME": {
///     "annual": {
///       "balance_sheet": { "2023-12-31": { "Total Assets": 1000.0 } },
///       "income_statement": { "2023-12-31": { "Operating Income": 120.0 } }
///     },
///     "quote": { "currentPrice": 25.0, "priceToBook": 1.4 }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryProvider {
    companies: BTreeMap<String, CompanyFixture>,
}

impl InMemoryProvider {
    /// Create an empty provider.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            companies: BTreeMap::new(),
        }
    }

    /// Builder-style registration of a company.
    #[must_use]
    pub fn with_company(mut self, symbol: impl Into<String>, fixture: CompanyFixture) -> Self {
        self.insert(symbol, fixture);
        self
    }

    /// Register or replace a company.
    pub fn insert(&mut self, symbol: impl Into<String>, fixture: CompanyFixture) {
        self.companies.insert(symbol.into().to_uppercase(), fixture);
    }

    /// Registered tickers in alphabetical order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.companies.keys().map(String::as_str)
    }

    /// Parse a provider from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`SiegfriedError::InvalidData`] if the JSON does not describe
    /// a fixture map.
    pub fn from_json(json: &str) -> Result<Self> {
        let parsed: BTreeMap<String, CompanyFixture> = serde_json::from_str(json)
            .map_err(|e| SiegfriedError::InvalidData(format!("Invalid fixture JSON: {e}")))?;
        // Keys are normalised the same way `insert` does.
        Ok(parsed
            .into_iter()
            .fold(Self::new(), |acc, (symbol, fixture)| {
                acc.with_company(symbol, fixture)
            }))
    }

    fn company(&self, symbol: &str) -> Result<&CompanyFixture> {
        let company = self
            .companies
            .get(&symbol.to_uppercase())
            .ok_or_else(|| SiegfriedError::SymbolNotFound(symbol.to_string()))?;
        match &company.failure {
            Some(message) => Err(SiegfriedError::DataFetch(message.clone())),
            None => Ok(company),
        }
    }
}

impl FundamentalsProvider for InMemoryProvider {
    async fn balance_sheet(&self, symbol: &str, frequency: Frequency) -> Result<StatementTable> {
        Ok(self
            .company(symbol)?
            .statements(frequency)
            .balance_sheet
            .clone())
    }

    async fn income_statement(
        &self,
        symbol: &str,
        frequency: Frequency,
    ) -> Result<StatementTable> {
        Ok(self
            .company(symbol)?
            .statements(frequency)
            .income_statement
            .clone())
    }

    async fn quote(&self, symbol: &str) -> Result<QuoteSnapshot> {
        self.company(symbol)?
            .quote
            .clone()
            .ok_or_else(|| SiegfriedError::QuoteUnavailable(symbol.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Date, StatementColumn};

    fn fixture() -> CompanyFixture {
        let period = Date::from_ymd_opt(2023, 12, 31).unwrap();
        CompanyFixture {
            annual: FinancialStatements::new(
                StatementTable::new().with(
                    period,
                    StatementColumn::new().with("Total Assets", 1000.0),
                ),
                StatementTable::new().with(
                    period,
                    StatementColumn::new().with("Operating Income", 100.0),
                ),
            ),
            quote: Some(QuoteSnapshot {
                current_price: Some(25.0),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_financial_statements_combines_both_tables() {
        let provider = InMemoryProvider::new().with_company("acme", fixture());

        let statements = provider
            .financial_statements("ACME", Frequency::Annual)
            .await
            .unwrap();
        assert_eq!(statements.balance_sheet.len(), 1);
        assert_eq!(statements.income_statement.len(), 1);

        let quarterly = provider
            .financial_statements("acme", Frequency::Quarterly)
            .await
            .unwrap();
        assert!(quarterly.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_symbol() {
        let provider = InMemoryProvider::new();
        let err = provider.quote("NOPE").await.unwrap_err();
        assert!(matches!(err, SiegfriedError::SymbolNotFound(_)));
    }

    #[tokio::test]
    async fn test_missing_quote() {
        let provider = InMemoryProvider::new().with_company(
            "ACME",
            CompanyFixture {
                quote: None,
                ..fixture()
            },
        );
        let err = provider.quote("ACME").await.unwrap_err();
        assert!(matches!(err, SiegfriedError::QuoteUnavailable(_)));
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let provider = InMemoryProvider::new().with_company(
            "ACME",
            CompanyFixture {
                failure: Some("connection reset".to_string()),
                ..fixture()
            },
        );
        let err = provider
            .balance_sheet("ACME", Frequency::Annual)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Data fetch error: connection reset");
    }

    #[tokio::test]
    async fn test_from_json() {
        let json = r#"{
            "acme": {
                "annual": {
                    "balance_sheet": { "2023-12-31": { "Total Assets": 1000.0 } },
                    "income_statement": { "2023-12-31": { "Operating Income": 120.0 } }
                },
                "quote": { "currentPrice": 25.0, "priceToBook": 1.4 }
            }
        }"#;
        let provider = InMemoryProvider::from_json(json).unwrap();
        assert_eq!(provider.symbols().collect::<Vec<_>>(), vec!["ACME"]);

        let quote = provider.quote("ACME").await.unwrap();
        assert_eq!(quote.price(), Some(25.0));
        assert_eq!(quote.price_to_book, Some(1.4));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = InMemoryProvider::from_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, SiegfriedError::InvalidData(_)));
    }
}
