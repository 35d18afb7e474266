//! Common types used throughout the Siegfried screener.
//!
//! Financial statements are modelled the way data vendors publish them: a
//! table indexed by line-item label with one column per reporting period.
//! Period keys are dates and therefore sortable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market symbol identifier such as `"AAPL"` or `"BRK-B"`.
pub type Symbol = String;

/// Reporting frequency of a financial statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Fiscal-year statements.
    #[default]
    Annual,
    /// Fiscal-quarter statements.
    Quarterly,
}

/// One reporting period of a statement: line-item label to value.
///
/// Non-finite values are stored as given but never returned by the lookup
/// methods, so a vendor's `NaN` placeholder behaves like an absent row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatementColumn {
    items: BTreeMap<String, f64>,
}

impl StatementColumn {
    /// Create an empty column.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, label: impl Into<String>, value: f64) -> Self {
        self.insert(label, value);
        self
    }

    /// Insert or replace a line item.
    pub fn insert(&mut self, label: impl Into<String>, value: f64) {
        self.items.insert(label.into(), value);
    }

    /// Look up a line item by exact label.
    ///
    /// Returns `None` when the row is absent or its value is not finite.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.items.get(label).copied().filter(|v| v.is_finite())
    }

    /// Find the first line item whose label contains one of `needles`.
    ///
    /// Needles are tried in order, so earlier needles take priority. Within a
    /// needle, labels are scanned alphabetically.
    #[must_use]
    pub fn find_containing<S: AsRef<str>>(&self, needles: &[S]) -> Option<(&str, f64)> {
        needles.iter().find_map(|needle| {
            self.items
                .iter()
                .filter(|(_, v)| v.is_finite())
                .find(|(label, _)| label.contains(needle.as_ref()))
                .map(|(label, v)| (label.as_str(), *v))
        })
    }

    /// Iterate over line-item labels.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Number of line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the column has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for StatementColumn {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// A financial statement: one [`StatementColumn`] per reporting period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatementTable {
    columns: BTreeMap<Date, StatementColumn>,
}

impl StatementTable {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: BTreeMap::new(),
        }
    }

    /// Builder-style insert of a period column.
    #[must_use]
    pub fn with(mut self, period: Date, column: StatementColumn) -> Self {
        self.insert(period, column);
        self
    }

    /// Insert or replace the column for `period`.
    pub fn insert(&mut self, period: Date, column: StatementColumn) {
        self.columns.insert(period, column);
    }

    /// Column for a given period.
    #[must_use]
    pub fn column(&self, period: &Date) -> Option<&StatementColumn> {
        self.columns.get(period)
    }

    /// Period keys in ascending order.
    pub fn periods(&self) -> impl Iterator<Item = Date> {
        self.columns.keys().copied()
    }

    /// Most recent period and its column.
    #[must_use]
    pub fn latest(&self) -> Option<(Date, &StatementColumn)> {
        self.columns.iter().next_back().map(|(d, c)| (*d, c))
    }

    /// Iterate over `(period, column)` pairs in ascending period order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &StatementColumn)> {
        self.columns.iter().map(|(d, c)| (*d, c))
    }

    /// Number of periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the table has no periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<(Date, StatementColumn)> for StatementTable {
    fn from_iter<I: IntoIterator<Item = (Date, StatementColumn)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

/// Balance sheet and income statement of one company at one frequency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialStatements {
    /// Balance sheet.
    #[serde(default)]
    pub balance_sheet: StatementTable,
    /// Income statement.
    #[serde(default)]
    pub income_statement: StatementTable,
}

impl FinancialStatements {
    /// Pair a balance sheet with an income statement.
    #[must_use]
    pub const fn new(balance_sheet: StatementTable, income_statement: StatementTable) -> Self {
        Self {
            balance_sheet,
            income_statement,
        }
    }

    /// True when either statement has no periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balance_sheet.is_empty() || self.income_statement.is_empty()
    }
}

/// Point-in-time quote and per-share figures for a ticker.
///
/// Every field is optional because vendors omit them freely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteSnapshot {
    /// Latest traded price.
    pub current_price: Option<f64>,
    /// Regular-session market price, used when `current_price` is missing.
    pub regular_market_price: Option<f64>,
    /// Vendor-reported price-to-book ratio.
    pub price_to_book: Option<f64>,
    /// Vendor-reported book value. Usually per share, occasionally a total.
    pub book_value: Option<f64>,
    /// Shares outstanding.
    pub shares_outstanding: Option<f64>,
}

impl QuoteSnapshot {
    /// Current price: `current_price`, else `regular_market_price`.
    ///
    /// Zero, negative and non-finite prices are treated as missing.
    #[must_use]
    pub fn price(&self) -> Option<f64> {
        [self.current_price, self.regular_market_price]
            .into_iter()
            .flatten()
            .find(|p| p.is_finite() && *p > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_column_get_ignores_non_finite() {
        let column = StatementColumn::new()
            .with("Total Assets", 100.0)
            .with("Cash And Cash Equivalents", f64::NAN);

        assert_eq!(column.get("Total Assets"), Some(100.0));
        assert_eq!(column.get("Cash And Cash Equivalents"), None);
        assert_eq!(column.get("Missing"), None);
        assert_eq!(column.len(), 2);
    }

    #[test]
    fn test_find_containing_respects_needle_order() {
        let column = StatementColumn::new()
            .with("Stockholders Equity", 50.0)
            .with("Common Stock Equity", 40.0);

        let found = column.find_containing(&["Common Stock Equity", "Stockholders Equity"]);
        assert_eq!(found, Some(("Common Stock Equity", 40.0)));

        let found = column.find_containing(&["Stockholders Equity"]);
        assert_eq!(found, Some(("Stockholders Equity", 50.0)));

        assert!(column.find_containing(&["Goodwill"]).is_none());
    }

    #[test]
    fn test_find_containing_matches_substrings() {
        let column = StatementColumn::new().with("Total Stockholders Equity", 75.0);
        let found = column.find_containing(&["Stockholders Equity"]);
        assert_eq!(found, Some(("Total Stockholders Equity", 75.0)));
    }

    #[test]
    fn test_table_latest_and_order() {
        let table = StatementTable::new()
            .with(date(2023, 12, 31), StatementColumn::new().with("x", 2.0))
            .with(date(2021, 12, 31), StatementColumn::new().with("x", 0.0))
            .with(date(2022, 12, 31), StatementColumn::new().with("x", 1.0));

        let periods: Vec<Date> = table.periods().collect();
        assert_eq!(
            periods,
            vec![date(2021, 12, 31), date(2022, 12, 31), date(2023, 12, 31)]
        );

        let (latest, column) = table.latest().unwrap();
        assert_eq!(latest, date(2023, 12, 31));
        assert_eq!(column.get("x"), Some(2.0));
    }

    #[test]
    fn test_statements_empty_when_either_side_empty() {
        let table = StatementTable::new().with(date(2023, 12, 31), StatementColumn::new());
        assert!(FinancialStatements::new(table.clone(), StatementTable::new()).is_empty());
        assert!(FinancialStatements::new(StatementTable::new(), table.clone()).is_empty());
        assert!(!FinancialStatements::new(table.clone(), table).is_empty());
    }

    #[test]
    fn test_quote_price_fallback() {
        let quote = QuoteSnapshot {
            current_price: Some(0.0),
            regular_market_price: Some(42.0),
            ..Default::default()
        };
        assert_eq!(quote.price(), Some(42.0));

        let quote = QuoteSnapshot {
            current_price: Some(10.0),
            regular_market_price: Some(42.0),
            ..Default::default()
        };
        assert_eq!(quote.price(), Some(10.0));

        assert_eq!(QuoteSnapshot::default().price(), None);
    }

    #[test]
    fn test_table_json_shape() {
        let json = r#"{"2023-12-31": {"Total Assets": 1000.0}}"#;
        let table: StatementTable = serde_json::from_str(json).unwrap();
        assert_eq!(
            table.column(&date(2023, 12, 31)).unwrap().get("Total Assets"),
            Some(1000.0)
        );
    }
}
