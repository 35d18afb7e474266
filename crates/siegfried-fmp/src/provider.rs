//! [`FundamentalsProvider`] implementation backed by the FMP API.
//!
//! FMP returns one JSON object per period with camelCase fields. These are
//! pivoted into label-indexed [`StatementTable`]s so the extractor never sees
//! vendor field names.

use crate::{
    client::FmpClient,
    types::{BalanceSheet, IncomeStatement, Period, Quote, RatiosTtm},
};
use siegfried_traits::{
    Frequency, FundamentalsProvider, QuoteSnapshot, Result, StatementColumn, StatementTable,
    labels,
};
use tracing::debug;

impl FundamentalsProvider for FmpClient {
    async fn balance_sheet(&self, symbol: &str, frequency: Frequency) -> Result<StatementTable> {
        let sheets = self
            .balance_sheet(symbol, Period::from(frequency), None)
            .await?;
        Ok(balance_table(&sheets))
    }

    async fn income_statement(
        &self,
        symbol: &str,
        frequency: Frequency,
    ) -> Result<StatementTable> {
        let statements = self
            .income_statement(symbol, Period::from(frequency), None)
            .await?;
        Ok(income_table(&statements))
    }

    async fn quote(&self, symbol: &str) -> Result<QuoteSnapshot> {
        let quote = self.quote(symbol).await?;
        // Ratios only feed the P/B fallbacks; a failure here must not hide the price.
        let ratios = self.ratios_ttm(symbol).await.unwrap_or_else(|e| {
            debug!(symbol, error = %e, "TTM ratios unavailable");
            None
        });
        Ok(quote_snapshot(&quote, ratios.as_ref()))
    }
}

fn push(column: &mut StatementColumn, label: &str, value: Option<f64>) {
    if let Some(v) = value {
        column.insert(label, v);
    }
}

/// Pivot FMP income statements into a label-indexed table.
///
/// Rows with an unparseable date are skipped.
pub(crate) fn income_table(statements: &[IncomeStatement]) -> StatementTable {
    statements
        .iter()
        .filter_map(|s| {
            let date = s.parsed_date()?;
            let mut column = StatementColumn::new();
            push(&mut column, labels::TOTAL_REVENUE, s.revenue);
            push(&mut column, labels::OPERATING_INCOME, s.operating_income);
            push(&mut column, labels::PRETAX_INCOME, s.income_before_tax);
            push(&mut column, labels::TAX_PROVISION, s.income_tax_expense);
            push(&mut column, labels::NET_INCOME, s.net_income);
            Some((date, column))
        })
        .collect()
}

/// Pivot FMP balance sheets into a label-indexed table.
pub(crate) fn balance_table(sheets: &[BalanceSheet]) -> StatementTable {
    sheets
        .iter()
        .filter_map(|s| {
            let date = s.parsed_date()?;
            let mut column = StatementColumn::new();
            push(&mut column, labels::TOTAL_ASSETS, s.total_assets);
            push(
                &mut column,
                labels::CASH_AND_CASH_EQUIVALENTS,
                s.cash_and_cash_equivalents,
            );
            push(
                &mut column,
                labels::CURRENT_LIABILITIES,
                s.total_current_liabilities,
            );
            push(
                &mut column,
                labels::STOCKHOLDERS_EQUITY,
                s.total_stockholders_equity,
            );
            push(&mut column, labels::TOTAL_EQUITY, s.total_equity);
            Some((date, column))
        })
        .collect()
}

pub(crate) fn quote_snapshot(quote: &Quote, ratios: Option<&RatiosTtm>) -> QuoteSnapshot {
    QuoteSnapshot {
        current_price: quote.price,
        regular_market_price: quote.previous_close,
        price_to_book: ratios.and_then(|r| r.price_to_book_ratio),
        book_value: ratios.and_then(|r| r.book_value_per_share),
        shares_outstanding: quote.shares(),
    }
}
