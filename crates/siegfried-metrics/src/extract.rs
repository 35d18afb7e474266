//! Period extraction from label-indexed statements.
//!
//! Extraction never fails on a missing line item. Each variable falls back to
//! zero, except pretax income which falls back to the period's operating
//! income. Only a wholly empty statement is an error.

use serde::{Deserialize, Serialize};
use siegfried_traits::{
    Date, FinancialStatements, Result, SiegfriedError, StatementColumn, labels,
};

/// The six normalized variables of one accounting period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialPeriod {
    /// Period end date.
    pub period: Date,
    /// Operating income.
    pub operating_income: f64,
    /// Income tax expense.
    pub tax_expense: f64,
    /// Income before tax.
    pub pretax_income: f64,
    /// Total assets.
    pub total_assets: f64,
    /// Cash and cash equivalents.
    pub cash: f64,
    /// Total current liabilities.
    pub current_liabilities: f64,
}

/// Normalize one period's balance-sheet and income-statement columns.
#[must_use]
pub fn extract_period(
    period: Date,
    balance: &StatementColumn,
    income: &StatementColumn,
) -> FinancialPeriod {
    let operating_income = income.get(labels::OPERATING_INCOME).unwrap_or(0.0);

    FinancialPeriod {
        period,
        operating_income,
        tax_expense: income.get(labels::TAX_PROVISION).unwrap_or(0.0),
        pretax_income: income
            .get(labels::PRETAX_INCOME)
            .unwrap_or(operating_income),
        total_assets: balance.get(labels::TOTAL_ASSETS).unwrap_or(0.0),
        cash: balance
            .get(labels::CASH_AND_CASH_EQUIVALENTS)
            .unwrap_or(0.0),
        current_liabilities: balance.get(labels::CURRENT_LIABILITIES).unwrap_or(0.0),
    }
}

/// Extract every period reported in both statements, oldest first.
///
/// Periods present in only one of the two statements are dropped.
///
/// # Errors
///
/// Returns [`SiegfriedError::NoFinancialData`] if either statement is empty.
pub fn extract_periods(statements: &FinancialStatements) -> Result<Vec<FinancialPeriod>> {
    if statements.is_empty() {
        return Err(SiegfriedError::NoFinancialData(
            "balance sheet or income statement is empty".to_string(),
        ));
    }

    Ok(statements
        .balance_sheet
        .iter()
        .filter_map(|(period, balance)| {
            statements
                .income_statement
                .column(&period)
                .map(|income| extract_period(period, balance, income))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use siegfried_traits::StatementTable;

    fn date(y: i32) -> Date {
        Date::from_ymd_opt(y, 12, 31).unwrap()
    }

    #[test]
    fn test_extract_all_fields() {
        let balance = StatementColumn::new()
            .with(labels::TOTAL_ASSETS, 1000.0)
            .with(labels::CASH_AND_CASH_EQUIVALENTS, 100.0)
            .with(labels::CURRENT_LIABILITIES, 200.0);
        let income = StatementColumn::new()
            .with(labels::OPERATING_INCOME, 150.0)
            .with(labels::TAX_PROVISION, 30.0)
            .with(labels::PRETAX_INCOME, 140.0);

        let p = extract_period(date(2023), &balance, &income);
        assert_eq!(p.period, date(2023));
        assert_relative_eq!(p.operating_income, 150.0);
        assert_relative_eq!(p.tax_expense, 30.0);
        assert_relative_eq!(p.pretax_income, 140.0);
        assert_relative_eq!(p.total_assets, 1000.0);
        assert_relative_eq!(p.cash, 100.0);
        assert_relative_eq!(p.current_liabilities, 200.0);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let p = extract_period(date(2023), &StatementColumn::new(), &StatementColumn::new());
        assert_relative_eq!(p.operating_income, 0.0);
        assert_relative_eq!(p.tax_expense, 0.0);
        assert_relative_eq!(p.pretax_income, 0.0);
        assert_relative_eq!(p.total_assets, 0.0);
        assert_relative_eq!(p.cash, 0.0);
        assert_relative_eq!(p.current_liabilities, 0.0);
    }

    #[test]
    fn test_pretax_falls_back_to_operating_income() {
        let income = StatementColumn::new()
            .with(labels::OPERATING_INCOME, 80.0)
            .with(labels::TAX_PROVISION, 20.0);
        let p = extract_period(date(2023), &StatementColumn::new(), &income);
        assert_relative_eq!(p.pretax_income, 80.0);
    }

    #[test]
    fn test_intersection_of_periods() {
        let balance = StatementTable::new()
            .with(date(2021), StatementColumn::new().with(labels::TOTAL_ASSETS, 1.0))
            .with(date(2022), StatementColumn::new().with(labels::TOTAL_ASSETS, 2.0))
            .with(date(2023), StatementColumn::new().with(labels::TOTAL_ASSETS, 3.0));
        let income = StatementTable::new()
            .with(date(2020), StatementColumn::new())
            .with(date(2022), StatementColumn::new())
            .with(date(2023), StatementColumn::new());

        let periods = extract_periods(&FinancialStatements::new(balance, income)).unwrap();
        let keys: Vec<Date> = periods.iter().map(|p| p.period).collect();
        assert_eq!(keys, vec![date(2022), date(2023)]);
        assert_relative_eq!(periods[1].total_assets, 3.0);
    }

    #[test]
    fn test_empty_statement_is_error() {
        let balance = StatementTable::new().with(date(2023), StatementColumn::new());
        let result = extract_periods(&FinancialStatements::new(balance, StatementTable::new()));
        assert!(matches!(result, Err(SiegfriedError::NoFinancialData(_))));
    }
}
