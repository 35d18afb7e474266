//! Single-period ratio arithmetic.
//!
//! All functions are total: division by zero yields a documented default or
//! `None`, never a panic.

use crate::extract::FinancialPeriod;
use serde::{Deserialize, Serialize};
use siegfried_traits::Date;

/// Tax rate assumed when pretax income is zero.
pub const DEFAULT_TAX_RATE: f64 = 0.25;

/// Invested capital: total assets less cash less current liabilities.
///
/// May be negative; it is not clamped.
#[must_use]
pub const fn invested_capital(total_assets: f64, cash: f64, current_liabilities: f64) -> f64 {
    total_assets - cash - current_liabilities
}

/// Effective tax rate, or [`DEFAULT_TAX_RATE`] when pretax income is zero.
#[must_use]
pub const fn tax_rate(tax_expense: f64, pretax_income: f64) -> f64 {
    if pretax_income == 0.0 {
        DEFAULT_TAX_RATE
    } else {
        tax_expense / pretax_income
    }
}

/// Net operating profit after tax.
#[must_use]
pub const fn nopat(operating_income: f64, tax_expense: f64, pretax_income: f64) -> f64 {
    operating_income * (1.0 - tax_rate(tax_expense, pretax_income))
}

/// Return on invested capital, `None` when invested capital is zero.
#[must_use]
pub const fn roic(nopat: f64, invested_capital: f64) -> Option<f64> {
    if invested_capital == 0.0 {
        None
    } else {
        Some(nopat / invested_capital)
    }
}

/// ROIC and its inputs for one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoicResult {
    /// Period end date.
    pub period: Date,
    /// Operating income the NOPAT was derived from.
    pub operating_income: f64,
    /// Tax rate applied.
    pub tax_rate: f64,
    /// Net operating profit after tax.
    pub nopat: f64,
    /// Invested capital.
    pub invested_capital: f64,
    /// NOPAT over invested capital; `None` iff invested capital is zero.
    pub roic: Option<f64>,
}

impl RoicResult {
    /// Compute every ratio for an extracted period.
    #[must_use]
    pub const fn from_period(period: &FinancialPeriod) -> Self {
        let nopat = nopat(
            period.operating_income,
            period.tax_expense,
            period.pretax_income,
        );
        let invested_capital = invested_capital(
            period.total_assets,
            period.cash,
            period.current_liabilities,
        );

        Self {
            period: period.period,
            operating_income: period.operating_income,
            tax_rate: tax_rate(period.tax_expense, period.pretax_income),
            nopat,
            invested_capital,
            roic: roic(nopat, invested_capital),
        }
    }
}
