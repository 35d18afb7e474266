//! Line-item labels shared by providers and extractors.
//!
//! Providers must publish statement rows under these labels; the extractor
//! looks them up verbatim.

/// Income statement: operating income.
pub const OPERATING_INCOME: &str = "Operating Income";
/// Income statement: income tax expense.
pub const TAX_PROVISION: &str = "Tax Provision";
/// Income statement: income before tax.
pub const PRETAX_INCOME: &str = "Pretax Income";
/// Income statement: net income.
pub const NET_INCOME: &str = "Net Income";
/// Income statement: revenue.
pub const TOTAL_REVENUE: &str = "Total Revenue";

/// Balance sheet: total assets.
pub const TOTAL_ASSETS: &str = "Total Assets";
/// Balance sheet: cash and cash equivalents.
pub const CASH_AND_CASH_EQUIVALENTS: &str = "Cash And Cash Equivalents";
/// Balance sheet: total current liabilities.
pub const CURRENT_LIABILITIES: &str = "Current Liabilities";
/// Balance sheet: equity attributable to common shareholders.
pub const COMMON_STOCK_EQUITY: &str = "Common Stock Equity";
/// Balance sheet: total stockholders' equity.
pub const STOCKHOLDERS_EQUITY: &str = "Stockholders Equity";
/// Balance sheet: equity including minority interests.
pub const TOTAL_EQUITY: &str = "Total Equity Gross Minority Interest";
