//! Ticker universe discovery.
//!
//! The default universe is the S&P 500, read from the constituents table on
//! Wikipedia. Symbols are normalized to the provider's share-class form
//! (`BRK.B` becomes `BRK-B`).

use crate::error::ScreenError;
use scraper::{Html, Selector};
use tracing::{debug, info};

/// Page listing the S&P 500 constituents.
pub const SP500_URL: &str = "https://en.wikipedia.org/wiki/List_of_S%26P_500_companies";

const USER_AGENT: &str = "Mozilla/5.0 (compatible; siegfried-screener)";

/// Normalize a ticker: trim whitespace and replace `.` with `-`.
#[must_use]
pub fn normalize_symbol(raw: &str) -> String {
    raw.trim().replace('.', "-")
}

fn selector(css: &str) -> Result<Selector, ScreenError> {
    Selector::parse(css)
        .map_err(|e| ScreenError::Universe(format!("invalid selector {css}: {e:?}")))
}

/// Extract the ticker column of the constituents table from `html`.
///
/// Uses the table with id `constituents`, or the first `wikitable` when the
/// page has no such id. The ticker is the first cell of each body row. At
/// most `limit` symbols are returned, in page order.
///
/// # Errors
///
/// Returns [`ScreenError::Universe`] if no table or no symbols are found.
pub fn parse_constituents(html: &str, limit: Option<usize>) -> Result<Vec<String>, ScreenError> {
    let document = Html::parse_document(html);
    let table = document
        .select(&selector("table#constituents")?)
        .next()
        .or_else(|| {
            selector("table.wikitable")
                .ok()
                .and_then(|s| document.select(&s).next())
        })
        .ok_or_else(|| ScreenError::Universe("constituents table not found".to_string()))?;

    let rows = selector("tr")?;
    let first_cell = selector("td")?;
    let limit = limit.unwrap_or(usize::MAX);

    let symbols: Vec<String> = table
        .select(&rows)
        .filter_map(|row| row.select(&first_cell).next())
        .map(|cell| normalize_symbol(&cell.text().collect::<String>()))
        .filter(|symbol| !symbol.is_empty())
        .take(limit)
        .collect();

    if symbols.is_empty() {
        return Err(ScreenError::Universe(
            "constituents table has no symbols".to_string(),
        ));
    }
    Ok(symbols)
}

/// Download and parse the S&P 500 constituents.
///
/// # Errors
///
/// Returns an error if the request fails, the server answers with a non-2xx
/// status, or the page has no constituents table.
pub async fn fetch_sp500_symbols(
    client: &reqwest::Client,
    limit: Option<usize>,
) -> Result<Vec<String>, ScreenError> {
    debug!(url = SP500_URL, "fetching S&P 500 constituents");
    let html = client
        .get(SP500_URL)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let symbols = parse_constituents(&html, limit)?;
    info!(count = symbols.len(), "loaded S&P 500 universe");
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <table class="wikitable" id="other">
          <tr><th>Not it</th></tr>
          <tr><td>ZZZ</td></tr>
        </table>
        <table class="wikitable sortable" id="constituents">
          <thead><tr><th>Symbol</th><th>Security</th></tr></thead>
          <tbody>
            <tr><td><a href="/mmm">MMM</a>
            </td><td>3M</td></tr>
            <tr><td>BRK.B</td><td>Berkshire Hathaway</td></tr>
            <tr><td> BF.B </td><td>Brown-Forman</td></tr>
            <tr><td>AAPL</td><td>Apple Inc.</td></tr>
          </tbody>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol("BRK.B"), "BRK-B");
        assert_eq!(normalize_symbol("  AAPL\n"), "AAPL");
        assert_eq!(normalize_symbol("MSFT"), "MSFT");
    }

    #[test]
    fn test_parse_constituents_table() {
        let symbols = parse_constituents(PAGE, None).unwrap();
        assert_eq!(symbols, vec!["MMM", "BRK-B", "BF-B", "AAPL"]);
    }

    #[test]
    fn test_parse_constituents_limit() {
        let symbols = parse_constituents(PAGE, Some(2)).unwrap();
        assert_eq!(symbols, vec!["MMM", "BRK-B"]);
    }

    #[test]
    fn test_parse_falls_back_to_wikitable() {
        let html = r#"<table class="wikitable"><tr><td>KO</td><td>Coca-Cola</td></tr></table>"#;
        assert_eq!(parse_constituents(html, None).unwrap(), vec!["KO"]);
    }

    #[test]
    fn test_parse_without_table() {
        let result = parse_constituents("<html><body><p>nothing</p></body></html>", None);
        assert!(matches!(result, Err(ScreenError::Universe(_))));
    }
}
