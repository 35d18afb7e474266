//! Data sources for the Siegfried CLI.

use anyhow::{Context, Result};
use siegfried_screen::fetch_sp500_symbols;
use siegfried_traits::InMemoryProvider;
use std::path::Path;

/// Where tickers come from when none are given explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UniverseSource {
    /// Every ticker in the fixture file, alphabetically.
    Fixtures(Vec<String>),
    /// S&P 500 constituents, in index-page order.
    Sp500,
}

impl UniverseSource {
    /// The first `top` tickers of the universe.
    pub(crate) async fn symbols(&self, top: usize) -> Result<Vec<String>> {
        match self {
            Self::Fixtures(symbols) => Ok(symbols.iter().take(top).cloned().collect()),
            Self::Sp500 => {
                let client = reqwest::Client::new();
                fetch_sp500_symbols(&client, Some(top))
                    .await
                    .context("Failed to load the S&P 500 universe")
            }
        }
    }
}

/// Load a fixture provider from a JSON file.
pub(crate) fn load_fixtures(path: &Path) -> Result<InMemoryProvider> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixtures {}", path.display()))?;
    InMemoryProvider::from_json(&json)
        .with_context(|| format!("Failed to parse fixtures {}", path.display()))
}
