//! Universe command implementation.

use crate::data::UniverseSource;
use anyhow::Result;

/// Print the first `top` tickers of the universe, one per line.
pub(crate) async fn list_universe(source: &UniverseSource, top: usize) -> Result<()> {
    for symbol in source.symbols(top).await? {
        println!("{symbol}");
    }
    Ok(())
}
