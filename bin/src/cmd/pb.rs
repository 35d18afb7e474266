//! Price-to-book command implementation.

use crate::OutputFormat;
use anyhow::Result;
use siegfried_metrics::{PriceToBookConfig, PriceToBookResolver};
use siegfried_traits::FundamentalsProvider;

/// Resolve and print the P/B ratio of one ticker.
pub(crate) async fn show_price_to_book<P: FundamentalsProvider>(
    provider: &P,
    symbol: &str,
    config: PriceToBookConfig,
    format: OutputFormat,
) -> Result<()> {
    let resolver = PriceToBookResolver::new(config);
    let pb = resolver.resolve(provider, symbol).await;

    match format {
        OutputFormat::Text => {
            let ratio = pb
                .ratio
                .map_or_else(|| "N/A".to_string(), |r| format!("{r:.2}"));
            println!("Symbol: {}", pb.ticker);
            println!("P/B:    {ratio}");
            println!("Source: {}", pb.source);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&pb)?),
    }

    Ok(())
}
