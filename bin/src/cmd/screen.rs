//! Screen command implementation.

use crate::OutputFormat;
use anyhow::{Context, Result};
use siegfried_screen::{ScreenConfig, Screener};
use siegfried_traits::FundamentalsProvider;
use std::path::Path;

/// Screen `symbols` and print the ranked report.
///
/// When `output_dir` is set, the successful rows are also written to a dated
/// CSV file there.
pub(crate) async fn run_screen<P: FundamentalsProvider>(
    provider: P,
    symbols: &[String],
    config: ScreenConfig,
    output_dir: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let years = config.roic.years;
    let screener = Screener::new(provider, config);
    let report = screener.screen(symbols).await;

    match format {
        OutputFormat::Text => {
            println!("\n╔══════════════════════════════════════════════════════════════╗");
            println!("║                 ROIC / Price-to-Book Screen                  ║");
            println!("╚══════════════════════════════════════════════════════════════╝\n");
            println!("Date:    {}", report.run_date());
            println!("Tickers: {}", symbols.len());
            println!("Years:   {years}\n");
            print!("{}", report.render_table());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if let Some(dir) = output_dir {
        let path = report
            .write_csv(dir)
            .with_context(|| format!("Failed to write CSV to {}", dir.display()))?;
        if format == OutputFormat::Text {
            println!("\nSaved {}", path.display());
        }
    }

    Ok(())
}
