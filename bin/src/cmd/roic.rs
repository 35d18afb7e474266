//! ROIC command implementation.

use crate::OutputFormat;
use anyhow::Result;
use siegfried_metrics::{MultiYearAggregator, RoicConfig, RoicResult, latest_roic};
use siegfried_screen::format_roic_percent;
use siegfried_traits::FundamentalsProvider;

/// Show ROIC for one ticker: every aggregated period, or only the latest.
pub(crate) async fn show_roic<P: FundamentalsProvider>(
    provider: &P,
    symbol: &str,
    config: RoicConfig,
    latest: bool,
    format: OutputFormat,
) -> Result<()> {
    if latest {
        let result = latest_roic(provider, symbol).await?;
        match format {
            OutputFormat::Text => {
                println!("Symbol: {symbol}");
                print_periods(std::slice::from_ref(&result));
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        }
        return Ok(());
    }

    let aggregator = MultiYearAggregator::new(config);
    let roic = aggregator.aggregate(provider, symbol).await;

    match format {
        OutputFormat::Text => {
            println!("Symbol: {}", roic.ticker());
            println!("Years:  {}\n", roic.years_available());
            if !roic.periods().is_empty() {
                print_periods(roic.periods());
            }
            println!("\nGeometric mean ROIC: {}", format_roic_percent(roic.aggregate()));
            println!("Status: {}", roic.status());
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&roic)?),
    }

    Ok(())
}

fn print_periods(periods: &[RoicResult]) {
    println!(
        "{:<12} {:>16} {:>9} {:>16} {:>18} {:>9}",
        "Period", "Operating Inc.", "Tax Rate", "NOPAT", "Invested Capital", "ROIC"
    );
    println!("{}", "─".repeat(85));
    for p in periods {
        println!(
            "{:<12} {:>16.0} {:>8.2}% {:>16.0} {:>18.0} {:>9}",
            p.period.to_string(),
            p.operating_income,
            p.tax_rate * 100.0,
            p.nopat,
            p.invested_capital,
            format_roic_percent(p.roic)
        );
    }
}
