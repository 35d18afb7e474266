//! Siegfried CLI binary.
//!
//! Screens equities for high multi-year ROIC at a low price-to-book ratio.

mod cmd;
mod data;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use cmd::{pb::show_price_to_book, roic::show_roic, screen::run_screen, universe::list_universe};
use data::UniverseSource;
use siegfried_fmp::FmpClient;
use siegfried_screen::{ScreenConfig, normalize_symbol};
use siegfried_traits::FundamentalsProvider;
use std::{path::PathBuf, process};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "siegfried")]
#[command(about = "ROIC / price-to-book value screener", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read fundamentals from a JSON fixture file instead of FMP
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Screen a universe and rank by P/B then ROIC
    Screen {
        /// Ticker symbol(s); defaults to the universe
        #[arg(short, long, value_delimiter = ',')]
        symbols: Vec<String>,

        /// Number of universe symbols to screen
        #[arg(short = 'k', long, default_value = "100")]
        top: usize,

        /// Most recent annual periods to aggregate
        #[arg(short, long)]
        years: Option<usize>,

        /// Directory for the dated CSV export
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Skip the CSV export
        #[arg(long)]
        no_csv: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show per-period and aggregate ROIC for one ticker
    Roic {
        /// Ticker symbol
        symbol: String,

        /// Most recent annual periods to aggregate
        #[arg(short, long)]
        years: Option<usize>,

        /// Only the most recent period
        #[arg(long)]
        latest: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Resolve the price-to-book ratio for one ticker
    Pb {
        /// Ticker symbol
        symbol: String,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List the screening universe
    Universe {
        /// Number of symbols to list
        #[arg(short = 'k', long, default_value = "100")]
        top: usize,
    },
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "siegfried=debug" } else { "siegfried=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => ScreenConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ScreenConfig::default(),
    };
    debug!(?config, "screen configuration");

    match &cli.fixtures {
        Some(path) => {
            let provider = data::load_fixtures(path)?;
            let source = UniverseSource::Fixtures(provider.symbols().map(str::to_string).collect());
            execute(provider, &source, cli.command, config).await
        }
        None => {
            let source = UniverseSource::Sp500;
            // Listing the universe needs no market data.
            if let Commands::Universe { top } = cli.command {
                return list_universe(&source, top).await;
            }
            let provider = FmpClient::from_env()
                .context("FMP client unavailable; set FMP_API_KEY or pass --fixtures")?;
            execute(provider, &source, cli.command, config).await
        }
    }
}

async fn execute<P: FundamentalsProvider>(
    provider: P,
    source: &UniverseSource,
    command: Commands,
    mut config: ScreenConfig,
) -> Result<()> {
    match command {
        Commands::Screen {
            symbols,
            top,
            years,
            output_dir,
            no_csv,
            format,
        } => {
            if let Some(years) = years {
                config.roic.years = years;
            }
            let symbols = if symbols.is_empty() {
                source.symbols(top).await?
            } else {
                symbols.iter().map(|s| normalize_symbol(s)).collect()
            };
            let output_dir = (!no_csv).then_some(output_dir.as_path());
            run_screen(provider, &symbols, config, output_dir, format).await?;
        }
        Commands::Roic {
            symbol,
            years,
            latest,
            format,
        } => {
            if let Some(years) = years {
                config.roic.years = years;
            }
            show_roic(&provider, &normalize_symbol(&symbol), config.roic, latest, format).await?;
        }
        Commands::Pb { symbol, format } => {
            show_price_to_book(&provider, &normalize_symbol(&symbol), config.price_to_book, format)
                .await?;
        }
        Commands::Universe { top } => {
            list_universe(source, top).await?;
        }
    }

    Ok(())
}
