//! CLI entrypoint for Company Pulse
//!
//! This is the main binary that wires together all layers using
//! dependency injection: simulated source adapters from the
//! infrastructure layer are injected into the application use cases,
//! and results are rendered to the terminal.

mod format;
mod progress;

use anyhow::Result;
use clap::{Parser, Subcommand};
use progress::ConsoleProgress;
use pulse_application::{
    AnalyzeCompanyInput, AnalyzeCompanyUseCase, CompareCompaniesInput, CompareCompaniesUseCase,
    InsightSource, MarketDataProvider, SentimentExtractor,
};
use pulse_infrastructure::{
    ConfigLoader, FileConfig, LexiconSentimentExtractor, SimulatedInsightSource,
    SyntheticMarketData,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "company-pulse",
    about = "Sentiment and market pulse reports for companies",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON instead of the formatted report
    #[arg(long, global = true)]
    json: bool,

    /// Path to a config file (defaults to ./pulse.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for the simulated sources (overrides the config file)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Produce a sentiment report with a market snapshot for one company
    Analyze {
        /// Company name (at least 2 characters)
        company: String,
    },
    /// Compare market data across several companies
    Compare {
        /// Company names; one result per name, in the same order
        #[arg(required = true)]
        companies: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = ConfigLoader::load(cli.config.as_deref())?;
    if cli.json || !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting Company Pulse");

    // === Dependency Injection ===
    let (insight_source, extractor, market_data) = build_sources(&cli, &config);

    match cli.command {
        Command::Analyze { company } => {
            let use_case = AnalyzeCompanyUseCase::new(insight_source, extractor, market_data);
            let input = AnalyzeCompanyInput::new(company);

            let result = if cli.quiet {
                use_case.execute(input).await
            } else {
                use_case.execute_with_progress(input, &ConsoleProgress).await
            };

            match result {
                Ok(report) => {
                    if cli.json {
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    } else {
                        println!("{}", format::format_analysis(&report));
                    }
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        Command::Compare { companies } => {
            let use_case = CompareCompaniesUseCase::new(market_data);
            let input = CompareCompaniesInput::new(companies);

            let result = if cli.quiet {
                use_case.execute(input).await
            } else {
                use_case.execute_with_progress(input, &ConsoleProgress).await
            };

            match result {
                Ok(items) => {
                    if cli.json {
                        println!("{}", serde_json::to_string_pretty(&items)?);
                    } else {
                        println!("{}", format::format_comparison(&items));
                    }
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Build the source adapters from CLI flags and file config.
///
/// The seed flag wins over the config file; either makes the whole
/// pipeline deterministic.
fn build_sources(
    cli: &Cli,
    config: &FileConfig,
) -> (
    Arc<dyn InsightSource>,
    Arc<dyn SentimentExtractor>,
    Arc<dyn MarketDataProvider>,
) {
    let seed = cli.seed.or(config.market.seed);
    let failure_rate = config.market.failure_rate;

    let insight = match seed {
        Some(seed) => SimulatedInsightSource::from_seed(seed),
        None => SimulatedInsightSource::new(),
    }
    .with_failure_rate(failure_rate);

    let market = match seed {
        Some(seed) => SyntheticMarketData::from_seed(seed),
        None => SyntheticMarketData::new(),
    }
    .with_failure_rate(failure_rate);

    (
        Arc::new(insight),
        Arc::new(LexiconSentimentExtractor::new()),
        Arc::new(market),
    )
}
