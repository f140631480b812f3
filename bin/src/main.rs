//! Aegis CLI binary.
//!
//! Provides command-line interface for defensive asset scoring.

mod cmd;
mod data;
mod output;

use aegis_engine::AnalysisConfig;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "aegis")]
#[command(about = "Defensive asset scoring against a market benchmark", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file overriding the analysis configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Benchmark symbol (overrides the configuration)
    #[arg(long, global = true)]
    benchmark: Option<String>,

    /// Show more detail and debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Human-readable tables
    Text,
    /// JSON document
    Json,
    /// Comma-separated values
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// List registry sectors
    Sectors,

    /// List the defensive rules
    Rules,

    /// Analyze individual symbols
    Analyze {
        /// Ticker symbols
        #[arg(value_delimiter = ',', required = true)]
        symbols: Vec<String>,

        /// Output format (text or json)
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Scan whole sectors of the universe
    Scan {
        /// Sector names
        #[arg(short, long, value_delimiter = ',', required_unless_present = "all")]
        sectors: Vec<String>,

        /// Scan every sector
        #[arg(long, conflicts_with = "sectors")]
        all: bool,

        /// Output format (text, json or csv)
        #[arg(long, value_enum, default_value = "text")]
        format: Format,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Logs go to stderr so JSON and CSV on stdout stay clean.
fn init_tracing(verbose: bool) {
    let default = if verbose { "aegis=debug" } else { "aegis=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&PathBuf>, benchmark: Option<String>) -> Result<AnalysisConfig> {
    let mut config = match path {
        Some(path) => AnalysisConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    if let Some(benchmark) = benchmark {
        config.benchmark_symbol = benchmark;
    }
    Ok(config)
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref(), cli.benchmark)?;

    match cli.command {
        Commands::Sectors => cmd::sectors::list_sectors(cli.verbose),
        Commands::Rules => cmd::rules::list_rules(cli.verbose),
        Commands::Analyze { symbols, format } => {
            cmd::analyze::analyze_symbols(config, &symbols, format).await
        }
        Commands::Scan {
            sectors,
            all,
            format,
            output,
        } => cmd::scan::scan_sectors(config, &sectors, all, format, output.as_deref()).await,
    }
}
