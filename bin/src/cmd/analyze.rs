//! Analyze command implementation.

use std::io::{self, Write};
use std::sync::Arc;

use aegis_engine::{AnalysisConfig, Analyzer, InstrumentResult};
use aegis_fmp::FmpClient;
use aegis_traits::Symbol;
use aegis_universe::SectorRegistry;
use anyhow::{Context, Result, bail};
use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::{Format, data, output};

/// Score individual symbols against the benchmark.
pub(crate) async fn analyze_symbols(
    config: AnalysisConfig,
    symbols: &[String],
    format: Format,
) -> Result<()> {
    if format == Format::Csv {
        bail!("csv output is only available for scan");
    }

    let registry = Arc::new(SectorRegistry::standard());
    let symbols = normalize(&registry, symbols);
    let client = FmpClient::from_env()?;
    let range = data::date_range(&config, Utc::now().date_naive());
    info!(from = %range.0, to = %range.1, instruments = symbols.len(), "fetching data");

    let benchmark = data::load_benchmark(&client, &config.benchmark_symbol, range)
        .await
        .with_context(|| format!("benchmark {} is unavailable", config.benchmark_symbol))?;
    let datasets = data::load_universe(&client, &symbols, range).await;

    let benchmark_symbol = config.benchmark_symbol.clone();
    let analyzer = Analyzer::new(config, registry);
    let mut results = Vec::with_capacity(symbols.len());
    let mut omitted = Vec::new();
    for symbol in &symbols {
        match datasets.get(symbol) {
            Some(data) => results.push(analyzer.analyze_instrument(data, &benchmark)?),
            None => omitted.push(symbol.clone()),
        }
    }

    let mut out = io::stdout().lock();
    match format {
        Format::Json => {
            let document = json!({
                "benchmark": benchmark_symbol,
                "results": results,
                "omitted": omitted,
            });
            serde_json::to_writer_pretty(&mut out, &document)?;
            writeln!(out)?;
        }
        _ => render_text(&mut out, &benchmark_symbol, &results, &omitted)?,
    }
    Ok(())
}

/// Upper-cases and translates symbols to data-feed notation.
fn normalize(registry: &SectorRegistry, symbols: &[String]) -> Vec<Symbol> {
    symbols
        .iter()
        .map(|s| registry.adjust_symbol(&s.trim().to_uppercase()).to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn render_text<W: Write>(
    out: &mut W,
    benchmark: &str,
    results: &[InstrumentResult],
    omitted: &[Symbol],
) -> io::Result<()> {
    output::banner(out, "Defensive Analysis")?;
    writeln!(out, "Benchmark: {benchmark}\n")?;
    for result in results {
        output::instrument_detail(out, result)?;
    }
    if !omitted.is_empty() {
        writeln!(out, "No data for: {}\n", omitted.join(", "))?;
    }
    Ok(())
}
