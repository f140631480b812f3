//! Sector scan command implementation.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use aegis_engine::{AnalysisConfig, Analyzer, BatchReport, results_frame, write_csv};
use aegis_fmp::FmpClient;
use aegis_universe::SectorRegistry;
use anyhow::{Context, Result, bail};
use chrono::Utc;
use tracing::{info, warn};

use crate::{Format, data, output};

/// Score every member of the selected sectors and report them ranked.
pub(crate) async fn scan_sectors(
    config: AnalysisConfig,
    sectors: &[String],
    all: bool,
    format: Format,
    output_path: Option<&Path>,
) -> Result<()> {
    let registry = Arc::new(SectorRegistry::standard());
    let sectors = resolve_sectors(&registry, sectors, all)?;
    let symbols = registry.select(&sectors);
    info!(sectors = sectors.len(), instruments = symbols.len(), "universe selected");

    let client = FmpClient::from_env()?;
    let range = data::date_range(&config, Utc::now().date_naive());
    let benchmark = data::load_benchmark(&client, &config.benchmark_symbol, range)
        .await
        .with_context(|| format!("benchmark {} is unavailable", config.benchmark_symbol))?;
    let datasets = data::load_universe(&client, &symbols, range).await;

    let benchmark_symbol = config.benchmark_symbol.clone();
    let analyzer = Analyzer::new(config, registry);
    let report = analyzer.analyze_batch(&symbols, &datasets, &benchmark, &sectors);

    match output_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            render(BufWriter::new(file), &report, &benchmark_symbol, format)?;
            info!(path = %path.display(), "results written");
        }
        None => render(io::stdout().lock(), &report, &benchmark_symbol, format)?,
    }
    Ok(())
}

/// Known sector names to scan, in registry order for `--all` and request
/// order otherwise.
fn resolve_sectors(registry: &SectorRegistry, requested: &[String], all: bool) -> Result<Vec<String>> {
    if all {
        return Ok(registry.sectors().map(String::from).collect());
    }

    let mut sectors = Vec::with_capacity(requested.len());
    for name in requested {
        let name = name.trim();
        match registry.sectors().find(|s| s.eq_ignore_ascii_case(name)) {
            Some(known) if !sectors.iter().any(|s: &String| s == known) => {
                sectors.push(known.to_string());
            }
            Some(_) => {}
            None => warn!(sector = name, "unknown sector, skipping"),
        }
    }
    if sectors.is_empty() {
        bail!("no known sectors selected; run `aegis sectors` for the list");
    }
    Ok(sectors)
}

fn render<W: Write>(mut out: W, report: &BatchReport, benchmark: &str, format: Format) -> Result<()> {
    match format {
        Format::Text => {
            output::banner(&mut out, "Defensive Sector Scan")?;
            writeln!(out, "Benchmark: {benchmark}\n")?;
            output::section(&mut out, "SUMMARY")?;
            output::run_summary(&mut out, &report.summary)?;
            output::section(&mut out, "SECTORS")?;
            output::sector_table(&mut out, &report.sectors)?;
            output::section(&mut out, "RANKING")?;
            output::ranked_table(&mut out, report)?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, report)?;
            writeln!(out)?;
        }
        Format::Csv => {
            let mut frame = results_frame(&report.results)?;
            write_csv(&mut frame, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}
