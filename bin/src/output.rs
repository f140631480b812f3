//! Text rendering for analysis results.
//!
//! Everything writes to an `io::Write` so the same tables can go to stdout or
//! to the `--output` file.

use std::io::{self, Write};

use aegis_engine::{BatchReport, InstrumentResult, RunSummary, SectorSummary};
use aegis_traits::RuleKind;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Boxed page title.
pub(crate) fn banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "\n╔{}╗", "═".repeat(62))?;
    writeln!(out, "║{title:^62}║")?;
    writeln!(out, "╚{}╝\n", "═".repeat(62))
}

/// Section heading between heavy rules.
pub(crate) fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{RULE}\n")
}

/// Full per-rule breakdown of one instrument.
pub(crate) fn instrument_detail<W: Write>(out: &mut W, result: &InstrumentResult) -> io::Result<()> {
    writeln!(
        out,
        "{} ({})  composite {:.2}/10  {}",
        result.symbol(),
        result.sector(),
        result.composite(),
        result.rating().label()
    )?;
    writeln!(out, "{}", "─".repeat(62))?;
    for rule in result.rules() {
        writeln!(
            out,
            "  {:<22} {:>2}/10  {:<12} {}",
            rule.rule().title(),
            rule.score(),
            rule.status().label(),
            rule.description()
        )?;
    }
    writeln!(out)
}

/// Headline counts of a batch.
pub(crate) fn run_summary<W: Write>(out: &mut W, summary: &RunSummary) -> io::Result<()> {
    writeln!(out, "Sectors selected:  {}", summary.sectors_selected)?;
    writeln!(out, "Instruments:       {}", summary.analyzed)?;
    writeln!(out, "Excellent (>= 8):  {}", summary.excellent)?;
    writeln!(out, "Good (6 to 8):     {}", summary.good)?;
    match summary.mean_score {
        Some(mean) => writeln!(out, "Mean score:        {mean:.2}")?,
        None => writeln!(out, "Mean score:        n/a")?,
    }
    writeln!(out)
}

/// Per-sector counts and mean composites.
pub(crate) fn sector_table<W: Write>(out: &mut W, sectors: &[SectorSummary]) -> io::Result<()> {
    writeln!(out, "{:<26} {:>8} {:>12}", "Sector", "Count", "Mean score")?;
    writeln!(out, "{}", "─".repeat(48))?;
    for sector in sectors {
        writeln!(
            out,
            "{:<26} {:>8} {:>12.2}",
            sector.sector, sector.count, sector.mean_score
        )?;
    }
    writeln!(out)
}

/// Ranked table with one score column per rule.
pub(crate) fn ranked_table<W: Write>(out: &mut W, report: &BatchReport) -> io::Result<()> {
    write!(out, "{:>4}  {:<8} {:<24} {:>6}", "#", "Symbol", "Sector", "Score")?;
    for kind in RuleKind::ALL {
        write!(out, " {:>11}", kind.name())?;
    }
    writeln!(out)?;
    writeln!(out, "{}", "─".repeat(46 + 12 * RuleKind::ALL.len()))?;

    for (rank, result) in report.ranked().into_iter().enumerate() {
        write!(
            out,
            "{:>4}  {:<8} {:<24} {:>6.2}",
            rank + 1,
            result.symbol(),
            truncate(result.sector(), 24),
            result.composite()
        )?;
        for kind in RuleKind::ALL {
            match result.rule(kind) {
                Some(rule) => write!(out, " {:>11}", rule.score())?,
                None => write!(out, " {:>11}", "-")?,
            }
        }
        writeln!(out)?;
    }
    writeln!(out)?;

    if !report.omitted.is_empty() {
        writeln!(out, "Omitted (no data): {}", report.omitted.join(", "))?;
        writeln!(out)?;
    }
    Ok(())
}

fn truncate(text: &str, width: usize) -> &str {
    text.char_indices().nth(width).map_or(text, |(i, _)| &text[..i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_is_boxed() {
        let mut out = Vec::new();
        banner(&mut out, "Sectors").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("╔"));
        assert!(text.contains("Sectors"));
        let title_line = text.lines().find(|l| l.contains("Sectors")).unwrap();
        assert_eq!(title_line.chars().count(), 64);
    }

    #[test]
    fn test_run_summary_without_results() {
        let summary = RunSummary {
            analyzed: 0,
            excellent: 0,
            good: 0,
            mean_score: None,
            sectors_selected: 2,
        };
        let mut out = Vec::new();
        run_summary(&mut out, &summary).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("n/a"));
        assert!(text.contains("Sectors selected:  2"));
    }

    #[test]
    fn test_sector_table() {
        let sectors = [SectorSummary {
            sector: "Utilities".into(),
            count: 3,
            mean_score: 7.25,
            members: vec!["DUK".into(), "SO".into(), "NEE".into()],
        }];
        let mut out = Vec::new();
        sector_table(&mut out, &sectors).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Utilities"));
        assert!(text.contains("7.25"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Communication Services", 9), "Communica");
        assert_eq!(truncate("Energy", 24), "Energy");
    }
}
