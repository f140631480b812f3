//! Per-instrument and per-batch analysis results.

use aegis_combine::Rating;
use aegis_traits::{RuleKind, RuleResult, Symbol};
use serde::{Deserialize, Serialize};

/// Outcome of the six rules for one instrument.
///
/// Built once by the analyzer and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentResult {
    symbol: Symbol,
    sector: String,
    rules: Vec<RuleResult>,
    composite: f64,
    rating: Rating,
}

impl InstrumentResult {
    pub(crate) const fn new(
        symbol: Symbol,
        sector: String,
        rules: Vec<RuleResult>,
        composite: f64,
        rating: Rating,
    ) -> Self {
        Self {
            symbol,
            sector,
            rules,
            composite,
            rating,
        }
    }

    /// Instrument symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Sector from the registry, or "Unknown".
    pub fn sector(&self) -> &str {
        &self.sector
    }

    /// Rule results in evaluation order.
    pub fn rules(&self) -> &[RuleResult] {
        &self.rules
    }

    /// Result of one rule.
    pub fn rule(&self, kind: RuleKind) -> Option<&RuleResult> {
        self.rules.iter().find(|r| r.rule() == kind)
    }

    /// Unweighted mean of the rule scores.
    pub const fn composite(&self) -> f64 {
        self.composite
    }

    /// Rating band of the composite.
    pub const fn rating(&self) -> Rating {
        self.rating
    }
}

/// Aggregate of one requested sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorSummary {
    /// Sector name
    pub sector: String,
    /// Number of analyzed instruments in the sector
    pub count: usize,
    /// Mean composite score of those instruments
    pub mean_score: f64,
    /// Analyzed symbols the registry lists under this sector, in input order
    pub members: Vec<Symbol>,
}

/// Headline counts for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Instruments analyzed
    pub analyzed: usize,
    /// Instruments with a composite of 8 or more
    pub excellent: usize,
    /// Instruments with a composite from 6 up to 8
    pub good: usize,
    /// Mean composite, `None` when nothing was analyzed
    pub mean_score: Option<f64>,
    /// Number of sectors requested
    pub sectors_selected: usize,
}

impl RunSummary {
    pub(crate) fn from_results(results: &[InstrumentResult], sectors_selected: usize) -> Self {
        let composites: Vec<f64> = results.iter().map(InstrumentResult::composite).collect();
        let mean_score = (!composites.is_empty())
            .then(|| composites.iter().sum::<f64>() / composites.len() as f64);
        Self {
            analyzed: results.len(),
            excellent: composites.iter().filter(|&&c| c >= 8.0).count(),
            good: composites.iter().filter(|&&c| (6.0..8.0).contains(&c)).count(),
            mean_score,
            sectors_selected,
        }
    }
}

/// Everything a batch run hands to presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Results in input order
    pub results: Vec<InstrumentResult>,
    /// Symbols skipped for lack of data
    pub omitted: Vec<Symbol>,
    /// Per-sector aggregates in request order
    pub sectors: Vec<SectorSummary>,
    /// Headline counts
    pub summary: RunSummary,
}

impl BatchReport {
    /// Results sorted by composite, best first. Ties keep input order.
    pub fn ranked(&self) -> Vec<&InstrumentResult> {
        let mut ranked: Vec<_> = self.results.iter().collect();
        ranked.sort_by(|a, b| b.composite.total_cmp(&a.composite));
        ranked
    }

    /// Results counted toward the aggregate of `sector`, best first.
    ///
    /// Empty when `sector` was not requested or had no analyzed member.
    pub fn sector_members(&self, sector: &str) -> Vec<&InstrumentResult> {
        let Some(summary) = self.sectors.iter().find(|s| s.sector == sector) else {
            return Vec::new();
        };
        self.ranked()
            .into_iter()
            .filter(|r| summary.members.contains(&r.symbol))
            .collect()
    }
}
