//! The rule aggregator and the batch entry point.

use std::collections::HashMap;
use std::sync::Arc;

use aegis_combine::{Combiner, EqualWeightCombiner, Rating};
use aegis_rules::{
    BetaRule, CorrelationRule, DrawdownRule, TrendRule, ValuationRule, VolatilityRule,
};
use aegis_traits::{
    InstrumentData, Result, Rule, RuleError, RuleOutcome, RuleResult, Symbol,
};
use aegis_universe::{SectorRegistry, UNKNOWN_SECTOR};
use tracing::{debug, info, warn};

use crate::config::AnalysisConfig;
use crate::result::{BatchReport, InstrumentResult, RunSummary, SectorSummary};

/// Runs the six defensive rules and combines their scores.
///
/// The analyzer holds no mutable state, so one instance can serve any number
/// of instruments, from any number of threads.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use aegis_engine::{AnalysisConfig, Analyzer};
/// use aegis_universe::SectorRegistry;
///
/// let analyzer = Analyzer::new(AnalysisConfig::default(), Arc::new(SectorRegistry::standard()));
/// let result = analyzer.analyze_instrument(&instrument, &benchmark)?;
/// println!("{}: {:.1} ({})", result.symbol(), result.composite(), result.rating());
/// ```
pub struct Analyzer {
    config: AnalysisConfig,
    registry: Arc<SectorRegistry>,
    rules: Vec<Box<dyn Rule>>,
    combiner: EqualWeightCombiner,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("config", &self.config)
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .field("combiner", &self.combiner.name())
            .finish_non_exhaustive()
    }
}

impl Analyzer {
    /// Create an analyzer with the six rules in evaluation order.
    pub fn new(config: AnalysisConfig, registry: Arc<SectorRegistry>) -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(BetaRule::new()),
            Box::new(DrawdownRule::new()),
            Box::new(CorrelationRule::new()),
            Box::new(VolatilityRule::new(config.volatility())),
            Box::new(TrendRule::new(config.trend())),
            Box::new(ValuationRule::new(config.valuation.clone(), Arc::clone(&registry))),
        ];
        Self {
            config,
            registry,
            rules,
            combiner: EqualWeightCombiner::default(),
        }
    }

    /// The configuration of this analyzer.
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// The shared sector registry.
    pub const fn registry(&self) -> &Arc<SectorRegistry> {
        &self.registry
    }

    /// Scores one instrument against the benchmark.
    ///
    /// A rule that cannot be computed scores 0 with an error status and still
    /// counts toward the composite. A rule whose minimum number of prices is
    /// not met is not run at all and scores 0 the same way.
    ///
    /// # Errors
    ///
    /// Returns an error only if the combiner rejects the rule results.
    pub fn analyze_instrument(
        &self,
        instrument: &InstrumentData,
        benchmark: &InstrumentData,
    ) -> Result<InstrumentResult> {
        let symbol = instrument.symbol();
        let rules: Vec<RuleResult> = self
            .rules
            .iter()
            .map(|rule| match evaluate_checked(rule.as_ref(), instrument, benchmark) {
                Ok(result) => {
                    debug!(symbol, rule = rule.name(), score = result.score(), "rule scored");
                    result
                }
                Err(reason) => {
                    warn!(symbol, rule = rule.name(), %reason, "rule failed, scoring 0");
                    RuleResult::error(rule.kind(), &reason)
                }
            })
            .collect();

        let composite = self.combiner.combine(&rules)?;
        let sector = self
            .registry
            .sector_of(symbol)
            .unwrap_or(UNKNOWN_SECTOR)
            .to_string();

        Ok(InstrumentResult::new(
            symbol.to_string(),
            sector,
            rules,
            composite,
            Rating::from_composite(composite),
        ))
    }

    /// Scores every symbol that has a dataset, in the given order.
    ///
    /// Symbols without data, or whose rule results cannot be combined, are
    /// omitted and listed in the report; the batch itself always completes.
    /// Sector aggregates are produced for each requested sector with at least
    /// one analyzed member, matching on the registry's member lists.
    pub fn analyze_batch<S: AsRef<str>>(
        &self,
        symbols: &[Symbol],
        datasets: &HashMap<Symbol, InstrumentData>,
        benchmark: &InstrumentData,
        sectors: &[S],
    ) -> BatchReport {
        info!(instruments = symbols.len(), sectors = sectors.len(), "starting batch");

        let mut results = Vec::with_capacity(symbols.len());
        let mut omitted = Vec::new();
        for symbol in symbols {
            let Some(data) = datasets.get(symbol) else {
                warn!(symbol = symbol.as_str(), "no data, omitting");
                omitted.push(symbol.clone());
                continue;
            };
            match self.analyze_instrument(data, benchmark) {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!(symbol = symbol.as_str(), error = %e, "analysis failed, omitting");
                    omitted.push(symbol.clone());
                }
            }
        }

        let sector_summaries = sectors
            .iter()
            .filter_map(|sector| self.summarize_sector(sector.as_ref(), &results))
            .collect();
        let summary = RunSummary::from_results(&results, sectors.len());
        info!(
            analyzed = summary.analyzed,
            omitted = omitted.len(),
            excellent = summary.excellent,
            "batch complete"
        );

        BatchReport {
            results,
            omitted,
            sectors: sector_summaries,
            summary,
        }
    }

    /// Aggregates the results whose symbol the registry lists under `sector`.
    ///
    /// A symbol listed under several sectors counts toward each of them, even
    /// though its own result carries only the first.
    fn summarize_sector(
        &self,
        sector: &str,
        results: &[InstrumentResult],
    ) -> Option<SectorSummary> {
        let listed = self.registry.symbols_in(sector)?;
        let members: Vec<&InstrumentResult> = results
            .iter()
            .filter(|r| listed.iter().any(|s| s == r.symbol()))
            .collect();
        if members.is_empty() {
            return None;
        }
        let total: f64 = members.iter().map(|r| r.composite()).sum();
        Some(SectorSummary {
            sector: sector.to_string(),
            count: members.len(),
            mean_score: total / members.len() as f64,
            members: members.iter().map(|r| r.symbol().to_string()).collect(),
        })
    }
}

/// Runs `rule` only when the instrument has the prices it needs.
fn evaluate_checked(
    rule: &dyn Rule,
    instrument: &InstrumentData,
    benchmark: &InstrumentData,
) -> RuleOutcome {
    let needed = rule.min_observations();
    let got = instrument.prices().len();
    if got < needed {
        return Err(RuleError::InsufficientData { needed, got });
    }
    rule.evaluate(instrument, benchmark)
}
