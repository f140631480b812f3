//! Correlation rule.

use aegis_traits::{
    InstrumentData, Rule, RuleError, RuleKind, RuleOutcome, RuleResult, stats,
};
use tracing::trace;

use crate::align::align;

/// Maps a correlation to a score. Bands mirror the beta rule's shape around
/// `[0.5, 0.8]`; bounds are inclusive as written.
#[must_use]
pub fn correlation_score(correlation: f64) -> u8 {
    if (0.5..=0.8).contains(&correlation) {
        10
    } else if (0.4..0.5).contains(&correlation) || (correlation > 0.8 && correlation <= 0.9) {
        7
    } else if (0.3..0.4).contains(&correlation) || (correlation > 0.9 && correlation <= 1.0) {
        5
    } else {
        2
    }
}

/// Rule 3: moderate, stable correlation with the benchmark.
///
/// Moderate correlation keeps diversification value while the asset stays
/// linked to the market.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorrelationRule;

impl CorrelationRule {
    /// Create a new correlation rule.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Rule for CorrelationRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Correlation
    }

    fn evaluate(&self, instrument: &InstrumentData, benchmark: &InstrumentData) -> RuleOutcome {
        let aligned = align(instrument.returns(), benchmark.returns())?;
        if aligned.len() < 2 {
            return Err(RuleError::InsufficientData {
                needed: 2,
                got: aligned.len(),
            });
        }
        if !stats::all_finite(aligned.instrument()) || !stats::all_finite(aligned.benchmark()) {
            return Err(RuleError::NonFinite("returns"));
        }

        // undefined when either side never moves
        let correlation = stats::pearson(aligned.instrument(), aligned.benchmark())
            .ok_or(RuleError::DegenerateBenchmark)?;
        trace!(symbol = instrument.symbol(), correlation, "computed correlation");

        Ok(RuleResult::new(
            RuleKind::Correlation,
            correlation_score(correlation),
            Some(correlation),
            format!("Correlation: {correlation:.2}"),
        ))
    }

    fn min_observations(&self) -> usize {
        3
    }
}
