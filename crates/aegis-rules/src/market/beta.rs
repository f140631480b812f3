//! Market beta rule.

use aegis_traits::{
    InstrumentData, Rule, RuleError, RuleKind, RuleOutcome, RuleResult, stats,
};
use tracing::trace;

use crate::align::{AlignedReturns, align};

/// Fewest aligned returns for which a covariance is defined.
const MIN_ALIGNED_RETURNS: usize = 2;

/// Beta of aligned returns: `Cov(instrument, benchmark) / Var(benchmark)`.
///
/// Both estimators use the sample denominator. A benchmark with zero variance
/// gives a beta of 0.
///
/// # Errors
///
/// Returns an error with fewer than two observations or when a return is not
/// finite.
pub fn beta(aligned: &AlignedReturns) -> Result<f64, RuleError> {
    let (x, m) = (aligned.instrument(), aligned.benchmark());
    if aligned.len() < MIN_ALIGNED_RETURNS {
        return Err(RuleError::InsufficientData {
            needed: MIN_ALIGNED_RETURNS,
            got: aligned.len(),
        });
    }
    if !stats::all_finite(x) || !stats::all_finite(m) {
        return Err(RuleError::NonFinite("returns"));
    }

    let insufficient = RuleError::InsufficientData {
        needed: MIN_ALIGNED_RETURNS,
        got: aligned.len(),
    };
    let covariance = stats::covariance(x, m).ok_or_else(|| insufficient.clone())?;
    let variance = stats::variance(m).ok_or(insufficient)?;
    if variance == 0.0 {
        return Ok(0.0);
    }
    Ok(covariance / variance)
}

/// Maps a beta to a score. Bands are symmetric around the defensive range
/// `[0.6, 0.85]`; bounds are inclusive as written.
#[must_use]
pub fn beta_score(beta: f64) -> u8 {
    if (0.6..=0.85).contains(&beta) {
        10
    } else if (0.5..0.6).contains(&beta) || (beta > 0.85 && beta <= 0.9) {
        7
    } else if (0.4..0.5).contains(&beta) || (beta > 0.9 && beta <= 1.0) {
        5
    } else {
        2
    }
}

/// Rule 1: beta against the benchmark inside the defensive band.
///
/// A defensive asset moves with the market, but by less: the ideal beta is
/// between 0.6 and 0.85.
///
/// # Example
///
/// ```ignore
/// use aegis_rules::market::BetaRule;
///
/// let rule = BetaRule::new();
/// let result = rule.evaluate(&instrument, &benchmark)?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BetaRule;

impl BetaRule {
    /// Create a new beta rule.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Rule for BetaRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Beta
    }

    fn evaluate(&self, instrument: &InstrumentData, benchmark: &InstrumentData) -> RuleOutcome {
        let aligned = align(instrument.returns(), benchmark.returns())?;
        let beta = beta(&aligned)?;
        if !beta.is_finite() {
            return Err(RuleError::NonFinite("beta"));
        }
        trace!(symbol = instrument.symbol(), beta, observations = aligned.len(), "computed beta");

        Ok(RuleResult::new(
            RuleKind::Beta,
            beta_score(beta),
            Some(beta),
            format!("Beta: {beta:.2}"),
        ))
    }

    fn min_observations(&self) -> usize {
        MIN_ALIGNED_RETURNS + 1
    }
}
