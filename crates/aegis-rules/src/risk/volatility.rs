//! Low volatility: annualized volatility relative to the benchmark.

use aegis_traits::{InstrumentData, Rule, RuleError, RuleKind, RuleOutcome, RuleResult};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::align::align;
use crate::series::{TRADING_DAYS_PER_YEAR, annualized_volatility};

/// Configuration for the relative volatility rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolatilityConfig {
    /// Return periods per year used to annualize (default: 252 trading days)
    pub periods_per_year: usize,
}

impl Default for VolatilityConfig {
    fn default() -> Self {
        Self {
            periods_per_year: TRADING_DAYS_PER_YEAR,
        }
    }
}

/// Maps a relative volatility to a score.
#[must_use]
pub fn volatility_score(ratio: f64) -> u8 {
    match ratio {
        r if r <= 0.8 => 10,
        r if r <= 0.9 => 8,
        r if r <= 1.0 => 6,
        r if r <= 1.2 => 4,
        _ => 2,
    }
}

/// Rule 4: annualized volatility as a fraction of the benchmark's.
///
/// Both volatilities are computed on the date-aligned returns. A flat
/// benchmark gives a ratio of 0.
#[derive(Debug, Clone)]
pub struct VolatilityRule {
    config: VolatilityConfig,
}

impl VolatilityRule {
    /// Create a new volatility rule with the given configuration.
    #[must_use]
    pub const fn new(config: VolatilityConfig) -> Self {
        Self { config }
    }

    /// Return periods per year used to annualize.
    #[must_use]
    pub const fn periods_per_year(&self) -> usize {
        self.config.periods_per_year
    }
}

impl Default for VolatilityRule {
    fn default() -> Self {
        Self::new(VolatilityConfig::default())
    }
}

impl Rule for VolatilityRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Volatility
    }

    fn evaluate(&self, instrument: &InstrumentData, benchmark: &InstrumentData) -> RuleOutcome {
        let aligned = align(instrument.returns(), benchmark.returns())?;
        let insufficient = || RuleError::InsufficientData {
            needed: 2,
            got: aligned.len(),
        };

        let own = annualized_volatility(aligned.instrument(), self.config.periods_per_year)
            .ok_or_else(insufficient)?;
        let market = annualized_volatility(aligned.benchmark(), self.config.periods_per_year)
            .ok_or_else(insufficient)?;
        if !own.is_finite() || !market.is_finite() {
            return Err(RuleError::NonFinite("volatility"));
        }

        let ratio = if market == 0.0 { 0.0 } else { own / market };
        trace!(symbol = instrument.symbol(), own, market, ratio, "computed relative volatility");

        Ok(RuleResult::new(
            RuleKind::Volatility,
            volatility_score(ratio),
            Some(ratio),
            format!("Relative volatility: {ratio:.1}"),
        ))
    }

    fn min_observations(&self) -> usize {
        3
    }
}
