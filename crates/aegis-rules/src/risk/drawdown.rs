//! Crisis resilience: drawdown relative to the benchmark.

use aegis_traits::{InstrumentData, Rule, RuleError, RuleKind, RuleOutcome, RuleResult};
use tracing::trace;

use crate::series::max_drawdown;

/// Relative drawdown `|instrument / benchmark|`, or 0 when the benchmark
/// never drew down.
#[must_use]
pub fn relative_drawdown(instrument: f64, benchmark: f64) -> f64 {
    if benchmark == 0.0 {
        0.0
    } else {
        (instrument / benchmark).abs()
    }
}

/// Maps a relative drawdown to a score.
#[must_use]
pub fn drawdown_score(ratio: f64) -> u8 {
    match ratio {
        r if r <= 0.7 => 10,
        r if r <= 0.8 => 8,
        r if r <= 0.9 => 6,
        r if r <= 1.0 => 4,
        _ => 2,
    }
}

/// Rule 2: the instrument's worst peak-to-trough decline compared with the
/// benchmark's.
///
/// Each price series is measured on its own full history; the two are not
/// aligned.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawdownRule;

impl DrawdownRule {
    /// Create a new drawdown rule.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Rule for DrawdownRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Drawdown
    }

    fn evaluate(&self, instrument: &InstrumentData, benchmark: &InstrumentData) -> RuleOutcome {
        let own = max_drawdown(instrument.prices().closes()).ok_or(
            RuleError::InsufficientData {
                needed: 1,
                got: 0,
            },
        )?;
        let market = max_drawdown(benchmark.prices().closes()).ok_or(
            RuleError::InsufficientData {
                needed: 1,
                got: 0,
            },
        )?;
        if !own.is_finite() || !market.is_finite() {
            return Err(RuleError::NonFinite("drawdown"));
        }

        let ratio = relative_drawdown(own, market);
        trace!(symbol = instrument.symbol(), own, market, ratio, "computed drawdown ratio");

        Ok(RuleResult::new(
            RuleKind::Drawdown,
            drawdown_score(ratio),
            Some(ratio),
            format!("Drawdown ratio: {:.1}%", ratio * 100.0),
        ))
    }

    fn min_observations(&self) -> usize {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::data;
    use approx::assert_relative_eq;

    #[test]
    fn test_drawdown_score_bands() {
        assert_eq!(drawdown_score(0.0), 10);
        assert_eq!(drawdown_score(0.7), 10);
        assert_eq!(drawdown_score(0.75), 8);
        assert_eq!(drawdown_score(0.9), 6);
        assert_eq!(drawdown_score(1.0), 4);
        assert_eq!(drawdown_score(1.3), 2);
    }

    #[test]
    fn test_half_the_benchmark_drawdown() {
        let stock = data("X", &[100.0, 90.0, 95.0, 105.0]);
        let market = data("SPY", &[100.0, 80.0, 90.0, 110.0]);

        let result = DrawdownRule::new().evaluate(&stock, &market).unwrap();
        assert_relative_eq!(result.value().unwrap(), 0.5, epsilon = 1e-12);
        assert_eq!(result.score(), 10);
        assert_eq!(result.description(), "Drawdown ratio: 50.0%");
    }

    #[test]
    fn test_benchmark_without_drawdown() {
        let stock = data("X", &[100.0, 70.0, 80.0]);
        let market = data("SPY", &[100.0, 101.0, 102.0]);

        let result = DrawdownRule::new().evaluate(&stock, &market).unwrap();
        assert_eq!(result.value(), Some(0.0));
        assert_eq!(result.score(), 10);
    }

    #[test]
    fn test_deeper_than_benchmark() {
        let stock = data("X", &[100.0, 60.0, 70.0]);
        let market = data("SPY", &[100.0, 80.0, 85.0]);

        let result = DrawdownRule::new().evaluate(&stock, &market).unwrap();
        assert_relative_eq!(result.value().unwrap(), 2.0, epsilon = 1e-12);
        assert_eq!(result.score(), 2);
    }

    #[test]
    fn test_empty_prices_is_an_error() {
        let stock = data("X", &[]);
        let market = data("SPY", &[100.0, 90.0]);
        assert!(matches!(
            DrawdownRule::new().evaluate(&stock, &market),
            Err(RuleError::InsufficientData { .. })
        ));
    }
}
