//! Trend persistence: share of days spent above the long moving average.

use aegis_traits::{InstrumentData, Rule, RuleError, RuleKind, RuleOutcome, RuleResult};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::series::moving_average;

/// Configuration for the trend persistence rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Moving average window in trading days (default: 200)
    pub window: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self { window: 200 }
    }
}

/// Fraction of observations with a defined moving average on which the price
/// closed strictly above it.
///
/// Returns `None` when no observation has a defined moving average.
#[must_use]
pub fn persistence(prices: &[f64], window: usize) -> Option<f64> {
    let (above, defined) = prices
        .iter()
        .zip(moving_average(prices, window))
        .filter_map(|(&price, ma)| ma.map(|ma| price > ma))
        .fold((0usize, 0usize), |(above, defined), is_above| {
            (above + usize::from(is_above), defined + 1)
        });
    (defined > 0).then(|| above as f64 / defined as f64)
}

/// Maps a trend persistence ratio to a score.
#[must_use]
pub fn trend_score(ratio: f64) -> u8 {
    match ratio {
        r if r >= 0.7 => 10,
        r if r >= 0.6 => 8,
        r if r >= 0.5 => 6,
        r if r >= 0.4 => 4,
        _ => 2,
    }
}

/// Rule 5: how persistently the price holds above its long moving average.
///
/// The benchmark is not used.
#[derive(Debug, Clone)]
pub struct TrendRule {
    config: TrendConfig,
}

impl TrendRule {
    /// Create a new trend rule with the given configuration.
    #[must_use]
    pub const fn new(config: TrendConfig) -> Self {
        Self { config }
    }

    /// Moving average window in trading days.
    #[must_use]
    pub const fn window(&self) -> usize {
        self.config.window
    }
}

impl Default for TrendRule {
    fn default() -> Self {
        Self::new(TrendConfig::default())
    }
}

impl Rule for TrendRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Trend
    }

    fn evaluate(&self, instrument: &InstrumentData, _benchmark: &InstrumentData) -> RuleOutcome {
        let closes = instrument.prices().closes();
        if closes.iter().any(|c| !c.is_finite()) {
            return Err(RuleError::NonFinite("prices"));
        }
        let ratio = persistence(closes, self.config.window).ok_or(RuleError::InsufficientData {
            needed: self.min_observations(),
            got: closes.len(),
        })?;
        trace!(
            symbol = instrument.symbol(),
            ratio,
            window = self.config.window,
            "computed trend persistence"
        );

        Ok(RuleResult::new(
            RuleKind::Trend,
            trend_score(ratio),
            Some(ratio),
            format!("Time above MA-{}: {:.1}%", self.config.window, ratio * 100.0),
        ))
    }

    fn min_observations(&self) -> usize {
        self.config.window.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::data;
    use approx::assert_relative_eq;

    #[test]
    fn test_trend_score_bands() {
        assert_eq!(trend_score(1.0), 10);
        assert_eq!(trend_score(0.7), 10);
        assert_eq!(trend_score(0.65), 8);
        assert_eq!(trend_score(0.5), 6);
        assert_eq!(trend_score(0.4), 4);
        assert_eq!(trend_score(0.1), 2);
    }

    #[test]
    fn test_persistence_counts_defined_days_only() {
        // MA-3 is defined from the third price: 2.0, 3.0, 2.5, 1.5
        let prices = [1.0, 2.0, 3.0, 4.0, 0.5, 0.0];
        let ratio = persistence(&prices, 3).unwrap();
        // above on 3.0 > 2.0 and 4.0 > 3.0; below on 0.5 and 0.0
        assert_relative_eq!(ratio, 0.5);
    }

    #[test]
    fn test_flat_series_is_never_above() {
        let prices = vec![41.3; 750];
        assert_eq!(persistence(&prices, 200), Some(0.0));
    }

    #[test]
    fn test_persistence_undefined_for_short_series() {
        assert!(persistence(&[1.0, 2.0], 3).is_none());
        assert!(persistence(&[], 3).is_none());
    }

    #[test]
    fn test_rising_series_is_always_above() {
        let closes: Vec<f64> = (1..=250).map(f64::from).collect();
        let stock = data("X", &closes);
        let result = TrendRule::default().evaluate(&stock, &stock).unwrap();
        assert_eq!(result.value(), Some(1.0));
        assert_eq!(result.score(), 10);
        assert_eq!(result.description(), "Time above MA-200: 100.0%");
    }

    #[test]
    fn test_short_history_is_an_error() {
        let stock = data("X", &[10.0; 150]);
        assert_eq!(
            TrendRule::default().evaluate(&stock, &stock),
            Err(RuleError::InsufficientData {
                needed: 200,
                got: 150
            })
        );
    }

    #[test]
    fn test_custom_window() {
        let rule = TrendRule::new(TrendConfig { window: 2 });
        let stock = data("X", &[1.0, 2.0, 1.0, 2.0, 1.0]);
        // MA-2: 1.5, 1.5, 1.5, 1.5 -> above on 2 of 4 days
        let result = rule.evaluate(&stock, &stock).unwrap();
        assert_relative_eq!(result.value().unwrap(), 0.5);
        assert_eq!(result.score(), 6);
    }
}
