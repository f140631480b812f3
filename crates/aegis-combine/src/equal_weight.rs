//! Equal-weighted rule combination strategy.

use aegis_traits::{AegisError, Result, RuleKind, RuleResult};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::combiner::Combiner;

/// Configuration for equal-weighted rule combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EqualWeightConfig {
    /// Number of rule results every composite must include (default: 6)
    pub expected_rules: usize,
}

impl Default for EqualWeightConfig {
    fn default() -> Self {
        Self {
            expected_rules: RuleKind::ALL.len(),
        }
    }
}

/// Equal-weighted combiner: the arithmetic mean of the rule scores.
///
/// No rule is weighted above another, and a rule that failed still counts
/// with its zero score. Scores are small integers, so the sum is exact and
/// the composite does not depend on the order of the results.
///
/// # Examples
///
/// ```rust,no_run
/// use aegis_combine::{Combiner, EqualWeightCombiner, EqualWeightConfig};
/// use aegis_traits::{RuleKind, RuleResult};
///
/// let combiner = EqualWeightCombiner::new(EqualWeightConfig { expected_rules: 2 });
/// let results = vec![
///     RuleResult::new(RuleKind::Beta, 10, Some(0.7), "Beta: 0.70"),
///     RuleResult::new(RuleKind::Trend, 5, Some(0.55), "Time above MA-200: 55.0%"),
/// ];
///
/// assert_eq!(combiner.combine(&results).unwrap(), 7.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EqualWeightCombiner {
    config: EqualWeightConfig,
}

impl EqualWeightCombiner {
    /// Create a new equal-weight combiner with the given configuration.
    pub const fn new(config: EqualWeightConfig) -> Self {
        Self { config }
    }
}

impl Combiner for EqualWeightCombiner {
    fn combine(&self, results: &[RuleResult]) -> Result<f64> {
        if results.len() != self.config.expected_rules {
            return Err(AegisError::InvalidData(format!(
                "expected {} rule results, got {}",
                self.config.expected_rules,
                results.len()
            )));
        }

        let scores: Array1<f64> = results.iter().map(|r| f64::from(r.score())).collect();
        let composite = scores
            .mean()
            .ok_or_else(|| AegisError::InvalidData("cannot combine zero rules".into()))?;

        if !composite.is_finite() {
            return Err("Combination produced a non-finite value".into());
        }

        Ok(composite)
    }

    fn name(&self) -> &str {
        "equal_weight"
    }
}
