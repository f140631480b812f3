//! Core trait definition for rule combiners.

use aegis_traits::{Result, RuleResult};

/// Combines the rule results of one instrument into a composite score.
///
/// Implementors define different strategies for weighting rules. All
/// implementations must be thread-safe (Send + Sync) so batches can be
/// analyzed in parallel.
///
/// # Examples
///
/// ```rust,no_run
/// use aegis_combine::Combiner;
/// use aegis_traits::RuleResult;
///
/// struct BestRule;
///
/// impl Combiner for BestRule {
///     fn combine(&self, results: &[RuleResult]) -> aegis_traits::Result<f64> {
///         Ok(results.iter().map(|r| f64::from(r.score())).fold(0.0, f64::max))
///     }
///
///     fn name(&self) -> &str {
///         "best_rule"
///     }
/// }
/// ```
pub trait Combiner: Send + Sync {
    /// Combine rule results into a composite score in `[0, 10]`.
    ///
    /// Error results take part with their zero score.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The number of results is not what the strategy expects
    /// - Combination produces a non-finite value
    fn combine(&self, results: &[RuleResult]) -> Result<f64>;

    /// Name of this combination strategy.
    fn name(&self) -> &str;
}
