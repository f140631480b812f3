//! Rule registry for discovering and categorizing the defensive rules.
//!
//! This module provides metadata and discovery functionality for the six
//! rules in the aegis-rules library.

use aegis_traits::RuleKind;
use serde::{Deserialize, Serialize};

/// Rule category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleCategory {
    /// Co-movement with the benchmark
    Market,
    /// Downside and dispersion risk
    Risk,
    /// Price trend behaviour
    Trend,
    /// Valuation against history
    Valuation,
}

impl RuleCategory {
    /// Get a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Market => "Sensitivity and linkage to the benchmark",
            Self::Risk => "Drawdown and volatility relative to the benchmark",
            Self::Trend => "Persistence of the long-term price trend",
            Self::Valuation => "Current multiple against its own history",
        }
    }
}

/// Metadata about a rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleInfo {
    /// Which rule this describes
    pub kind: RuleKind,

    /// Unique identifier for the rule
    pub name: &'static str,

    /// Display name
    pub title: &'static str,

    /// Category classification
    pub category: RuleCategory,

    /// Human-readable description
    pub description: &'static str,

    /// Range that earns the top score
    pub target: &'static str,

    /// Whether the rule requires fundamental data
    pub requires_fundamentals: bool,
}

fn info(
    kind: RuleKind,
    category: RuleCategory,
    description: &'static str,
    target: &'static str,
) -> RuleInfo {
    RuleInfo {
        kind,
        name: kind.name(),
        title: kind.title(),
        category,
        description,
        target,
        requires_fundamentals: kind == RuleKind::Valuation,
    }
}

/// Get information about all available rules, in evaluation order.
#[must_use]
pub fn available_rules() -> Vec<RuleInfo> {
    vec![
        info(
            RuleKind::Beta,
            RuleCategory::Market,
            "Covariance of returns with the benchmark over benchmark variance",
            "beta between 0.60 and 0.85",
        ),
        info(
            RuleKind::Drawdown,
            RuleCategory::Risk,
            "Maximum drawdown as a fraction of the benchmark's",
            "at most 70% of the benchmark drawdown",
        ),
        info(
            RuleKind::Correlation,
            RuleCategory::Market,
            "Pearson correlation of returns with the benchmark",
            "correlation between 0.50 and 0.80",
        ),
        info(
            RuleKind::Volatility,
            RuleCategory::Risk,
            "Annualized volatility as a fraction of the benchmark's",
            "at most 80% of the benchmark volatility",
        ),
        info(
            RuleKind::Trend,
            RuleCategory::Trend,
            "Share of days closing above the 200-day moving average",
            "above the average at least 70% of the time",
        ),
        info(
            RuleKind::Valuation,
            RuleCategory::Valuation,
            "Percentile of the current P/E or P/B within its three-year history",
            "at or below the 10th percentile",
        ),
    ]
}

/// Get all rules in a specific category.
#[must_use]
pub fn rules_by_category(category: &RuleCategory) -> Vec<RuleInfo> {
    available_rules()
        .into_iter()
        .filter(|info| &info.category == category)
        .collect()
}

/// Get information about a specific rule by name.
#[must_use]
pub fn get_rule_info(name: &str) -> Option<RuleInfo> {
    available_rules().into_iter().find(|info| info.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_rules() {
        let rules = available_rules();
        assert_eq!(rules.len(), 6);

        let kinds: Vec<_> = rules.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, RuleKind::ALL);
    }

    #[test]
    fn test_rules_by_category() {
        assert_eq!(rules_by_category(&RuleCategory::Market).len(), 2);
        assert_eq!(rules_by_category(&RuleCategory::Risk).len(), 2);
        assert_eq!(rules_by_category(&RuleCategory::Trend).len(), 1);
        assert_eq!(rules_by_category(&RuleCategory::Valuation).len(), 1);
    }

    #[test]
    fn test_get_rule_info() {
        let info = get_rule_info("drawdown").unwrap();
        assert_eq!(info.title, "Crisis resilience");
        assert_eq!(info.category, RuleCategory::Risk);
        assert!(!info.requires_fundamentals);

        assert!(get_rule_info("valuation").unwrap().requires_fundamentals);
        assert!(get_rule_info("momentum").is_none());
    }
}
