//! Rule trait for scoring one defensive characteristic.
//!
//! This module defines the `Rule` trait, the core abstraction for turning an
//! instrument's data and the benchmark's data into a bounded 0-10 score. Six
//! rules make up a full defensive assessment; each produces a [`RuleResult`]
//! or a typed [`RuleError`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{InstrumentData, RuleError, ValuationMetric};

/// Highest score a rule can assign.
pub const MAX_SCORE: u8 = 10;

/// Identifies one of the six defensive rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Rule 1: market beta inside the defensive band.
    Beta,
    /// Rule 2: drawdown relative to the benchmark's.
    Drawdown,
    /// Rule 3: moderate correlation with the benchmark.
    Correlation,
    /// Rule 4: volatility relative to the benchmark's.
    Volatility,
    /// Rule 5: share of days above the long moving average.
    Trend,
    /// Rule 6: valuation percentile against the instrument's own history.
    Valuation,
}

impl RuleKind {
    /// All rules in evaluation order.
    pub const ALL: [Self; 6] = [
        Self::Beta,
        Self::Drawdown,
        Self::Correlation,
        Self::Volatility,
        Self::Trend,
        Self::Valuation,
    ];

    /// Stable machine name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Beta => "beta",
            Self::Drawdown => "drawdown",
            Self::Correlation => "correlation",
            Self::Volatility => "volatility",
            Self::Trend => "trend",
            Self::Valuation => "valuation",
        }
    }

    /// Human-readable rule title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Beta => "Stable beta",
            Self::Drawdown => "Crisis resilience",
            Self::Correlation => "Stable correlation",
            Self::Volatility => "Low volatility",
            Self::Trend => "Trend stability",
            Self::Valuation => "Reasonable valuation",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Qualitative band attached to a rule score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleStatus {
    /// Score of 8 or more.
    Excellent,
    /// Score of 6 or 7.
    Good,
    /// Score below 6.
    Weak,
    /// Valuation percentile at or below 10.
    VeryCheap,
    /// Valuation percentile at or below 25.
    Cheap,
    /// Valuation percentile at or below 40.
    BelowAverage,
    /// Valuation percentile at or below 60.
    Average,
    /// Valuation percentile at or below 75.
    AboveAverage,
    /// Valuation percentile at or below 90.
    Expensive,
    /// Valuation percentile above 90.
    VeryExpensive,
    /// A current multiple exists but no usable history.
    NoHistory,
    /// No usable valuation data at all.
    NotAvailable,
    /// The rule could not be computed.
    Error,
}

impl RuleStatus {
    /// Status band for the statistical rules, derived from the score.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= 8 {
            Self::Excellent
        } else if score >= 6 {
            Self::Good
        } else {
            Self::Weak
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Weak => "weak",
            Self::VeryCheap => "very cheap",
            Self::Cheap => "cheap",
            Self::BelowAverage => "below average",
            Self::Average => "average",
            Self::AboveAverage => "above average",
            Self::Expensive => "expensive",
            Self::VeryExpensive => "very expensive",
            Self::NoHistory => "no history available",
            Self::NotAvailable => "not available",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Extra context recorded by the valuation rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationDetail {
    /// Multiple the score is based on, if any.
    pub metric: Option<ValuationMetric>,
    /// Sector used to pick the preferred multiple.
    pub sector: Option<String>,
    /// Current multiple.
    pub current: Option<f64>,
    /// Percentile of the current multiple within its reconstructed history.
    pub percentile: Option<f64>,
    /// Number of reconstructed historical multiples that passed the filter.
    pub observations: usize,
}

/// Outcome of one rule for one instrument.
///
/// Results are built once by a calculator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleResult {
    rule: RuleKind,
    score: u8,
    value: Option<f64>,
    description: String,
    status: RuleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<ValuationDetail>,
}

impl RuleResult {
    /// Creates a result whose status is derived from the score.
    ///
    /// Scores above [`MAX_SCORE`] are clamped.
    pub fn new(
        rule: RuleKind,
        score: u8,
        value: Option<f64>,
        description: impl Into<String>,
    ) -> Self {
        let score = score.min(MAX_SCORE);
        Self::with_status(rule, score, value, description, RuleStatus::from_score(score))
    }

    /// Creates a result with an explicit status.
    pub fn with_status(
        rule: RuleKind,
        score: u8,
        value: Option<f64>,
        description: impl Into<String>,
        status: RuleStatus,
    ) -> Self {
        Self {
            rule,
            score: score.min(MAX_SCORE),
            value,
            description: description.into(),
            status,
            detail: None,
        }
    }

    /// The zero-score result used when a rule cannot be computed.
    pub fn error(rule: RuleKind, reason: &RuleError) -> Self {
        Self::with_status(
            rule,
            0,
            None,
            format!("calculation error: {reason}"),
            RuleStatus::Error,
        )
    }

    /// Attaches valuation context.
    #[must_use]
    pub fn with_detail(mut self, detail: ValuationDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    /// The rule that produced this result.
    pub const fn rule(&self) -> RuleKind {
        self.rule
    }

    /// Score in `0..=10`.
    pub const fn score(&self) -> u8 {
        self.score
    }

    /// The metric in its natural unit, or `None` when not applicable.
    pub const fn value(&self) -> Option<f64> {
        self.value
    }

    /// Human-readable summary.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Qualitative band.
    pub const fn status(&self) -> RuleStatus {
        self.status
    }

    /// Valuation context, present only for the valuation rule.
    pub const fn detail(&self) -> Option<&ValuationDetail> {
        self.detail.as_ref()
    }

    /// Whether this result records a computation failure.
    pub const fn is_error(&self) -> bool {
        matches!(self.status, RuleStatus::Error)
    }
}

/// Result of evaluating a rule: a score, or the reason it could not be computed.
pub type RuleOutcome = std::result::Result<RuleResult, RuleError>;

/// A defensive rule that scores one instrument against the benchmark.
///
/// Implementations are pure functions of their inputs and must be thread-safe
/// (`Send + Sync`) so a batch can be spread across workers.
///
/// # Example
///
/// ```no_run
/// use aegis_traits::{InstrumentData, Rule, RuleKind, RuleOutcome, RuleResult};
///
/// struct AlwaysTen;
///
/// impl Rule for AlwaysTen {
///     fn kind(&self) -> RuleKind {
///         RuleKind::Trend
///     }
///
///     fn evaluate(&self, _: &InstrumentData, _: &InstrumentData) -> RuleOutcome {
///         Ok(RuleResult::new(RuleKind::Trend, 10, Some(1.0), "always on trend"))
///     }
///
///     fn min_observations(&self) -> usize {
///         1
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Which of the six rules this is.
    fn kind(&self) -> RuleKind;

    /// Returns the name of this rule.
    fn name(&self) -> &str {
        self.kind().name()
    }

    /// Scores `instrument` relative to `benchmark`.
    ///
    /// # Errors
    ///
    /// Returns a [`RuleError`] when the statistic is undefined for the inputs
    /// (too little data, no common dates, non-finite intermediate values).
    fn evaluate(&self, instrument: &InstrumentData, benchmark: &InstrumentData) -> RuleOutcome;

    /// Minimum number of price observations the rule needs.
    ///
    /// The analyzer does not run a rule on a shorter series and scores it as
    /// insufficient data instead.
    fn min_observations(&self) -> usize;
}
