//! Defensive rule implementations for the aegis scoring engine.
//!
//! This crate provides the six rule calculators, grouped by category:
//! - Market: beta and correlation against the benchmark
//! - Risk: relative drawdown and relative volatility
//! - Trend: persistence above the long moving average
//! - Valuation: percentile of the current multiple within its history
//!
//! Each rule produces a bounded 0-10 score, or a typed error the aggregator
//! turns into a zero score.
//!
//! # Example
//!
//! ```ignore
//! use aegis_rules::market::BetaRule;
//! use aegis_rules::registry::available_rules;
//!
//! // Create a rule with default configuration
//! let rule = BetaRule::default();
//!
//! // Discover available rules
//! let rules = available_rules();
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod align;
pub mod market;
pub mod registry;
pub mod risk;
pub mod series;
pub mod trend;
pub mod valuation;

#[cfg(test)]
mod testing;

// Re-export key types
pub use align::{AlignedReturns, align};
pub use market::{BetaRule, CorrelationRule};
pub use registry::{RuleCategory, RuleInfo};
pub use risk::{DrawdownRule, VolatilityConfig, VolatilityRule};
pub use trend::{TrendConfig, TrendRule};
pub use valuation::{ConstantFundamentalAssumption, ValuationConfig, ValuationRule};
