#![doc(issue_tracker_base_url = "https://github.com/factordynamics/aegis/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # aegis
//!
//! Defensive asset scoring against a market benchmark.
//!
//! aegis is an umbrella crate that re-exports all aegis sub-crates for
//! convenience. It scores instruments for "defensiveness" with six rules,
//! combines the scores into a composite and classifies it into a rating.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use aegis::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let registry = Arc::new(SectorRegistry::standard());
//! let analyzer = Analyzer::new(AnalysisConfig::default(), registry);
//!
//! // Prices and fundamentals fetched beforehand
//! let result = analyzer.analyze_instrument(&instrument, &benchmark)?;
//! println!("{}: {:.1} ({})", result.symbol(), result.composite(), result.rating());
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Core types and the [`Rule`] trait
//! - [`universe`] - Sector registry
//! - [`rules`] - The six rule calculators and rule metadata
//! - [`combine`] - Composite scoring and rating bands
//! - [`engine`] - Aggregation, batch analysis and result tables
//! - [`fmp`] - Financial Modeling Prep data source
//!
//! ## The Six Rules
//!
//! | Rule | Top score when |
//! |---|---|
//! | Stable beta | beta in `[0.60, 0.85]` |
//! | Crisis resilience | max drawdown at most 70% of the benchmark's |
//! | Stable correlation | correlation in `[0.50, 0.80]` |
//! | Low volatility | volatility at most 80% of the benchmark's |
//! | Trend stability | above the 200-day average at least 70% of days |
//! | Reasonable valuation | current multiple at or below its 10th percentile |
//!
//! The composite is the unweighted mean of the six scores: 8 and above is an
//! excellent defensive asset, 6 good, 4 weak, anything lower unsuitable.

/// Version information for the aegis crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Traits
// ============================================================================

/// Core types and trait definitions.
///
/// - [`Rule`] - One defensive rule scoring an instrument against the benchmark
/// - [`MarketDataSource`] / [`FundamentalsSource`] - Data collaborators
pub mod traits {
    pub use aegis_traits::*;
}

// Re-export core traits at top level for convenience
pub use aegis_combine::Combiner;
pub use aegis_traits::{FundamentalsSource, MarketDataSource, Rule};

// Re-export error types
pub use aegis_traits::{AegisError, Result, RuleError};

// Re-export common types
pub use aegis_traits::{Date, InstrumentData, PriceSeries, RuleResult, Symbol};

// ============================================================================
// Universe
// ============================================================================

/// Sector registry: sector membership, symbol notation and valuation
/// conventions.
pub mod universe {
    pub use aegis_universe::*;
}

// ============================================================================
// Rules
// ============================================================================

/// Rule implementations.
///
/// ## Market
///
/// - **Beta**: covariance with the benchmark over benchmark variance
/// - **Correlation**: Pearson correlation of aligned returns
///
/// ## Risk
///
/// - **Drawdown**: max drawdown relative to the benchmark's
/// - **Volatility**: annualized volatility relative to the benchmark's
///
/// ## Trend and valuation
///
/// - **Trend**: share of days above the 200-day moving average
/// - **Valuation**: percentile of today's multiple in a history rebuilt under
///   the constant-fundamental assumption
pub mod rules {
    pub use aegis_rules::*;
}

// ============================================================================
// Combination
// ============================================================================

/// Composite scoring and rating bands.
pub mod combine {
    pub use aegis_combine::*;
}

// ============================================================================
// Engine
// ============================================================================

/// Rule aggregation, batch analysis and result tables.
pub mod engine {
    pub use aegis_engine::*;
}

// ============================================================================
// Data Providers
// ============================================================================

/// Financial Modeling Prep (FMP) API client.
///
/// ## Setup
///
/// 1. Get a free API key at <https://financialmodelingprep.com/>
/// 2. Set the `FMP_API_KEY` environment variable or add to `.env` file
pub mod fmp {
    pub use aegis_fmp::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```ignore
/// use aegis::prelude::*;
/// ```
pub mod prelude {
    pub use crate::traits::*;
    pub use aegis_combine::{Combiner, EqualWeightCombiner, Rating};
    pub use aegis_engine::{AnalysisConfig, Analyzer, BatchReport, InstrumentResult};
    pub use aegis_universe::SectorRegistry;
}

// ============================================================================
// Tests
// ============================================================================
