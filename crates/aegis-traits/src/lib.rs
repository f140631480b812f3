#![doc(issue_tracker_base_url = "https://github.com/factordynamics/aegis/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and trait definitions for the Aegis defensive scoring framework.
//!
//! This crate provides the foundational abstractions shared by every other
//! Aegis crate: price and return series, fundamentals snapshots, the [`Rule`]
//! trait and its result types, the data collaborator traits and the error
//! types.

/// The version of the aegis-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod rule;
pub mod source;
pub mod stats;
pub mod types;

// Re-exports
pub use error::{AegisError, Result, RuleError};
pub use rule::{
    MAX_SCORE, Rule, RuleKind, RuleOutcome, RuleResult, RuleStatus, ValuationDetail,
};
pub use source::{FundamentalsSource, MarketDataSource};
pub use types::{
    Date, FundamentalsSnapshot, InstrumentData, MULTIPLE_SANITY_CAP, PriceSeries,
    ReturnSeries, Symbol, ValuationMetric,
};
