//! Valuation rule and its building blocks.
//!
//! Point-in-time fundamentals are not available, so the history of a multiple
//! is rebuilt from today's multiple and the trailing price series under the
//! [`ConstantFundamentalAssumption`]. Today's multiple is then ranked within
//! that history.

mod estimator;
mod percentile;

pub use estimator::{ConstantFundamentalAssumption, NEUTRAL_SCORE, ValuationConfig, ValuationRule};
pub use percentile::{percentile_rank, percentile_score};
