//! Rules measuring how an instrument is linked to the benchmark.
//!
//! - Beta: sensitivity of returns to benchmark returns
//! - Correlation: strength of the linear co-movement
//!
//! Both run on date-aligned return series.

mod beta;
mod correlation;

pub use beta::{BetaRule, beta, beta_score};
pub use correlation::{CorrelationRule, correlation_score};
