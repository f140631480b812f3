//! Trend rules.

mod persistence;

pub use persistence::{TrendConfig, TrendRule, persistence, trend_score};
