//! Downside and dispersion rules measured against the benchmark.

mod drawdown;
mod volatility;

pub use drawdown::{DrawdownRule, drawdown_score, relative_drawdown};
pub use volatility::{VolatilityConfig, VolatilityRule, volatility_score};
