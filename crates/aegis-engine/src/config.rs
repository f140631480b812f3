//! Analysis configuration.
//!
//! Every tunable constant of a run lives here. Defaults reproduce the standard
//! defensive screen; a JSON file may override any subset of fields.

use std::path::Path;

use aegis_rules::{TrendConfig, ValuationConfig, VolatilityConfig};
use aegis_traits::{AegisError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for an analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Benchmark symbol every instrument is compared against
    pub benchmark_symbol: String,
    /// Years of daily prices fetched per instrument
    pub lookback_years: u32,
    /// Trading days per year for annualization
    pub trading_days_per_year: usize,
    /// Moving average window of the trend rule, in trading days
    pub trend_window: usize,
    /// Valuation rule settings
    pub valuation: ValuationConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            benchmark_symbol: "SPY".to_string(),
            lookback_years: 3,
            trading_days_per_year: 252,
            trend_window: 200,
            valuation: ValuationConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Loads a configuration from a JSON file. Missing fields keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| AegisError::Other(format!("reading {}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`AegisError::InvalidData`] if the text is not a valid
    /// configuration.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| AegisError::InvalidData(format!("config: {e}")))
    }

    /// Calendar days of price history to request.
    #[must_use]
    pub const fn lookback_days(&self) -> u64 {
        self.lookback_years as u64 * 365
    }

    /// Volatility rule settings derived from this configuration.
    #[must_use]
    pub const fn volatility(&self) -> VolatilityConfig {
        VolatilityConfig {
            periods_per_year: self.trading_days_per_year,
        }
    }

    /// Trend rule settings derived from this configuration.
    #[must_use]
    pub const fn trend(&self) -> TrendConfig {
        TrendConfig {
            window: self.trend_window,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.benchmark_symbol, "SPY");
        assert_eq!(config.lookback_days(), 1095);
        assert_eq!(config.trend().window, 200);
        assert_eq!(config.volatility().periods_per_year, 252);
        assert_eq!(config.valuation.min_history, 100);
        assert_eq!(config.valuation.min_valid, 50);
    }

    #[test]
    fn test_partial_override() {
        let config = AnalysisConfig::from_json(
            r#"{"benchmark_symbol": "QQQ", "valuation": {"min_valid": 30}}"#,
        )
        .unwrap();
        assert_eq!(config.benchmark_symbol, "QQQ");
        assert_eq!(config.trend_window, 200);
        assert_eq!(config.valuation.min_valid, 30);
        assert_eq!(config.valuation.min_history, 100);
        assert_eq!(config.valuation.pe_bounds, (5.0, 200.0));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            AnalysisConfig::from_json("{\"trend_window\": \"long\"}"),
            Err(AegisError::InvalidData(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(AnalysisConfig::from_json_file("/nonexistent/aegis.json").is_err());
    }
}
