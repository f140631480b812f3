//! Error types for the Aegis framework.
//!
//! This module defines the error types used throughout the Aegis workspace.
//! [`AegisError`] covers data validation, collaborator failures and table
//! construction. [`RuleError`] is the narrower, typed failure a single rule
//! calculator reports; the aggregator converts it into a zero score for that
//! rule only.

use thiserror::Error;

/// The main error type for Aegis operations.
///
/// This enum encompasses all error cases that can occur when constructing
/// series, talking to data collaborators or building result tables.
#[derive(Debug, Error)]
pub enum AegisError {
    /// Error due to invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error when data is insufficient for the requested operation.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Two series share no timestamps.
    #[error("Series have no common timestamps")]
    EmptyIntersection,

    /// A computation produced NaN or an infinite value.
    #[error("Non-finite value in {0}")]
    NonFinite(String),

    /// Error when a symbol is not found in the universe or a data feed.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// Error fetching data from external sources.
    #[error("Data fetch error: {0}")]
    DataFetch(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for AegisError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for AegisError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for Aegis operations.
///
/// This is a convenience type that uses [`AegisError`] as the error type.
pub type Result<T> = std::result::Result<T, AegisError>;

/// Reason a single rule could not be computed for an instrument.
///
/// A `RuleError` never aborts a batch. The aggregator maps it to a rule result
/// with score 0 and an error status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// Not enough observations to compute the statistic.
    #[error("insufficient data: need {needed}, got {got}")]
    InsufficientData {
        /// Minimum number of observations required.
        needed: usize,
        /// Number of observations available.
        got: usize,
    },

    /// The instrument and benchmark series share no timestamps.
    #[error("no overlapping dates with benchmark")]
    EmptyIntersection,

    /// An intermediate value was NaN or infinite.
    #[error("non-finite {0}")]
    NonFinite(&'static str),

    /// A denominator statistic was zero where the estimator is undefined.
    #[error("degenerate series: zero variance")]
    DegenerateBenchmark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AegisError::InvalidData("dates out of order".to_string());
        assert_eq!(err.to_string(), "Invalid data: dates out of order");

        let err = AegisError::DataFetch("timeout".to_string());
        assert_eq!(err.to_string(), "Data fetch error: timeout");
    }

    #[test]
    fn test_error_from_string() {
        let err: AegisError = "boom".into();
        assert!(matches!(err, AegisError::Other(_)));
    }

    #[test]
    fn test_rule_error_display() {
        let err = RuleError::InsufficientData { needed: 200, got: 12 };
        assert_eq!(err.to_string(), "insufficient data: need 200, got 12");
        assert_eq!(
            RuleError::NonFinite("beta").to_string(),
            "non-finite beta"
        );
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert!(ok_result.is_ok());

        let err_result: Result<i32> = Err(AegisError::EmptyIntersection);
        assert!(err_result.is_err());
    }
}
