//! Collaborator traits for acquiring market and fundamental data.
//!
//! The scoring engine itself never performs I/O. Callers fetch every series up
//! front through these traits and hand the in-memory data to the analyzer.

use std::future::Future;

use crate::{Date, FundamentalsSnapshot, PriceSeries, Result};

/// A source of historical closing prices.
///
/// Must serve the benchmark symbol through the same interface as any
/// instrument.
pub trait MarketDataSource: Send + Sync {
    /// Fetches daily closes for `symbol` between `from` and `to`, inclusive.
    ///
    /// # Errors
    ///
    /// Returns an error when the symbol has no usable series. Callers treat
    /// this as data-unavailable and omit the symbol from the batch.
    fn price_history(
        &self,
        symbol: &str,
        from: Date,
        to: Date,
    ) -> impl Future<Output = Result<PriceSeries>> + Send;
}

/// A source of current valuation multiples.
pub trait FundamentalsSource: Send + Sync {
    /// Fetches the current trailing P/E, P/B, EV/EBITDA and P/S for `symbol`.
    ///
    /// Implementations sanitize values with
    /// [`FundamentalsSnapshot::from_raw`].
    ///
    /// # Errors
    ///
    /// Returns an error when the feed cannot be reached. Missing individual
    /// multiples are not an error.
    fn fundamentals(&self, symbol: &str)
    -> impl Future<Output = Result<FundamentalsSnapshot>> + Send;
}
