//! Common types used throughout the Aegis framework.
//!
//! This module defines the time series and fundamentals containers consumed
//! by every rule: [`PriceSeries`], [`ReturnSeries`] and
//! [`FundamentalsSnapshot`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{AegisError, Result};

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market symbol identifier.
///
/// Symbols are ticker identifiers in data-feed notation, like "AAPL" or
/// "BRK-B".
pub type Symbol = String;

/// Largest multiple accepted from a fundamentals feed. Anything above is
/// treated as absent.
pub const MULTIPLE_SANITY_CAP: f64 = 1000.0;

fn ensure_increasing(dates: &[Date]) -> Result<()> {
    match dates.windows(2).find(|w| w[0] >= w[1]) {
        Some(w) => Err(AegisError::InvalidData(format!(
            "timestamps must be strictly increasing ({} followed by {})",
            w[0], w[1]
        ))),
        None => Ok(()),
    }
}

/// Ordered closing prices for one instrument.
///
/// Timestamps are strictly increasing with no duplicates. The series is
/// immutable once constructed.
///
/// # Example
///
/// ```
/// use aegis_traits::{Date, PriceSeries};
///
/// let d = |day| Date::from_ymd_opt(2024, 1, day).unwrap();
/// let series = PriceSeries::new(
///     "KO",
///     vec![(d(2), 60.0), (d(3), 61.2), (d(4), 60.6)],
/// )
/// .unwrap();
///
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.returns().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    symbol: Symbol,
    dates: Vec<Date>,
    closes: Vec<f64>,
}

impl PriceSeries {
    /// Creates a price series from `(date, close)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`AegisError::InvalidData`] if the dates are not strictly
    /// increasing.
    pub fn new(symbol: impl Into<Symbol>, points: Vec<(Date, f64)>) -> Result<Self> {
        let (dates, closes): (Vec<Date>, Vec<f64>) = points.into_iter().unzip();
        ensure_increasing(&dates)?;
        Ok(Self {
            symbol: symbol.into(),
            dates,
            closes,
        })
    }

    /// Creates a price series from points in any order.
    ///
    /// Points are sorted by date; when a date appears more than once the last
    /// observation wins. Feeds that return newest-first go through here.
    pub fn from_unsorted(symbol: impl Into<Symbol>, mut points: Vec<(Date, f64)>) -> Self {
        points.reverse();
        points.sort_by_key(|(date, _)| *date);
        points.dedup_by_key(|(date, _)| *date);
        let (dates, closes) = points.into_iter().unzip();
        Self {
            symbol: symbol.into(),
            dates,
            closes,
        }
    }

    /// Returns the instrument symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the number of observations.
    pub const fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns whether the series is empty.
    pub const fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the observation dates.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the closing prices, aligned with [`Self::dates`].
    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    /// Returns the most recent closing price.
    pub fn last_close(&self) -> Option<f64> {
        self.closes.last().copied()
    }

    /// Returns the most recent observation date.
    pub fn last_date(&self) -> Option<Date> {
        self.dates.last().copied()
    }

    /// Iterates over `(date, close)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.dates.iter().copied().zip(self.closes.iter().copied())
    }

    /// Restricts the series to observations on or after `start`.
    #[must_use]
    pub fn since(&self, start: Date) -> Self {
        let from = self.dates.partition_point(|d| *d < start);
        Self {
            symbol: self.symbol.clone(),
            dates: self.dates[from..].to_vec(),
            closes: self.closes[from..].to_vec(),
        }
    }

    /// Computes first-difference percentage returns.
    ///
    /// The result is one element shorter than the price series and is dated
    /// at the later observation of each pair. A zero previous price yields a
    /// non-finite return, which rule calculators reject.
    pub fn returns(&self) -> ReturnSeries {
        let values = self
            .closes
            .windows(2)
            .map(|w| (w[1] - w[0]) / w[0])
            .collect();
        ReturnSeries {
            dates: self.dates.iter().skip(1).copied().collect(),
            values,
        }
    }
}

/// Percentage returns derived from a [`PriceSeries`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    dates: Vec<Date>,
    values: Vec<f64>,
}

impl ReturnSeries {
    /// Creates a return series from parallel date and value vectors.
    ///
    /// # Errors
    ///
    /// Returns [`AegisError::InvalidData`] if the vectors differ in length or
    /// the dates are not strictly increasing.
    pub fn new(dates: Vec<Date>, values: Vec<f64>) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(AegisError::InvalidData(format!(
                "{} dates but {} values",
                dates.len(),
                values.len()
            )));
        }
        ensure_increasing(&dates)?;
        Ok(Self { dates, values })
    }

    /// Returns the number of observations.
    pub const fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns whether the series is empty.
    pub const fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the observation dates.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the return values, aligned with [`Self::dates`].
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over `(date, return)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }
}

/// Valuation multiple reported by a fundamentals feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuationMetric {
    /// Trailing price-to-earnings.
    PriceToEarnings,
    /// Price-to-book.
    PriceToBook,
    /// Enterprise value to EBITDA.
    EvToEbitda,
    /// Trailing price-to-sales.
    PriceToSales,
}

impl ValuationMetric {
    /// Short display label, e.g. `"P/E"`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PriceToEarnings => "P/E",
            Self::PriceToBook => "P/B",
            Self::EvToEbitda => "EV/EBITDA",
            Self::PriceToSales => "P/S",
        }
    }

    /// The metric tried when this one cannot produce a historical percentile.
    ///
    /// Only P/E and P/B substitute for each other.
    #[must_use]
    pub const fn alternate(&self) -> Option<Self> {
        match self {
            Self::PriceToEarnings => Some(Self::PriceToBook),
            Self::PriceToBook => Some(Self::PriceToEarnings),
            Self::EvToEbitda | Self::PriceToSales => None,
        }
    }
}

impl fmt::Display for ValuationMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Point-in-time valuation multiples for one instrument.
///
/// Every field is either a positive multiple no larger than
/// [`MULTIPLE_SANITY_CAP`] or absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsSnapshot {
    /// Trailing price-to-earnings.
    pub pe: Option<f64>,
    /// Price-to-book.
    pub pb: Option<f64>,
    /// Enterprise value to EBITDA.
    pub ev_ebitda: Option<f64>,
    /// Trailing price-to-sales.
    pub ps: Option<f64>,
}

impl FundamentalsSnapshot {
    /// Builds a snapshot from raw feed values, discarding implausible ones.
    pub fn from_raw(
        pe: Option<f64>,
        pb: Option<f64>,
        ev_ebitda: Option<f64>,
        ps: Option<f64>,
    ) -> Self {
        Self {
            pe: Self::sanitize(pe),
            pb: Self::sanitize(pb),
            ev_ebitda: Self::sanitize(ev_ebitda),
            ps: Self::sanitize(ps),
        }
    }

    /// Maps a raw multiple to `None` when it is non-finite, `<= 0` or above
    /// [`MULTIPLE_SANITY_CAP`].
    pub fn sanitize(raw: Option<f64>) -> Option<f64> {
        raw.filter(|v| v.is_finite() && *v > 0.0 && *v <= MULTIPLE_SANITY_CAP)
    }

    /// Returns the value of the given multiple, if present.
    pub const fn get(&self, metric: ValuationMetric) -> Option<f64> {
        match metric {
            ValuationMetric::PriceToEarnings => self.pe,
            ValuationMetric::PriceToBook => self.pb,
            ValuationMetric::EvToEbitda => self.ev_ebitda,
            ValuationMetric::PriceToSales => self.ps,
        }
    }
}

/// Everything the rules need about one instrument (or the benchmark).
///
/// Returns are derived once at construction so every rule sees the same
/// series.
#[derive(Debug, Clone, PartialEq)]
pub struct InstrumentData {
    prices: PriceSeries,
    returns: ReturnSeries,
    fundamentals: FundamentalsSnapshot,
}

impl InstrumentData {
    /// Bundles prices and fundamentals, deriving the return series.
    pub fn new(prices: PriceSeries, fundamentals: FundamentalsSnapshot) -> Self {
        let returns = prices.returns();
        Self {
            prices,
            returns,
            fundamentals,
        }
    }

    /// Benchmark data: prices only, no fundamentals.
    pub fn benchmark(prices: PriceSeries) -> Self {
        Self::new(prices, FundamentalsSnapshot::default())
    }

    /// Returns the instrument symbol.
    pub fn symbol(&self) -> &str {
        self.prices.symbol()
    }

    /// Returns the price series.
    pub const fn prices(&self) -> &PriceSeries {
        &self.prices
    }

    /// Returns the derived return series.
    pub const fn returns(&self) -> &ReturnSeries {
        &self.returns
    }

    /// Returns the fundamentals snapshot.
    pub const fn fundamentals(&self) -> &FundamentalsSnapshot {
        &self.fundamentals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(day: u32) -> Date {
        Date::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn test_price_series_rejects_unordered() {
        let result = PriceSeries::new("X", vec![(d(2), 1.0), (d(1), 2.0)]);
        assert!(matches!(result, Err(AegisError::InvalidData(_))));

        let result = PriceSeries::new("X", vec![(d(2), 1.0), (d(2), 2.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_unsorted_keeps_last_duplicate() {
        let series =
            PriceSeries::from_unsorted("X", vec![(d(3), 3.0), (d(1), 1.0), (d(3), 4.0)]);
        assert_eq!(series.dates(), &[d(1), d(3)]);
        assert_relative_eq!(series.closes()[1], 4.0);
    }

    #[test]
    fn test_returns() {
        let series =
            PriceSeries::new("X", vec![(d(1), 100.0), (d(2), 110.0), (d(3), 99.0)]).unwrap();
        let returns = series.returns();

        assert_eq!(returns.len(), series.len() - 1);
        assert_eq!(returns.dates(), &[d(2), d(3)]);
        assert_relative_eq!(returns.values()[0], 0.1);
        assert_relative_eq!(returns.values()[1], -0.1);
    }

    #[test]
    fn test_returns_of_single_price_is_empty() {
        let series = PriceSeries::new("X", vec![(d(1), 100.0)]).unwrap();
        assert!(series.returns().is_empty());
    }

    #[test]
    fn test_since() {
        let series =
            PriceSeries::new("X", vec![(d(1), 1.0), (d(5), 2.0), (d(9), 3.0)]).unwrap();
        let tail = series.since(d(4));
        assert_eq!(tail.dates(), &[d(5), d(9)]);
        assert_eq!(tail.symbol(), "X");
        assert!(series.since(d(10)).is_empty());
    }

    #[test]
    fn test_return_series_validation() {
        assert!(ReturnSeries::new(vec![d(1)], vec![0.1, 0.2]).is_err());
        assert!(ReturnSeries::new(vec![d(2), d(1)], vec![0.1, 0.2]).is_err());
        assert!(ReturnSeries::new(vec![d(1), d(2)], vec![0.1, 0.2]).is_ok());
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(FundamentalsSnapshot::sanitize(Some(12.5)), Some(12.5));
        assert_eq!(FundamentalsSnapshot::sanitize(Some(1000.0)), Some(1000.0));
        assert_eq!(FundamentalsSnapshot::sanitize(Some(1000.1)), None);
        assert_eq!(FundamentalsSnapshot::sanitize(Some(0.0)), None);
        assert_eq!(FundamentalsSnapshot::sanitize(Some(-3.0)), None);
        assert_eq!(FundamentalsSnapshot::sanitize(Some(f64::NAN)), None);
        assert_eq!(FundamentalsSnapshot::sanitize(None), None);
    }

    #[test]
    fn test_snapshot_get() {
        let snap = FundamentalsSnapshot::from_raw(Some(20.0), Some(-1.0), Some(14.0), None);
        assert_eq!(snap.get(ValuationMetric::PriceToEarnings), Some(20.0));
        assert_eq!(snap.get(ValuationMetric::PriceToBook), None);
        assert_eq!(snap.get(ValuationMetric::EvToEbitda), Some(14.0));
        assert_eq!(snap.get(ValuationMetric::PriceToSales), None);
    }

    #[test]
    fn test_metric_alternate() {
        assert_eq!(
            ValuationMetric::PriceToEarnings.alternate(),
            Some(ValuationMetric::PriceToBook)
        );
        assert_eq!(
            ValuationMetric::PriceToBook.alternate(),
            Some(ValuationMetric::PriceToEarnings)
        );
        assert_eq!(ValuationMetric::PriceToSales.alternate(), None);
        assert_eq!(ValuationMetric::PriceToBook.to_string(), "P/B");
    }
}
