//! Date alignment of paired return series.
//!
//! Every covariance, variance or correlation computed between an instrument
//! and the benchmark must run on the intersection of their timestamps.

use aegis_traits::{Date, ReturnSeries, RuleError};

/// Two return series restricted to their common dates.
///
/// Both sides share a single date vector, so their timestamps are identical
/// by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedReturns {
    dates: Vec<Date>,
    instrument: Vec<f64>,
    benchmark: Vec<f64>,
}

impl AlignedReturns {
    /// Common dates in chronological order.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Instrument returns on the common dates.
    pub fn instrument(&self) -> &[f64] {
        &self.instrument
    }

    /// Benchmark returns on the common dates.
    pub fn benchmark(&self) -> &[f64] {
        &self.benchmark
    }

    /// Number of common observations.
    pub const fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the intersection is empty. Never true for a value returned by
    /// [`align`].
    pub const fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Restricts two return series to their common timestamps.
///
/// # Errors
///
/// Returns [`RuleError::EmptyIntersection`] when the series share no date.
pub fn align(
    instrument: &ReturnSeries,
    benchmark: &ReturnSeries,
) -> Result<AlignedReturns, RuleError> {
    let (a_dates, a_values) = (instrument.dates(), instrument.values());
    let (b_dates, b_values) = (benchmark.dates(), benchmark.values());

    let capacity = a_dates.len().min(b_dates.len());
    let mut aligned = AlignedReturns {
        dates: Vec::with_capacity(capacity),
        instrument: Vec::with_capacity(capacity),
        benchmark: Vec::with_capacity(capacity),
    };

    // both sides are strictly increasing
    let (mut i, mut j) = (0, 0);
    while i < a_dates.len() && j < b_dates.len() {
        match a_dates[i].cmp(&b_dates[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                aligned.dates.push(a_dates[i]);
                aligned.instrument.push(a_values[i]);
                aligned.benchmark.push(b_values[j]);
                i += 1;
                j += 1;
            }
        }
    }

    if aligned.is_empty() {
        return Err(RuleError::EmptyIntersection);
    }
    Ok(aligned)
}
