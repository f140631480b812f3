//! Synthetic series shared by the rule tests.

use aegis_traits::{Date, FundamentalsSnapshot, InstrumentData, PriceSeries};

pub(crate) fn day(offset: usize) -> Date {
    Date::from_ymd_opt(2021, 1, 1).unwrap() + chrono::Duration::days(offset as i64)
}

pub(crate) fn prices(symbol: &str, closes: &[f64]) -> PriceSeries {
    let points = closes.iter().enumerate().map(|(i, &c)| (day(i), c)).collect();
    PriceSeries::new(symbol, points).unwrap()
}

/// Compounds `returns` from a starting price of 100.
pub(crate) fn prices_from_returns(symbol: &str, returns: &[f64]) -> PriceSeries {
    let mut closes = vec![100.0];
    for r in returns {
        let last = *closes.last().unwrap();
        closes.push(last * (1.0 + r));
    }
    prices(symbol, &closes)
}

pub(crate) fn data(symbol: &str, closes: &[f64]) -> InstrumentData {
    InstrumentData::new(prices(symbol, closes), FundamentalsSnapshot::default())
}

pub(crate) fn data_from_returns(symbol: &str, returns: &[f64]) -> InstrumentData {
    InstrumentData::new(
        prices_from_returns(symbol, returns),
        FundamentalsSnapshot::default(),
    )
}

/// Deterministic zig-zag returns with a little drift.
pub(crate) fn wiggle(n: usize, amplitude: f64) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            sign * amplitude * (1.0 + (i % 7) as f64 / 10.0) + 0.0002
        })
        .collect()
}
