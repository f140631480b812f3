//! Data types for FMP API responses.

use aegis_traits::{Date, FundamentalsSnapshot, PriceSeries};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily end-of-day price from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalPrice {
    /// Date (YYYY-MM-DD).
    pub date: String,
    /// Open price.
    #[serde(default)]
    pub open: f64,
    /// High price.
    #[serde(default)]
    pub high: f64,
    /// Low price.
    #[serde(default)]
    pub low: f64,
    /// Close price.
    pub close: f64,
    /// Volume.
    #[serde(default)]
    pub volume: f64,
}

impl HistoricalPrice {
    /// Parse the date field.
    #[must_use]
    pub fn parsed_date(&self) -> Option<Date> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Builds a chronological price series from FMP rows.
///
/// Rows arrive newest first; rows with an unparseable date or a non-finite
/// close are dropped.
#[must_use]
pub fn to_price_series(symbol: &str, rows: &[HistoricalPrice]) -> PriceSeries {
    let points = rows
        .iter()
        .filter(|row| row.close.is_finite())
        .filter_map(|row| row.parsed_date().map(|date| (date, row.close)))
        .collect();
    PriceSeries::from_unsorted(symbol, points)
}

/// Trailing-twelve-month valuation ratios from FMP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatiosTtm {
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Trailing P/E.
    #[serde(rename = "priceToEarningsRatioTTM", default)]
    pub pe: Option<f64>,
    /// Price-to-book.
    #[serde(rename = "priceToBookRatioTTM", default)]
    pub pb: Option<f64>,
    /// Enterprise value over EBITDA.
    #[serde(rename = "enterpriseValueMultipleTTM", default)]
    pub ev_ebitda: Option<f64>,
    /// Price-to-sales.
    #[serde(rename = "priceToSalesRatioTTM", default)]
    pub ps: Option<f64>,
}

impl RatiosTtm {
    /// Sanitized snapshot: non-positive or implausibly large multiples are
    /// dropped.
    #[must_use]
    pub fn to_snapshot(&self) -> FundamentalsSnapshot {
        FundamentalsSnapshot::from_raw(self.pe, self.pb, self.ev_ebitda, self.ps)
    }
}
