//! Data loading utilities for the Aegis CLI.
//!
//! Everything is fetched before the engine runs. A symbol whose prices cannot
//! be fetched is logged and left out; the engine then reports it as omitted.

use std::collections::HashMap;

use aegis_engine::AnalysisConfig;
use aegis_traits::{
    AegisError, Date, FundamentalsSnapshot, FundamentalsSource, InstrumentData, MarketDataSource,
    Symbol,
};
use chrono::Days;
use tracing::{info, warn};

/// Calendar window ending at `end` covering the configured lookback.
pub(crate) fn date_range(config: &AnalysisConfig, end: Date) -> (Date, Date) {
    let start = end
        .checked_sub_days(Days::new(config.lookback_days()))
        .unwrap_or(Date::MIN);
    (start, end)
}

/// Fetch the benchmark's prices.
pub(crate) async fn load_benchmark<S: MarketDataSource>(
    source: &S,
    symbol: &str,
    (from, to): (Date, Date),
) -> Result<InstrumentData, AegisError> {
    let prices = source.price_history(symbol, from, to).await?;
    info!(symbol, observations = prices.len(), "benchmark loaded");
    Ok(InstrumentData::benchmark(prices))
}

/// Fetch prices and fundamentals for one instrument.
///
/// Missing fundamentals are not fatal; the valuation rule falls back to its
/// neutral score.
pub(crate) async fn load_instrument<S>(
    source: &S,
    symbol: &str,
    (from, to): (Date, Date),
) -> Result<InstrumentData, AegisError>
where
    S: MarketDataSource + FundamentalsSource,
{
    let (prices, fundamentals) = tokio::join!(
        source.price_history(symbol, from, to),
        source.fundamentals(symbol),
    );
    let fundamentals = fundamentals.unwrap_or_else(|e| {
        warn!(symbol, error = %e, "fundamentals unavailable");
        FundamentalsSnapshot::default()
    });
    Ok(InstrumentData::new(prices?, fundamentals))
}

/// Fetch every symbol, keeping the ones that loaded.
pub(crate) async fn load_universe<S>(
    source: &S,
    symbols: &[Symbol],
    range: (Date, Date),
) -> HashMap<Symbol, InstrumentData>
where
    S: MarketDataSource + FundamentalsSource,
{
    let mut datasets = HashMap::with_capacity(symbols.len());
    for (i, symbol) in symbols.iter().enumerate() {
        match load_instrument(source, symbol, range).await {
            Ok(data) => {
                datasets.insert(symbol.clone(), data);
            }
            Err(e) => warn!(symbol = symbol.as_str(), error = %e, "fetch failed, omitting"),
        }
        if (i + 1) % 50 == 0 {
            info!(fetched = i + 1, total = symbols.len(), "fetching");
        }
    }
    datasets
}

#[cfg(test)]
mod tests {
    use super::*;
    use aegis_traits::PriceSeries;

    /// In-memory source: every symbol but "GONE" has three closes.
    struct Fixture;

    impl MarketDataSource for Fixture {
        async fn price_history(
            &self,
            symbol: &str,
            from: Date,
            _to: Date,
        ) -> aegis_traits::Result<PriceSeries> {
            if symbol == "GONE" {
                return Err(AegisError::DataFetch(format!("no prices for {symbol}")));
            }
            let points = (0..3)
                .map(|i| (from + Days::new(i), 100.0 + i as f64))
                .collect();
            PriceSeries::new(symbol, points)
        }
    }

    impl FundamentalsSource for Fixture {
        async fn fundamentals(&self, symbol: &str) -> aegis_traits::Result<FundamentalsSnapshot> {
            if symbol == "KO" {
                Ok(FundamentalsSnapshot::from_raw(Some(24.0), Some(10.0), None, None))
            } else {
                Err(AegisError::DataFetch("ratios".into()))
            }
        }
    }

    fn range() -> (Date, Date) {
        date_range(
            &AnalysisConfig::default(),
            Date::from_ymd_opt(2025, 6, 30).unwrap(),
        )
    }

    #[test]
    fn test_date_range() {
        let (start, end) = range();
        assert_eq!(end, Date::from_ymd_opt(2025, 6, 30).unwrap());
        assert_eq!((end - start).num_days(), 1095);
    }

    #[tokio::test]
    async fn test_load_instrument_tolerates_missing_fundamentals() {
        let data = load_instrument(&Fixture, "PEP", range()).await.unwrap();
        assert_eq!(data.prices().len(), 3);
        assert_eq!(*data.fundamentals(), FundamentalsSnapshot::default());

        let ko = load_instrument(&Fixture, "KO", range()).await.unwrap();
        assert_eq!(ko.fundamentals().pe, Some(24.0));
    }

    #[tokio::test]
    async fn test_load_universe_skips_failures() {
        let symbols: Vec<Symbol> = ["KO", "GONE", "PEP"].map(String::from).to_vec();
        let datasets = load_universe(&Fixture, &symbols, range()).await;
        assert_eq!(datasets.len(), 2);
        assert!(!datasets.contains_key("GONE"));
    }

    #[tokio::test]
    async fn test_load_benchmark() {
        let benchmark = load_benchmark(&Fixture, "SPY", range()).await.unwrap();
        assert_eq!(benchmark.symbol(), "SPY");
        assert_eq!(benchmark.returns().len(), 2);
    }
}
