//! Rule 6: valuation against the instrument's own reconstructed history.

use std::fmt;
use std::sync::Arc;

use aegis_traits::{
    InstrumentData, PriceSeries, Rule, RuleKind, RuleOutcome, RuleResult, RuleStatus,
    ValuationDetail, ValuationMetric,
};
use aegis_universe::SectorRegistry;
use chrono::Days;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::percentile::{percentile_rank, percentile_score};

/// Score assigned when no percentile can be computed.
pub const NEUTRAL_SCORE: u8 = 5;

/// Configuration for the valuation rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    /// Fewest prices in the window for a history to be reconstructed (default: 100)
    pub min_history: usize,
    /// Fewest plausible reconstructed multiples for a percentile (default: 50)
    pub min_valid: usize,
    /// Exclusive plausibility bounds for P/E (default: 5 to 200)
    pub pe_bounds: (f64, f64),
    /// Exclusive plausibility bounds for P/B (default: 0.1 to 20)
    pub pb_bounds: (f64, f64),
    /// Calendar days of trailing prices used (default: three years)
    pub window_days: u64,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            min_history: 100,
            min_valid: 50,
            pe_bounds: (5.0, 200.0),
            pb_bounds: (0.1, 20.0),
            window_days: 3 * 365,
        }
    }
}

impl ValuationConfig {
    /// Plausibility bounds for a metric, `None` for metrics without a
    /// percentile path.
    #[must_use]
    pub const fn bounds(&self, metric: ValuationMetric) -> Option<(f64, f64)> {
        match metric {
            ValuationMetric::PriceToEarnings => Some(self.pe_bounds),
            ValuationMetric::PriceToBook => Some(self.pb_bounds),
            ValuationMetric::EvToEbitda | ValuationMetric::PriceToSales => None,
        }
    }
}

/// The approximation behind the reconstructed history: the per-share
/// fundamental (earnings or book value) is taken as constant across the
/// window, so every historical multiple is `price / (last_price / current)`.
///
/// This is not a point-in-time multiple. It ranks today's price against the
/// prices of the window, expressed in multiple units.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantFundamentalAssumption;

impl ConstantFundamentalAssumption {
    /// Per-share fundamental implied by the latest price and current multiple.
    ///
    /// Returns `None` unless both inputs are finite and positive.
    #[must_use]
    pub fn implied_fundamental(last_price: f64, current_multiple: f64) -> Option<f64> {
        let valid = |x: f64| x.is_finite() && x > 0.0;
        (valid(last_price) && valid(current_multiple)).then(|| last_price / current_multiple)
    }

    /// Multiple implied on every day of the window.
    #[must_use]
    pub fn implied_history(prices: &[f64], implied_fundamental: f64) -> Vec<f64> {
        prices.iter().map(|p| p / implied_fundamental).collect()
    }
}

/// A completed percentile computation for one metric.
#[derive(Debug, Clone, Copy)]
struct Ranked {
    metric: ValuationMetric,
    current: f64,
    percentile: f64,
    observations: usize,
}

/// Why a metric's percentile path was abandoned.
#[derive(Debug, Clone, Copy)]
enum Abandoned {
    NoCurrent,
    Unsupported,
    ShortHistory(usize),
    TooFewPlausible(usize),
}

impl fmt::Display for Abandoned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCurrent => f.write_str("no current multiple"),
            Self::Unsupported => f.write_str("no plausibility bounds"),
            Self::ShortHistory(got) => write!(f, "{got} prices in window"),
            Self::TooFewPlausible(got) => write!(f, "{got} plausible multiples"),
        }
    }
}

/// Rule 6: valuation percentile against the instrument's own history.
///
/// The preferred multiple comes from the sector convention; when its
/// percentile path fails the alternate multiple (P/E and P/B swap) is tried,
/// and when both fail the rule scores a neutral 5. This rule never reports a
/// computation error.
#[derive(Debug, Clone)]
pub struct ValuationRule {
    config: ValuationConfig,
    registry: Arc<SectorRegistry>,
}

impl ValuationRule {
    /// Create a new valuation rule sharing the sector registry.
    #[must_use]
    pub const fn new(config: ValuationConfig, registry: Arc<SectorRegistry>) -> Self {
        Self { config, registry }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ValuationConfig {
        &self.config
    }

    /// The trailing window of prices the history is rebuilt from.
    fn window(&self, prices: &PriceSeries) -> PriceSeries {
        match prices
            .last_date()
            .and_then(|last| last.checked_sub_days(Days::new(self.config.window_days)))
        {
            Some(start) => prices.since(start),
            None => prices.clone(),
        }
    }

    fn rank(
        &self,
        metric: ValuationMetric,
        data: &InstrumentData,
        window: &PriceSeries,
    ) -> Result<Ranked, Abandoned> {
        let current = data.fundamentals().get(metric).ok_or(Abandoned::NoCurrent)?;
        if window.len() < self.config.min_history {
            return Err(Abandoned::ShortHistory(window.len()));
        }
        let (low, high) = self.config.bounds(metric).ok_or(Abandoned::Unsupported)?;

        let implied = window
            .last_close()
            .and_then(|last| ConstantFundamentalAssumption::implied_fundamental(last, current))
            .ok_or(Abandoned::TooFewPlausible(0))?;
        let history: Vec<f64> =
            ConstantFundamentalAssumption::implied_history(window.closes(), implied)
                .into_iter()
                .filter(|m| *m > low && *m < high)
                .collect();
        if history.len() < self.config.min_valid {
            return Err(Abandoned::TooFewPlausible(history.len()));
        }

        let percentile =
            percentile_rank(&history, current).ok_or(Abandoned::TooFewPlausible(0))?;
        Ok(Ranked {
            metric,
            current,
            percentile,
            observations: history.len(),
        })
    }
}

impl Default for ValuationRule {
    fn default() -> Self {
        Self::new(ValuationConfig::default(), Arc::new(SectorRegistry::standard()))
    }
}

impl Rule for ValuationRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Valuation
    }

    fn evaluate(&self, instrument: &InstrumentData, _benchmark: &InstrumentData) -> RuleOutcome {
        let symbol = instrument.symbol();
        let sector = self.registry.sector_of(symbol);
        let preferred = self.registry.valuation_metric_for(sector);
        let window = self.window(instrument.prices());

        let mut attempts = vec![preferred];
        attempts.extend(preferred.alternate());

        for &metric in &attempts {
            match self.rank(metric, instrument, &window) {
                Ok(ranked) => {
                    let (score, status) = percentile_score(ranked.percentile);
                    debug!(
                        symbol,
                        %metric,
                        percentile = ranked.percentile,
                        score,
                        "valuation percentile"
                    );
                    let detail = ValuationDetail {
                        metric: Some(ranked.metric),
                        sector: sector.map(str::to_string),
                        current: Some(ranked.current),
                        percentile: Some(ranked.percentile),
                        observations: ranked.observations,
                    };
                    return Ok(RuleResult::with_status(
                        RuleKind::Valuation,
                        score,
                        Some(ranked.current),
                        format!(
                            "{}: {:.1} (P{:.0})",
                            ranked.metric, ranked.current, ranked.percentile
                        ),
                        status,
                    )
                    .with_detail(detail));
                }
                Err(reason) => {
                    debug!(symbol, %metric, %reason, "valuation percentile path abandoned");
                }
            }
        }

        // the last attempted metric is checked first
        let current = attempts
            .iter()
            .rev()
            .find_map(|&metric| instrument.fundamentals().get(metric).map(|v| (metric, v)));
        let detail = ValuationDetail {
            metric: current.map(|(metric, _)| metric),
            sector: sector.map(str::to_string),
            current: current.map(|(_, value)| value),
            percentile: None,
            observations: 0,
        };

        let result = match current {
            Some((metric, value)) => {
                debug!(symbol, %metric, value, "valuation has no usable history");
                RuleResult::with_status(
                    RuleKind::Valuation,
                    NEUTRAL_SCORE,
                    Some(value),
                    format!("{metric}: {value:.1} (no history)"),
                    RuleStatus::NoHistory,
                )
            }
            None => {
                debug!(symbol, "valuation data not available");
                RuleResult::with_status(
                    RuleKind::Valuation,
                    NEUTRAL_SCORE,
                    None,
                    "valuation data not available",
                    RuleStatus::NotAvailable,
                )
            }
        };
        Ok(result.with_detail(detail))
    }

    // short or missing history falls back to the bare check
    fn min_observations(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{data, prices};
    use aegis_traits::FundamentalsSnapshot;
    use approx::assert_relative_eq;

    fn with_fundamentals(
        symbol: &str,
        closes: &[f64],
        pe: Option<f64>,
        pb: Option<f64>,
    ) -> InstrumentData {
        InstrumentData::new(
            prices(symbol, closes),
            FundamentalsSnapshot::from_raw(pe, pb, None, None),
        )
    }

    /// 100 closes ending at 104: eight above the last close, 91 below it.
    fn p92_closes() -> Vec<f64> {
        let mut closes = vec![110.0; 8];
        closes.extend((0..91).map(|i| 60.0 + f64::from(i) * 0.4));
        closes.push(104.0);
        closes
    }

    fn benchmark() -> InstrumentData {
        data("SPY", &[100.0, 101.0])
    }

    #[test]
    fn test_constant_fundamental_assumption() {
        let implied = ConstantFundamentalAssumption::implied_fundamental(104.0, 52.0).unwrap();
        assert_relative_eq!(implied, 2.0);
        let history =
            ConstantFundamentalAssumption::implied_history(&[50.0, 80.0, 104.0], implied);
        assert_eq!(history.last().copied(), Some(52.0));
        assert_relative_eq!(history[0], 25.0);

        assert!(ConstantFundamentalAssumption::implied_fundamental(0.0, 10.0).is_none());
        assert!(ConstantFundamentalAssumption::implied_fundamental(10.0, -1.0).is_none());
    }

    #[test]
    fn test_expensive_at_p92() {
        let stock = with_fundamentals("XYZ", &p92_closes(), Some(52.0), None);
        let result = ValuationRule::default().evaluate(&stock, &benchmark()).unwrap();

        assert_eq!(result.score(), 1);
        assert_eq!(result.status(), RuleStatus::VeryExpensive);
        assert_eq!(result.status().label(), "very expensive");
        assert_eq!(result.description(), "P/E: 52.0 (P92)");
        assert_eq!(result.value(), Some(52.0));

        let detail = result.detail().unwrap();
        assert_eq!(detail.metric, Some(ValuationMetric::PriceToEarnings));
        assert_eq!(detail.sector, None);
        assert_relative_eq!(detail.percentile.unwrap(), 92.0);
        assert_eq!(detail.observations, 100);
    }

    #[test]
    fn test_financials_prefer_book_multiple() {
        // JPM is a Financials member, so P/B is tried first
        let closes: Vec<f64> = (0..150).map(|i| 50.0 + f64::from(i)).collect();
        let stock = with_fundamentals("JPM", &closes, Some(12.0), Some(2.0));
        let result = ValuationRule::default().evaluate(&stock, &benchmark()).unwrap();

        let detail = result.detail().unwrap();
        assert_eq!(detail.metric, Some(ValuationMetric::PriceToBook));
        assert_eq!(detail.sector.as_deref(), Some("Financials"));
        // the last close is the highest price in a rising series
        assert_relative_eq!(detail.percentile.unwrap(), 100.0);
        assert_eq!(result.score(), 1);
    }

    #[test]
    fn test_falls_back_to_alternate_metric() {
        let closes: Vec<f64> = (0..150).map(|i| 100.0 - f64::from(i) * 0.2).collect();
        let stock = with_fundamentals("JPM", &closes, Some(15.0), None);
        let result = ValuationRule::default().evaluate(&stock, &benchmark()).unwrap();

        let detail = result.detail().unwrap();
        assert_eq!(detail.metric, Some(ValuationMetric::PriceToEarnings));
        // falling series: today is the cheapest day
        assert_eq!(result.status(), RuleStatus::VeryCheap);
        assert_eq!(result.score(), 10);
    }

    #[test]
    fn test_short_distribution_falls_back() {
        // ten plausible multiples are not enough for a percentile
        let closes = [10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0, 26.0, 28.0];
        let stock = with_fundamentals("XYZ", &closes, Some(28.0), None);
        let rule = ValuationRule::new(
            ValuationConfig {
                min_history: 5,
                ..ValuationConfig::default()
            },
            Arc::new(SectorRegistry::standard()),
        );

        let result = rule.evaluate(&stock, &benchmark()).unwrap();
        assert_eq!(result.score(), NEUTRAL_SCORE);
        assert_eq!(result.status(), RuleStatus::NoHistory);
        assert_eq!(result.description(), "P/E: 28.0 (no history)");
        assert!(result.detail().unwrap().percentile.is_none());
    }

    #[test]
    fn test_short_price_history_falls_back() {
        let stock = with_fundamentals("KO", &[60.0; 40], Some(18.3), None);
        let result = ValuationRule::default().evaluate(&stock, &benchmark()).unwrap();
        assert_eq!(result.score(), 5);
        assert_eq!(result.status(), RuleStatus::NoHistory);
        assert_eq!(result.description(), "P/E: 18.3 (no history)");
    }

    #[test]
    fn test_bare_check_prefers_alternate_metric() {
        let stock = with_fundamentals("KO", &[60.0; 40], Some(18.3), Some(9.0));
        let result = ValuationRule::default().evaluate(&stock, &benchmark()).unwrap();
        assert_eq!(result.detail().unwrap().metric, Some(ValuationMetric::PriceToBook));
        assert_eq!(result.description(), "P/B: 9.0 (no history)");
    }

    #[test]
    fn test_no_valuation_data() {
        let stock = with_fundamentals("KO", &p92_closes(), None, Some(-3.0));
        let result = ValuationRule::default().evaluate(&stock, &benchmark()).unwrap();
        assert_eq!(result.score(), 5);
        assert_eq!(result.status(), RuleStatus::NotAvailable);
        assert_eq!(result.value(), None);
        assert_eq!(result.description(), "valuation data not available");
    }

    #[test]
    fn test_plausibility_filter_is_exclusive() {
        // history multiples are exactly 5, 200 or in between; the bounds drop both ends
        let mut closes = vec![5.0; 30];
        closes.extend(vec![200.0; 30]);
        closes.extend((0..60).map(|i| 20.0 + f64::from(i)));
        closes.push(50.0);
        let stock = with_fundamentals("XYZ", &closes, Some(50.0), None);
        let result = ValuationRule::default().evaluate(&stock, &benchmark()).unwrap();
        assert_eq!(result.detail().unwrap().observations, 61);
    }

    #[test]
    fn test_window_keeps_trailing_three_years() {
        let rule = ValuationRule::default();
        let closes = vec![10.0; 1500];
        let series = prices("XYZ", &closes);
        let window = rule.window(&series);
        assert_eq!(window.len(), 1096);
        assert_eq!(window.last_date(), series.last_date());
    }
}
