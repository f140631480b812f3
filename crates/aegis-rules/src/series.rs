//! Price and return utilities shared by the rule calculators.
//!
//! Pure functions over closing prices and returns: running-peak drawdown,
//! simple moving averages and annualized volatility. Percentage returns live
//! on [`aegis_traits::PriceSeries::returns`].

use aegis_traits::stats;

/// Trading days per year used to annualize daily statistics.
pub const TRADING_DAYS_PER_YEAR: usize = 252;

/// Drawdown from the running maximum at every observation.
///
/// Each element is `(price - peak) / peak`, where `peak` is the highest price
/// seen up to and including that observation. Values are `<= 0` for positive
/// prices.
pub fn drawdowns(prices: &[f64]) -> Vec<f64> {
    let mut peak = f64::NEG_INFINITY;
    prices
        .iter()
        .map(|&price| {
            peak = peak.max(price);
            (price - peak) / peak
        })
        .collect()
}

/// Deepest drawdown of a price series (a value `<= 0`).
///
/// Returns `None` for an empty series.
///
/// # Examples
///
/// ```
/// use aegis_rules::series::max_drawdown;
///
/// let dd = max_drawdown(&[100.0, 120.0, 90.0, 130.0]).unwrap();
/// assert!((dd - (-0.25)).abs() < 1e-12);
/// ```
pub fn max_drawdown(prices: &[f64]) -> Option<f64> {
    drawdowns(prices).into_iter().reduce(f64::min)
}

/// Simple moving average over `window` observations.
///
/// The output has one entry per price; entries before the window is full are
/// `None`. A zero window yields all `None`.
///
/// Each window is summed afresh as deviations from its first price, so no
/// rounding carries over between windows and a flat window averages to
/// exactly its price.
pub fn moving_average(prices: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 || prices.len() < window {
        return vec![None; prices.len()];
    }

    let mut out = vec![None; window - 1];
    out.extend(prices.windows(window).map(|w| {
        let anchor = w[0];
        let offset: f64 = w.iter().map(|p| p - anchor).sum();
        Some(anchor + offset / window as f64)
    }));
    out
}

/// Annualized volatility: sample standard deviation of periodic returns
/// scaled by the square root of the periods per year.
///
/// Returns `None` with fewer than two returns.
pub fn annualized_volatility(returns: &[f64], periods_per_year: usize) -> Option<f64> {
    stats::std_dev(returns).map(|sd| sd * (periods_per_year as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_drawdowns() {
        let dd = drawdowns(&[100.0, 110.0, 99.0, 121.0]);
        assert_relative_eq!(dd[0], 0.0);
        assert_relative_eq!(dd[1], 0.0);
        assert_relative_eq!(dd[2], -0.1);
        assert_relative_eq!(dd[3], 0.0);
    }

    #[test]
    fn test_max_drawdown() {
        assert_relative_eq!(max_drawdown(&[50.0, 40.0, 45.0, 30.0, 60.0]).unwrap(), -0.4);
        assert_relative_eq!(max_drawdown(&[1.0, 2.0, 3.0]).unwrap(), 0.0);
        assert!(max_drawdown(&[]).is_none());
    }

    #[test]
    fn test_moving_average() {
        let ma = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert_eq!(ma.len(), 5);
        assert!(ma[0].is_none());
        assert!(ma[1].is_none());
        assert_relative_eq!(ma[2].unwrap(), 2.0);
        assert_relative_eq!(ma[3].unwrap(), 3.0);
        assert_relative_eq!(ma[4].unwrap(), 4.0);
    }

    #[test]
    fn test_moving_average_flat_stretch_is_exact() {
        // a long noisy run followed by a flat window at a non-representable price
        let mut prices: Vec<f64> = (0..2000)
            .map(|i| 37.1 + ((i * 7919) % 113) as f64 * 0.37)
            .collect();
        prices.extend(std::iter::repeat_n(41.3, 200));

        let ma = moving_average(&prices, 200);
        assert_eq!(ma.last().copied().flatten(), Some(41.3));
    }

    #[test]
    fn test_moving_average_window_longer_than_series() {
        let ma = moving_average(&[1.0, 2.0], 5);
        assert!(ma.iter().all(Option::is_none));
        assert!(moving_average(&[1.0], 0).iter().all(Option::is_none));
    }

    #[test]
    fn test_annualized_volatility() {
        let returns = [0.01, -0.01, 0.01, -0.01];
        let daily = stats::std_dev(&returns).unwrap();
        let annual = annualized_volatility(&returns, TRADING_DAYS_PER_YEAR).unwrap();
        assert_relative_eq!(annual, daily * 252f64.sqrt());
        assert!(annualized_volatility(&[0.01], TRADING_DAYS_PER_YEAR).is_none());
    }
}
