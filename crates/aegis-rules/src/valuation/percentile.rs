//! Percentile rank of a multiple within its history, and the score mapping.

use aegis_traits::RuleStatus;

/// Percentage of `history` at or below `current`: `100 * count(h <= current) / n`.
///
/// Returns `None` for an empty history.
///
/// # Examples
///
/// ```
/// use aegis_rules::valuation::percentile_rank;
///
/// let history = [10.0, 20.0, 30.0, 40.0];
/// assert_eq!(percentile_rank(&history, 20.0), Some(50.0));
/// assert_eq!(percentile_rank(&history, 5.0), Some(0.0));
/// ```
#[must_use]
pub fn percentile_rank(history: &[f64], current: f64) -> Option<f64> {
    if history.is_empty() {
        return None;
    }
    let at_or_below = history.iter().filter(|&&h| h <= current).count();
    Some(100.0 * at_or_below as f64 / history.len() as f64)
}

/// Maps a valuation percentile to a score and status. Cheaper scores higher.
#[must_use]
pub const fn percentile_score(percentile: f64) -> (u8, RuleStatus) {
    if percentile <= 10.0 {
        (10, RuleStatus::VeryCheap)
    } else if percentile <= 25.0 {
        (9, RuleStatus::Cheap)
    } else if percentile <= 40.0 {
        (8, RuleStatus::BelowAverage)
    } else if percentile <= 60.0 {
        (6, RuleStatus::Average)
    } else if percentile <= 75.0 {
        (4, RuleStatus::AboveAverage)
    } else if percentile <= 90.0 {
        (2, RuleStatus::Expensive)
    } else {
        (1, RuleStatus::VeryExpensive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_percentile_rank() {
        let history = [10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0, 26.0, 28.0];
        assert_relative_eq!(percentile_rank(&history, 18.0).unwrap(), 50.0);
        assert_relative_eq!(percentile_rank(&history, 9.0).unwrap(), 0.0);
        assert_relative_eq!(percentile_rank(&history, 100.0).unwrap(), 100.0);
        assert!(percentile_rank(&[], 1.0).is_none());
    }

    #[test]
    fn test_percentile_score_bands() {
        assert_eq!(percentile_score(0.0), (10, RuleStatus::VeryCheap));
        assert_eq!(percentile_score(10.0), (10, RuleStatus::VeryCheap));
        assert_eq!(percentile_score(25.0), (9, RuleStatus::Cheap));
        assert_eq!(percentile_score(40.0), (8, RuleStatus::BelowAverage));
        assert_eq!(percentile_score(60.0), (6, RuleStatus::Average));
        assert_eq!(percentile_score(75.0), (4, RuleStatus::AboveAverage));
        assert_eq!(percentile_score(90.0), (2, RuleStatus::Expensive));
        assert_eq!(percentile_score(92.0), (1, RuleStatus::VeryExpensive));
    }

    #[test]
    fn test_percentile_is_monotonic_in_current() {
        let history: Vec<f64> = (0..200).map(|i| 8.0 + f64::from(i % 37) * 1.3).collect();
        let mut previous = 0.0;
        for step in 0..120 {
            let current = f64::from(step) * 0.5;
            let percentile = percentile_rank(&history, current).unwrap();
            assert!(percentile >= previous);
            previous = percentile;
        }
    }

    #[test]
    fn test_score_is_non_increasing_in_percentile() {
        let mut previous = u8::MAX;
        for step in 0..=1000 {
            let (score, _) = percentile_score(f64::from(step) / 10.0);
            assert!(score <= previous);
            previous = score;
        }
    }
}
