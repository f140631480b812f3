//! Statistical utility functions shared by the rule calculators.
//!
//! All estimators use the sample (N-1) denominator so that paired statistics
//! built from them stay mutually consistent: the covariance of a series with
//! itself is bit-identical to its variance.

use ndarray::{ArrayView1, Zip};

/// Minimum threshold for standard deviation to avoid division by zero.
/// Values below this threshold are treated as zero variance.
pub const MIN_STD_THRESHOLD: f64 = 1e-10;

/// Arithmetic mean. `None` for an empty slice.
///
/// # Examples
///
/// ```
/// use aegis_traits::stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(values: &[f64]) -> Option<f64> {
    ArrayView1::from(values).mean()
}

/// Sample covariance of two equally long slices.
///
/// Returns `None` if the lengths differ or fewer than two observations are
/// available.
pub fn covariance(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let x = ArrayView1::from(x);
    let y = ArrayView1::from(y);
    let mean_x = x.mean()?;
    let mean_y = y.mean()?;

    let mut sum = 0.0;
    Zip::from(&x)
        .and(&y)
        .for_each(|a, b| sum += (a - mean_x) * (b - mean_y));
    Some(sum / (x.len() - 1) as f64)
}

/// Sample variance. Same estimator as [`covariance`] of a series with itself.
pub fn variance(values: &[f64]) -> Option<f64> {
    covariance(values, values)
}

/// Sample standard deviation.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    variance(values).map(f64::sqrt)
}

/// Pearson correlation coefficient, clamped to `[-1, 1]`.
///
/// Returns `None` when either series has (near) zero variance or the inputs
/// are unusable for [`covariance`].
///
/// # Examples
///
/// ```
/// use aegis_traits::stats::pearson;
///
/// let x = [0.01, -0.02, 0.015, 0.003];
/// assert_eq!(pearson(&x, &x), Some(1.0));
/// ```
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let cov = covariance(x, y)?;
    let var_x = variance(x)?;
    let var_y = variance(y)?;
    if var_x.sqrt() < MIN_STD_THRESHOLD || var_y.sqrt() < MIN_STD_THRESHOLD {
        return None;
    }
    // sqrt(v * v) == v in IEEE arithmetic, so identical inputs give exactly 1
    Some((cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0))
}

/// Whether every value is finite.
pub fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
        assert!(mean(&[]).is_none());
    }

    #[test]
    fn test_variance_sample_denominator() {
        // Population variance of 1..=5 is 2, sample variance is 2.5
        let v = variance(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_relative_eq!(v, 2.5);
        assert_relative_eq!(std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 2.5_f64.sqrt());
    }

    #[test]
    fn test_covariance_self_equals_variance() {
        let x = [0.013, -0.021, 0.004, 0.0071, -0.0003];
        assert_eq!(covariance(&x, &x), variance(&x));
    }

    #[test]
    fn test_covariance_rejects_bad_input() {
        assert!(covariance(&[1.0], &[1.0]).is_none());
        assert!(covariance(&[1.0, 2.0], &[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn test_pearson_perfect() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        assert_relative_eq!(pearson(&x, &y).unwrap(), 1.0);

        let z = [8.0, 6.0, 4.0, 2.0];
        assert_relative_eq!(pearson(&x, &z).unwrap(), -1.0);
    }

    #[test]
    fn test_pearson_constant_series() {
        let x = [1.0, 2.0, 3.0];
        let flat = [5.0, 5.0, 5.0];
        assert!(pearson(&x, &flat).is_none());
    }

    #[test]
    fn test_all_finite() {
        assert!(all_finite(&[1.0, -2.0]));
        assert!(!all_finite(&[1.0, f64::NAN]));
        assert!(!all_finite(&[f64::INFINITY]));
    }
}
