//! Central moments and the shape measures built on them.
//!
//! Kurtosis uses the non-excess convention: a normal distribution scores about `3`.

use serde::Serialize;

use crate::descriptive::{mean, standard_deviation};

/// The first four central moments of a sample together with skewness and kurtosis.
///
/// # Examples
///
/// ```
/// use statsolver_stats::moments::Moments;
///
/// let result = Moments::new(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert_eq!(result.moment2, 4.0);
/// assert!(result.moment1.abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Moments {
    /// First central moment. Always zero up to rounding.
    pub moment1: f64,
    /// Second central moment (the population variance).
    pub moment2: f64,
    /// Third central moment.
    pub moment3: f64,
    /// Fourth central moment.
    pub moment4: f64,
    /// `moment3 / std_dev^3`, or `0` for a constant sample.
    pub skewness: f64,
    /// `moment4 / std_dev^4`, or `0` for a constant sample.
    pub kurtosis: f64,
}

impl Moments {
    /// Computes the first four central moments of `values`, plus skewness and kurtosis.
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        let center = mean(values);
        let [moment1, moment2, moment3, moment4] =
            [1, 2, 3, 4].map(|order| central_moment(values, center, order));
        let std_dev = moment2.sqrt();
        Self {
            moment1,
            moment2,
            moment3,
            moment4,
            skewness: standardized(moment3, std_dev, 3),
            kurtosis: standardized(moment4, std_dev, 4),
        }
    }
}

/// Returns the `order`-th central moment: the mean of `(x - mean)^order`.
///
/// An empty sample yields `0`. Orders below `1` are not meaningful here.
///
/// # Examples
///
/// ```
/// # use statsolver_stats::moments::moment;
/// let values = [10.0, 20.0, 30.0, 40.0, 50.0];
/// assert_eq!(moment(&values, 1), 0.0);
/// assert_eq!(moment(&values, 2), 200.0);
/// assert_eq!(moment(&values, 3), 0.0);
/// ```
#[must_use]
pub fn moment(values: &[f64], order: i32) -> f64 {
    central_moment(values, mean(values), order)
}

#[expect(clippy::cast_precision_loss)]
fn central_moment(values: &[f64], center: f64, order: i32) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| (v - center).powi(order)).sum::<f64>() / values.len() as f64
}

/// Returns the standardized third moment, or `0` when every value is identical.
///
/// # Examples
///
/// ```
/// # use statsolver_stats::moments::skewness;
/// assert_eq!(skewness(&[5.0, 5.0, 5.0]), 0.0);
/// assert!(skewness(&[1.0, 1.0, 1.0, 10.0]) > 0.0);
/// ```
#[must_use]
pub fn skewness(values: &[f64]) -> f64 {
    standardized(moment(values, 3), standard_deviation(values), 3)
}

/// Returns the standardized fourth moment, or `0` when every value is identical.
///
/// This is plain kurtosis, not excess kurtosis.
#[must_use]
pub fn kurtosis(values: &[f64]) -> f64 {
    standardized(moment(values, 4), standard_deviation(values), 4)
}

fn standardized(central_moment: f64, std_dev: f64, order: i32) -> f64 {
    if std_dev == 0.0 {
        tracing::debug!(order, "standard deviation is zero, standardized moment falls back to 0");
        return 0.0;
    }
    central_moment / std_dev.powi(order)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_moment_orders() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // mean 5, deviations: -3 -1 -1 -1 0 0 2 4
        assert_close(moment(&values, 1), 0.0);
        assert_close(moment(&values, 2), 32.0 / 8.0);
        assert_close(moment(&values, 3), 42.0 / 8.0);
        assert_close(moment(&values, 4), 356.0 / 8.0);
    }

    #[test]
    fn test_moment_empty() {
        assert_close(moment(&[], 1), 0.0);
        assert_close(moment(&[], 4), 0.0);
    }

    #[test]
    fn test_constant_sample_shape_falls_back_to_zero() {
        let values = [5.0, 5.0, 5.0];
        assert_close(skewness(&values), 0.0);
        assert_close(kurtosis(&values), 0.0);
        assert!(!skewness(&values).is_nan());
        assert!(!kurtosis(&values).is_nan());
    }

    #[test]
    fn test_skewness_sign() {
        assert!(skewness(&[1.0, 1.0, 1.0, 10.0]) > 0.0);
        assert!(skewness(&[-10.0, 1.0, 1.0, 1.0]) < 0.0);
        assert_close(skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]), 0.0);
    }

    #[test]
    fn test_kurtosis_of_symmetric_two_point_sample() {
        // every deviation equals the standard deviation
        assert_close(kurtosis(&[-1.0, 1.0, -1.0, 1.0]), 1.0);
    }

    #[test]
    fn test_kurtosis_of_uniform_grid() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        // m2 = 2, m4 = 6.8
        assert_close(kurtosis(&values), 6.8 / 4.0);
    }

    #[test]
    fn test_moments_struct_matches_free_functions() {
        let values = [3.0, 8.0, 1.0, 9.0, 12.0, 4.0];
        let result = Moments::new(&values);
        assert_close(result.moment1, moment(&values, 1));
        assert_close(result.moment2, moment(&values, 2));
        assert_close(result.moment3, moment(&values, 3));
        assert_close(result.moment4, moment(&values, 4));
        assert_close(result.skewness, skewness(&values));
        assert_close(result.kurtosis, kurtosis(&values));
    }

    proptest! {
        #[test]
        fn prop_first_moment_is_zero(
            values in prop::collection::vec(-1.0e3..1.0e3_f64, 1..64)
        ) {
            prop_assert!(moment(&values, 1).abs() < 1e-8);
        }

        #[test]
        fn prop_shape_measures_are_finite(
            values in prop::collection::vec(-1.0e3..1.0e3_f64, 0..64)
        ) {
            prop_assert!(skewness(&values).is_finite());
            prop_assert!(kurtosis(&values).is_finite());
        }
    }
}
