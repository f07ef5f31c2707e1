//! Measures of central tendency and dispersion.
//!
//! Every function here is total over finite input: an empty sample yields `0`
//! (or an empty mode) instead of an error, and a zero mean makes the
//! coefficient of variation fall back to `0`.

use serde::Serialize;

/// Mean, median and mode of a sample.
///
/// # Examples
///
/// ```
/// use statsolver_stats::descriptive::CentralTendency;
///
/// let result = CentralTendency::new(&[10.0, 20.0, 20.0, 30.0, 40.0]);
/// assert_eq!(result.mean, 24.0);
/// assert_eq!(result.median, 20.0);
/// assert_eq!(result.mode, vec![20.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralTendency {
    /// The arithmetic mean of the sample.
    pub mean: f64,
    /// The middle value of the sorted sample.
    pub median: f64,
    /// All values sharing the highest frequency, ascending. Empty when every value is unique.
    pub mode: Vec<f64>,
}

impl CentralTendency {
    /// Computes mean, median and mode of `values`.
    ///
    /// The caller's slice is left untouched; sorting happens on a copy.
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        let sorted = sorted_copy(values);
        Self {
            mean: mean(values),
            median: median_from_sorted(&sorted),
            mode: mode_from_sorted(&sorted),
        }
    }
}

/// Mean, population variance, standard deviation and coefficient of variation.
///
/// # Examples
///
/// ```
/// use statsolver_stats::descriptive::Dispersion;
///
/// let result = Dispersion::new(&[10.0, 20.0, 30.0, 40.0, 50.0]);
/// assert_eq!(result.mean, 30.0);
/// assert_eq!(result.variance, 200.0);
/// assert!((result.std_dev - 14.142).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dispersion {
    /// The arithmetic mean of the sample.
    pub mean: f64,
    /// The population variance (divides by `n`, not `n - 1`).
    pub variance: f64,
    /// The square root of [`Dispersion::variance`].
    pub std_dev: f64,
    /// `std_dev / mean * 100`, or `0` when the mean is zero.
    pub coefficient_of_variation: f64,
}

impl Dispersion {
    /// Computes the dispersion measures of `values`.
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        let mean = mean(values);
        let variance = variance_around(values, mean);
        let std_dev = variance.sqrt();
        Self {
            mean,
            variance,
            std_dev,
            coefficient_of_variation: relative_spread(std_dev, mean),
        }
    }
}

/// Returns the arithmetic mean of `values`, or `0` for an empty sample.
///
/// # Examples
///
/// ```
/// # use statsolver_stats::descriptive::mean;
/// assert_eq!(mean(&[]), 0.0);
/// assert_eq!(mean(&[5.0]), 5.0);
/// assert_eq!(mean(&[10.0, 20.0, 30.0, 40.0, 50.0]), 30.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Returns the median of `values`, or `0` for an empty sample.
///
/// For an even count the two middle values are averaged.
///
/// # Examples
///
/// ```
/// # use statsolver_stats::descriptive::median;
/// assert_eq!(median(&[50.0, 10.0, 40.0, 20.0, 30.0]), 30.0);
/// assert_eq!(median(&[10.0, 20.0, 30.0, 40.0]), 25.0);
/// ```
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    median_from_sorted(&sorted_copy(values))
}

/// Returns the median of values already sorted in ascending order.
///
/// # Panics
///
/// Panics in debug mode if `sorted_values` is not sorted in ascending order.
#[must_use]
pub fn median_from_sorted(sorted_values: &[f64]) -> f64 {
    debug_assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    let n = sorted_values.len();
    if n == 0 {
        return 0.0;
    }
    let middle = n / 2;
    if n % 2 == 0 {
        (sorted_values[middle - 1] + sorted_values[middle]) / 2.0
    } else {
        sorted_values[middle]
    }
}

/// Returns every value that occurs with the highest frequency, in ascending order.
///
/// An empty sample, or a sample where no value repeats, has no mode.
///
/// # Examples
///
/// ```
/// # use statsolver_stats::descriptive::mode;
/// assert_eq!(mode(&[10.0, 20.0, 20.0, 30.0, 40.0]), vec![20.0]);
/// assert_eq!(mode(&[1.0, 2.0, 3.0]), Vec::<f64>::new());
/// assert_eq!(mode(&[2.0, 1.0, 2.0, 1.0]), vec![1.0, 2.0]);
/// ```
#[must_use]
pub fn mode(values: &[f64]) -> Vec<f64> {
    mode_from_sorted(&sorted_copy(values))
}

#[expect(clippy::float_cmp)]
fn mode_from_sorted(sorted_values: &[f64]) -> Vec<f64> {
    // (value, frequency) runs over the sorted sample
    let mut runs: Vec<(f64, usize)> = vec![];
    for &value in sorted_values {
        match runs.last_mut() {
            Some((last, count)) if *last == value => *count += 1,
            // `+ 0.0` reports a -0.0 run as 0
            _ => runs.push((value + 0.0, 1)),
        }
    }

    let max_freq = runs.iter().map(|&(_, count)| count).max().unwrap_or(0);
    if max_freq <= 1 {
        return vec![];
    }
    runs.into_iter()
        .filter(|&(_, count)| count == max_freq)
        .map(|(value, _)| value)
        .collect()
}

/// Returns the population variance of `values`, or `0` for an empty sample.
#[must_use]
pub fn variance(values: &[f64]) -> f64 {
    variance_around(values, mean(values))
}

#[expect(clippy::cast_precision_loss)]
fn variance_around(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

/// Returns the population standard deviation of `values`.
#[must_use]
pub fn standard_deviation(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Returns the standard deviation as a percentage of the mean.
///
/// A zero mean yields `0` rather than an infinite or undefined ratio.
///
/// # Examples
///
/// ```
/// # use statsolver_stats::descriptive::coefficient_of_variation;
/// assert_eq!(coefficient_of_variation(&[-1.0, 1.0]), 0.0);
/// assert_eq!(coefficient_of_variation(&[5.0, 15.0]), 50.0);
/// ```
#[must_use]
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    relative_spread(standard_deviation(values), mean(values))
}

fn relative_spread(std_dev: f64, mean: f64) -> f64 {
    if mean == 0.0 {
        tracing::debug!("mean is zero, coefficient of variation falls back to 0");
        return 0.0;
    }
    (std_dev / mean) * 100.0
}

/// Returns a copy of `values` sorted in ascending order.
#[must_use]
pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
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
    fn test_mean() {
        assert_close(mean(&[]), 0.0);
        assert_close(mean(&[5.0]), 5.0);
        assert_close(mean(&[10.0, 20.0, 30.0, 40.0, 50.0]), 30.0);
        assert_close(mean(&[-2.0, 2.0, 3.0]), 1.0);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_close(median(&[10.0, 20.0, 30.0, 40.0, 50.0]), 30.0);
        assert_close(median(&[10.0, 20.0, 30.0, 40.0]), 25.0);
        assert_close(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_close(median(&[7.0]), 7.0);
    }

    #[test]
    fn test_median_empty() {
        assert_close(median(&[]), 0.0);
    }

    #[test]
    fn test_median_leaves_input_order() {
        let values = vec![50.0, 10.0, 40.0, 20.0, 30.0];
        let before = values.clone();

        let first = median(&values);
        let second = median(&values);

        assert_close(first, 30.0);
        assert_close(first, second);
        assert_eq!(values, before);
    }

    #[test]
    fn test_mode_single() {
        assert_eq!(mode(&[10.0, 20.0, 20.0, 30.0, 40.0]), vec![20.0]);
    }

    #[test]
    fn test_mode_all_unique() {
        assert!(mode(&[1.0, 2.0, 3.0]).is_empty());
        assert!(mode(&[]).is_empty());
    }

    #[test]
    fn test_mode_multimodal_ascending() {
        assert_eq!(mode(&[1.0, 1.0, 2.0, 2.0]), vec![1.0, 2.0]);
        assert_eq!(mode(&[3.0, 3.0, 1.0, 2.0, 1.0, 5.0]), vec![1.0, 3.0]);
    }

    #[test]
    fn test_mode_all_same_value() {
        assert_eq!(mode(&[4.0, 4.0, 4.0]), vec![4.0]);
    }

    #[test]
    fn test_mode_merges_signed_zeros() {
        let modes = mode(&[-0.0, 0.0, 1.0]);
        assert_eq!(modes, vec![0.0]);
        assert!(modes[0].is_sign_positive());
    }

    #[test]
    fn test_variance_and_std_dev() {
        let values = [10.0, 20.0, 30.0, 40.0, 50.0];
        assert_close(variance(&values), 200.0);
        assert!((standard_deviation(&values) - 14.142).abs() < 1e-3);
        assert_close(variance(&[]), 0.0);
        assert_close(variance(&[5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_coefficient_of_variation() {
        let values = [10.0, 20.0, 30.0, 40.0, 50.0];
        let expected = 200.0_f64.sqrt() / 30.0 * 100.0;
        assert_close(coefficient_of_variation(&values), expected);
    }

    #[test]
    fn test_coefficient_of_variation_zero_mean() {
        assert_close(coefficient_of_variation(&[-3.0, 0.0, 3.0]), 0.0);
        assert_close(coefficient_of_variation(&[]), 0.0);
    }

    #[test]
    fn test_central_tendency_matches_free_functions() {
        let values = [12.0, 14.0, 18.0, 20.0, 22.0, 24.0, 14.0];
        let result = CentralTendency::new(&values);
        assert_close(result.mean, mean(&values));
        assert_close(result.median, median(&values));
        assert_eq!(result.mode, mode(&values));
    }

    #[test]
    fn test_dispersion_matches_free_functions() {
        let values = [5.0, 10.0, 15.0, 20.0, 25.0, 30.0];
        let result = Dispersion::new(&values);
        assert_close(result.mean, 17.5);
        assert_close(result.variance, variance(&values));
        assert_close(result.std_dev, standard_deviation(&values));
        assert_close(
            result.coefficient_of_variation,
            coefficient_of_variation(&values),
        );
    }

    proptest! {
        #[test]
        fn prop_median_is_idempotent_and_non_mutating(
            values in prop::collection::vec(-1.0e6..1.0e6_f64, 0..64)
        ) {
            let before = values.clone();
            let first = median(&values);
            let second = median(&values);
            prop_assert_eq!(first.to_bits(), second.to_bits());
            prop_assert_eq!(values, before);
        }

        #[test]
        fn prop_median_within_range(
            values in prop::collection::vec(-1.0e6..1.0e6_f64, 1..64)
        ) {
            let sorted = sorted_copy(&values);
            let m = median(&values);
            prop_assert!(sorted[0] <= m && m <= sorted[sorted.len() - 1]);
        }
    }
}
