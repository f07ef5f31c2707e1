//! Association between two index-aligned samples.
//!
//! The free functions [`correlation`] and [`regression`] never fail: mismatched
//! or empty input yields the zero result. Callers that want to report a length
//! mismatch to the user validate first through [`PairedSample::new`].

use serde::Serialize;

use crate::{descriptive::mean, precision::fixed2};

/// Error returned when two samples cannot be paired.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PairedSampleError {
    #[display("X and Y must have the same number of values (got {x_len} and {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },
    #[display("paired sample must contain at least one pair")]
    Empty,
}

/// Two samples of equal, non-zero length where `x[i]` pairs with `y[i]`.
///
/// # Examples
///
/// ```
/// use statsolver_stats::association::{PairedSample, PairedSampleError};
///
/// let paired = PairedSample::new(vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 6.0]).unwrap();
/// assert_eq!(paired.len(), 3);
///
/// let err = PairedSample::new(vec![1.0, 2.0], vec![1.0]).unwrap_err();
/// assert_eq!(err, PairedSampleError::LengthMismatch { x_len: 2, y_len: 1 });
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairedSample {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl PairedSample {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, PairedSampleError> {
        if x.len() != y.len() {
            return Err(PairedSampleError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.is_empty() {
            return Err(PairedSampleError::Empty);
        }
        Ok(Self { x, y })
    }

    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Returns the number of pairs. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    #[must_use]
    pub fn correlation(&self) -> Correlation {
        Correlation {
            coefficient: correlation(&self.x, &self.y),
        }
    }

    #[must_use]
    pub fn regression(&self) -> Regression {
        regression(&self.x, &self.y)
    }
}

/// Pearson product-moment correlation of a paired sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Correlation {
    /// Correlation coefficient. Mathematically within `[-1, 1]`; not clamped.
    pub coefficient: f64,
}

/// Simple least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
    /// The fitted line rendered with exactly two decimals, e.g. `y = 2.00x + 1.00`.
    pub equation_text: String,
}

impl Regression {
    fn zero() -> Self {
        Self {
            slope: 0.0,
            intercept: 0.0,
            equation_text: "y = 0".to_owned(),
        }
    }

    /// Evaluates the fitted line at `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statsolver_stats::association::regression;
    /// let fit = regression(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0]);
    /// assert_eq!(fit.predict(10.0), 21.0);
    /// ```
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Sums of centered cross products and squares over paired values.
struct CenteredSums {
    x_mean: f64,
    y_mean: f64,
    cross: f64,
    x_squares: f64,
    y_squares: f64,
}

impl CenteredSums {
    /// Returns `None` for mismatched or empty input.
    fn new(x: &[f64], y: &[f64]) -> Option<Self> {
        if x.len() != y.len() || x.is_empty() {
            tracing::debug!(
                x_len = x.len(),
                y_len = y.len(),
                "paired input is mismatched or empty, falling back to zero result"
            );
            return None;
        }

        let x_mean = mean(x);
        let y_mean = mean(y);
        let mut sums = Self {
            x_mean,
            y_mean,
            cross: 0.0,
            x_squares: 0.0,
            y_squares: 0.0,
        };
        for (xi, yi) in x.iter().zip(y) {
            let x_diff = xi - x_mean;
            let y_diff = yi - y_mean;
            sums.cross += x_diff * y_diff;
            sums.x_squares += x_diff * x_diff;
            sums.y_squares += y_diff * y_diff;
        }
        Some(sums)
    }
}

/// Returns the Pearson correlation coefficient of `x` and `y`.
///
/// Mismatched lengths, empty input and zero variance in either sample all yield `0`.
///
/// # Examples
///
/// ```
/// # use statsolver_stats::association::correlation;
/// let r = correlation(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 5.0, 4.0, 5.0]);
/// assert!((-1.0..=1.0).contains(&r));
/// assert_eq!(correlation(&[1.0, 2.0], &[1.0]), 0.0);
/// assert_eq!(correlation(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]), 0.0);
/// ```
#[must_use]
pub fn correlation(x: &[f64], y: &[f64]) -> f64 {
    let Some(sums) = CenteredSums::new(x, y) else {
        return 0.0;
    };
    let denominator = (sums.x_squares * sums.y_squares).sqrt();
    if denominator == 0.0 {
        tracing::debug!("zero variance in paired input, correlation falls back to 0");
        return 0.0;
    }
    sums.cross / denominator
}

/// Fits `y = slope * x + intercept` by ordinary least squares.
///
/// Mismatched or empty input yields `y = 0`. When `x` has no variance the
/// line is flat at the mean of `y`.
///
/// # Examples
///
/// ```
/// # use statsolver_stats::association::regression;
/// let fit = regression(&[1.0, 2.0, 3.0, 4.0, 5.0], &[3.0, 5.0, 7.0, 9.0, 11.0]);
/// assert_eq!(fit.slope, 2.0);
/// assert_eq!(fit.intercept, 1.0);
/// assert_eq!(fit.equation_text, "y = 2.00x + 1.00");
/// ```
#[must_use]
pub fn regression(x: &[f64], y: &[f64]) -> Regression {
    let Some(sums) = CenteredSums::new(x, y) else {
        return Regression::zero();
    };
    if sums.x_squares == 0.0 {
        tracing::debug!("zero variance in x, regression falls back to a flat line");
        return Regression {
            slope: 0.0,
            intercept: sums.y_mean,
            equation_text: format!("y = {}", fixed2(sums.y_mean)),
        };
    }

    let slope = sums.cross / sums.x_squares;
    // `+ 0.0` turns a -0.0 intercept into 0.0
    let intercept = sums.y_mean - slope * sums.x_mean + 0.0;
    let sign = if intercept >= 0.0 { "+ " } else { "" };
    Regression {
        slope,
        intercept,
        equation_text: format!("y = {}x {sign}{}", fixed2(slope), fixed2(intercept)),
    }
}
