//! Descriptive statistics with step-by-step derivations.
//!
//! This crate provides the computation core of StatSolver:
//!
//! - **Descriptive statistics**: mean, median, mode, variance, standard deviation, coefficient of variation
//! - **Moments**: nth central moment, skewness and (non-excess) kurtosis
//! - **Association**: Pearson correlation and simple least-squares regression
//! - **Interpretation**: qualitative labels such as "Strong Positive Correlation" or "Leptokurtic (Heavy-tailed)"
//! - **Derivations**: every calculator tool rendered as numbered, labeled steps
//!
//! Every computation is a pure function of its input. Degenerate input (an
//! empty sample, constant data, mismatched pairs) produces a documented zero
//! result instead of an error, `NaN` or infinity. Input values are expected to
//! be finite; filtering is the caller's job.
//!
//! # Modules
//!
//! - [`descriptive`]: Central tendency and dispersion
//! - [`moments`]: Central moments and distribution shape
//! - [`association`]: Correlation and regression over paired samples
//! - [`interpret`]: Classification of results into labels
//! - [`precision`]: Decimal display precision
//! - [`derivation`]: Step-by-step working for each [`tool::Tool`]
//! - [`tool`]: The calculator tools and their ids
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use statsolver_stats::descriptive::{mean, median, mode};
//!
//! let values = [10.0, 20.0, 20.0, 30.0, 40.0];
//! assert_eq!(mean(&values), 24.0);
//! assert_eq!(median(&values), 20.0);
//! assert_eq!(mode(&values), vec![20.0]);
//! ```
//!
//! ## Fitting and interpreting a paired sample
//!
//! ```
//! use statsolver_stats::{
//!     association::PairedSample,
//!     interpret::CorrelationKind,
//! };
//!
//! let sample = PairedSample::new(
//!     vec![1.0, 2.0, 3.0, 4.0, 5.0],
//!     vec![3.0, 5.0, 7.0, 9.0, 11.0],
//! )?;
//! let fit = sample.regression();
//! assert_eq!(fit.equation_text, "y = 2.00x + 1.00");
//!
//! let kind = CorrelationKind::classify(sample.correlation().coefficient);
//! assert_eq!(kind.to_string(), "Strong Positive Correlation");
//! # Ok::<(), statsolver_stats::association::PairedSampleError>(())
//! ```
//!
//! ## Rendering a derivation
//!
//! ```
//! use statsolver_stats::{derivation, precision::Precision};
//!
//! let derivation = derivation::moments(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], Precision::new(2)?);
//! for step in &derivation.steps {
//!     println!("{}", step.title);
//! }
//! # Ok::<(), statsolver_stats::precision::PrecisionError>(())
//! ```

pub mod association;
pub mod derivation;
pub mod descriptive;
pub mod interpret;
pub mod moments;
pub mod precision;
pub mod tool;
