//! Decimal display precision.
//!
//! The engine always computes at full `f64` precision. [`Precision`] only
//! controls how a caller renders numbers; regression equation text ignores it
//! and always uses two decimals (see [`fixed2`]).

use serde::{Deserialize, Serialize};

/// Error returned for a precision outside `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("decimal precision must be between 0 and 10, got {value}")]
pub struct PrecisionError {
    pub value: u8,
}

/// Number of decimal places shown when formatting results.
///
/// # Examples
///
/// ```
/// use statsolver_stats::precision::Precision;
///
/// let precision = Precision::new(3).unwrap();
/// assert_eq!(precision.format(2.0_f64.sqrt()), "1.414");
/// assert_eq!(Precision::default().format(0.5), "0.5000");
/// assert!(Precision::new(11).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Precision(u8);

impl Precision {
    pub const MAX: u8 = 10;
    pub const DEFAULT: Self = Self(4);

    pub fn new(places: u8) -> Result<Self, PrecisionError> {
        if places > Self::MAX {
            return Err(PrecisionError { value: places });
        }
        Ok(Self(places))
    }

    #[must_use]
    pub fn places(self) -> u8 {
        self.0
    }

    /// Formats `value` with exactly this many decimal places.
    ///
    /// Exact ties round away from zero and negative zero prints as `0`.
    #[must_use]
    pub fn format(self, value: f64) -> String {
        to_fixed(value, self.0)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Precision {
    type Error = PrecisionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Precision> for u8 {
    fn from(value: Precision) -> Self {
        value.0
    }
}

/// Formats `value` with two decimals regardless of any configured precision.
#[must_use]
pub fn fixed2(value: f64) -> String {
    to_fixed(value, 2)
}

fn to_fixed(value: f64, places: u8) -> String {
    // `+ 0.0` turns -0.0 into 0.0
    let value = value + 0.0;
    let mut magnitude = value.abs();
    if is_exact_tie(magnitude, places) {
        // std formatting breaks ties to even, so step past the tie
        magnitude = f64::from_bits(magnitude.to_bits() + 1);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{magnitude:.prec$}", prec = usize::from(places))
}

/// Whether `magnitude` lies exactly halfway between two `places`-decimal values.
///
/// That holds iff `magnitude = odd * 2^-(places + 1)`, and scaling by a power
/// of two is exact.
fn is_exact_tie(magnitude: f64, places: u8) -> bool {
    let scaled = magnitude * 2.0_f64.powi(i32::from(places) + 1);
    scaled.fract() == 0.0 && (scaled / 2.0).fract() != 0.0
}
