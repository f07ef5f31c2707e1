//! Qualitative labels for numeric results.
//!
//! Each classifier is a total function over `f64` with fixed thresholds. The
//! labels display as the human-readable text shown next to a result.
//!
//! # Examples
//!
//! ```
//! use statsolver_stats::interpret::{
//!     CorrelationDirection, CorrelationKind, CorrelationStrength, KurtosisType,
//! };
//!
//! let kind = CorrelationKind::classify(0.82);
//! assert_eq!(kind.strength, CorrelationStrength::Strong);
//! assert_eq!(kind.direction, CorrelationDirection::Positive);
//! assert_eq!(kind.to_string(), "Strong Positive Correlation");
//!
//! assert_eq!(KurtosisType::classify(3.2).to_string(), "Mesokurtic (Normal)");
//! ```

use serde::Serialize;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display, derive_more::IsVariant,
)]
pub enum CorrelationStrength {
    Strong,
    Moderate,
    Weak,
}

impl CorrelationStrength {
    /// `Strong` above `0.7` in absolute value, `Moderate` above `0.4`, `Weak` otherwise.
    #[must_use]
    pub fn classify(r: f64) -> Self {
        let magnitude = r.abs();
        if magnitude > 0.7 {
            Self::Strong
        } else if magnitude > 0.4 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display, derive_more::IsVariant,
)]
pub enum CorrelationDirection {
    Positive,
    Negative,
}

impl CorrelationDirection {
    /// `Positive` only for `r > 0`. A coefficient of exactly zero is `Negative`.
    #[must_use]
    pub fn classify(r: f64) -> Self {
        if r > 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// How `Y` moves as `X` increases.
    #[must_use]
    pub fn trend(self) -> &'static str {
        match self {
            Self::Positive => "When X increases, Y tends to increase.",
            Self::Negative => "When X increases, Y tends to decrease.",
        }
    }
}

/// Strength and direction of a correlation coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[display("{strength} {direction} Correlation")]
pub struct CorrelationKind {
    pub strength: CorrelationStrength,
    pub direction: CorrelationDirection,
}

impl CorrelationKind {
    #[must_use]
    pub fn classify(r: f64) -> Self {
        Self {
            strength: CorrelationStrength::classify(r),
            direction: CorrelationDirection::classify(r),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display, derive_more::IsVariant,
)]
pub enum SkewnessType {
    #[display("Approximately Symmetric")]
    ApproximatelySymmetric,
    #[display("Right-Skewed (Positive)")]
    RightSkewed,
    #[display("Left-Skewed (Negative)")]
    LeftSkewed,
}

impl SkewnessType {
    /// Symmetric within `0.5` of zero, otherwise skewed toward the sign of `s`.
    #[must_use]
    pub fn classify(s: f64) -> Self {
        if s.abs() < 0.5 {
            Self::ApproximatelySymmetric
        } else if s > 0.0 {
            Self::RightSkewed
        } else {
            Self::LeftSkewed
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display, derive_more::IsVariant,
)]
pub enum KurtosisType {
    #[display("Mesokurtic (Normal)")]
    Mesokurtic,
    #[display("Leptokurtic (Heavy-tailed)")]
    Leptokurtic,
    #[display("Platykurtic (Light-tailed)")]
    Platykurtic,
}

impl KurtosisType {
    /// Classifies non-excess kurtosis: mesokurtic within `0.5` of `3`.
    #[must_use]
    pub fn classify(k: f64) -> Self {
        if (k - 3.0).abs() < 0.5 {
            Self::Mesokurtic
        } else if k > 3.0 {
            Self::Leptokurtic
        } else {
            Self::Platykurtic
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display, derive_more::IsVariant,
)]
pub enum VariabilityLevel {
    Low,
    Moderate,
    High,
}

impl VariabilityLevel {
    /// Buckets a coefficient of variation (in percent) at `15` and `30`.
    #[must_use]
    pub fn classify(cv: f64) -> Self {
        if cv < 15.0 {
            Self::Low
        } else if cv < 30.0 {
            Self::Moderate
        } else {
            Self::High
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display, derive_more::IsVariant,
)]
pub enum SpreadLevel {
    Low,
    High,
}

impl SpreadLevel {
    /// Compares a standard deviation against 30% and 50% of the mean.
    ///
    /// Values in between have no label.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statsolver_stats::interpret::SpreadLevel;
    /// assert_eq!(SpreadLevel::classify(2.0, 10.0), Some(SpreadLevel::Low));
    /// assert_eq!(SpreadLevel::classify(4.0, 10.0), None);
    /// assert_eq!(SpreadLevel::classify(6.0, 10.0), Some(SpreadLevel::High));
    /// ```
    #[must_use]
    pub fn classify(std_dev: f64, mean: f64) -> Option<Self> {
        if std_dev < mean * 0.3 {
            Some(Self::Low)
        } else if std_dev > mean * 0.5 {
            Some(Self::High)
        } else {
            None
        }
    }

    #[must_use]
    pub fn sentence(self) -> &'static str {
        match self {
            Self::Low => "This shows relatively low spread.",
            Self::High => "This shows relatively high spread.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correlation_strength_thresholds() {
        assert_eq!(CorrelationStrength::classify(0.71), CorrelationStrength::Strong);
        assert_eq!(CorrelationStrength::classify(-0.9), CorrelationStrength::Strong);
        assert_eq!(CorrelationStrength::classify(0.7), CorrelationStrength::Moderate);
        assert_eq!(CorrelationStrength::classify(-0.41), CorrelationStrength::Moderate);
        assert_eq!(CorrelationStrength::classify(0.4), CorrelationStrength::Weak);
        assert_eq!(CorrelationStrength::classify(0.0), CorrelationStrength::Weak);
    }

    #[test]
    fn test_correlation_direction_zero_is_negative() {
        assert!(CorrelationDirection::classify(0.01).is_positive());
        assert!(CorrelationDirection::classify(-0.5).is_negative());
        assert!(CorrelationDirection::classify(0.0).is_negative());
    }

    #[test]
    fn test_correlation_kind_display() {
        assert_eq!(
            CorrelationKind::classify(-0.5).to_string(),
            "Moderate Negative Correlation"
        );
        assert_eq!(
            CorrelationKind::classify(0.1).to_string(),
            "Weak Positive Correlation"
        );
        assert_eq!(
            CorrelationDirection::classify(0.9).trend(),
            "When X increases, Y tends to increase."
        );
    }

    #[test]
    fn test_skewness_type() {
        assert_eq!(SkewnessType::classify(0.49), SkewnessType::ApproximatelySymmetric);
        assert_eq!(SkewnessType::classify(-0.49), SkewnessType::ApproximatelySymmetric);
        assert_eq!(SkewnessType::classify(0.5), SkewnessType::RightSkewed);
        assert_eq!(SkewnessType::classify(-0.5), SkewnessType::LeftSkewed);
        assert_eq!(
            SkewnessType::classify(1.2).to_string(),
            "Right-Skewed (Positive)"
        );
    }

    #[test]
    fn test_kurtosis_type() {
        assert_eq!(KurtosisType::classify(3.0), KurtosisType::Mesokurtic);
        assert_eq!(KurtosisType::classify(2.6), KurtosisType::Mesokurtic);
        assert_eq!(KurtosisType::classify(3.5), KurtosisType::Leptokurtic);
        assert_eq!(KurtosisType::classify(2.5), KurtosisType::Platykurtic);
        // constant samples report zero kurtosis
        assert_eq!(KurtosisType::classify(0.0), KurtosisType::Platykurtic);
        assert_eq!(
            KurtosisType::classify(5.0).to_string(),
            "Leptokurtic (Heavy-tailed)"
        );
    }

    #[test]
    fn test_variability_level() {
        assert_eq!(VariabilityLevel::classify(14.99), VariabilityLevel::Low);
        assert_eq!(VariabilityLevel::classify(15.0), VariabilityLevel::Moderate);
        assert_eq!(VariabilityLevel::classify(29.99), VariabilityLevel::Moderate);
        assert_eq!(VariabilityLevel::classify(30.0), VariabilityLevel::High);
    }

    #[test]
    fn test_spread_level_gap() {
        assert_eq!(SpreadLevel::classify(2.9, 10.0), Some(SpreadLevel::Low));
        assert_eq!(SpreadLevel::classify(3.0, 10.0), None);
        assert_eq!(SpreadLevel::classify(5.0, 10.0), None);
        assert_eq!(SpreadLevel::classify(5.1, 10.0), Some(SpreadLevel::High));
        // negative means push every non-negative deviation into "High"
        assert_eq!(SpreadLevel::classify(1.0, -10.0), Some(SpreadLevel::High));
    }
}
