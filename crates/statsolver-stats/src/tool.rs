use serde::Serialize;

/// A calculator tool, identified by a stable kebab-case id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    CentralTendency,
    StandardDeviation,
    Correlation,
    #[serde(rename = "coefficient-variation")]
    CoefficientOfVariation,
    Moments,
    Regression,
}

impl Tool {
    pub const ALL: [Self; 6] = [
        Self::CentralTendency,
        Self::StandardDeviation,
        Self::Correlation,
        Self::CoefficientOfVariation,
        Self::Moments,
        Self::Regression,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::CentralTendency => "central-tendency",
            Self::StandardDeviation => "standard-deviation",
            Self::Correlation => "correlation",
            Self::CoefficientOfVariation => "coefficient-variation",
            Self::Moments => "moments",
            Self::Regression => "regression",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.id() == id)
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::CentralTendency => "Measures of Central Tendency",
            Self::StandardDeviation => "Standard Deviation",
            Self::Correlation => "Correlation Analysis",
            Self::CoefficientOfVariation => "Coefficient of Variation",
            Self::Moments => "Moments, Skewness & Kurtosis",
            Self::Regression => "Regression Analysis",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::CentralTendency => "Calculate mean, median, and mode with step-by-step explanations",
            Self::StandardDeviation => "Measure data spread and variance with complete calculations",
            Self::Correlation => {
                "Find relationship strength between two variables using Karl Pearson method"
            }
            Self::CoefficientOfVariation => {
                "Compare relative variability between different datasets"
            }
            Self::Moments => "Analyze distribution shape with moment calculations",
            Self::Regression => "Linear regression with predictions and equation derivation",
        }
    }

    /// Whether the tool takes an X/Y paired sample instead of a single sample.
    #[must_use]
    pub fn is_paired(self) -> bool {
        matches!(self, Self::Correlation | Self::Regression)
    }
}
