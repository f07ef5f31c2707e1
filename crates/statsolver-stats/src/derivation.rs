//! Step-by-step derivations of each calculator tool.
//!
//! A [`Derivation`] is plain data: numbered steps, each with a title, an
//! optional formula, working lines and a highlighted result, followed by
//! interpretation sentences. All numbers are rendered with the caller's
//! [`Precision`], except the regression equation which is always two decimals.
//! The raw full-precision values travel alongside in [`Outcome`].

use serde::Serialize;

use crate::{
    association::{Correlation, PairedSample, Regression},
    descriptive::{CentralTendency, Dispersion, mean, sorted_copy},
    interpret::{CorrelationKind, KurtosisType, SkewnessType, SpreadLevel, VariabilityLevel},
    moments::Moments,
    precision::Precision,
    tool::Tool,
};

/// One labeled step of a derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub working: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl Step {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            formula: None,
            working: vec![],
            result: None,
        }
    }

    fn formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    fn line(mut self, line: impl Into<String>) -> Self {
        self.working.push(line.into());
        self
    }

    fn result(mut self, result: impl Into<String>) -> Self {
        self.result = Some(result.into());
        self
    }
}

/// Full-precision results backing a derivation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    CentralTendency(CentralTendency),
    Dispersion(Dispersion),
    Moments(Moments),
    Correlation(Correlation),
    Regression(Regression),
}

/// A rendered calculation: steps, interpretation and the raw outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Derivation {
    pub tool: Tool,
    pub precision: Precision,
    pub steps: Vec<Step>,
    pub interpretation: Vec<String>,
    pub outcome: Outcome,
}

/// Joins sample values the way they were entered.
fn join_values(values: &[f64], separator: &str) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

fn mean_step(mean: f64, precision: Precision) -> Step {
    Step::new("Calculate Mean")
        .formula("Mean = Sum / Count")
        .result(format!("Mean (μ) = {}", precision.format(mean)))
}

/// Mean, median and mode with the working shown.
///
/// # Examples
///
/// ```
/// use statsolver_stats::{derivation, precision::Precision};
///
/// let derivation = derivation::central_tendency(&[10.0, 20.0, 20.0, 30.0], Precision::new(2).unwrap());
/// assert_eq!(derivation.steps.len(), 4);
/// assert_eq!(derivation.steps[1].result.as_deref(), Some("Mean = 20.00"));
/// assert_eq!(derivation.steps[3].result.as_deref(), Some("Mode = 20"));
/// ```
#[must_use]
pub fn central_tendency(values: &[f64], precision: Precision) -> Derivation {
    let result = CentralTendency::new(values);
    let sum = values.iter().sum::<f64>();
    let n = values.len();

    let mode = if result.mode.is_empty() {
        "No mode (all values unique)".to_owned()
    } else {
        join_values(&result.mode, ", ")
    };

    let steps = vec![
        Step::new("Understanding the Data")
            .line(format!("Your dataset: {}", join_values(values, ", ")))
            .line(format!("Number of values (n) = {n}")),
        Step::new("Calculate Mean")
            .formula("Mean = Sum of all values / Number of values")
            .line(format!("Mean = ({}) / {n}", join_values(values, " + ")))
            .line(format!("Mean = {sum} / {n}"))
            .result(format!("Mean = {}", precision.format(result.mean))),
        Step::new("Calculate Median")
            .formula("The middle value when data is sorted")
            .line(format!(
                "Sorted data: {}",
                join_values(&sorted_copy(values), ", ")
            ))
            .result(format!("Median = {}", precision.format(result.median))),
        Step::new("Calculate Mode")
            .formula("The most frequently occurring value")
            .result(format!("Mode = {mode}")),
    ];

    Derivation {
        tool: Tool::CentralTendency,
        precision,
        steps,
        interpretation: vec![],
        outcome: Outcome::CentralTendency(result),
    }
}

/// Mean, variance and standard deviation, with a spread interpretation.
#[must_use]
pub fn standard_deviation(values: &[f64], precision: Precision) -> Derivation {
    let result = Dispersion::new(values);
    let sd = precision.format(result.std_dev);
    let variance = precision.format(result.variance);

    let steps = vec![
        mean_step(result.mean, precision),
        Step::new("Calculate Variance")
            .formula("Variance = Σ(x - μ)² / n")
            .line(
                "For each value, subtract the mean, square the result, \
                 then average all squared differences.",
            )
            .result(format!("Variance (σ²) = {variance}")),
        Step::new("Calculate Standard Deviation")
            .formula("Standard Deviation = √Variance")
            .line(format!("σ = √{variance}"))
            .result(format!("Standard Deviation (σ) = {sd}")),
    ];

    let mut interpretation = vec![format!(
        "The data typically varies by ±{sd} from the mean."
    )];
    if let Some(level) = SpreadLevel::classify(result.std_dev, result.mean) {
        interpretation.push(level.sentence().to_owned());
    }

    Derivation {
        tool: Tool::StandardDeviation,
        precision,
        steps,
        interpretation,
        outcome: Outcome::Dispersion(result),
    }
}

/// Pearson correlation with strength and direction labels.
///
/// # Examples
///
/// ```
/// use statsolver_stats::{association::PairedSample, derivation, precision::Precision};
///
/// let sample = PairedSample::new(vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 6.0]).unwrap();
/// let derivation = derivation::correlation(&sample, Precision::default());
/// assert_eq!(derivation.interpretation[0], "Strong Positive Correlation");
/// ```
#[must_use]
pub fn correlation(sample: &PairedSample, precision: Precision) -> Derivation {
    let result = sample.correlation();
    let kind = CorrelationKind::classify(result.coefficient);

    let steps = vec![
        Step::new("Understanding Correlation")
            .line(
                "Correlation measures how strongly two variables are related. \
                 It ranges from -1 (perfect negative) to +1 (perfect positive).",
            )
            .line(format!("Number of pairs (n) = {}", sample.len())),
        Step::new("Calculate Correlation Coefficient (r)")
            .formula("r = Σ[(x - x̄)(y - ȳ)] / √[Σ(x - x̄)² × Σ(y - ȳ)²]")
            .line("Using Karl Pearson's formula")
            .result(format!(
                "Correlation (r) = {}",
                precision.format(result.coefficient)
            )),
        Step::new("Interpretation")
            .line(kind.direction.trend())
            .result(kind.to_string()),
    ];

    Derivation {
        tool: Tool::Correlation,
        precision,
        steps,
        interpretation: vec![kind.to_string(), kind.direction.trend().to_owned()],
        outcome: Outcome::Correlation(result),
    }
}

/// Standard deviation relative to the mean, with a variability level.
#[must_use]
pub fn coefficient_of_variation(values: &[f64], precision: Precision) -> Derivation {
    let result = Dispersion::new(values);
    let cv = precision.format(result.coefficient_of_variation);
    let level = VariabilityLevel::classify(result.coefficient_of_variation);

    let cv_step = Step::new("Calculate Coefficient of Variation").formula("CV = (σ / μ) × 100");
    let cv_step = if result.mean == 0.0 {
        cv_step.line("The mean is zero, so the coefficient of variation is reported as 0.")
    } else {
        cv_step.line(format!(
            "CV = ({} / {}) × 100",
            precision.format(result.std_dev),
            precision.format(result.mean)
        ))
    };

    let steps = vec![
        mean_step(result.mean, precision),
        Step::new("Calculate Standard Deviation")
            .formula("σ = √(Σ(x - μ)² / n)")
            .result(format!(
                "Standard Deviation (σ) = {}",
                precision.format(result.std_dev)
            )),
        cv_step.result(format!("CV = {cv}%")),
    ];

    Derivation {
        tool: Tool::CoefficientOfVariation,
        precision,
        steps,
        interpretation: vec![format!("{level} variability (CV = {cv}%)")],
        outcome: Outcome::Dispersion(result),
    }
}

/// Central moments one through four, skewness and kurtosis.
#[must_use]
pub fn moments(values: &[f64], precision: Precision) -> Derivation {
    let result = Moments::new(values);
    let skewness_type = SkewnessType::classify(result.skewness);
    let kurtosis_type = KurtosisType::classify(result.kurtosis);
    let std_dev = precision.format(result.moment2.sqrt());

    let central_moments = [result.moment1, result.moment2, result.moment3, result.moment4]
        .iter()
        .zip(1..)
        .fold(
            Step::new("Calculate Central Moments").formula("μr = Σ(x - x̄)^r / n"),
            |step, (value, order)| step.line(format!("μ{order} = {}", precision.format(*value))),
        );

    let steps = vec![
        mean_step(mean(values), precision),
        central_moments,
        Step::new("Calculate Skewness")
            .formula("Skewness = μ3 / σ³")
            .line(format!("σ = {std_dev}"))
            .result(format!("Skewness = {}", precision.format(result.skewness))),
        Step::new("Calculate Kurtosis")
            .formula("Kurtosis = μ4 / σ⁴")
            .line("A normal distribution has kurtosis of about 3.")
            .result(format!("Kurtosis = {}", precision.format(result.kurtosis))),
    ];

    Derivation {
        tool: Tool::Moments,
        precision,
        steps,
        interpretation: vec![
            format!("Skewness: {skewness_type}"),
            format!("Kurtosis: {kurtosis_type}"),
        ],
        outcome: Outcome::Moments(result),
    }
}

/// Least-squares line, optionally evaluated at `predict_at`.
///
/// # Examples
///
/// ```
/// use statsolver_stats::{association::PairedSample, derivation, precision::Precision};
///
/// let sample = PairedSample::new(
///     vec![1.0, 2.0, 3.0, 4.0, 5.0],
///     vec![3.0, 5.0, 7.0, 9.0, 11.0],
/// ).unwrap();
/// let derivation = derivation::regression(&sample, &[6.0], Precision::new(1).unwrap());
/// assert_eq!(derivation.steps[3].result.as_deref(), Some("y = 2.00x + 1.00"));
/// assert_eq!(derivation.steps[4].working, vec!["x = 6 → ŷ = 13.0"]);
/// ```
#[must_use]
pub fn regression(sample: &PairedSample, predict_at: &[f64], precision: Precision) -> Derivation {
    let result = sample.regression();
    let x_mean = mean(sample.x());
    let y_mean = mean(sample.y());

    let mut steps = vec![
        Step::new("Calculate Means")
            .line(format!("x̄ = {}", precision.format(x_mean)))
            .line(format!("ȳ = {}", precision.format(y_mean))),
        Step::new("Calculate Slope (b)")
            .formula("b = Σ[(x - x̄)(y - ȳ)] / Σ(x - x̄)²")
            .result(format!("b = {}", precision.format(result.slope))),
        Step::new("Calculate Intercept (a)")
            .formula("a = ȳ - b·x̄")
            .result(format!("a = {}", precision.format(result.intercept))),
        Step::new("Regression Equation")
            .formula("y = bx + a")
            .result(result.equation_text.clone()),
    ];

    if !predict_at.is_empty() {
        let predictions = predict_at.iter().fold(
            Step::new("Predictions").formula("ŷ = b·x + a"),
            |step, &x| {
                step.line(format!(
                    "x = {x} → ŷ = {}",
                    precision.format(result.predict(x))
                ))
            },
        );
        steps.push(predictions);
    }

    let interpretation = vec![format!(
        "Each unit increase in X changes Y by {} on average.",
        precision.format(result.slope)
    )];

    Derivation {
        tool: Tool::Regression,
        precision,
        steps,
        interpretation,
        outcome: Outcome::Regression(result),
    }
}
