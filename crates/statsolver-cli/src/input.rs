//! Parsing of user-entered numbers.
//!
//! Values are separated by commas and/or whitespace. Tokens that are not
//! finite numbers are dropped with a warning, so the statistics core only ever
//! sees finite input.

use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use statsolver_stats::association::PairedSample;

#[derive(Debug, Clone, Default, clap::Args)]
pub(crate) struct SampleArg {
    /// Values separated by commas and/or whitespace, e.g. "12, 14, 18"
    #[arg(long, short, conflicts_with = "file", allow_hyphen_values = true)]
    pub data: Option<String>,
    /// Read values from a file (`-` for stdin). Stdin is used when neither option is given
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, clap::Args)]
pub(crate) struct PairedArg {
    /// X values separated by commas and/or whitespace
    #[arg(
        long,
        short,
        required_unless_present = "x_file",
        conflicts_with = "x_file",
        allow_hyphen_values = true
    )]
    pub x: Option<String>,
    /// Read X values from a file (`-` for stdin)
    #[arg(long)]
    pub x_file: Option<PathBuf>,
    /// Y values separated by commas and/or whitespace, index-aligned with X
    #[arg(
        long,
        short,
        required_unless_present = "y_file",
        conflicts_with = "y_file",
        allow_hyphen_values = true
    )]
    pub y: Option<String>,
    /// Read Y values from a file (`-` for stdin)
    #[arg(long)]
    pub y_file: Option<PathBuf>,
}

/// Splits `text` into finite `f64` values, skipping anything else.
pub(crate) fn parse_values(text: &str) -> Vec<f64> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => {
                tracing::warn!(token, "ignoring token that is not a finite number");
                None
            }
        })
        .collect()
}

fn read_text(data: Option<&str>, file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(data) = data {
        return Ok(data.to_owned());
    }
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read values from stdin")?;
            Ok(text)
        }
    }
}

fn non_empty(values: Vec<f64>) -> anyhow::Result<Vec<f64>> {
    if values.is_empty() {
        bail!("Please enter valid numbers");
    }
    Ok(values)
}

pub(crate) fn read_sample(arg: &SampleArg) -> anyhow::Result<Vec<f64>> {
    let text = read_text(arg.data.as_deref(), arg.file.as_deref())?;
    let values = non_empty(parse_values(&text))?;
    tracing::info!(n = values.len(), "parsed sample");
    Ok(values)
}

fn read_axis(data: Option<&str>, file: Option<&Path>) -> anyhow::Result<Vec<f64>> {
    if data.is_none() && file.is_none() {
        bail!("No values given");
    }
    non_empty(parse_values(&read_text(data, file)?))
}

pub(crate) fn read_paired(arg: &PairedArg) -> anyhow::Result<PairedSample> {
    let x = read_axis(arg.x.as_deref(), arg.x_file.as_deref()).context("Invalid X values")?;
    let y = read_axis(arg.y.as_deref(), arg.y_file.as_deref()).context("Invalid Y values")?;
    let sample = PairedSample::new(x, y)?;
    tracing::info!(n = sample.len(), "parsed paired sample");
    Ok(sample)
}
