//! Plain-text rendering of derivations.

use std::fmt::{self, Write as _};

use statsolver_stats::{derivation::Derivation, tool::Tool};

pub(crate) fn render(derivation: &Derivation) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    write_derivation(&mut out, derivation).unwrap_or_default();
    out
}

fn write_derivation(out: &mut String, derivation: &Derivation) -> fmt::Result {
    write_heading(out, derivation.tool.title())?;

    for (i, step) in derivation.steps.iter().enumerate() {
        writeln!(out, "Step {}: {}", i + 1, step.title)?;
        if let Some(formula) = &step.formula {
            writeln!(out, "  Formula: {formula}")?;
        }
        for line in &step.working {
            writeln!(out, "  {line}")?;
        }
        if let Some(result) = &step.result {
            writeln!(out, "  => {result}")?;
        }
        writeln!(out)?;
    }

    if !derivation.interpretation.is_empty() {
        writeln!(out, "Interpretation:")?;
        for sentence in &derivation.interpretation {
            writeln!(out, "  {sentence}")?;
        }
    }
    Ok(())
}

fn write_heading(out: &mut String, title: &str) -> fmt::Result {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))?;
    writeln!(out)
}

/// Lists `tools` with their ids and descriptions, one per line.
pub(crate) fn render_tool_list(tools: &[Tool]) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    write_tool_list(&mut out, tools).unwrap_or_default();
    out
}

fn write_tool_list(out: &mut String, tools: &[Tool]) -> fmt::Result {
    for tool in tools {
        let kind = if tool.is_paired() { "X/Y" } else { "single" };
        writeln!(
            out,
            "{:<22} {:<30} [{kind}] {}",
            tool.id(),
            tool.title(),
            tool.description()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use statsolver_stats::{association::PairedSample, derivation, precision::Precision};

    use super::*;

    #[test]
    fn test_render_central_tendency() {
        let derivation =
            derivation::central_tendency(&[10.0, 20.0, 20.0, 30.0], Precision::new(2).unwrap());
        let text = render(&derivation);
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "Measures of Central Tendency");
        assert_eq!(lines[1], "============================");
        assert_eq!(lines[3], "Step 1: Understanding the Data");
        assert!(text.contains("Step 2: Calculate Mean\n  Formula: Mean = Sum of all values / Number of values\n"));
        assert!(text.contains("  => Mean = 20.00\n"));
        assert!(text.contains("  => Mode = 20\n"));
        assert!(!text.contains("Interpretation:"));
    }

    #[test]
    fn test_render_interpretation() {
        let sample = PairedSample::new(vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0]).unwrap();
        let text = render(&derivation::correlation(&sample, Precision::default()));
        assert!(text.ends_with(
            "Interpretation:\n  Strong Negative Correlation\n  When X increases, Y tends to decrease.\n"
        ));
    }

    #[test]
    fn test_tool_list_has_every_tool() {
        let text = render_tool_list(&Tool::ALL);
        assert_eq!(text.lines().count(), Tool::ALL.len());
        assert!(text.lines().any(|line| line.starts_with("coefficient-variation")));
    }

    #[test]
    fn test_tool_list_single_tool() {
        let text = render_tool_list(&[Tool::Regression]);
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("regression "));
        assert!(text.contains("[X/Y] Linear regression"));
    }
}
