use std::{io, path::PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use statsolver_stats::{derivation, precision::Precision};
use tracing_subscriber::EnvFilter;

use crate::{
    input::{PairedArg, SampleArg},
    settings,
};

use self::calculate::{RegressionArg, ToolsArg};

mod calculate;
mod configure;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(flatten)]
    global: GlobalArg,

    /// Which calculator tool to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GlobalArg {
    /// Decimal places shown in results (0-10). Overrides the settings file
    #[arg(long, short, global = true, value_parser = settings::parse_precision)]
    precision: Option<Precision>,

    /// JSON settings file holding `decimal_precision`
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Print the derivation as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Write results to this file instead of stdout
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Mean, median and mode
    CentralTendency(#[clap(flatten)] SampleArg),
    /// Mean, variance and standard deviation
    StandardDeviation(#[clap(flatten)] SampleArg),
    /// Karl Pearson correlation between X and Y
    Correlation(#[clap(flatten)] PairedArg),
    /// Standard deviation as a percentage of the mean
    #[command(name = "coefficient-variation")]
    CoefficientOfVariation(#[clap(flatten)] SampleArg),
    /// Central moments, skewness and kurtosis
    Moments(#[clap(flatten)] SampleArg),
    /// Least-squares line through X and Y, with optional predictions
    Regression(#[clap(flatten)] RegressionArg),
    /// List the available tools, or describe one by id
    Tools(#[clap(flatten)] ToolsArg),
    /// Show the effective settings, or save `--precision` into `--settings`
    Settings,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.global.verbose);

    let global = &args.global;
    match &args.mode {
        Mode::CentralTendency(arg) => {
            calculate::run_sample(global, arg, derivation::central_tendency)?;
        }
        Mode::StandardDeviation(arg) => {
            calculate::run_sample(global, arg, derivation::standard_deviation)?;
        }
        Mode::Correlation(arg) => calculate::run_correlation(global, arg)?,
        Mode::CoefficientOfVariation(arg) => {
            calculate::run_sample(global, arg, derivation::coefficient_of_variation)?;
        }
        Mode::Moments(arg) => calculate::run_sample(global, arg, derivation::moments)?,
        Mode::Regression(arg) => calculate::run_regression(global, arg)?,
        Mode::Tools(arg) => calculate::list_tools(global, arg)?,
        Mode::Settings => configure::run(global)?,
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_sample_tool() {
        let args =
            CommandArgs::try_parse_from(["statsolver", "moments", "-d", "1, -2, 3", "-p", "2"])
                .unwrap();
        assert_eq!(args.global.precision, Some(Precision::new(2).unwrap()));
        let Mode::Moments(arg) = args.mode else {
            panic!("expected moments");
        };
        assert_eq!(arg.data.as_deref(), Some("1, -2, 3"));
    }

    #[test]
    fn test_parse_regression_predictions() {
        let args = CommandArgs::try_parse_from([
            "statsolver",
            "regression",
            "--x",
            "1 2 3",
            "--y",
            "2 4 6",
            "--predict",
            "-1,10",
            "--json",
        ])
        .unwrap();
        assert!(args.global.json);
        let Mode::Regression(arg) = args.mode else {
            panic!("expected regression");
        };
        assert_eq!(arg.predict, vec![-1.0, 10.0]);
    }

    #[test]
    fn test_parse_paired_files() {
        let args = CommandArgs::try_parse_from([
            "statsolver",
            "correlation",
            "--x-file",
            "x.txt",
            "-y",
            "1 2 3",
        ])
        .unwrap();
        let Mode::Correlation(arg) = args.mode else {
            panic!("expected correlation");
        };
        assert_eq!(arg.x_file, Some(PathBuf::from("x.txt")));
        assert_eq!(arg.y.as_deref(), Some("1 2 3"));

        assert!(CommandArgs::try_parse_from(["statsolver", "correlation", "-y", "1 2"]).is_err());
        assert!(
            CommandArgs::try_parse_from([
                "statsolver", "correlation", "-x", "1", "--x-file", "x.txt", "-y", "1"
            ])
            .is_err()
        );
    }

    #[test]
    fn test_parse_rejects_out_of_range_precision() {
        let result =
            CommandArgs::try_parse_from(["statsolver", "central-tendency", "-d", "1", "-p", "11"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_tools_filter() {
        let args = CommandArgs::try_parse_from(["statsolver", "tools", "moments"]).unwrap();
        let Mode::Tools(arg) = args.mode else {
            panic!("expected tools");
        };
        assert_eq!(arg.tool, Some(statsolver_stats::tool::Tool::Moments));

        assert!(CommandArgs::try_parse_from(["statsolver", "tools", "histogram"]).is_err());
    }

    #[test]
    fn test_tool_subcommands_match_tool_ids() {
        let command = CommandArgs::command();
        for tool in statsolver_stats::tool::Tool::ALL {
            assert!(
                command.find_subcommand(tool.id()).is_some(),
                "missing subcommand for {}",
                tool.id()
            );
        }
    }
}
