use statsolver_stats::{
    derivation::{self, Derivation},
    precision::Precision,
    tool::Tool,
};

use crate::{
    input::{self, PairedArg, SampleArg},
    render,
    settings::Settings,
    util::Output,
};

use super::GlobalArg;

#[derive(Debug, Clone, Default, clap::Args)]
pub(crate) struct RegressionArg {
    #[clap(flatten)]
    pub paired: PairedArg,
    /// X values to predict Y for (comma-separated)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub predict: Vec<f64>,
}

fn precision(global: &GlobalArg) -> anyhow::Result<Precision> {
    let settings = Settings::resolve(global.settings.as_deref(), global.precision)?;
    Ok(settings.decimal_precision)
}

fn emit(global: &GlobalArg, derivation: &Derivation) -> anyhow::Result<()> {
    let output = Output::new(global.output.as_deref())?;
    if global.json {
        output.write_json(derivation)
    } else {
        output.write_text(&render::render(derivation))
    }
}

pub(crate) fn run_sample(
    global: &GlobalArg,
    arg: &SampleArg,
    derive: fn(&[f64], Precision) -> Derivation,
) -> anyhow::Result<()> {
    let precision = precision(global)?;
    let values = input::read_sample(arg)?;
    emit(global, &derive(&values, precision))
}

pub(crate) fn run_correlation(global: &GlobalArg, arg: &PairedArg) -> anyhow::Result<()> {
    let precision = precision(global)?;
    let sample = input::read_paired(arg)?;
    emit(global, &derivation::correlation(&sample, precision))
}

pub(crate) fn run_regression(global: &GlobalArg, arg: &RegressionArg) -> anyhow::Result<()> {
    let precision = precision(global)?;
    let sample = input::read_paired(&arg.paired)?;
    emit(global, &derivation::regression(&sample, &arg.predict, precision))
}

#[derive(Debug, Clone, Default, clap::Args)]
pub(crate) struct ToolsArg {
    /// Show only this tool (e.g. `coefficient-variation`)
    #[arg(value_parser = parse_tool)]
    pub tool: Option<Tool>,
}

fn parse_tool(id: &str) -> Result<Tool, String> {
    Tool::from_id(id).ok_or_else(|| {
        let ids = Tool::ALL.map(Tool::id).join(", ");
        format!("unknown tool '{id}' (expected one of: {ids})")
    })
}

pub(crate) fn list_tools(global: &GlobalArg, arg: &ToolsArg) -> anyhow::Result<()> {
    let tools = match arg.tool {
        Some(tool) => vec![tool],
        None => Tool::ALL.to_vec(),
    };
    let output = Output::new(global.output.as_deref())?;
    if global.json {
        output.write_json(&tools)
    } else {
        output.write_text(&render::render_tool_list(&tools))
    }
}
