use anyhow::bail;

use crate::{settings::Settings, util::Output};

use super::GlobalArg;

/// Prints the effective settings, saving `--precision` first when both
/// `--precision` and `--settings` are given.
pub(crate) fn run(global: &GlobalArg) -> anyhow::Result<()> {
    let settings = match (&global.settings, global.precision) {
        (Some(path), Some(precision)) => {
            let mut settings = if path.exists() {
                Settings::load(path)?
            } else {
                Settings::default()
            };
            settings.decimal_precision = precision;
            settings.save(path)?;
            eprintln!(
                "Decimal precision set to {} places in {}",
                precision.places(),
                path.display()
            );
            settings
        }
        (None, Some(_)) => bail!("--settings <PATH> is required to save preferences"),
        (path, precision) => Settings::resolve(path.as_deref(), precision)?,
    };

    let output = Output::new(global.output.as_deref())?;
    if global.json {
        output.write_json(&settings)
    } else {
        output.write_text(&format!(
            "decimal_precision = {}\n",
            settings.decimal_precision.places()
        ))
    }
}
