use std::path::Path;

use serde::{Deserialize, Serialize};
use statsolver_stats::precision::Precision;

use crate::util;

/// Persisted user preferences.
///
/// Unknown keys are ignored so files written by other front ends still load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    /// Decimal places shown in results (0-10)
    pub decimal_precision: Precision,
}

impl Settings {
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        util::load_json("settings", path)
    }

    /// Loads `path` if given, falling back to defaults, then applies `precision` on top.
    pub(crate) fn resolve(
        path: Option<&Path>,
        precision: Option<Precision>,
    ) -> anyhow::Result<Self> {
        let mut settings = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(precision) = precision {
            settings.decimal_precision = precision;
        }
        tracing::debug!(
            precision = settings.decimal_precision.places(),
            "resolved settings"
        );
        Ok(settings)
    }

    pub(crate) fn save(&self, path: &Path) -> anyhow::Result<()> {
        util::save_json(path, self)
    }
}

/// Parses a `--precision` argument.
pub(crate) fn parse_precision(s: &str) -> Result<Precision, String> {
    let places = s
        .parse::<u8>()
        .map_err(|e| format!("invalid precision '{s}': {e}"))?;
    Precision::new(places).map_err(|e| e.to_string())
}
