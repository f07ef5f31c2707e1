//! Result sinks and JSON file helpers shared by the commands.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use serde::{Serialize, de::DeserializeOwned};

/// Where a command writes its result: stdout, or the file given with `--output`.
pub(crate) struct Output {
    sink: Box<dyn Write>,
    path: Option<PathBuf>,
}

impl Output {
    pub(crate) fn new(path: Option<&Path>) -> anyhow::Result<Self> {
        let sink: Box<dyn Write> = match path {
            Some(path) => {
                let file = File::create(path).with_context(|| {
                    format!("Failed to create output file: {}", path.display())
                })?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout().lock()),
        };
        Ok(Self {
            sink,
            path: path.map(Path::to_path_buf),
        })
    }

    fn target(&self) -> String {
        self.path
            .as_ref()
            .map_or_else(|| "stdout".to_owned(), |path| path.display().to_string())
    }

    /// Writes `value` as pretty-printed JSON followed by a newline.
    pub(crate) fn write_json<T>(self, value: &T) -> anyhow::Result<()>
    where
        T: Serialize + ?Sized,
    {
        let mut text =
            serde_json::to_string_pretty(value).context("Failed to serialize result as JSON")?;
        text.push('\n');
        self.write_text(&text)
    }

    pub(crate) fn write_text(mut self, text: &str) -> anyhow::Result<()> {
        self.sink
            .write_all(text.as_bytes())
            .and_then(|()| self.sink.flush())
            .with_context(|| format!("Failed to write to {}", self.target()))?;
        if let Some(path) = &self.path {
            tracing::info!(path = %path.display(), "output written");
        }
        Ok(())
    }
}

/// Writes `value` to `path` as pretty-printed JSON.
pub(crate) fn save_json<T>(path: &Path, value: &T) -> anyhow::Result<()>
where
    T: Serialize + ?Sized,
{
    Output::new(Some(path))?.write_json(value)
}

/// Reads a JSON file. `kind` names the file in error messages.
pub(crate) fn load_json<T>(kind: &str, path: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to open {kind} file: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {kind} JSON file: {}", path.display()))
}
