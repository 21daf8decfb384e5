//! Formatter settings file

use anyhow::{Context, Result};
use kbqa_sparql::FormatterConfig;
use std::path::{Path, PathBuf};

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .context("Could not determine config directory")
        .map(|p| p.join("kbqa"))
}

pub fn formatter_config_file() -> Result<PathBuf> {
    config_dir().map(|p| p.join("formatter.toml"))
}

/// Reads a formatter configuration from a TOML file
pub fn read_formatter_config(path: &Path) -> Result<FormatterConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    toml::from_str(&contents).with_context(|| format!("Invalid config file: {:?}", path))
}

/// Loads the formatter configuration
///
/// An explicit path must exist. Without one, the per-user
/// `formatter.toml` is used when present and defaults otherwise.
pub fn load_formatter_config(path: Option<&Path>) -> Result<FormatterConfig> {
    if let Some(path) = path {
        return read_formatter_config(path);
    }

    match formatter_config_file() {
        Ok(default_path) if default_path.exists() => {
            tracing::debug!(path = %default_path.display(), "Loading formatter config");
            read_formatter_config(&default_path)
        }
        Ok(_) => Ok(FormatterConfig::default()),
        Err(e) => {
            tracing::debug!(error = %e, "No config directory; using default formatter config");
            Ok(FormatterConfig::default())
        }
    }
}
