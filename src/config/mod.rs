//! CLI settings — YAML load/save at ~/.respcurve/config.yaml.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// How sampled curves are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned `x  y` columns.
    #[default]
    Table,
    /// `x,y` rows with a header.
    Csv,
}

/// Defaults for the `respcurve` commands. Every field may be omitted in YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Number of intervals `sample` splits `[0, 1]` into.
    #[serde(default = "Settings::default_steps")]
    pub steps: usize,
    /// Digits after the decimal point in printed values.
    #[serde(default = "Settings::default_precision")]
    pub precision: usize,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Settings {
    fn default_steps() -> usize {
        10
    }

    fn default_precision() -> usize {
        4
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            steps: Self::default_steps(),
            precision: Self::default_precision(),
            format: OutputFormat::default(),
        }
    }
}

const SETTINGS_DIR: &str = ".respcurve";
const SETTINGS_FILE: &str = "config.yaml";

/// `~/.respcurve/config.yaml`, relative to the working directory when no home
/// directory is known.
pub fn default_settings_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(SETTINGS_DIR)
        .join(SETTINGS_FILE)
}

/// Read settings from `path`. A missing file yields the defaults; unparsable
/// YAML is reported as `InvalidData`.
pub fn load_settings(path: &Path) -> Result<Settings, io::Error> {
    let yaml = match std::fs::read_to_string(path) {
        Ok(yaml) => yaml,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        Err(err) => return Err(err),
    };
    let settings: Settings = serde_yaml::from_str(&yaml)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    tracing::debug!(path = %path.display(), ?settings, "settings loaded");
    Ok(settings)
}

/// Write settings to `path` as YAML. Missing parent directories are created.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<(), io::Error> {
    let yaml = serde_yaml::to_string(settings).map_err(io::Error::other)?;
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir)?,
        _ => {}
    }
    std::fs::write(path, yaml)
}
