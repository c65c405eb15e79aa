use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::export::ExportFormat;

const APP_DIR: &str = "hexsplash";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Format used for the share payload and export files
    pub format: ExportFormat,
    /// Where export files are written
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Open the info overlay when the app starts
    pub show_info_on_start: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// tracing filter directive, overridden by RUST_LOG
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub export: ExportConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

impl Config {
    /// Load from `path`, or from ~/.config/hexsplash/config.toml when `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = match path {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path(),
        };
        match path {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)?;
                Config::parse(&content)
            }
            _ => Ok(Config::default()),
        }
    }

    pub fn parse(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }

    /// Export directory, defaulting to ~/.local/share/hexsplash/palettes
    pub fn export_dir(&self) -> PathBuf {
        self.export
            .directory
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR).join("palettes")))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or("info")
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Directory for the log file, ~/.cache/hexsplash
pub fn log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR))
}
