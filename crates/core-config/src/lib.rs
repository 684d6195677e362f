//! Configuration loading and parsing.
//!
//! Parses `redit.toml` (or an override path provided by the binary). Every
//! field has a default, unknown fields are ignored, and a missing or malformed
//! file falls back to defaults, so loading never aborts startup.
//!
//! ```toml
//! [scroll]
//! page_lines = 0   # 0 = window height minus one
//!
//! [log]
//! filter = "info"  # used when RUST_LOG is unset
//! ```

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const FILE_NAME: &str = "redit.toml";

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ScrollConfig {
    #[serde(default)]
    pub page_lines: u16,
}

impl ScrollConfig {
    /// Lines moved by one page scroll in a window of `text_rows` rows.
    pub fn page_step(&self, text_rows: u16) -> u16 {
        if self.page_lines > 0 {
            self.page_lines
        } else {
            text_rows.saturating_sub(1).max(1)
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LogConfig {
    #[serde(default = "LogConfig::default_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: Self::default_filter(),
        }
    }
}

impl LogConfig {
    fn default_filter() -> String {
        "info".to_owned()
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub path: Option<PathBuf>, // file the values came from, if any
    pub file: ConfigFile,
}

/// Best-effort config path: working directory first, then the platform
/// config dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("redit").join(FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                path: Some(path),
                file,
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}
