use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::core::display::IconStyle;
use crate::errors::{AppError, AppResult};
use crate::utils::path::{expand_tilde, home_or_current};

/// Data file name, shared with the first releases so balances carry over.
pub const DEFAULT_DATA_FILE: &str = "~/.time_hedge_data.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default)]
    pub icon_style: IconStyle,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            icon_style: IconStyle::default(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.time_hedge`)
    pub fn config_dir() -> PathBuf {
        home_or_current().join(".time_hedge")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("time_hedge.conf")
    }

    /// Data file with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    /// Load configuration from file, or return defaults.
    ///
    /// A broken file must not stop the status bar from rendering, so parse
    /// errors are logged and the defaults used instead.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(Some(cfg)) => cfg,
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("ignoring configuration file: {e}");
                Self::default()
            }
        }
    }

    /// `Ok(None)` when no config file exists.
    pub fn try_load() -> AppResult<Option<Self>> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let cfg = Self::from_yaml(&content)?;
        debug!(path = %path.display(), ?cfg, "configuration loaded");
        Ok(Some(cfg))
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration file unless one already exists.
    /// Returns the path and whether it was created.
    pub fn init_file() -> AppResult<(PathBuf, bool)> {
        let path = Self::config_file();
        if path.exists() {
            return Ok((path, false));
        }

        let dir = Self::config_dir();
        fs::create_dir_all(&dir)
            .map_err(|e| AppError::Config(format!("cannot create {}: {e}", dir.display())))?;

        fs::write(&path, Self::default().to_yaml()?)?;
        Ok((path, true))
    }
}
