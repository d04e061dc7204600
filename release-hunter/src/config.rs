use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{HunterError, Result};

#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub default: DefaultConfig,
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DefaultConfig {
    /// Seconds allowed for the single GitHub request
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Base URL of the GitHub API, for GitHub Enterprise installs
    #[serde(default)]
    pub api_url: Option<String>,
}

impl Default for DefaultConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            api_url: None,
        }
    }
}

fn default_timeout() -> u64 {
    30
}

impl Config {
    /// Load configuration from file, falling back to defaults when it is missing
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let config_error = |message: String| HunterError::Config {
            path: path.display().to_string(),
            message,
        };

        let content = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        toml::from_str(&content).map_err(|e| config_error(e.to_string()))
    }

    /// Get the default configuration file path
    pub fn default_path() -> PathBuf {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("release-hunter.toml"))
            .unwrap_or_else(|| PathBuf::from("~/.config/release-hunter.toml"))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.default.timeout)
    }

    pub fn api_url(&self) -> Option<&str> {
        self.default.api_url.as_deref()
    }
}
