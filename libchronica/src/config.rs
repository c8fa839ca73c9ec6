//! Configuration management for Chronica

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub feed: FeedConfig,
    #[serde(default)]
    pub reference: Option<ReferenceConfig>,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the event feed lives and how long to wait for it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    pub source: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Optional local reference document (specs, generations, gallery media)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub tick_rate_ms: u64,
    /// Rows below the viewport edge an item must clear before it counts as
    /// seen by the reveal effect
    pub reveal_margin_rows: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            reveal_margin_rows: 2,
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Create a default configuration
    pub fn default_config() -> Self {
        Self {
            feed: FeedConfig {
                source: "data/timeline-data.json".to_string(),
                timeout_secs: default_timeout_secs(),
            },
            reference: None,
            ui: UiConfig::default(),
        }
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("CHRONICA_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("chronica").join("config.toml"))
}
