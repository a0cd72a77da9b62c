//! Configuration file support for the wellness journal.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/wellness/config.toml`.

use crate::query::Window;
use crate::store::DEFAULT_ENTRIES_KEY;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Storage slot configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_entries_key")]
    pub entries_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            entries_key: default_entries_key(),
        }
    }
}

/// Trends view configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Days covered by the trends view when no window is given (7, 30 or 365)
    #[serde(default = "default_window_days")]
    pub default_window: i64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_window: default_window_days(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("wellness")
}

fn default_entries_key() -> String {
    DEFAULT_ENTRIES_KEY.into()
}

fn default_window_days() -> i64 {
    30
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("wellness").join("config.toml")
    }

    /// Check values that the type system cannot
    pub fn validate(&self) -> Result<()> {
        self.default_window()?;
        if self.storage.entries_key.trim().is_empty() {
            return Err(Error::Config("storage.entries_key must not be empty".into()));
        }
        Ok(())
    }

    /// Window used by the trends view by default
    pub fn default_window(&self) -> Result<Window> {
        Window::from_days(self.dashboard.default_window).ok_or_else(|| {
            Error::Config(format!(
                "dashboard.default_window must be 7, 30 or 365, got {}",
                self.dashboard.default_window
            ))
        })
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
