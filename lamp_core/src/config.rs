//! Configuration file support for Lamp.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/lamp/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub lookup: LookupConfig,
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

/// Remote verse lookup configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LookupConfig {
    /// When false, verses are resolved from the cache and built-in table only
    #[serde(default = "default_lookup_enabled")]
    pub enabled: bool,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Translation code passed to the service
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            enabled: default_lookup_enabled(),
            base_url: default_base_url(),
            version: default_version(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LookupConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("lamp")
}

fn default_lookup_enabled() -> bool {
    true
}

fn default_base_url() -> String {
    "https://getbible.net/json".into()
}

fn default_version() -> String {
    "cns".into()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
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
        base.join("lamp").join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.lookup.timeout_secs == 0 {
            return Err(Error::Config("lookup.timeout_secs must be positive".into()));
        }
        if self.lookup.base_url.trim().is_empty() {
            return Err(Error::Config("lookup.base_url must not be empty".into()));
        }
        Ok(())
    }
}
