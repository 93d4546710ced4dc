use crate::errors::{ShopError, ShopResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application name used for config and data directories.
pub const APP_NAME: &str = "moodshop";

/// Base path used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// Configuration struct for the mood shop client
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to, e.g. `http://host:5000/api`.
    pub api_base_url: Option<String>,
    /// File holding locally persisted client state (the user id).
    pub storage_path: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl ClientConfig {
    /// Loads configuration from a file if it exists, otherwise returns the default config
    pub fn load_from_file(path: &Path) -> ShopResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                ShopError::ConfigError(format!("Failed to read config file: {}", e))
            })?;

            let config: Self = toml::from_str(&content).map_err(|e| {
                ShopError::ConfigError(format!("Failed to parse config file: {}", e))
            })?;

            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves configuration to a file
    pub fn save_to_file(&self, path: &Path) -> ShopResult<()> {
        let content = toml::to_string(self)
            .map_err(|e| ShopError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        // Ensure the directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ShopError::ConfigError(format!("Failed to create config directory: {}", e))
            })?;
        }

        fs::write(path, content)
            .map_err(|e| ShopError::ConfigError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Merges this config with another config, preferring values from the other config if present
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            api_base_url: other
                .api_base_url
                .clone()
                .or_else(|| self.api_base_url.clone()),
            storage_path: other
                .storage_path
                .clone()
                .or_else(|| self.storage_path.clone()),
            log_level: other.log_level.clone().or_else(|| self.log_level.clone()),
        }
    }

    /// Reads `MOODSHOP_*` overrides from the process environment (and `.env`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            api_base_url: env::var("MOODSHOP_API_URL").ok(),
            storage_path: env::var("MOODSHOP_STORAGE_PATH").ok().map(PathBuf::from),
            log_level: env::var("MOODSHOP_LOG_LEVEL").ok(),
        }
    }

    /// Default file, then environment. Command line flags are merged on top by the caller.
    pub fn load() -> ShopResult<Self> {
        let path = get_default_config_file(APP_NAME)?;
        debug!("Loading client config from {}", path.display());
        let file_config = Self::load_from_file(&path)?;
        Ok(file_config.merge(&Self::from_env()))
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE_URL)
    }

    pub fn storage_path(&self) -> ShopResult<PathBuf> {
        match &self.storage_path {
            Some(path) => Ok(path.clone()),
            None => get_default_storage_file(APP_NAME),
        }
    }
}

/// Helper function to get default config directory
pub fn get_default_config_dir(app_name: &str) -> ShopResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ShopError::ConfigError("Could not determine home directory".to_string()))?;

    let config_dir = home_dir.join(".config").join(app_name);

    Ok(config_dir)
}

/// Helper function to get default config file path
pub fn get_default_config_file(app_name: &str) -> ShopResult<PathBuf> {
    let config_dir = get_default_config_dir(app_name)?;
    Ok(config_dir.join("config.toml"))
}

/// Local client storage lives in the platform data dir, falling back to the config dir.
pub fn get_default_storage_file(app_name: &str) -> ShopResult<PathBuf> {
    let dir = match dirs::data_local_dir() {
        Some(dir) => dir.join(app_name),
        None => get_default_config_dir(app_name)?,
    };
    Ok(dir.join("storage.toml"))
}
