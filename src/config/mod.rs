//! Configuration management for brewcart

pub mod schema;

pub use schema::{Config, StorageKind};

use crate::error::{BrewError, BrewResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Environment variable overriding the state directory
pub const STATE_DIR_ENV: &str = "BREWCART_STATE_DIR";

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("brewcart")
            .join("config.toml")
    }

    /// Get the state directory path
    pub fn state_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(STATE_DIR_ENV).filter(|v| !v.is_empty()) {
            return PathBuf::from(dir);
        }

        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("brewcart")
    }

    /// Get the cart slot directory path
    pub fn cart_dir() -> PathBuf {
        Self::state_dir().join("cart")
    }

    /// Get the order log path
    pub fn order_log_path() -> PathBuf {
        Self::state_dir().join("orders.log")
    }

    /// Load configuration, creating default if not exists
    pub async fn load(&self) -> BrewResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path).await
    }

    /// Load configuration from a specific file
    pub async fn load_from_file(&self, path: &Path) -> BrewResult<Config> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| BrewError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| BrewError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Save configuration to file
    pub async fn save(&self, config: &Config) -> BrewResult<()> {
        self.ensure_config_dir().await?;

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await.map_err(|e| {
            BrewError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    /// Ensure the config directory exists
    async fn ensure_config_dir(&self) -> BrewResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| BrewError::ConfigDirCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }
        Ok(())
    }

    /// Ensure all state directories exist
    pub async fn ensure_state_dirs() -> BrewResult<()> {
        let dirs = [Self::state_dir(), Self::cart_dir()];

        for dir in &dirs {
            fs::create_dir_all(dir).await.map_err(|e| {
                BrewError::io(format!("creating directory {}", dir.display()), e)
            })?;
        }

        Ok(())
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_default_when_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.toml");
        let manager = ConfigManager::with_path(path);

        let config = manager.load().await.unwrap();
        assert_eq!(config.cart.storage_key, "coffeeShopCart");
    }

    #[tokio::test]
    async fn save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");
        let manager = ConfigManager::with_path(path);

        let mut config = Config::default();
        config.cart.storage_key = "testCart".to_string();
        config.catalog.path = Some(PathBuf::from("/srv/menu.json"));

        manager.save(&config).await.unwrap();
        let loaded = manager.load().await.unwrap();

        assert_eq!(loaded.cart.storage_key, "testCart");
        assert_eq!(loaded.catalog.path, Some(PathBuf::from("/srv/menu.json")));
    }

    #[tokio::test]
    async fn invalid_config_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        tokio::fs::write(&path, "[delivery]\nfee = \"lots\"").await.unwrap();

        let err = ConfigManager::with_path(path.clone()).load().await.unwrap_err();
        match err {
            BrewError::ConfigInvalid { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected ConfigInvalid, got {other:?}"),
        }
    }

    #[test]
    #[serial]
    fn state_dir_env_override() {
        let temp = TempDir::new().unwrap();
        std::env::set_var(STATE_DIR_ENV, temp.path());

        assert_eq!(ConfigManager::state_dir(), temp.path());
        assert_eq!(ConfigManager::cart_dir(), temp.path().join("cart"));
        assert_eq!(ConfigManager::order_log_path(), temp.path().join("orders.log"));

        std::env::remove_var(STATE_DIR_ENV);
        assert!(ConfigManager::state_dir().ends_with("brewcart"));
    }
}
