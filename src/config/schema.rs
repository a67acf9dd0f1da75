//! Configuration schema for brewcart
//!
//! Configuration is stored at `~/.config/brewcart/config.toml`

use crate::cart::DEFAULT_SLOT_KEY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Cart storage settings
    pub cart: CartConfig,

    /// Catalog source
    pub catalog: CatalogConfig,

    /// Delivery pricing
    pub delivery: DeliveryConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,

    /// Log format: "text" or "json"
    pub log_format: String,

    /// Record placed orders in the local order log
    pub order_log: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            log_format: "text".to_string(),
            order_log: true,
        }
    }
}

/// Where the cart is kept between runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// JSON file in the state directory
    #[default]
    File,
    /// Process memory only
    Memory,
}

/// Cart storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Key of the durable slot
    pub storage_key: String,

    /// Storage backend
    pub storage: StorageKind,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_SLOT_KEY.to_string(),
            storage: StorageKind::File,
        }
    }
}

/// Catalog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog JSON file
    pub path: Option<PathBuf>,
}

/// Delivery pricing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    /// Orders above this subtotal ship free
    pub free_threshold: u64,

    /// Fee charged otherwise
    pub fee: u64,

    /// Currency sign used in output
    pub currency: String,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            free_threshold: 1000,
            fee: 300,
            currency: "₽".to_string(),
        }
    }
}
