//! Error types for brewcart
//!
//! Config, catalog, checkout and CLI code return `BrewResult<T>`. Cart
//! operations never return errors; see `cart::store`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for brewcart operations
pub type BrewResult<T> = Result<T, BrewError>;

/// All errors that can occur in brewcart
#[derive(Error, Debug)]
pub enum BrewError {
    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Catalog errors
    #[error("No catalog configured")]
    CatalogMissing,

    #[error("Catalog file not found: {0}")]
    CatalogNotFound(PathBuf),

    #[error("Invalid catalog at {path}: {reason}")]
    CatalogInvalid { path: PathBuf, reason: String },

    #[error("Product not found: {0}")]
    ProductNotFound(u64),

    // Checkout errors
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Invalid order form: {field} {reason}")]
    OrderInvalid { field: &'static str, reason: String },

    #[error("Checkout cancelled")]
    CheckoutCancelled,

    // Storage errors
    #[error("Invalid cart storage key {key:?}: {reason}")]
    SlotKeyInvalid { key: String, reason: &'static str },

    #[error("Failed to persist cart to slot {key}: {reason}")]
    SlotWrite { key: String, reason: String },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    User(String),
}

impl BrewError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an order form validation error
    pub fn order_invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::OrderInvalid {
            field,
            reason: reason.into(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::CatalogMissing => {
                Some("Pass --catalog <FILE>, set BREWCART_CATALOG, or run: brewcart config set catalog.path <FILE>")
            }
            Self::ProductNotFound(_) => Some("Run: brewcart menu"),
            Self::EmptyCart => Some("Add something first: brewcart add <ID>"),
            Self::CheckoutCancelled => Some("Pass --yes to confirm without a prompt"),
            Self::SlotKeyInvalid { .. } => Some("Use a plain name such as coffeeShopCart"),
            _ => None,
        }
    }
}
