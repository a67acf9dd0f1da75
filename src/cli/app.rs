//! Shared state handed to every command
//!
//! Built once in `main`: it opens the cart provider and resolves the
//! catalog location. Commands take cart handles from here.

use crate::cart::{open_store, CartHandle, CartProvider};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{BrewError, BrewResult};
use std::path::PathBuf;

/// Application context for one CLI invocation
pub struct App {
    config: Config,
    provider: CartProvider,
    catalog_path: Option<PathBuf>,
}

impl App {
    /// Open the cart described by `config`; `catalog` overrides `catalog.path`
    pub fn new(config: Config, catalog: Option<PathBuf>) -> Self {
        let provider = CartProvider::new(open_store(&config.cart));
        let catalog_path = catalog.or_else(|| config.catalog.path.clone());
        Self {
            config,
            provider,
            catalog_path,
        }
    }

    /// Loaded configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handle to the shared cart
    pub fn cart(&self) -> CartHandle {
        self.provider.handle()
    }

    /// Load the configured catalog
    pub async fn catalog(&self) -> BrewResult<Catalog> {
        let path = self.catalog_path.as_deref().ok_or(BrewError::CatalogMissing)?;
        Catalog::load(path).await
    }

    /// Format an amount with the configured currency sign
    pub fn money(&self, amount: u64) -> String {
        format!("{} {}", amount, self.config.delivery.currency)
    }
}
