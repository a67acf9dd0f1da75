//! Product catalog
//!
//! The catalog is read from a JSON file supplied by the user: either a bare
//! array of products or an object with a `products` array.

pub mod product;
pub mod query;

pub use product::{Product, ProductId};
pub use query::{MenuQuery, SortOrder, ALL_CATEGORIES};

use crate::error::{BrewError, BrewResult};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<Product>),
    Wrapped { products: Vec<Product> },
}

/// Products in catalog order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products already in memory
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load a catalog file
    pub async fn load(path: &Path) -> BrewResult<Self> {
        if !path.exists() {
            return Err(BrewError::CatalogNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| BrewError::io(format!("reading catalog {}", path.display()), e))?;

        let catalog = Self::parse(&content).map_err(|e| BrewError::CatalogInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        debug!("Loaded {} product(s) from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parse catalog JSON
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        let products = match serde_json::from_str(content)? {
            CatalogFile::Bare(products) => products,
            CatalogFile::Wrapped { products } => products,
        };
        Ok(Self::new(products))
    }

    /// Look up a product by id
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product, failing with `ProductNotFound`
    pub fn require(&self, id: ProductId) -> BrewResult<&Product> {
        self.get(id).ok_or(BrewError::ProductNotFound(id.0))
    }

    /// `"all"` followed by distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = vec![ALL_CATEGORIES];
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// All products in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
