//! Menu filtering and sorting

use crate::catalog::{Catalog, Product};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Category name that matches every product
pub const ALL_CATEGORIES: &str = "all";

/// Menu sort order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Catalog order
    #[default]
    Default,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// Fewest calories first
    Calories,
    /// Popular products first
    Popular,
}

/// Filter and sort applied to the menu
#[derive(Debug, Clone, Default)]
pub struct MenuQuery {
    /// Exact category; `None` or `"all"` matches everything
    pub category: Option<String>,
    /// Case-insensitive substring of name or description
    pub search: Option<String>,
    pub sort: SortOrder,
}

impl MenuQuery {
    /// Run the query against a catalog. The catalog itself is never reordered.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut result: Vec<&Product> = catalog
            .products()
            .iter()
            .filter(|p| self.matches_category(p))
            .filter(|p| match &needle {
                Some(needle) => {
                    p.name.to_lowercase().contains(needle)
                        || p.description.to_lowercase().contains(needle)
                }
                None => true,
            })
            .collect();

        // sort_by_key is stable, so ties keep catalog order
        match self.sort {
            SortOrder::Default => {}
            SortOrder::PriceAsc => result.sort_by_key(|p| p.price),
            SortOrder::PriceDesc => result.sort_by_key(|p| std::cmp::Reverse(p.price)),
            SortOrder::Calories => result.sort_by_key(|p| p.calories),
            SortOrder::Popular => result.sort_by_key(|p| !p.is_popular),
        }

        result
    }

    fn matches_category(&self, product: &Product) -> bool {
        match self.category.as_deref() {
            None | Some(ALL_CATEGORIES) => true,
            Some(category) => product.category == category,
        }
    }
}
