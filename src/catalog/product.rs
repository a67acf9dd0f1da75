//! Product value object
//!
//! Field names are camelCase on disk so catalog files and persisted carts
//! share one shape.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A menu product as supplied by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Identity used for cart merging
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Unit price in whole currency units
    pub price: u64,

    /// Previous price, shown struck through when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<u64>,

    /// Image reference (URL or asset path)
    pub image: String,

    /// Menu category
    pub category: String,

    /// Descriptive text
    pub description: String,

    /// Weight in grams
    pub weight: u32,

    /// Calorie count
    pub calories: u32,

    /// "New" badge
    pub is_new: bool,

    /// "Popular" badge
    pub is_popular: bool,
}

impl Product {
    /// Whether the product is currently discounted
    pub fn is_discounted(&self) -> bool {
        self.old_price.is_some_and(|old| old > self.price)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case() {
        let json = r#"{
            "id": 3,
            "name": "Flat White",
            "price": 220,
            "oldPrice": 260,
            "image": "/img/fw.jpg",
            "category": "coffee",
            "description": "Double ristretto with milk",
            "weight": 200,
            "calories": 110,
            "isNew": true,
            "isPopular": false
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId(3));
        assert_eq!(product.old_price, Some(260));
        assert!(product.is_new);
        assert!(product.is_discounted());
    }

    #[test]
    fn old_price_is_optional() {
        let product = fixtures::product(1, 200);
        let json = serde_json::to_string(&product).unwrap();
        assert!(!json.contains("oldPrice"));
        assert!(json.contains("isPopular"));

        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }

    #[test]
    fn missing_field_is_rejected() {
        let json = r#"{"id": 1, "name": "Latte", "price": 200}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn product_id_parses() {
        assert_eq!(" 42 ".parse::<ProductId>().unwrap(), ProductId(42));
        assert!("abc".parse::<ProductId>().is_err());
    }
}
