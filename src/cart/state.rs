//! Cart state and its transition function

use crate::catalog::{Product, ProductId};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::num::NonZeroU32;

/// One product in the cart with a snapshot of its fields taken at add-time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product fields as they were when first added
    #[serde(flatten)]
    pub product: Product,

    /// Always at least one
    pub quantity: NonZeroU32,
}

impl LineItem {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: NonZeroU32::MIN,
        }
    }

    /// Product identity
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity
    pub fn line_total(&self) -> u64 {
        self.product
            .price
            .saturating_mul(u64::from(self.quantity.get()))
    }
}

/// A single intent issued against the cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add a product, or bump an existing line by one
    Add { product: Product, quantity: u32 },
    /// Drop the line for this product
    Remove(ProductId),
    /// Set a line's quantity, clamped to at least one
    SetQuantity { id: ProductId, quantity: i64 },
    /// Empty the cart
    Clear,
}

impl CartAction {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Remove(_) => "remove",
            Self::SetQuantity { .. } => "set_quantity",
            Self::Clear => "clear",
        }
    }
}

/// Ordered line items; insertion order is display order.
///
/// Totals are not stored: `total_items` and `total_price` are computed
/// from `items` on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    #[serde(deserialize_with = "unique_items")]
    pub items: Vec<LineItem>,
}

/// At most one line per product; a duplicated id is malformed data.
fn unique_items<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<LineItem>, D::Error> {
    let items = Vec::<LineItem>::deserialize(deserializer)?;
    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if !seen.insert(item.id()) {
            return Err(D::Error::custom(format!(
                "duplicate line for product {}",
                item.id()
            )));
        }
    }
    Ok(items)
}

impl CartState {
    /// Empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cart holds no lines
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up the line for a product
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Sum of quantities across all lines
    pub fn total_items(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Sum of unit price times quantity across all lines
    pub fn total_price(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(item.line_total()))
    }

    /// Apply one action and return the next state
    pub fn reduce(mut self, action: CartAction) -> Self {
        match action {
            // The requested quantity is accepted but not used: a new line
            // always starts at one and a repeat add always bumps by one.
            CartAction::Add {
                product,
                quantity: _,
            } => {
                match self.items.iter_mut().find(|item| item.id() == product.id) {
                    Some(item) => item.quantity = item.quantity.saturating_add(1),
                    None => self.items.push(LineItem::new(product)),
                }
            }
            CartAction::Remove(id) => self.items.retain(|item| item.id() != id),
            CartAction::SetQuantity { id, quantity } => {
                if let Some(item) = self.items.iter_mut().find(|item| item.id() == id) {
                    item.quantity = clamp_quantity(quantity);
                }
            }
            CartAction::Clear => self.items.clear(),
        }
        self
    }
}

/// `max(1, quantity)`, saturating at `u32::MAX`
pub fn clamp_quantity(quantity: i64) -> NonZeroU32 {
    let clamped = quantity.clamp(1, i64::from(u32::MAX));
    u32::try_from(clamped)
        .ok()
        .and_then(NonZeroU32::new)
        .unwrap_or(NonZeroU32::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::fixtures::product;

    fn add(state: CartState, id: u64, price: u64) -> CartState {
        state.reduce(CartAction::Add {
            product: product(id, price),
            quantity: 1,
        })
    }

    fn assert_totals_consistent(state: &CartState) {
        let items: u64 = state.items.iter().map(|i| u64::from(i.quantity.get())).sum();
        let price: u64 = state
            .items
            .iter()
            .map(|i| i.product.price * u64::from(i.quantity.get()))
            .sum();
        assert_eq!(state.total_items(), items);
        assert_eq!(state.total_price(), price);
    }

    #[test]
    fn add_merges_by_identity() {
        let state = add(add(add(CartState::new(), 1, 200), 1, 200), 2, 150);

        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[0].id(), ProductId(1));
        assert_eq!(state.items[0].quantity.get(), 2);
        assert_eq!(state.items[1].id(), ProductId(2));
        assert_eq!(state.items[1].quantity.get(), 1);
        assert_eq!(state.total_items(), 3);
        assert_eq!(state.total_price(), 550);
    }

    #[test]
    fn distinct_adds_count_lines_and_items() {
        let mut state = CartState::new();
        for id in 1..=5 {
            state = add(state, id, id * 10);
            assert_totals_consistent(&state);
        }
        state = add(state, 3, 30);

        assert_eq!(state.items.len(), 5);
        assert_eq!(state.total_items(), 6);
        assert_totals_consistent(&state);
    }

    // Open question: callers may pass a quantity (e.g. from a selector), but
    // the add operation ignores it and always counts one. Kept as-is until
    // the product owner decides otherwise.
    #[test]
    fn add_ignores_requested_quantity() {
        let state = CartState::new().reduce(CartAction::Add {
            product: product(1, 200),
            quantity: 5,
        });
        assert_eq!(state.items[0].quantity.get(), 1);

        let state = state.reduce(CartAction::Add {
            product: product(1, 200),
            quantity: 3,
        });
        assert_eq!(state.items[0].quantity.get(), 2);
        assert_eq!(state.total_items(), 2);
    }

    #[test]
    fn add_keeps_first_snapshot() {
        let state = add(CartState::new(), 1, 200);
        let state = add(state, 1, 999);

        assert_eq!(state.items[0].product.price, 200);
        assert_eq!(state.total_price(), 400);
    }

    #[test]
    fn set_quantity_clamps_to_one() {
        let base = add(add(add(CartState::new(), 1, 200), 1, 200), 2, 150);

        for q in [0, -1, -100, i64::MIN] {
            let state = base.clone().reduce(CartAction::SetQuantity {
                id: ProductId(1),
                quantity: q,
            });
            assert_eq!(state.items.len(), 2);
            assert_eq!(state.items[0].quantity.get(), 1);
            assert_eq!(state.total_items(), 2);
            assert_totals_consistent(&state);
        }
    }

    #[test]
    fn set_quantity_sets_value() {
        let state = add(CartState::new(), 1, 200).reduce(CartAction::SetQuantity {
            id: ProductId(1),
            quantity: 4,
        });
        assert_eq!(state.items[0].quantity.get(), 4);
        assert_eq!(state.total_price(), 800);
    }

    #[test]
    fn set_quantity_saturates() {
        let state = add(CartState::new(), 1, 1).reduce(CartAction::SetQuantity {
            id: ProductId(1),
            quantity: i64::MAX,
        });
        assert_eq!(state.items[0].quantity.get(), u32::MAX);
    }

    #[test]
    fn set_quantity_absent_is_noop() {
        let before = add(CartState::new(), 1, 200);
        let after = before.clone().reduce(CartAction::SetQuantity {
            id: ProductId(9),
            quantity: 3,
        });
        assert_eq!(before, after);
    }

    #[test]
    fn remove_absent_is_noop() {
        let before = add(add(CartState::new(), 1, 200), 2, 150);
        let after = before.clone().reduce(CartAction::Remove(ProductId(42)));
        assert_eq!(before, after);
    }

    #[test]
    fn remove_keeps_order() {
        let state = add(add(add(CartState::new(), 1, 10), 2, 20), 3, 30);
        let state = state.reduce(CartAction::Remove(ProductId(2)));

        let ids: Vec<_> = state.items.iter().map(LineItem::id).collect();
        assert_eq!(ids, vec![ProductId(1), ProductId(3)]);
        assert_totals_consistent(&state);
    }

    #[test]
    fn clear_empties() {
        let state = add(add(CartState::new(), 1, 200), 2, 150).reduce(CartAction::Clear);
        assert!(state.items.is_empty());
        assert_eq!(state.total_items(), 0);
        assert_eq!(state.total_price(), 0);

        let state = CartState::new().reduce(CartAction::Clear);
        assert!(state.is_empty());
    }

    #[test]
    fn serializes_flat_items() {
        let state = add(CartState::new(), 1, 200);
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["items"][0]["id"], 1);
        assert_eq!(json["items"][0]["price"], 200);
        assert_eq!(json["items"][0]["quantity"], 1);
        assert!(json.get("totalItems").is_none());

        let parsed: CartState = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn zero_quantity_does_not_deserialize() {
        let mut json = serde_json::to_value(add(CartState::new(), 1, 200)).unwrap();
        json["items"][0]["quantity"] = serde_json::json!(0);
        assert!(serde_json::from_value::<CartState>(json).is_err());
    }

    #[test]
    fn duplicate_ids_do_not_deserialize() {
        let state = add(add(CartState::new(), 1, 200), 2, 150);
        let mut json = serde_json::to_value(&state).unwrap();
        let first = json["items"][0].clone();
        json["items"][1] = first;

        let err = serde_json::from_value::<CartState>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate line for product 1"));
    }
}
