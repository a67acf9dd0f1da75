//! Cart store: the single owner and mutator of cart state
//!
//! Every operation applies one `CartAction` under the store's lock and then
//! writes the resulting state to the slot. Slot failures are logged and
//! dropped; the in-memory transition always stands.

use crate::cart::slot::CartSlot;
use crate::cart::state::{CartAction, CartState, LineItem};
use crate::catalog::{Product, ProductId};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

/// Cart store backed by a durable slot
pub struct CartStore {
    state: Mutex<CartState>,
    slot: Box<dyn CartSlot>,
}

impl CartStore {
    /// Open a store, restoring whatever the slot holds.
    ///
    /// Missing, unreadable or corrupt data all yield an empty cart.
    pub fn open(slot: impl CartSlot + 'static) -> Self {
        let state = restore(&slot);
        Self {
            state: Mutex::new(state),
            slot: Box::new(slot),
        }
    }

    /// Add a product. `quantity` is accepted but ignored: new lines start
    /// at one and repeat adds bump by one.
    pub fn add(&self, product: Product, quantity: u32) -> CartState {
        self.dispatch(CartAction::Add { product, quantity })
    }

    /// Remove a product's line; no-op if absent
    pub fn remove(&self, id: ProductId) -> CartState {
        self.dispatch(CartAction::Remove(id))
    }

    /// Set a line's quantity to `max(1, quantity)`; no-op if absent
    pub fn set_quantity(&self, id: ProductId, quantity: i64) -> CartState {
        self.dispatch(CartAction::SetQuantity { id, quantity })
    }

    /// Empty the cart
    pub fn clear(&self) -> CartState {
        self.dispatch(CartAction::Clear)
    }

    /// Empty the cart and return what it held, in one transition
    pub fn take(&self) -> CartState {
        let mut state = self.lock();
        let taken = std::mem::take(&mut *state);

        debug!(
            "cart take: {} line(s), {} item(s)",
            taken.items.len(),
            taken.total_items()
        );
        self.persist(&state);
        taken
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> CartState {
        self.lock().clone()
    }

    /// Current line items in display order
    pub fn items(&self) -> Vec<LineItem> {
        self.lock().items.clone()
    }

    /// Sum of quantities
    pub fn total_items(&self) -> u64 {
        self.lock().total_items()
    }

    /// Sum of price times quantity
    pub fn total_price(&self) -> u64 {
        self.lock().total_price()
    }

    /// Key of the backing slot
    pub fn slot_key(&self) -> &str {
        self.slot.key()
    }

    fn dispatch(&self, action: CartAction) -> CartState {
        let name = action.name();
        let mut state = self.lock();
        *state = state.clone().reduce(action);

        debug!(
            "cart {}: {} line(s), {} item(s)",
            name,
            state.items.len(),
            state.total_items()
        );
        self.persist(&state);
        state.clone()
    }

    fn persist(&self, state: &CartState) {
        let contents = match serde_json::to_string(state) {
            Ok(s) => s,
            Err(e) => {
                warn!("Failed to serialize cart: {}", e);
                return;
            }
        };

        if let Err(e) = self.slot.write(&contents) {
            warn!("Failed to save cart to {}: {}", self.slot.key(), e);
        }
    }

    fn lock(&self) -> MutexGuard<'_, CartState> {
        // State is only replaced after `reduce` returns, so a poisoned lock
        // still guards a whole state.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn restore(slot: &dyn CartSlot) -> CartState {
    let contents = match slot.read() {
        Ok(Some(contents)) => contents,
        Ok(None) => {
            debug!("No saved cart under {}, starting empty", slot.key());
            return CartState::new();
        }
        Err(e) => {
            warn!("Failed to read saved cart {}: {}", slot.key(), e);
            return CartState::new();
        }
    };

    match serde_json::from_str::<CartState>(&contents) {
        Ok(state) => {
            debug!("Restored cart {} with {} line(s)", slot.key(), state.items.len());
            state
        }
        Err(e) => {
            warn!("Saved cart {} is corrupt, starting empty: {}", slot.key(), e);
            CartState::new()
        }
    }
}
