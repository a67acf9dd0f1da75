//! Provisioning scope for the cart store
//!
//! The provider is built once at start-up and owns the only strong
//! reference to the store. Views receive `CartHandle`s, which all reach the
//! same instance. A handle used after its provider is gone panics.

use crate::cart::store::CartStore;
use std::sync::{Arc, Weak};

/// Owner of the process-wide cart store
pub struct CartProvider {
    store: Arc<CartStore>,
}

impl CartProvider {
    /// Open the provisioning scope around `store`
    pub fn new(store: CartStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Handle for a view collaborator
    pub fn handle(&self) -> CartHandle {
        CartHandle {
            store: Arc::downgrade(&self.store),
        }
    }

    /// The store itself, for code that lives inside the scope
    pub fn store(&self) -> &CartStore {
        &self.store
    }
}

/// Scoped access to the cart store
#[derive(Clone)]
pub struct CartHandle {
    store: Weak<CartStore>,
}

impl CartHandle {
    /// Access the store.
    ///
    /// # Panics
    ///
    /// Panics if the `CartProvider` this handle came from has been dropped.
    pub fn cart(&self) -> Arc<CartStore> {
        match self.store.upgrade() {
            Some(store) => store,
            None => panic!("cart accessed outside of its CartProvider scope"),
        }
    }

    /// Whether the provider is still alive
    pub fn is_live(&self) -> bool {
        self.store.strong_count() > 0
    }

    /// Whether two handles reach the same store
    pub fn same_store(&self, other: &CartHandle) -> bool {
        Weak::ptr_eq(&self.store, &other.store)
    }
}
