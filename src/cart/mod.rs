//! Cart state container

pub mod factory;
pub mod provider;
pub mod slot;
pub mod state;
pub mod store;

pub use factory::open_store;
pub use provider::{CartHandle, CartProvider};
pub use slot::{validate_key, CartSlot, FileSlot, MemorySlot, DEFAULT_SLOT_KEY};
pub use state::{CartAction, CartState, LineItem};
pub use store::CartStore;
