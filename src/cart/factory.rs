//! Store factory: picks the slot backend from configuration

use crate::cart::slot::{self, FileSlot, MemorySlot, DEFAULT_SLOT_KEY};
use crate::cart::store::CartStore;
use crate::config::schema::{CartConfig, StorageKind};
use crate::config::ConfigManager;
use tracing::{debug, warn};

/// Open the cart store described by `config`
///
/// An invalid `storage_key` falls back to the default key.
pub fn open_store(config: &CartConfig) -> CartStore {
    let key = match slot::validate_key(&config.storage_key) {
        Ok(()) => config.storage_key.as_str(),
        Err(e) => {
            warn!("{}; using {}", e, DEFAULT_SLOT_KEY);
            DEFAULT_SLOT_KEY
        }
    };

    match config.storage {
        StorageKind::File => {
            let slot = FileSlot::new(&ConfigManager::cart_dir(), key);
            debug!("Using cart slot {}", slot.path().display());
            CartStore::open(slot)
        }
        StorageKind::Memory => {
            debug!("Using in-memory cart slot {}", key);
            CartStore::open(MemorySlot::new(key))
        }
    }
}
