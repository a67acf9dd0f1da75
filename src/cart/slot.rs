//! Durable slots backing the cart
//!
//! A slot is one named entry holding the serialized cart as JSON text.

use crate::error::{BrewError, BrewResult};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Default slot key
pub const DEFAULT_SLOT_KEY: &str = "coffeeShopCart";

/// Check that `key` names a single file inside the slot directory
pub fn validate_key(key: &str) -> BrewResult<()> {
    let reason = if key.trim().is_empty() {
        "cannot be empty"
    } else if key.contains(['/', '\\']) {
        "cannot contain path separators"
    } else if key.contains("..") {
        "cannot contain '..'"
    } else {
        return Ok(());
    };

    Err(BrewError::SlotKeyInvalid {
        key: key.to_string(),
        reason,
    })
}

/// A single named key-value entry
pub trait CartSlot: Send + Sync {
    /// The slot's key
    fn key(&self) -> &str;

    /// Read the stored text, `None` if nothing was ever written
    fn read(&self) -> BrewResult<Option<String>>;

    /// Replace the stored text
    fn write(&self, contents: &str) -> BrewResult<()>;
}

impl<S: CartSlot + ?Sized> CartSlot for Arc<S> {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn read(&self) -> BrewResult<Option<String>> {
        (**self).read()
    }

    fn write(&self, contents: &str) -> BrewResult<()> {
        (**self).write(contents)
    }
}

/// Slot stored as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileSlot {
    key: String,
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot for `key` inside `dir`
    pub fn new(dir: &Path, key: impl Into<String>) -> Self {
        let key = key.into();
        let path = dir.join(format!("{}.json", key));
        Self { key, path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartSlot for FileSlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> BrewResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|e| BrewError::io(format!("reading cart slot {}", self.path.display()), e))
    }

    fn write(&self, contents: &str) -> BrewResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| BrewError::io("creating cart directory", e))?;
        }

        // Write then rename so readers never see a half-written file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)
            .map_err(|e| BrewError::io(format!("writing cart slot {}", tmp.display()), e))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| BrewError::io(format!("replacing cart slot {}", self.path.display()), e))?;

        Ok(())
    }
}

/// In-process slot; contents are lost when dropped
#[derive(Debug, Default)]
pub struct MemorySlot {
    key: String,
    contents: Mutex<Option<String>>,
    fail_writes: AtomicBool,
}

impl MemorySlot {
    /// Empty slot under `key`
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Slot that already holds `contents`
    pub fn with_contents(key: impl Into<String>, contents: impl Into<String>) -> Self {
        let slot = Self::new(key);
        *slot.lock() = Some(contents.into());
        slot
    }

    /// Make subsequent writes fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Current stored text
    pub fn contents(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.contents.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl CartSlot for MemorySlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> BrewResult<Option<String>> {
        Ok(self.contents())
    }

    fn write(&self, contents: &str) -> BrewResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(BrewError::SlotWrite {
                key: self.key.clone(),
                reason: "storage unavailable".to_string(),
            });
        }
        *self.lock() = Some(contents.to_string());
        Ok(())
    }
}
