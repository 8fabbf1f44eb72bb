//! Pick the key/value backend.
//!
//! Priority: localStorage → Memory (fallback)

use std::rc::Rc;
use studio_core::ports::KvStore;
use studio_types::config::StorageBackendType;
use studio_types::Result;
use super::{LocalStorageStore, MemoryStore};

/// Open the configured backend. Returns a trait object so callers are
/// backend-agnostic.
pub fn open_store(backend: StorageBackendType) -> Result<Rc<dyn KvStore>> {
    match backend {
        StorageBackendType::Auto => Ok(auto_detect_store()),
        StorageBackendType::Memory => Ok(Rc::new(MemoryStore::new())),
        StorageBackendType::LocalStorage => Ok(Rc::new(LocalStorageStore::open()?)),
    }
}

/// Try localStorage, fall back to memory. Never fails.
pub fn auto_detect_store() -> Rc<dyn KvStore> {
    if !cfg!(target_arch = "wasm32") {
        log::info!("Storage backend: memory (no browser)");
        return Rc::new(MemoryStore::new());
    }
    match LocalStorageStore::open() {
        Ok(local) => {
            log::info!("Storage backend: localStorage");
            Rc::new(local)
        }
        Err(e) => {
            log::warn!("localStorage unavailable ({}), falling back to memory", e);
            Rc::new(MemoryStore::new())
        }
    }
}
