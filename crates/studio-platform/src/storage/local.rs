//! `window.localStorage` backend.
//! Persistent across page reloads, synchronous, text values only.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use studio_core::ports::KvStore;
use studio_types::{Result, StudioError};

const PROBE_KEY: &str = "__studio_probe__";

pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Open localStorage and confirm it accepts writes (private browsing
    /// modes expose the object but throw on `setItem`).
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StudioError::Storage("No window object".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(js_err)?
            .ok_or_else(|| StudioError::Storage("localStorage not available".to_string()))?;

        storage.set_item(PROBE_KEY, "1").map_err(js_err)?;
        storage.remove_item(PROBE_KEY).map_err(js_err)?;

        Ok(Self { storage })
    }
}

impl KvStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(js_err)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(js_err)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(js_err)
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let len = self.storage.length().map_err(js_err)?;
        let mut keys = Vec::new();
        for i in 0..len {
            if let Some(key) = self.storage.key(i).map_err(js_err)? {
                if key.starts_with(prefix) {
                    keys.push(key);
                }
            }
        }
        Ok(keys)
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}

fn js_err(e: JsValue) -> StudioError {
    StudioError::Storage(format!("{:?}", e))
}
