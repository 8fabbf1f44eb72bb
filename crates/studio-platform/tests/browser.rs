//! Browser-only tests for the localStorage backend.
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use std::rc::Rc;

use studio_core::context::StudioContext;
use studio_core::ports::KvStore;
use studio_platform::storage::{auto_detect_store, LocalStorageStore};
use studio_types::config::StudioConfig;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_store() -> LocalStorageStore {
    let store = LocalStorageStore::open().unwrap();
    for key in store.keys_with_prefix("").unwrap() {
        store.remove(&key).unwrap();
    }
    store
}

#[wasm_bindgen_test]
fn local_storage_opens() {
    assert_eq!(fresh_store().backend_name(), "localstorage");
}

#[wasm_bindgen_test]
fn auto_detect_prefers_local_storage() {
    assert_eq!(auto_detect_store().backend_name(), "localstorage");
}

#[wasm_bindgen_test]
fn local_storage_set_get_remove() {
    let store = fresh_store();
    assert!(store.get("session").unwrap().is_none());
    store.set("session", r#"{"name":"Ava","credits":100}"#).unwrap();
    assert_eq!(
        store.get("session").unwrap().as_deref(),
        Some(r#"{"name":"Ava","credits":100}"#)
    );
    store.remove("session").unwrap();
    assert!(store.get("session").unwrap().is_none());
}

#[wasm_bindgen_test]
fn local_storage_keys_with_prefix() {
    let store = fresh_store();
    store.set("credits:Ava", "90").unwrap();
    store.set("credits:Bo", "100").unwrap();
    store.set("archive", "[]").unwrap();
    let mut keys = store.keys_with_prefix("credits:").unwrap();
    keys.sort();
    assert_eq!(keys, vec!["credits:Ava", "credits:Bo"]);
}

#[wasm_bindgen_test]
fn context_survives_reload_on_local_storage() {
    let store: Rc<dyn KvStore> = Rc::new(fresh_store());
    let config = StudioConfig::default();
    {
        let ctx = StudioContext::open(store.clone(), &config);
        ctx.establish_session("Ava").unwrap();
        assert!(ctx.debit(10));
    }
    let reopened: Rc<dyn KvStore> = Rc::new(LocalStorageStore::open().unwrap());
    let ctx = StudioContext::open(reopened, &config);
    assert_eq!(ctx.credits(), Some(90));
}
