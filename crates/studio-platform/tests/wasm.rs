//! WASM-target tests for studio-platform (Node.js runtime).
//!
//! Tests MemoryStore under wasm32-unknown-unknown via
//! `wasm-pack test --node`.
//!
//! localStorage tests require a browser and live in browser.rs.

use wasm_bindgen_test::*;

use studio_core::ports::KvStore;
use studio_platform::storage::MemoryStore;

#[wasm_bindgen_test]
fn memory_store_backend_name() {
    assert_eq!(MemoryStore::new().backend_name(), "memory");
}

#[wasm_bindgen_test]
fn memory_store_set_and_get() {
    let store = MemoryStore::new();
    store.set("key1", "value1").unwrap();
    assert_eq!(store.get("key1").unwrap().as_deref(), Some("value1"));
}

#[wasm_bindgen_test]
fn memory_store_remove() {
    let store = MemoryStore::new();
    store.set("key", "val").unwrap();
    store.remove("key").unwrap();
    assert!(store.get("key").unwrap().is_none());
}

#[wasm_bindgen_test]
fn memory_store_keys_with_prefix() {
    let store = MemoryStore::new();
    store.set("prefix:a", "1").unwrap();
    store.set("prefix:b", "2").unwrap();
    store.set("other:c", "3").unwrap();
    let mut keys = store.keys_with_prefix("prefix:").unwrap();
    keys.sort();
    assert_eq!(keys, vec!["prefix:a", "prefix:b"]);
}
