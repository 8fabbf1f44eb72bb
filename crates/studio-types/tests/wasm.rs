//! WASM-target tests for studio-types.
//!
//! Mirrors a subset of the native unit tests under wasm32-unknown-unknown
//! via `wasm-pack test --node`. Asset ids and timestamps come from
//! `uuid`/`chrono`, whose browser backends only exist on this target.

use wasm_bindgen_test::*;

use studio_types::account::*;
use studio_types::asset::*;
use studio_types::config::*;
use studio_types::studio::*;

#[wasm_bindgen_test]
fn asset_new_has_id_and_timestamp() {
    let asset = Asset::new(AssetKind::Image, "data:image/png;base64,AA==", "p");
    assert_eq!(asset.id().len(), 36);
    assert!(asset.timestamp() > 0);
}

#[wasm_bindgen_test]
fn asset_ids_unique() {
    let a = Asset::new(AssetKind::Anime, "u", "p");
    let b = Asset::new(AssetKind::Anime, "u", "p");
    assert_ne!(a.id(), b.id());
}

#[wasm_bindgen_test]
fn account_json_shape() {
    let json = serde_json::to_string(&Account::new("Ava", 100)).unwrap();
    assert_eq!(json, r#"{"name":"Ava","credits":100}"#);
}

#[wasm_bindgen_test]
fn studio_prompt_expansion() {
    let p = Studio::Realistic.expand_prompt("an old fisherman", None);
    assert!(p.ends_with(": an old fisherman"));
}

#[wasm_bindgen_test]
fn config_defaults() {
    let config = StudioConfig::default();
    assert_eq!(config.ledger.starting_credits, DEFAULT_STARTING_CREDITS);
    assert_eq!(config.archive.capacity, DEFAULT_ARCHIVE_CAPACITY);
}
