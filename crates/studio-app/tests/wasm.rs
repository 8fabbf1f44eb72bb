//! WASM-target tests for studio-app.
//!
//! Drives `StudioHandle` the way the JS view does, under
//! `wasm-pack test --node` with the memory backend.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

use studio_app::StudioHandle;

fn handle() -> StudioHandle {
    StudioHandle::new(Some(r#"{"storage":{"backend":"Memory"}}"#.to_string())).unwrap()
}

#[wasm_bindgen_test]
fn handle_session_and_debit() {
    let studio = handle();
    assert!(studio.current_session().unwrap().is_null());
    assert!(!studio.debit(10));

    studio.sign_in("Ava", "pw").unwrap();
    assert_eq!(studio.credits(), Some(100));
    assert!(studio.debit(10));
    assert!(!studio.debit(95));
    assert_eq!(studio.credits(), Some(90));

    studio.end_session();
    assert_eq!(studio.credits(), None);
    studio.establish_session("Ava").unwrap();
    assert_eq!(studio.credits(), Some(90));
}

#[wasm_bindgen_test]
fn handle_rejects_blank_name() {
    let studio = handle();
    assert!(studio.sign_in("", "pw").is_err());
    assert!(studio.sign_in("Ava", " ").is_err());
}

#[wasm_bindgen_test]
fn handle_record_and_list_assets() {
    let studio = handle();
    studio.record_asset("ANIME", "https://img/1.png", "a fox").unwrap();
    studio.record_asset("WISH", "https://img/2.png", "a wish").unwrap();
    assert!(studio.record_asset("VIDEO", "u", "p").is_err());

    let all = js_sys::Array::from(&studio.assets(None).unwrap());
    assert_eq!(all.length(), 2);
    let anime = js_sys::Array::from(&studio.assets(Some("ANIME".to_string())).unwrap());
    assert_eq!(anime.length(), 1);
}

#[wasm_bindgen_test]
async fn handle_generate_with_js_provider() {
    let studio = handle();
    studio.establish_session("Ava").unwrap();

    let provider = js_sys::Function::new_with_args(
        "prompt, ratio",
        "return Promise.resolve({ mimeType: 'image/png', data: 'AAAA' });",
    );
    let request = js_sys::JSON::parse(r#"{"studio":"Anime","prompt":"a fox"}"#).unwrap();

    let outcome = wasm_bindgen_futures::JsFuture::from(studio.generate(request, provider))
        .await
        .unwrap();
    let spent = js_sys::Reflect::get(&outcome, &JsValue::from_str("creditsSpent")).unwrap();
    assert_eq!(spent.as_f64(), Some(10.0));
    assert_eq!(studio.credits(), Some(90));
}

#[wasm_bindgen_test]
async fn handle_generate_provider_failure_keeps_debit() {
    let studio = handle();
    studio.establish_session("Ava").unwrap();

    let provider = js_sys::Function::new_with_args("", "throw new Error('quota');");
    let request = js_sys::JSON::parse(r#"{"studio":"Wish","prompt":"a dream"}"#).unwrap();

    let result = wasm_bindgen_futures::JsFuture::from(studio.generate(request, provider)).await;
    assert!(result.is_err());
    assert_eq!(studio.credits(), Some(90));
}
