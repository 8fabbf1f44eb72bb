//! Image generation port backed by a JS callback.
//!
//! The view layer owns the provider SDK; it hands over a function
//! `(prompt, aspectRatio) => Promise<{ mimeType, data } | { url } | null>`.

use async_trait::async_trait;
use gloo_utils::format::JsValueSerdeExt;
use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use studio_core::ports::ImageGenerator;
use studio_types::{asset::ImagePayload, studio::AspectRatio, Result, StudioError};

pub struct JsImageGenerator {
    provider: js_sys::Function,
}

impl JsImageGenerator {
    pub fn new(provider: js_sys::Function) -> Self {
        Self { provider }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsPayload {
    Inline {
        #[serde(rename = "mimeType")]
        mime_type: String,
        data: String,
    },
    Remote {
        url: String,
    },
}

impl From<JsPayload> for ImagePayload {
    fn from(p: JsPayload) -> Self {
        match p {
            JsPayload::Inline { mime_type, data } => ImagePayload::Inline { mime_type, data },
            JsPayload::Remote { url } => ImagePayload::Remote { url },
        }
    }
}

#[async_trait(?Send)]
impl ImageGenerator for JsImageGenerator {
    async fn generate(&self, prompt: &str, aspect_ratio: AspectRatio) -> Result<Option<ImagePayload>> {
        let returned = self
            .provider
            .call2(
                &JsValue::NULL,
                &JsValue::from_str(prompt),
                &JsValue::from_str(aspect_ratio.as_str()),
            )
            .map_err(|e| StudioError::Generation(describe_js_error(&e)))?;

        // Accept plain values as well as promises
        let resolved = JsFuture::from(js_sys::Promise::resolve(&returned))
            .await
            .map_err(|e| StudioError::Generation(describe_js_error(&e)))?;

        if resolved.is_null() || resolved.is_undefined() {
            return Ok(None);
        }

        let payload: JsPayload = resolved
            .into_serde()
            .map_err(|e| StudioError::JsInterop(format!("Unexpected image payload: {}", e)))?;
        Ok(Some(payload.into()))
    }
}

pub fn describe_js_error(e: &JsValue) -> String {
    if let Some(err) = e.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}
