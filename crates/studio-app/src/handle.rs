//! JS-facing handle over the studio context.
//!
//! Values cross the boundary as plain JS objects (serde via gloo-utils).
//! Expected outcomes (declined debit, no session) are return values;
//! only invalid input or interop failures reject.

use gloo_utils::format::JsValueSerdeExt;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use studio_core::context::StudioContext;
use studio_core::generation::{run_generation, GenerationOutcome, GenerationRequest};
use studio_core::ports::KvStore;
use studio_platform::storage::{auto_detect_store, open_store};
use studio_types::{
    asset::{Asset, AssetKind},
    config::{StorageBackendType, StudioConfig},
    studio::{AspectRatio, Studio},
    StudioError,
};

use crate::generator::JsImageGenerator;

pub(crate) const CONFIG_STORAGE_KEY: &str = "studio:config";

#[wasm_bindgen]
pub struct StudioHandle {
    ctx: StudioContext,
    config: StudioConfig,
}

#[wasm_bindgen]
impl StudioHandle {
    /// Open the studio. With `config_json` the given config is used and
    /// saved; without it the saved config (or the default) is used.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<StudioHandle, JsValue> {
        let (config, store) = match config_json {
            Some(json) => {
                let config = StudioConfig::from_json(&json).map_err(to_js)?;
                let store = open_store(config.storage.backend).map_err(to_js)?;
                save_config(store.as_ref(), &config);
                (config, store)
            }
            None => {
                let store = auto_detect_store();
                let config = restore_config(store.as_ref());
                let store = match config.storage.backend {
                    StorageBackendType::Auto => store,
                    backend => open_store(backend).map_err(to_js)?,
                };
                (config, store)
            }
        };

        log::info!(
            "Studio ready: backend={}, archive capacity={}",
            store.backend_name(),
            config.archive.capacity
        );
        let ctx = StudioContext::open(store, &config);
        Ok(Self { ctx, config })
    }

    #[wasm_bindgen(js_name = signIn)]
    pub fn sign_in(&self, name: &str, password: &str) -> Result<JsValue, JsValue> {
        let account = self.ctx.sign_in(name, password).map_err(to_js)?;
        to_value(&account)
    }

    #[wasm_bindgen(js_name = establishSession)]
    pub fn establish_session(&self, name: &str) -> Result<JsValue, JsValue> {
        let account = self.ctx.establish_session(name).map_err(to_js)?;
        to_value(&account)
    }

    /// The active account, or `null`.
    #[wasm_bindgen(js_name = currentSession)]
    pub fn current_session(&self) -> Result<JsValue, JsValue> {
        match self.ctx.current_session() {
            Some(account) => to_value(&account),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(js_name = endSession)]
    pub fn end_session(&self) {
        self.ctx.end_session();
    }

    pub fn debit(&self, amount: u32) -> bool {
        self.ctx.debit(amount)
    }

    pub fn credits(&self) -> Option<u32> {
        self.ctx.credits()
    }

    #[wasm_bindgen(js_name = costPerImage)]
    pub fn cost_per_image(&self) -> u32 {
        self.config.generation.cost_per_image
    }

    /// Record an asset produced outside `generate`; returns the stored record.
    #[wasm_bindgen(js_name = recordAsset)]
    pub fn record_asset(&self, kind: &str, url: &str, prompt: &str) -> Result<JsValue, JsValue> {
        let kind: AssetKind = kind.parse().map_err(to_js)?;
        let asset = Asset::new(kind, url, prompt);
        let value = to_value(&asset)?;
        self.ctx.record(asset);
        Ok(value)
    }

    /// Archive snapshot, newest first. `kind` narrows it to one category.
    pub fn assets(&self, kind: Option<String>) -> Result<JsValue, JsValue> {
        let assets = match kind {
            Some(kind) => {
                let kind: AssetKind = kind.parse().map_err(to_js)?;
                self.ctx.assets_of_kind(kind)
            }
            None => self.ctx.assets(),
        };
        to_value(&assets)
    }

    #[wasm_bindgen(js_name = clearArchive)]
    pub fn clear_archive(&self) {
        self.ctx.clear_archive();
    }

    #[wasm_bindgen(js_name = knownIdentities)]
    pub fn known_identities(&self) -> Result<JsValue, JsValue> {
        to_value(&self.ctx.known_identities())
    }

    /// Pending events for the view, oldest first.
    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&self) -> Result<JsValue, JsValue> {
        to_value(&self.ctx.events().drain())
    }

    /// Expanded prompt text a request would send, for previews.
    #[wasm_bindgen(js_name = expandPrompt)]
    pub fn expand_prompt(&self, request: JsValue) -> Result<String, JsValue> {
        let args: GenerateArgs = request
            .into_serde()
            .map_err(|e| to_js(StudioError::JsInterop(e.to_string())))?;
        Ok(args.into_request().expanded_prompt())
    }

    /// Run one studio request. `provider` performs the actual service call:
    /// `(prompt, aspectRatio) => Promise<{ mimeType, data } | { url } | null>`.
    ///
    /// Resolves to `{ assets, creditsSpent, interrupted }`. Credits spent
    /// before a provider failure are not refunded.
    pub fn generate(&self, request: JsValue, provider: js_sys::Function) -> js_sys::Promise {
        let ctx = self.ctx.clone();
        let config = self.config.generation.clone();
        future_to_promise(async move {
            let args: GenerateArgs = request
                .into_serde()
                .map_err(|e| to_js(StudioError::JsInterop(e.to_string())))?;
            let request = args.into_request();
            let generator = JsImageGenerator::new(provider);
            let outcome = run_generation(&ctx, &generator, &request, &config)
                .await
                .map_err(to_js)?;
            to_value(&OutcomeView::from(outcome))
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateArgs {
    studio: Studio,
    prompt: String,
    #[serde(default)]
    modifier: Option<String>,
    #[serde(default)]
    aspect_ratio: Option<AspectRatio>,
    #[serde(default)]
    quantity: Option<u32>,
}

impl GenerateArgs {
    pub(crate) fn into_request(self) -> GenerationRequest {
        GenerationRequest {
            studio: self.studio,
            prompt: self.prompt,
            modifier: self.modifier,
            aspect_ratio: self.aspect_ratio,
            quantity: self.quantity.unwrap_or(1),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OutcomeView {
    assets: Vec<Asset>,
    credits_spent: u32,
    interrupted: bool,
}

impl From<GenerationOutcome> for OutcomeView {
    fn from(o: GenerationOutcome) -> Self {
        Self {
            assets: o.assets,
            credits_spent: o.credits_spent,
            interrupted: o.interrupted,
        }
    }
}

pub(crate) fn restore_config(store: &dyn KvStore) -> StudioConfig {
    match store.get(CONFIG_STORAGE_KEY) {
        Ok(Some(json)) => match StudioConfig::from_json(&json) {
            Ok(config) => {
                log::info!("Config restored from storage");
                config
            }
            Err(e) => {
                log::warn!("Stored config unreadable ({}); using defaults", e);
                StudioConfig::default()
            }
        },
        Ok(None) => StudioConfig::default(),
        Err(e) => {
            log::warn!("Could not read config ({}); using defaults", e);
            StudioConfig::default()
        }
    }
}

pub(crate) fn save_config(store: &dyn KvStore, config: &StudioConfig) {
    let result = config
        .to_json()
        .and_then(|json| store.set(CONFIG_STORAGE_KEY, &json));
    match result {
        Ok(()) => log::info!("Config saved to storage"),
        Err(e) => log::warn!("Failed to save config: {}", e),
    }
}

fn to_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    JsValue::from_serde(value).map_err(|e| to_js(StudioError::from(e)))
}

fn to_js(e: StudioError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}
