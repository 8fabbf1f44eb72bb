//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `studio-core` (pure Rust).
//! Implementations live in `studio-platform` (browser adapters) or in the
//! host application. The core never imports platform code.

use async_trait::async_trait;
use studio_types::{asset::ImagePayload, studio::AspectRatio, Result};

// ─── Key/Value Store Port ────────────────────────────────────

/// Durable text blob store with synchronous reads and writes.
///
/// Synchronous on purpose: a debit must check and decrement without a
/// suspension point in between. No atomicity across keys is promised.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>>;

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Image Generation Port ───────────────────────────────────

/// External text-to-image service.
///
/// Returns `Ok(None)` when the service answered without an image.
#[async_trait(?Send)]
pub trait ImageGenerator {
    async fn generate(&self, prompt: &str, aspect_ratio: AspectRatio) -> Result<Option<ImagePayload>>;
}
