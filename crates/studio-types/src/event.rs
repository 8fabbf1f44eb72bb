use serde::{Deserialize, Serialize};

use crate::asset::AssetKind;
use crate::studio::Studio;

/// Events emitted by the studio context.
/// The view layer drains these to refresh balances and the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StudioEvent {
    SessionStarted { name: String, credits: u32 },

    SessionEnded { name: String },

    /// Balance of the active identity moved
    CreditsChanged { name: String, balance: u32 },

    DebitDeclined { amount: u32, reason: String },

    AssetRecorded { id: String, kind: AssetKind },

    /// Durable data was unreadable and replaced by a default
    StorageRecovered { key: String, detail: String },

    GenerationFailed { studio: Studio, message: String },
}
