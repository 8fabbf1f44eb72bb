use serde::{Deserialize, Serialize};

use crate::error::StudioError;

/// Top-level studio configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub ledger: LedgerConfig,
    pub archive: ArchiveConfig,
    pub generation: GenerationConfig,
    pub storage: StorageConfig,
}

impl StudioConfig {
    /// Parse a (possibly partial) JSON config; missing fields take defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let mut config: StudioConfig = serde_json::from_str(json)
            .map_err(|e| StudioError::Config(e.to_string()))?;
        config.archive.capacity = config.archive.capacity.max(1);
        Ok(config)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Balance granted the first time an identity signs in, ever
    pub starting_credits: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            starting_credits: DEFAULT_STARTING_CREDITS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Maximum number of assets kept, newest first
    pub capacity: usize,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_ARCHIVE_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub cost_per_image: u32,
    pub max_quantity: u32,
    pub model: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            cost_per_image: 10,
            max_quantity: 4,
            model: "gemini-2.5-flash-image".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackendType,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageBackendType {
    /// Auto-detect best available backend
    #[default]
    Auto,
    Memory,
    LocalStorage,
}

pub const DEFAULT_STARTING_CREDITS: u32 = 100;
pub const DEFAULT_ARCHIVE_CAPACITY: usize = 12;
