use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StudioError;

/// Category tag of a generated asset; one per studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetKind {
    Image,
    Anime,
    Realistic,
    Thumbnail,
    Wish,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Image => "IMAGE",
            AssetKind::Anime => "ANIME",
            AssetKind::Realistic => "REALISTIC",
            AssetKind::Thumbnail => "THUMBNAIL",
            AssetKind::Wish => "WISH",
        }
    }
}

impl FromStr for AssetKind {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IMAGE" => Ok(AssetKind::Image),
            "ANIME" => Ok(AssetKind::Anime),
            "REALISTIC" => Ok(AssetKind::Realistic),
            "THUMBNAIL" => Ok(AssetKind::Thumbnail),
            "WISH" => Ok(AssetKind::Wish),
            other => Err(StudioError::Serialization(format!("Unknown asset kind: {}", other))),
        }
    }
}

/// One recorded generation result. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    id: String,
    #[serde(rename = "type")]
    kind: AssetKind,
    url: String,
    prompt: String,
    /// Creation instant, Unix milliseconds.
    timestamp: i64,
}

impl Asset {
    /// Create an asset with a fresh id stamped with the current time.
    pub fn new(kind: AssetKind, url: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            url: url.into(),
            prompt: prompt.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Rebuild an asset from known parts (imports, fixtures).
    pub fn from_parts(
        id: impl Into<String>,
        kind: AssetKind,
        url: impl Into<String>,
        prompt: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            url: url.into(),
            prompt: prompt.into(),
            timestamp,
        }
    }

    pub fn from_payload(kind: AssetKind, payload: &ImagePayload, prompt: impl Into<String>) -> Self {
        Self::new(kind, payload.to_url(), prompt)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

/// Image data returned by the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ImagePayload {
    /// Base64 text plus its mime type
    Inline { mime_type: String, data: String },
    Remote { url: String },
}

impl ImagePayload {
    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        ImagePayload::Inline {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// URL usable as an image source: a data URI for inline payloads.
    pub fn to_url(&self) -> String {
        match self {
            ImagePayload::Inline { mime_type, data } => {
                format!("data:{};base64,{}", mime_type, data)
            }
            ImagePayload::Remote { url } => url.clone(),
        }
    }
}
