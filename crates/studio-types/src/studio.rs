//! Catalog of the themed studios and how each one expands a user prompt.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::asset::AssetKind;
use crate::error::StudioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Studio {
    /// General image synthesis with optional heritage styling
    Image,
    Anime,
    /// Photorealistic portraits
    Realistic,
    Thumbnail,
    /// Freeform, no house style
    Wish,
}

impl Studio {
    pub fn all() -> &'static [Studio] {
        &[
            Studio::Image,
            Studio::Anime,
            Studio::Realistic,
            Studio::Thumbnail,
            Studio::Wish,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            Studio::Image => "Vision Engine",
            Studio::Anime => "Anime Studio",
            Studio::Realistic => "Super Realism",
            Studio::Thumbnail => "Thumbnail Studio",
            Studio::Wish => "Infinite Wish",
        }
    }

    pub fn kind(&self) -> AssetKind {
        match self {
            Studio::Image => AssetKind::Image,
            Studio::Anime => AssetKind::Anime,
            Studio::Realistic => AssetKind::Realistic,
            Studio::Thumbnail => AssetKind::Thumbnail,
            Studio::Wish => AssetKind::Wish,
        }
    }

    pub fn default_aspect_ratio(&self) -> AspectRatio {
        match self {
            Studio::Thumbnail => AspectRatio::Widescreen,
            _ => AspectRatio::Square,
        }
    }

    /// Only the general image studio lets the caller pick the frame.
    pub fn aspect_ratio_for(&self, requested: Option<AspectRatio>) -> AspectRatio {
        match (self, requested) {
            (Studio::Image, Some(ratio)) => ratio,
            _ => self.default_aspect_ratio(),
        }
    }

    /// Whether one request may produce several images.
    pub fn supports_quantity(&self) -> bool {
        matches!(self, Studio::Image | Studio::Realistic)
    }

    /// Build the full prompt text sent to the model and stored on the asset.
    ///
    /// `modifier` is the studio-specific knob: heritage style for `Image`,
    /// mood for `Anime`, language for `Thumbnail`. Other studios ignore it.
    pub fn expand_prompt(&self, prompt: &str, modifier: Option<&str>) -> String {
        let modifier = modifier.map(str::trim).filter(|m| !m.is_empty());
        match self {
            Studio::Image => match modifier {
                None | Some("Classic") => prompt.to_string(),
                Some(style) => {
                    format!("{}, styled with heavy {} traditional motifs", prompt, style)
                }
            },
            Studio::Anime => format!(
                "High quality anime-styled masterpiece, {} mood, professional aesthetic: {}",
                modifier.unwrap_or(DEFAULT_ANIME_MOOD),
                prompt
            ),
            Studio::Realistic => format!(
                "Masterpiece hyper-realistic photography, ultra-detailed textures, \
                 8k professional color grading: {}",
                prompt
            ),
            Studio::Thumbnail => format!(
                "High-conversion professional YouTube thumbnail, 16:9 cinematic aspect ratio, \
                 vibrant viral aesthetic, language {}: {}",
                modifier.unwrap_or(DEFAULT_THUMBNAIL_LANGUAGE),
                prompt
            ),
            Studio::Wish => format!(
                "Masterpiece high-end art, unconventional creative synthesis: {}",
                prompt
            ),
        }
    }
}

const DEFAULT_ANIME_MOOD: &str = "Vibrant";
const DEFAULT_THUMBNAIL_LANGUAGE: &str = "Telugu";

/// Output frame requested from the generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AspectRatio {
    Square,
    Portrait,
    Landscape,
    Tall,
    Widescreen,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait => "3:4",
            AspectRatio::Landscape => "4:3",
            AspectRatio::Tall => "9:16",
            AspectRatio::Widescreen => "16:9",
        }
    }

    pub fn all() -> &'static [AspectRatio] {
        &[
            AspectRatio::Square,
            AspectRatio::Portrait,
            AspectRatio::Landscape,
            AspectRatio::Tall,
            AspectRatio::Widescreen,
        ]
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AspectRatio::all()
            .iter()
            .copied()
            .find(|r| r.as_str() == s.trim())
            .ok_or_else(|| StudioError::Config(format!("Unknown aspect ratio: {}", s)))
    }
}

impl TryFrom<String> for AspectRatio {
    type Error = StudioError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<AspectRatio> for String {
    fn from(r: AspectRatio) -> Self {
        r.as_str().to_string()
    }
}
