//! Asset manifest
//!
//! Sprite image dimensions keyed by file name, read from
//! `box_sprites/manifest.json` when present.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AssetError, names};

/// Every sprite image the game draws, loaded from JSON or taken from
/// [`AssetManifest::builtin`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Directory the image paths are relative to
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Image name → pixel dimensions
    pub sprites: HashMap<String, SpriteImage>,
}

/// Pixel dimensions of a sprite image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteImage {
    pub width: u32,
    pub height: u32,
}

impl SpriteImage {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

fn default_base_path() -> String {
    "box_sprites".to_string()
}

impl AssetManifest {
    /// Manifest file name inside the sprite directory
    pub const FILE_NAME: &'static str = "manifest.json";

    /// Parse a manifest from a JSON string
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a manifest file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let manifest = Self::from_json(&json)?;
        log::info!("Loaded {} sprites from {}", manifest.sprites.len(), path.display());
        Ok(manifest)
    }

    /// Dimensions of the stock `box_sprites/` image set
    pub fn builtin() -> Self {
        let sprites = [
            (names::PLAYER, SpriteImage::new(64, 64)),
            (names::BOX, SpriteImage::new(64, 64)),
            (names::FLOOR, SpriteImage::new(1600, 128)),
            (names::GOAL, SpriteImage::new(64, 128)),
            (names::PLATFORM, SpriteImage::new(400, 32)),
            (names::VICTORY, SpriteImage::new(600, 120)),
        ]
        .into_iter()
        .map(|(name, image)| (name.to_string(), image))
        .collect();

        Self {
            base_path: default_base_path(),
            sprites,
        }
    }

}
