//! Sprite assets
//!
//! The core never touches image data. It only needs each sprite's on-screen
//! size, which the manifest records as image dimensions.

pub mod manifest;
pub mod registry;

pub use manifest::{AssetManifest, SpriteImage};
pub use registry::AssetRegistry;

/// Asset names used by the stage
pub mod names {
    pub const PLAYER: &str = "player_box.png";
    pub const BOX: &str = "other_box.png";
    pub const FLOOR: &str = "floor.png";
    pub const GOAL: &str = "goal_flag.png";
    pub const PLATFORM: &str = "platform.png";
    pub const VICTORY: &str = "victory_text.png";
}

/// Asset loading failures. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read asset manifest {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed asset manifest: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("asset `{0}` is not in the manifest")]
    Missing(String),
    #[error("asset `{name}` has invalid size {width}x{height}")]
    InvalidSize { name: String, width: u32, height: u32 },
}
