//! Box Game - a small box-placing platformer
//!
//! Core modules:
//! - `sim`: Game state, input handling, platformer physics and win detection
//! - `assets`: Sprite manifest and scaled sprite sizes
//! - `renderer`: Render-ready frames and GPU instance data
//! - `platform`: Frame driver and input queue
//! - `settings`: Runtime configuration

pub mod assets;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{AssetError, AssetManifest, AssetRegistry};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Window dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    pub const SCREEN_TITLE: &str = "Box Game";

    /// Scale applied to every sprite image
    pub const SCALING: f32 = 0.5;

    /// Downward acceleration, units/tick²
    pub const GRAVITY: f32 = 1.0;
    /// Upward velocity applied on jump, units/tick
    pub const PLAYER_JUMP_SPEED: f32 = 10.0;
    /// Horizontal velocity while a movement key is held, units/tick
    pub const PLAYER_MOVE_SPEED: f32 = 3.0;

    /// Spawn point: player left edge, and gap above the floor top
    pub const SPAWN_LEFT: f32 = 10.0;
    pub const SPAWN_FLOOR_GAP: f32 = 5.0;

    /// Goal flag: center distance from the right edge, bottom distance from the top
    pub const GOAL_RIGHT_OFFSET: f32 = 100.0;
    pub const GOAL_TOP_OFFSET: f32 = 250.0;
    /// Platform left edge distance from the right edge
    pub const PLATFORM_RIGHT_OFFSET: f32 = 200.0;

    /// How far below the player `can_jump` probes for ground
    pub const JUMP_PROBE_DISTANCE: f32 = 5.0;

    /// Spanish gray
    pub const BACKGROUND_COLOR: [f32; 4] = [0.596, 0.596, 0.596, 1.0];
}
