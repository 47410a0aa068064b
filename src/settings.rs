//! Game settings
//!
//! Defaults come from [`crate::consts`]. A `box_game.json` file in the working
//! directory overrides any subset of fields.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while reading a settings file
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    /// Window title
    pub title: String,
    /// Stage width; the player is clamped to [0, screen_width]
    pub screen_width: f32,
    /// Stage height
    pub screen_height: f32,
    /// Clear color behind all sprites (RGBA, 0-1)
    pub background: [f32; 4],

    // === Sprites ===
    /// Scale applied to every sprite image
    pub scaling: f32,

    // === Physics ===
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Vertical velocity set by a jump
    pub jump_speed: f32,
    /// Horizontal velocity while a movement key is held
    pub move_speed: f32,

    // === Spawn ===
    /// Player left edge at spawn
    pub spawn_left: f32,
    /// Gap between the floor top and the player bottom at spawn
    pub spawn_floor_gap: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: SCREEN_TITLE.to_string(),
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            background: BACKGROUND_COLOR,

            scaling: SCALING,

            gravity: GRAVITY,
            jump_speed: PLAYER_JUMP_SPEED,
            move_speed: PLAYER_MOVE_SPEED,

            spawn_left: SPAWN_LEFT,
            spawn_floor_gap: SPAWN_FLOOR_GAP,
        }
    }
}

impl Settings {
    /// Settings file looked up in the working directory
    pub const FILE_NAME: &'static str = "box_game.json";

    /// Parse settings from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from [`Self::FILE_NAME`], falling back to defaults on error
    pub fn load() -> Self {
        match Self::load_from(Self::FILE_NAME) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    /// Stage size as a vector
    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Stage center, where the victory banner goes
    pub fn screen_center(&self) -> Vec2 {
        self.screen_size() / 2.0
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("scaling", self.scaling),
            ("gravity", self.gravity),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("must be positive, got {value}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let settings = Settings::default();
        assert_eq!(settings.title, "Box Game");
        assert_eq!(settings.screen_width, 800.0);
        assert_eq!(settings.screen_height, 600.0);
        assert_eq!(settings.scaling, 0.5);
        assert_eq!(settings.gravity, 1.0);
        assert_eq!(settings.jump_speed, 10.0);
        assert_eq!(settings.screen_center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "gravity": 2.0, "title": "Boxes" }"#).unwrap();
        assert_eq!(settings.gravity, 2.0);
        assert_eq!(settings.title, "Boxes");
        assert_eq!(settings.jump_speed, PLAYER_JUMP_SPEED);
        assert_eq!(settings.screen_width, SCREEN_WIDTH);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Settings::from_json(r#"{ "screen_width": 0 }"#),
            Err(SettingsError::Invalid { field: "screen_width", .. })
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "gravity": -1 }"#),
            Err(SettingsError::Invalid { field: "gravity", .. })
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "gravity": 0.0 }"#),
            Err(SettingsError::Invalid { field: "gravity", .. })
        ));
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_default() {
        let settings = Settings::load_from("definitely/not/here/box_game.json").unwrap();
        assert_eq!(settings, Settings::default());
    }
}
