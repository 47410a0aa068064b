//! Render boundary
//!
//! The core hands the renderer an ordered list of sprites each frame. Later
//! entries draw on top. The native binary prints frames as JSON; a GPU
//! frontend links the library and uploads [`instance::build_instances`]
//! output with the [`SpriteInstance::desc`] layout.

pub mod instance;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GameState, Role};

pub use instance::{SpriteInstance, build_instances};

/// One sprite to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSprite {
    pub role: Role,
    pub asset: String,
    pub center: Vec2,
    pub size: Vec2,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub title: String,
    pub tick: u64,
    pub background: [f32; 4],
    pub game_won: bool,
    pub sprites: Vec<RenderSprite>,
}

impl RenderFrame {
    /// Snapshot the draw list of `state`
    pub fn capture(state: &GameState) -> Self {
        let sprites = state
            .render_list()
            .map(|entity| RenderSprite {
                role: entity.role,
                asset: entity.sprite.asset.clone(),
                center: entity.sprite.center,
                size: entity.sprite.size,
            })
            .collect();

        Self {
            title: state.settings().title.clone(),
            tick: state.time_ticks,
            background: state.settings().background,
            game_won: state.game_won,
            sprites,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::test_support::new_state;

    #[test]
    fn test_capture_keeps_draw_order() {
        let mut state = new_state();
        state.place_box(Vec2::new(200.0, 48.0));
        let frame = RenderFrame::capture(&state);

        let roles: Vec<Role> = frame.sprites.iter().map(|s| s.role).collect();
        assert_eq!(
            roles,
            vec![Role::Floor, Role::Goal, Role::Platform, Role::Player, Role::Box]
        );
        assert_eq!(frame.sprites[4].asset, "other_box.png");
        assert_eq!(frame.title, "Box Game");
        assert!(!frame.game_won);
    }

    #[test]
    fn test_frame_json() {
        let state = new_state();
        let frame = RenderFrame::capture(&state);
        let json = frame.to_json().unwrap();
        assert!(json.contains("\"asset\":\"player_box.png\""));
        let back: RenderFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frame);
    }
}
