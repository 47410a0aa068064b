//! Keyboard input: key identifiers, actions, and the press/release handlers

use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Physical keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    A,
    D,
    W,
    S,
    R,
    Q,
}

/// What a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    PlaceBox,
    Undo,
    Quit,
}

impl Key {
    /// Parse a key name. Accepts arrow names with or without an `Arrow`
    /// prefix and single letters, case-insensitively. Unknown names give `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name.trim().to_ascii_lowercase().as_str() {
            "left" | "arrowleft" => Key::Left,
            "right" | "arrowright" => Key::Right,
            "up" | "arrowup" => Key::Up,
            "down" | "arrowdown" => Key::Down,
            "a" => Key::A,
            "d" => Key::D,
            "w" => Key::W,
            "s" => Key::S,
            "r" => Key::R,
            "q" => Key::Q,
            _ => return None,
        };
        Some(key)
    }

    pub fn action(self) -> Action {
        match self {
            Key::Left | Key::A => Action::MoveLeft,
            Key::Right | Key::D => Action::MoveRight,
            Key::Up | Key::W => Action::Jump,
            Key::Down | Key::S => Action::PlaceBox,
            Key::R => Action::Undo,
            Key::Q => Action::Quit,
        }
    }
}

/// A discrete key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
}

/// Whether the frame loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Dispatch one input event
pub fn handle_event(state: &mut GameState, event: InputEvent) -> Control {
    match event {
        InputEvent::KeyDown(key) => key_press(state, key),
        InputEvent::KeyUp(key) => {
            key_release(state, key);
            Control::Continue
        }
    }
}

/// Handle a key press.
///
/// Movement, jump, box and undo keys do nothing once the game is won.
/// Quit always goes through.
pub fn key_press(state: &mut GameState, key: Key) -> Control {
    let action = key.action();

    if !state.game_won {
        let move_speed = state.settings().move_speed;
        match action {
            Action::MoveLeft => state.player_mut().velocity.x = -move_speed,
            Action::MoveRight => state.player_mut().velocity.x = move_speed,
            Action::Jump => {
                if state.can_jump() {
                    let jump_speed = state.settings().jump_speed;
                    state.player_mut().velocity.y = jump_speed;
                }
            }
            Action::PlaceBox => {
                let player = state.player();
                if player.velocity.y == 0.0 && player.bottom() < state.settings().screen_height {
                    let center = player.center;
                    state.place_box(center);
                }
            }
            Action::Undo => {
                state.undo_last();
            }
            Action::Quit => {}
        }
    }

    if action == Action::Quit {
        log::info!("Quit requested");
        return Control::Quit;
    }
    Control::Continue
}

/// Handle a key release. Releasing either horizontal key stops the player,
/// even if the opposite key is still held.
pub fn key_release(state: &mut GameState, key: Key) {
    if matches!(key.action(), Action::MoveLeft | Action::MoveRight) {
        state.player_mut().velocity.x = 0.0;
    }
}
