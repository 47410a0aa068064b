//! Simulation module
//!
//! All gameplay logic lives here:
//! - Fixed per-frame tick, no wall-clock time
//! - Stable iteration order (insertion order of the entity store)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod input;
pub mod physics;
pub mod sprite;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use entity::{Entity, EntityId, EntityStore, Role};
pub use input::{Action, Control, InputEvent, Key, handle_event, key_press, key_release};
pub use physics::{Contacts, PlatformerPhysics};
pub use sprite::Sprite;
pub use state::GameState;
pub use tick::tick;
