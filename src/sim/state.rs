//! Game state and stage construction
//!
//! Everything the frame loop mutates lives in one [`GameState`].

use glam::Vec2;

use super::collision::Aabb;
use super::entity::{Entity, EntityId, EntityStore, Role};
use super::physics::PlatformerPhysics;
use super::sprite::Sprite;
use crate::assets::{AssetError, AssetRegistry, names};
use crate::consts::{GOAL_RIGHT_OFFSET, GOAL_TOP_OFFSET, PLATFORM_RIGHT_OFFSET};
use crate::settings::Settings;

/// Sprite sizes resolved once at setup, so nothing after setup can hit a
/// missing asset
#[derive(Debug, Clone, Copy)]
struct StageSizes {
    floor: Vec2,
    goal: Vec2,
    platform: Vec2,
    player: Vec2,
    placed_box: Vec2,
    banner: Vec2,
}

impl StageSizes {
    fn resolve(assets: &AssetRegistry) -> Result<Self, AssetError> {
        Ok(Self {
            floor: assets.size(names::FLOOR)?,
            goal: assets.size(names::GOAL)?,
            platform: assets.size(names::PLATFORM)?,
            player: assets.size(names::PLAYER)?,
            placed_box: assets.size(names::BOX)?,
            banner: assets.size(names::VICTORY)?,
        })
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    settings: Settings,
    sizes: StageSizes,
    physics: PlatformerPhysics,
    /// Every sprite on stage, in draw order
    pub entities: EntityStore,
    floor: EntityId,
    goal: EntityId,
    player: EntityId,
    /// Set when the player reaches the goal; cleared only by [`GameState::reset`]
    pub game_won: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Build the stage and spawn the player. Fails if a stage sprite is
    /// missing from `assets`.
    pub fn new(settings: Settings, assets: &AssetRegistry) -> Result<Self, AssetError> {
        let sizes = StageSizes::resolve(assets)?;
        let physics = PlatformerPhysics::new(settings.gravity);
        let mut state = Self {
            settings,
            sizes,
            physics,
            entities: EntityStore::new(),
            floor: 0,
            goal: 0,
            player: 0,
            game_won: false,
            time_ticks: 0,
        };
        state.setup();
        Ok(state)
    }

    /// Restart: rebuild the stage, respawn the player, clear boxes and the win flag
    pub fn reset(&mut self) {
        self.setup();
    }

    fn setup(&mut self) {
        self.entities.clear();
        self.game_won = false;
        self.time_ticks = 0;

        self.set_stage();

        let mut player = Sprite::new(names::PLAYER, self.sizes.player);
        player.set_left(self.settings.spawn_left);
        player.set_bottom(self.floor().top() + self.settings.spawn_floor_gap);
        self.player = self.entities.push(Role::Player, player);

        log::info!(
            "Stage ready: {} entities, player spawned at {:?}",
            self.entities.len(),
            self.player().center
        );
    }

    /// Floor, goal flag and the elevated platform under the goal
    fn set_stage(&mut self) {
        let width = self.settings.screen_width;
        let height = self.settings.screen_height;

        let floor = Sprite::new(names::FLOOR, self.sizes.floor).at(Vec2::new(width / 2.0, 0.0));
        self.floor = self.entities.push(Role::Floor, floor);

        let mut goal = Sprite::new(names::GOAL, self.sizes.goal);
        goal.center.x = width - GOAL_RIGHT_OFFSET;
        goal.set_bottom(height - GOAL_TOP_OFFSET);
        let goal_bottom = goal.bottom();
        self.goal = self.entities.push(Role::Goal, goal);

        let mut platform = Sprite::new(names::PLATFORM, self.sizes.platform);
        platform.set_left(width - PLATFORM_RIGHT_OFFSET);
        platform.set_top(goal_bottom);
        self.entities.push(Role::Platform, platform);
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn physics(&self) -> &PlatformerPhysics {
        &self.physics
    }

    pub fn player(&self) -> &Sprite {
        &self.entities[self.player]
    }

    pub fn player_mut(&mut self) -> &mut Sprite {
        &mut self.entities[self.player]
    }

    pub fn goal(&self) -> &Sprite {
        &self.entities[self.goal]
    }

    pub fn floor(&self) -> &Sprite {
        &self.entities[self.floor]
    }

    /// Where the player respawns: (left, bottom)
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(
            self.settings.spawn_left,
            self.floor().top() + self.settings.spawn_floor_gap,
        )
    }

    /// Teleport the player back to spawn. Velocity is kept.
    pub fn reset_player(&mut self) {
        let spawn = self.spawn_point();
        let player = self.player_mut();
        player.set_left(spawn.x);
        player.set_bottom(spawn.y);
    }

    /// Current solid set for the physics integrator
    pub fn walls(&self) -> Vec<Aabb> {
        self.entities.solid_bounds()
    }

    /// Whether the player stands on (or just above) a wall
    pub fn can_jump(&self) -> bool {
        self.physics.can_jump(self.player(), &self.walls())
    }

    pub fn box_count(&self) -> usize {
        self.entities.boxes().count()
    }

    /// Everything to draw this frame, bottom layer first
    pub fn render_list(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Place a box centered at `center`.
    ///
    /// The player is sent back to spawn whether or not the box is accepted.
    /// The box is accepted only if its left edge is strictly right of the
    /// player's right edge at spawn. Returns whether the box was placed.
    pub fn place_box(&mut self, center: Vec2) -> bool {
        let new_box = Sprite::new(names::BOX, self.sizes.placed_box).at(center);

        self.reset_player();

        if new_box.left() > self.player().right() {
            let id = self.entities.push(Role::Box, new_box);
            log::debug!("Placed box {id} at {center:?} ({} boxes)", self.box_count());
            true
        } else {
            log::debug!("Rejected box at {center:?}: overlaps spawn");
            false
        }
    }

    /// Remove the most recently appended entity and respawn the player.
    ///
    /// No-op when no box has been placed. The removed entity is whatever was
    /// appended last, which is the newest box unless something else was
    /// appended after it.
    pub fn undo_last(&mut self) -> bool {
        if self.box_count() == 0 {
            return false;
        }
        match self.entities.pop_removable() {
            Some(removed) => {
                log::debug!("Undo removed {:?} {}", removed.role, removed.id);
                self.reset_player();
                true
            }
            None => false,
        }
    }

    /// Mark the game won and show the victory banner
    pub(crate) fn win(&mut self) {
        self.game_won = true;
        self.player_mut().velocity.x = 0.0;
        let banner = Sprite::new(names::VICTORY, self.sizes.banner).at(self.settings.screen_center());
        self.entities.push(Role::Banner, banner);
        log::info!("Goal reached after {} ticks", self.time_ticks);
    }
}
