//! Platformer physics integrator
//!
//! Gravity plus collision resolution of a single moving sprite against a set
//! of solid walls. The integrator holds no reference to the walls: callers pass
//! the current solid set on every call, so walls added or removed between
//! ticks are picked up without re-binding.

use glam::Vec2;

use super::collision::{Aabb, any_hit, hits};
use super::sprite::Sprite;
use crate::consts::JUMP_PROBE_DISTANCE;

/// Which sides of the player touched a wall during a step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    /// Landed on a wall while falling
    pub below: bool,
    /// Hit a wall while rising
    pub above: bool,
    /// Pushed back out of a wall horizontally
    pub side: bool,
}

/// Gravity + wall collision for one player sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformerPhysics {
    gravity: f32,
    jump_probe: f32,
}

impl PlatformerPhysics {
    pub fn new(gravity: f32) -> Self {
        Self {
            gravity,
            jump_probe: JUMP_PROBE_DISTANCE,
        }
    }

    /// True when a wall lies within the probe distance below the player
    pub fn can_jump(&self, player: &Sprite, walls: &[Aabb]) -> bool {
        let probe = player.bounds().translated(Vec2::new(0.0, -self.jump_probe));
        any_hit(&probe, walls)
    }

    /// Apply gravity, then move vertically and horizontally, resolving each
    /// axis against `walls` in turn.
    pub fn step(&self, player: &mut Sprite, walls: &[Aabb]) -> Contacts {
        let mut contacts = Contacts::default();

        player.velocity.y -= self.gravity;

        // Vertical
        let change_y = player.velocity.y;
        player.center.y += change_y;
        let bounds = player.bounds();
        let mut hit_any = false;
        let mut highest_top = f32::NEG_INFINITY;
        let mut lowest_bottom = f32::INFINITY;
        for wall in hits(&bounds, walls) {
            hit_any = true;
            highest_top = highest_top.max(wall.max.y);
            lowest_bottom = lowest_bottom.min(wall.min.y);
        }
        if hit_any {
            if change_y < 0.0 {
                player.set_bottom(highest_top);
                contacts.below = true;
            } else if change_y > 0.0 {
                player.set_top(lowest_bottom);
                contacts.above = true;
            }
            player.velocity.y = 0.0;
        }

        // Horizontal
        let change_x = player.velocity.x;
        if change_x != 0.0 {
            player.center.x += change_x;
            let bounds = player.bounds();
            let mut hit_any = false;
            let mut leftmost = f32::INFINITY;
            let mut rightmost = f32::NEG_INFINITY;
            for wall in hits(&bounds, walls) {
                hit_any = true;
                leftmost = leftmost.min(wall.min.x);
                rightmost = rightmost.max(wall.max.x);
            }
            if hit_any {
                if change_x > 0.0 {
                    player.set_right(leftmost);
                } else {
                    player.set_left(rightmost);
                }
                contacts.side = true;
            }
        }

        contacts
    }
}
