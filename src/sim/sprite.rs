//! Sprite primitive: a positioned, sized box with a velocity

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;

/// A positioned visual entity.
///
/// Coordinates are y-up: `top() > bottom()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    /// Image this sprite is drawn with
    pub asset: String,
    pub center: Vec2,
    /// Full on-screen size (image size x scale)
    pub size: Vec2,
    /// Per-tick displacement (`change_x`, `change_y`)
    pub velocity: Vec2,
}

impl Sprite {
    pub fn new(asset: impl Into<String>, size: Vec2) -> Self {
        Self {
            asset: asset.into(),
            center: Vec2::ZERO,
            size,
            velocity: Vec2::ZERO,
        }
    }

    /// Builder-style center placement
    pub fn at(mut self, center: Vec2) -> Self {
        self.center = center;
        self
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.size / 2.0
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half_size().x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half_size().x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y - self.half_size().y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y + self.half_size().y
    }

    pub fn set_left(&mut self, left: f32) {
        self.center.x = left + self.half_size().x;
    }

    pub fn set_right(&mut self, right: f32) {
        self.center.x = right - self.half_size().x;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.center.y = bottom + self.half_size().y;
    }

    pub fn set_top(&mut self, top: f32) {
        self.center.y = top - self.half_size().y;
    }

    /// Bounding box used for collision tests
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.center, self.size)
    }

    /// Bounding-box intersection with another sprite
    pub fn collides_with(&self, other: &Sprite) -> bool {
        self.bounds().overlaps(&other.bounds())
    }

    /// Per-frame update: apply velocity
    pub fn update(&mut self) {
        self.center += self.velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_follow_center() {
        let mut sprite = Sprite::new("player_box.png", Vec2::new(32.0, 32.0));
        sprite.set_left(10.0);
        sprite.set_bottom(37.0);
        assert_eq!(sprite.center, Vec2::new(26.0, 53.0));
        assert_eq!(sprite.right(), 42.0);
        assert_eq!(sprite.top(), 69.0);

        sprite.set_right(800.0);
        assert_eq!(sprite.left(), 768.0);
        sprite.set_top(350.0);
        assert_eq!(sprite.bottom(), 318.0);
    }

    #[test]
    fn test_update_applies_velocity() {
        let mut sprite = Sprite::new("player_box.png", Vec2::splat(32.0)).at(Vec2::new(100.0, 100.0));
        sprite.velocity = Vec2::new(-3.0, 2.0);
        sprite.update();
        sprite.update();
        assert_eq!(sprite.center, Vec2::new(94.0, 104.0));
    }

    #[test]
    fn test_collides_with_is_strict() {
        let a = Sprite::new("a", Vec2::splat(10.0)).at(Vec2::new(0.0, 0.0));
        let touching = Sprite::new("b", Vec2::splat(10.0)).at(Vec2::new(10.0, 0.0));
        let overlapping = Sprite::new("c", Vec2::splat(10.0)).at(Vec2::new(9.0, 3.0));
        assert!(!a.collides_with(&touching));
        assert!(a.collides_with(&overlapping));
        assert!(overlapping.collides_with(&a));
    }
}
