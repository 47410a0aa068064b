//! Axis-aligned bounding boxes and overlap queries

use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap: boxes that only share an edge do not collide
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Same box shifted by `offset`
    #[inline]
    pub fn translated(&self, offset: Vec2) -> Aabb {
        Aabb {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

/// Walls overlapping `bounds`, in wall order
pub fn hits<'a>(bounds: &'a Aabb, walls: &'a [Aabb]) -> impl Iterator<Item = &'a Aabb> + 'a {
    walls.iter().filter(move |wall| bounds.overlaps(wall))
}

/// Whether `bounds` overlaps any wall
pub fn any_hit(bounds: &Aabb, walls: &[Aabb]) -> bool {
    walls.iter().any(|wall| bounds.overlaps(wall))
}
