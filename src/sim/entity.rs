//! Role-tagged entity store
//!
//! One ordered collection holds every sprite on stage. Solid walls, the draw
//! list and the placed boxes are views filtered by [`Role`], so they can never
//! drift apart.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::sprite::Sprite;

/// What an entity is on stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Floor,
    Platform,
    Goal,
    Player,
    /// Player-placed box
    Box,
    /// Victory text
    Banner,
}

impl Role {
    /// Participates in collision as a wall
    pub fn is_solid(self) -> bool {
        matches!(self, Role::Floor | Role::Platform | Role::Box)
    }

    /// Can be removed by undo. Stage entities and the player are permanent.
    pub fn is_removable(self) -> bool {
        matches!(self, Role::Box | Role::Banner)
    }
}

pub type EntityId = u32;

/// A sprite with an identity and a role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub role: Role,
    pub sprite: Sprite,
}

/// Insertion-ordered entity storage
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    entities: Vec<Entity>,
    next_id: EntityId,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity; it draws above everything already stored
    pub fn push(&mut self, role: Role, sprite: Sprite) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        self.entities.push(Entity { id, role, sprite });
        id
    }

    /// Remove the most recently appended entity, if it is removable
    pub fn pop_removable(&mut self) -> Option<Entity> {
        match self.entities.last() {
            Some(last) if last.role.is_removable() => self.entities.pop(),
            _ => None,
        }
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    /// Every entity, in draw order
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn last(&self) -> Option<&Entity> {
        self.entities.last()
    }

    /// Entities with the given role, in insertion order
    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.role == role)
    }

    pub fn count(&self, role: Role) -> usize {
        self.with_role(role).count()
    }

    /// Walls for the physics integrator, in insertion order
    pub fn solids(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.role.is_solid())
    }

    pub fn solid_bounds(&self) -> Vec<Aabb> {
        self.solids().map(|e| e.sprite.bounds()).collect()
    }

    /// Placed boxes, oldest first
    pub fn boxes(&self) -> impl Iterator<Item = &Entity> {
        self.with_role(Role::Box)
    }

    /// Per-frame update of every sprite
    pub fn update_all(&mut self) {
        for entity in &mut self.entities {
            entity.sprite.update();
        }
    }
}

impl Index<EntityId> for EntityStore {
    type Output = Sprite;

    /// Panics if no entity has this id
    fn index(&self, id: EntityId) -> &Sprite {
        match self.get(id) {
            Some(entity) => &entity.sprite,
            None => panic!("no entity with id {id}"),
        }
    }
}

impl IndexMut<EntityId> for EntityStore {
    fn index_mut(&mut self, id: EntityId) -> &mut Sprite {
        match self.get_mut(id) {
            Some(entity) => &mut entity.sprite,
            None => panic!("no entity with id {id}"),
        }
    }
}
