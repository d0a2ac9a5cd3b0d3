//! Ordered entity groups by role.
//!
//! The [`EntityGroups`] resource keeps one list of entities per role in spawn
//! order. ECS queries do not promise an iteration order, but obstacle
//! resolution does depend on it (the first matching vertical contact wins),
//! so systems that care walk these lists and look entities up by id.
//!
//! # Related
//!
//! - [`crate::components::role`] – the marker components that mirror these groups
//! - [`crate::game::spawn_map`] – fills the groups while scanning the map

use bevy_ecs::prelude::*;

#[derive(Debug, Clone, Resource, Default)]
pub struct EntityGroups {
    /// Floor tiles, one per map cell.
    pub ground: Vec<Entity>,
    /// Walls and stones.
    pub walls: Vec<Entity>,
    pub players: Vec<Entity>,
    pub enemies: Vec<Entity>,
}

impl EntityGroups {
    /// The player entity, if one was spawned.
    pub fn player(&self) -> Option<Entity> {
        self.players.first().copied()
    }

    /// Total number of entities across all groups.
    pub fn len(&self) -> usize {
        self.ground.len() + self.walls.len() + self.players.len() + self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
