//! Role tags for map entities.
//!
//! Every spawned entity has exactly one role marker. Systems filter their
//! queries by these markers, so collision and camera logic only ever see the
//! subset of entities they apply to.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// The controllable actor. A loaded map has exactly one.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;

/// A pursuer driven by [`EnemyBehavior`](crate::components::enemybehavior::EnemyBehavior).
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Enemy;

/// Floor tile. Drawn under everything, never collides.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Ground;

/// What an obstacle looks like. Both kinds block movement the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Wall,
    Stone,
}

/// Static obstacle that players and enemies are pushed out of.
#[derive(Component, Clone, Copy, Debug)]
pub struct Obstacle {
    pub kind: ObstacleKind,
}

/// Role of an entity as seen from outside the world (renderer, snapshots).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Ground,
    Obstacle(ObstacleKind),
    Player,
    Enemy,
}
