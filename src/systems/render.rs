//! Render snapshot extraction.
//!
//! The simulation does not draw. [`render_snapshot`] copies out everything a
//! renderer needs for one frame: both background copies and, per entity, its
//! rectangle, draw layer, role, sprite-sheet offset, animation frame and
//! whether it is a fleeing enemy.
//! Items are sorted by layer; within a layer, ground comes first, then walls,
//! enemies and the player, each in spawn order.
use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::animation::Animation;
use crate::components::enemybehavior::EnemyBehavior;
use crate::components::rect::Rect;
use crate::components::role::{Enemy, Obstacle, Player, Role};
use crate::components::spritesource::SpriteSource;
use crate::components::zindex::ZIndex;
use crate::resources::background::{Background, BackgroundLayout};
use crate::resources::gamestate::GameState;
use crate::resources::group::EntityGroups;
use crate::resources::viewport::Viewport;
use crate::resources::worldtime::WorldTime;

/// One drawable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderItem {
    pub role: Role,
    pub rect: Rect,
    pub layer: i32,
    pub sprite: SpriteSource,
    /// Animation frame index, 0 for entities that do not animate.
    pub frame: usize,
    /// Enemy currently running away from the player.
    pub fleeing: bool,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub tick: u64,
    pub playing: bool,
    pub viewport: (i32, i32),
    pub background: BackgroundLayout,
    pub items: Vec<RenderItem>,
}

fn role_of(obstacle: Option<&Obstacle>, is_player: bool, is_enemy: bool) -> Role {
    if is_player {
        Role::Player
    } else if is_enemy {
        Role::Enemy
    } else if let Some(obstacle) = obstacle {
        Role::Obstacle(obstacle.kind)
    } else {
        Role::Ground
    }
}

/// Extract the current frame from `world`.
pub fn render_snapshot(world: &mut World) -> RenderSnapshot {
    let mut query = world.query::<(
        &Rect,
        &ZIndex,
        Option<&SpriteSource>,
        Option<&Animation>,
        Option<&Obstacle>,
        Option<&EnemyBehavior>,
        Has<Player>,
        Has<Enemy>,
    )>();
    let world = &*world;

    let groups = world.resource::<EntityGroups>();
    let mut items: Vec<RenderItem> = groups
        .ground
        .iter()
        .chain(&groups.walls)
        .chain(&groups.enemies)
        .chain(&groups.players)
        .filter_map(|&entity| {
            let (rect, z, sprite, animation, obstacle, behavior, is_player, is_enemy) =
                query.get(world, entity).ok()?;
            Some(RenderItem {
                role: role_of(obstacle, is_player, is_enemy),
                rect: *rect,
                layer: z.0,
                sprite: sprite.copied().unwrap_or_default(),
                frame: animation.map(|a| a.current_frame).unwrap_or(0),
                fleeing: behavior.is_some_and(EnemyBehavior::is_fleeing),
            })
        })
        .collect();
    items.sort_by_key(|item| item.layer);

    let viewport = *world.resource::<Viewport>();
    RenderSnapshot {
        tick: world.resource::<WorldTime>().tick,
        playing: world.resource::<GameState>().is_playing(),
        viewport: (viewport.w, viewport.h),
        background: world.resource::<Background>().layout(viewport.w),
        items,
    }
}
