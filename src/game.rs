//! The game world aggregate.
//!
//! [`Game`] owns the ECS [`World`] holding every entity and resource, and the
//! [`Schedule`] that advances it by one tick. It is the only thing the outer
//! shell (window front end or headless runner) talks to:
//!
//! - [`Game::tick`] takes the keys held this tick and simulates it,
//! - [`Game::is_playing`] is the outcome flag,
//! - [`Game::snapshot`] copies out a frame to draw,
//! - [`Game::reset`] re-reads the map and rebuilds everything.
//!
//! Entities are created once, by [`spawn_map`], and only go away when the
//! world is rebuilt.

use std::path::PathBuf;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use log::info;

use crate::components::animation::Animation;
use crate::components::enemybehavior::EnemyBehavior;
use crate::components::rect::Rect;
use crate::components::role::{Enemy, Ground, Obstacle, ObstacleKind, Player};
use crate::components::speed::Speed;
use crate::components::spritesource::SpriteSource;
use crate::components::zindex::ZIndex;
use crate::events::caught::observe_player_caught;
use crate::map::{MapError, Placement, TileKind, load_map, parse_map};
use crate::resources::background::Background;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::GameState;
use crate::resources::group::EntityGroups;
use crate::resources::input::{InputState, PressedKeys};
use crate::resources::viewport::Viewport;
use crate::resources::worldtime::WorldTime;
use crate::systems::camera::camera_follow;
use crate::systems::collision::player_collision;
use crate::systems::enemy::enemy_behavior;
use crate::systems::gamestate::state_is_playing;
use crate::systems::playercontroller::player_controller;
use crate::systems::render::{RenderSnapshot, render_snapshot};
use crate::systems::time::update_world_time;

/// Where the map description comes from. Kept so a reset can re-read it.
#[derive(Debug, Clone)]
pub enum MapSource {
    File(PathBuf),
    Text(String),
}

impl MapSource {
    fn load(&self) -> Result<Vec<Placement>, MapError> {
        match self {
            MapSource::File(path) => load_map(path),
            MapSource::Text(text) => parse_map(text),
        }
    }
}

/// A running round: the world, its tick schedule and where it was loaded from.
pub struct Game {
    world: World,
    schedule: Schedule,
    source: MapSource,
}

impl Game {
    /// Build a game from the map file named in `config`.
    pub fn from_config(config: GameConfig) -> Result<Self, MapError> {
        let source = MapSource::File(config.map_path.clone());
        Self::new(config, source)
    }

    /// Build a game from an in-memory map description.
    pub fn from_map_text(config: GameConfig, text: impl Into<String>) -> Result<Self, MapError> {
        Self::new(config, MapSource::Text(text.into()))
    }

    pub fn new(config: GameConfig, source: MapSource) -> Result<Self, MapError> {
        let placements = source.load()?;
        Ok(Self {
            world: build_world(config, &placements),
            schedule: build_schedule(),
            source,
        })
    }

    /// Re-read the map and rebuild the world from scratch.
    ///
    /// On error the current world is left untouched.
    pub fn reset(&mut self) -> Result<(), MapError> {
        let placements = self.source.load()?;
        let config = self.config().clone();
        self.world = build_world(config, &placements);
        self.schedule = build_schedule();
        info!("World reset");
        Ok(())
    }

    /// Simulate one tick with the given keys held. Returns whether the round
    /// is still being played afterwards. Once the player is caught this is a
    /// no-op.
    pub fn tick(&mut self, keys: PressedKeys) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.world.resource_mut::<InputState>().apply(&keys);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
        self.is_playing()
    }

    /// The "still playing" flag.
    pub fn is_playing(&self) -> bool {
        self.world.resource::<GameState>().is_playing()
    }

    pub fn config(&self) -> &GameConfig {
        self.world.resource::<GameConfig>()
    }

    pub fn ticks(&self) -> u64 {
        self.world.resource::<WorldTime>().tick
    }

    /// Copy out the current frame.
    pub fn snapshot(&mut self) -> RenderSnapshot {
        render_snapshot(&mut self.world)
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}

/// Create a world with all resources and observers, populated from
/// `placements`.
pub fn build_world(config: GameConfig, placements: &[Placement]) -> World {
    let (w, h) = config.viewport_size();

    let mut world = World::new();
    world.insert_resource(Viewport { w, h });
    world.insert_resource(Background::default());
    world.insert_resource(GameState::new());
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(EntityGroups::default());

    spawn_map(&mut world, placements, &config);
    world.insert_resource(config);

    world.spawn(Observer::new(observe_player_caught));
    world.flush();
    world
}

/// Spawn one entity per placement and record it in [`EntityGroups`].
pub fn spawn_map(world: &mut World, placements: &[Placement], config: &GameConfig) {
    let tile = config.tile_size;
    let mut groups = EntityGroups::default();

    for placement in placements {
        let rect = Rect::new(placement.column * tile, placement.row * tile, tile, tile);
        match placement.kind {
            TileKind::Ground => {
                let entity = world.spawn((Ground, rect, ZIndex::GROUND)).id();
                groups.ground.push(entity);
            }
            TileKind::Wall | TileKind::Stone => {
                let kind = if placement.kind == TileKind::Wall {
                    ObstacleKind::Wall
                } else {
                    ObstacleKind::Stone
                };
                let entity = world
                    .spawn((Obstacle { kind }, rect, ZIndex::ACTORS, SpriteSource::default()))
                    .id();
                groups.walls.push(entity);
            }
            TileKind::Player => {
                let entity = world
                    .spawn((
                        Player,
                        rect,
                        ZIndex::ACTORS,
                        Speed(config.player_speed),
                        SpriteSource::default(),
                        Animation::walk_cycle(config.frame_duration),
                    ))
                    .id();
                groups.players.push(entity);
            }
            TileKind::Enemy => {
                let entity = world
                    .spawn((
                        Enemy,
                        rect,
                        ZIndex::ACTORS,
                        Speed(config.pursue_speed),
                        SpriteSource::default(),
                        EnemyBehavior::new(),
                    ))
                    .id();
                groups.enemies.push(entity);
            }
        }
    }

    info!(
        "Map loaded: {} ground tiles, {} obstacles, {} player(s), {} enemies",
        groups.ground.len(),
        groups.walls.len(),
        groups.players.len(),
        groups.enemies.len()
    );
    world.insert_resource(groups);
}

/// The per-tick schedule. Systems run strictly in order, and only while the
/// round is still being played.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);
    schedule.add_systems(
        (
            update_world_time,
            player_controller,
            camera_follow,
            player_collision,
            enemy_behavior,
        )
            .chain()
            .run_if(state_is_playing),
    );
    schedule
}
