//! Tick integration tests for the individual systems, each run on its own
//! in a hand-built world.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;

use tilechase::components::animation::Animation;
use tilechase::components::enemybehavior::{EnemyBehavior, EnemyState};
use tilechase::components::rect::Rect;
use tilechase::components::role::{Enemy, Ground, Obstacle, ObstacleKind, Player};
use tilechase::components::speed::Speed;
use tilechase::components::spritesource::SpriteSource;
use tilechase::components::zindex::ZIndex;
use tilechase::events::caught::observe_player_caught;
use tilechase::resources::background::Background;
use tilechase::resources::gameconfig::GameConfig;
use tilechase::resources::gamestate::{GameState, GameStates};
use tilechase::resources::group::EntityGroups;
use tilechase::resources::input::{InputState, PressedKeys};
use tilechase::resources::viewport::Viewport;
use tilechase::resources::worldtime::WorldTime;
use tilechase::systems::camera::camera_follow;
use tilechase::systems::collision::player_collision;
use tilechase::systems::enemy::enemy_behavior;
use tilechase::systems::playercontroller::player_controller;

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(GameConfig::new());
    world.insert_resource(Viewport { w: 640, h: 320 });
    world.insert_resource(Background::default());
    world.insert_resource(GameState::new());
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(EntityGroups::default());
    world
}

fn spawn_player(world: &mut World, rect: Rect) -> Entity {
    let entity = world
        .spawn((
            Player,
            rect,
            ZIndex::ACTORS,
            Speed(3),
            SpriteSource::default(),
            Animation::walk_cycle(30),
        ))
        .id();
    world.resource_mut::<EntityGroups>().players.push(entity);
    entity
}

fn spawn_enemy(world: &mut World, rect: Rect) -> Entity {
    let entity = world
        .spawn((
            Enemy,
            rect,
            ZIndex::ACTORS,
            Speed(3),
            SpriteSource::default(),
            EnemyBehavior::new(),
        ))
        .id();
    world.resource_mut::<EntityGroups>().enemies.push(entity);
    entity
}

fn spawn_wall(world: &mut World, rect: Rect) -> Entity {
    let entity = world
        .spawn((
            Obstacle {
                kind: ObstacleKind::Wall,
            },
            rect,
            ZIndex::ACTORS,
        ))
        .id();
    world.resource_mut::<EntityGroups>().walls.push(entity);
    entity
}

fn spawn_ground(world: &mut World, rect: Rect) -> Entity {
    let entity = world.spawn((Ground, rect, ZIndex::GROUND)).id();
    world.resource_mut::<EntityGroups>().ground.push(entity);
    entity
}

fn press(world: &mut World, keys: PressedKeys) {
    world.resource_mut::<InputState>().apply(&keys);
}

fn rect_of(world: &World, entity: Entity) -> Rect {
    *world.get::<Rect>(entity).unwrap()
}

fn tick_player_controller(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(player_controller);
    schedule.run(world);
}

fn tick_camera(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(camera_follow);
    schedule.run(world);
}

fn tick_player_collision(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(player_collision);
    schedule.run(world);
}

fn tick_enemies(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(enemy_behavior);
    schedule.run(world);
}

#[test]
fn player_moves_by_speed_and_faces_direction() {
    let mut world = make_world();
    let player = spawn_player(&mut world, Rect::new(100, 100, 32, 32));
    press(
        &mut world,
        PressedKeys {
            left: true,
            up: true,
            ..Default::default()
        },
    );

    tick_player_controller(&mut world);

    assert_eq!(rect_of(&world, player), Rect::new(97, 97, 32, 32));
    let source = world.get::<SpriteSource>(player).unwrap();
    assert_eq!(source.y, SpriteSource::LEFT_ROW);
    assert_eq!(source.x, SpriteSource::UP_COLUMN);
}

#[test]
fn repel_sends_enemies_in_range_fleeing() {
    let mut world = make_world();
    spawn_player(&mut world, Rect::new(0, 0, 32, 32));
    let near = spawn_enemy(&mut world, Rect::new(4 * 32, 2 * 32, 32, 32));
    let edge = spawn_enemy(&mut world, Rect::new(5 * 32, 0, 32, 32));
    press(
        &mut world,
        PressedKeys {
            repel: true,
            ..Default::default()
        },
    );

    tick_player_controller(&mut world);

    assert_eq!(world.get::<Speed>(near), Some(&Speed(-1)));
    let behavior = world.get::<EnemyBehavior>(near).unwrap();
    assert_eq!(behavior.state, EnemyState::Fleeing);
    assert_eq!(behavior.flee_timer, 150);

    // Exactly five tiles away is outside the radius.
    assert_eq!(world.get::<Speed>(edge), Some(&Speed(3)));
    assert!(!world.get::<EnemyBehavior>(edge).unwrap().is_fleeing());
}

#[test]
fn no_repel_without_key() {
    let mut world = make_world();
    spawn_player(&mut world, Rect::new(0, 0, 32, 32));
    let enemy = spawn_enemy(&mut world, Rect::new(32, 0, 32, 32));

    tick_player_controller(&mut world);

    assert_eq!(world.get::<Speed>(enemy), Some(&Speed(3)));
    assert!(!world.get::<EnemyBehavior>(enemy).unwrap().is_fleeing());
}

#[test]
fn camera_recenters_player_and_shifts_world() {
    let mut world = make_world();
    let player = spawn_player(&mut world, Rect::new(100, 40, 32, 32));
    let ground = spawn_ground(&mut world, Rect::new(0, 0, 32, 32));
    let enemy = spawn_enemy(&mut world, Rect::new(-50, 300, 32, 32));

    tick_camera(&mut world);

    let rect = rect_of(&world, player);
    assert_eq!((rect.center_x(), rect.center_y()), (320, 160));
    assert_eq!(rect_of(&world, ground), Rect::new(204, 104, 32, 32));
    assert_eq!(rect_of(&world, enemy), Rect::new(154, 404, 32, 32));
    assert_eq!(world.resource::<Background>().x, 204);
}

#[test]
fn camera_drives_walk_animation() {
    let mut world = make_world();
    let player = spawn_player(&mut world, Rect::new(100, 40, 32, 32));

    tick_camera(&mut world);

    let animation = world.get::<Animation>(player).unwrap();
    assert_eq!(animation.current_frame, 1);
    assert_eq!(animation.counter, 24);
    assert_eq!(world.get::<SpriteSource>(player).unwrap().x, 32);
}

#[test]
fn centered_player_keeps_world_still() {
    let mut world = make_world();
    let player = spawn_player(&mut world, Rect::new(304, 144, 32, 32));
    let ground = spawn_ground(&mut world, Rect::new(10, 20, 32, 32));

    tick_camera(&mut world);

    assert_eq!(rect_of(&world, player), Rect::new(304, 144, 32, 32));
    assert_eq!(rect_of(&world, ground), Rect::new(10, 20, 32, 32));
    assert_eq!(world.resource::<Background>().x, 0);
}

#[test]
fn background_wraps_past_viewport_width() {
    let mut world = make_world();
    world.resource_mut::<Background>().x = 600;
    spawn_player(&mut world, Rect::new(100, 40, 32, 32));

    tick_camera(&mut world);

    assert_eq!(world.resource::<Background>().x, -640);
}

#[test]
fn player_lands_on_wall_below() {
    let mut world = make_world();
    let player = spawn_player(&mut world, Rect::new(100, 100, 32, 32));
    spawn_wall(&mut world, Rect::new(100, 132, 32, 32));
    press(
        &mut world,
        PressedKeys {
            down: true,
            ..Default::default()
        },
    );

    tick_player_controller(&mut world);
    assert_eq!(rect_of(&world, player).y, 103);
    tick_player_collision(&mut world);

    let rect = rect_of(&world, player);
    assert_eq!(rect.bottom(), 132);
    assert_eq!(rect.x, 100);
}

#[test]
fn player_collision_follows_wall_spawn_order() {
    let ceiling = Rect::new(0, 68, 32, 32);
    let floor = Rect::new(0, 130, 32, 32);

    let mut world = make_world();
    let player = spawn_player(&mut world, Rect::new(0, 99, 32, 32));
    spawn_wall(&mut world, ceiling);
    spawn_wall(&mut world, floor);
    tick_player_collision(&mut world);
    assert_eq!(rect_of(&world, player).y, 100);

    let mut world = make_world();
    let player = spawn_player(&mut world, Rect::new(0, 99, 32, 32));
    spawn_wall(&mut world, floor);
    spawn_wall(&mut world, ceiling);
    tick_player_collision(&mut world);
    assert_eq!(rect_of(&world, player).y, 98);
}

#[test]
fn held_repel_keeps_rearming_after_the_press_edge() {
    let mut world = make_world();
    spawn_player(&mut world, Rect::new(0, 0, 32, 32));
    let enemy = spawn_enemy(&mut world, Rect::new(32, 0, 32, 32));
    let keys = PressedKeys {
        repel: true,
        ..Default::default()
    };

    press(&mut world, keys);
    assert!(world.resource::<InputState>().repel.just_pressed);
    tick_player_controller(&mut world);
    world.get_mut::<EnemyBehavior>(enemy).unwrap().flee_timer = 10;

    press(&mut world, keys);
    assert!(!world.resource::<InputState>().repel.just_pressed);
    tick_player_controller(&mut world);
    assert_eq!(world.get::<EnemyBehavior>(enemy).unwrap().flee_timer, 150);
}

#[test]
fn player_walking_into_wall_is_pushed_back() {
    let mut world = make_world();
    let player = spawn_player(&mut world, Rect::new(100, 100, 32, 32));
    spawn_wall(&mut world, Rect::new(132, 100, 32, 32));
    press(
        &mut world,
        PressedKeys {
            right: true,
            ..Default::default()
        },
    );

    tick_player_controller(&mut world);
    tick_player_collision(&mut world);

    assert_eq!(rect_of(&world, player), Rect::new(100, 100, 32, 32));
}

#[test]
fn enemy_steps_toward_viewport_center() {
    let mut world = make_world();
    spawn_player(&mut world, Rect::new(304, 144, 32, 32));
    let enemy = spawn_enemy(&mut world, Rect::new(0, 500, 32, 32));

    tick_enemies(&mut world);

    assert_eq!(rect_of(&world, enemy), Rect::new(3, 497, 32, 32));
    assert!(world.resource::<GameState>().is_playing());
}

#[test]
fn fleeing_enemy_backs_away_and_counts_down() {
    let mut world = make_world();
    spawn_player(&mut world, Rect::new(304, 144, 32, 32));
    let enemy = spawn_enemy(&mut world, Rect::new(0, 0, 32, 32));
    {
        let tuning = world.resource::<GameConfig>().enemy_tuning();
        let mut entity = world.entity_mut(enemy);
        let mut speed = *entity.get::<Speed>().unwrap();
        entity.get_mut::<EnemyBehavior>().unwrap().flee(&mut speed, &tuning);
        entity.insert(speed);
    }

    tick_enemies(&mut world);

    assert_eq!(rect_of(&world, enemy), Rect::new(-1, -1, 32, 32));
    assert_eq!(world.get::<EnemyBehavior>(enemy).unwrap().flee_timer, 148);
    assert_eq!(world.get::<Speed>(enemy), Some(&Speed(-1)));
}

#[test]
fn enemy_is_blocked_by_wall() {
    let mut world = make_world();
    spawn_player(&mut world, Rect::new(600, 600, 32, 32));
    let enemy = spawn_enemy(&mut world, Rect::new(200, 160, 32, 32));
    spawn_wall(&mut world, Rect::new(232, 160, 32, 32));

    tick_enemies(&mut world);

    assert_eq!(rect_of(&world, enemy), Rect::new(200, 160, 32, 32));
}

#[test]
fn enemy_touching_player_ends_round_in_the_same_tick() {
    let mut world = make_world();
    world.spawn(Observer::new(observe_player_caught));
    world.flush();
    spawn_player(&mut world, Rect::new(304, 144, 32, 32));
    spawn_enemy(&mut world, Rect::new(300, 150, 32, 32));

    tick_enemies(&mut world);

    assert_eq!(world.resource::<GameState>().get(), GameStates::Caught);
}

#[test]
fn enemy_far_from_player_keeps_round_going() {
    let mut world = make_world();
    world.spawn(Observer::new(observe_player_caught));
    world.flush();
    spawn_player(&mut world, Rect::new(304, 144, 32, 32));
    spawn_enemy(&mut world, Rect::new(0, 0, 32, 32));

    tick_enemies(&mut world);

    assert!(world.resource::<GameState>().is_playing());
}
