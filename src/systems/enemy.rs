//! Enemy pursuit, flight and the loss check.
//!
//! Enemies chase the viewport center, which is where the camera keeps the
//! player. Per enemy and per tick, in spawn order:
//!
//! 1. [`EnemyBehavior::begin_tick`] settles the speed (pursue or flee),
//! 2. [`step_toward`] moves it one step on each axis,
//! 3. wall collisions are resolved,
//! 4. an overlap with the player triggers [`PlayerCaughtEvent`].
//!
//! Fleeing needs no movement code of its own: with a negative speed the
//! same step moves the enemy away from the center.
use bevy_ecs::prelude::*;

use crate::components::enemybehavior::EnemyBehavior;
use crate::components::rect::Rect;
use crate::components::role::{Enemy, Obstacle, Player};
use crate::components::speed::Speed;
use crate::events::caught::PlayerCaughtEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::group::EntityGroups;
use crate::resources::viewport::Viewport;
use crate::systems::collision::{obstacle_rects, resolve_collisions};

/// Move the top-left corner of `rect` one `speed` step toward `target`,
/// each axis on its own.
///
/// The checks are sequential: a step that overshoots the target on the
/// first check is stepped back by the second one in the same tick.
pub fn step_toward(rect: &mut Rect, target: (i32, i32), speed: i32) {
    let (tx, ty) = target;
    if rect.x < tx {
        rect.x += speed;
    }
    if rect.x > tx {
        rect.x -= speed;
    }
    if rect.y < ty {
        rect.y += speed;
    }
    if rect.y > ty {
        rect.y -= speed;
    }
}

/// Advance every enemy by one tick.
pub fn enemy_behavior(
    config: Res<GameConfig>,
    viewport: Res<Viewport>,
    groups: Res<EntityGroups>,
    obstacles: Query<&Rect, (With<Obstacle>, Without<Enemy>, Without<Player>)>,
    players: Query<&Rect, (With<Player>, Without<Enemy>, Without<Obstacle>)>,
    mut enemies: Query<
        (&mut Rect, &mut Speed, &mut EnemyBehavior),
        (With<Enemy>, Without<Player>, Without<Obstacle>),
    >,
    mut commands: Commands,
) {
    let tuning = config.enemy_tuning();
    let target = viewport.center();
    let walls = obstacle_rects(&groups.walls, &obstacles);
    let player = groups.player().and_then(|p| players.get(p).ok().copied());

    for &entity in &groups.enemies {
        let Ok((mut rect, mut speed, mut behavior)) = enemies.get_mut(entity) else {
            continue;
        };
        behavior.begin_tick(&mut speed, &tuning);
        step_toward(&mut rect, target, speed.0);
        resolve_collisions(&mut rect, *speed, &walls);

        if player.is_some_and(|p| rect.overlaps(&p)) {
            commands.trigger(PlayerCaughtEvent { enemy: entity });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pursuit_closes_in_on_both_axes() {
        let mut rect = Rect::new(0, 500, 32, 32);
        step_toward(&mut rect, (320, 160), 3);
        assert_eq!((rect.x, rect.y), (3, 497));
    }

    #[test]
    fn negative_speed_moves_away() {
        let mut rect = Rect::new(300, 200, 32, 32);
        step_toward(&mut rect, (320, 160), -1);
        assert_eq!((rect.x, rect.y), (299, 201));
    }

    #[test]
    fn overshoot_is_stepped_back_in_the_same_tick() {
        let mut rect = Rect::new(318, 160, 32, 32);
        step_toward(&mut rect, (320, 160), 3);
        assert_eq!((rect.x, rect.y), (318, 160));
    }

    #[test]
    fn on_target_does_not_move() {
        let mut rect = Rect::new(320, 160, 32, 32);
        step_toward(&mut rect, (320, 160), 3);
        assert_eq!((rect.x, rect.y), (320, 160));
    }
}
