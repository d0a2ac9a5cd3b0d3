//! Keyboard-driven player movement and the repel action.
//!
//! Reads the shared [`InputState`] and moves the player's rectangle by its
//! [`Speed`] along each held direction. Directions are independent, so
//! holding two keys moves diagonally at full speed on both axes. Each
//! direction also records a facing hint in [`SpriteSource`].
//!
//! While repel is held, every enemy inside a square of half-extent
//! `repel_radius` around the player's top-left corner is switched to fleeing.
//! The camera and the wall collision pass run after this system.
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::enemybehavior::EnemyBehavior;
use crate::components::rect::Rect;
use crate::components::role::{Enemy, Player};
use crate::components::speed::Speed;
use crate::components::spritesource::SpriteSource;
use crate::resources::gameconfig::{EnemyTuning, GameConfig};
use crate::resources::input::InputState;

/// Apply one tick of directional input to the player.
pub fn step_player(rect: &mut Rect, source: &mut SpriteSource, input: &InputState, speed: i32) {
    if input.left.active {
        source.y = SpriteSource::LEFT_ROW;
        rect.x -= speed;
    }
    if input.right.active {
        source.y = SpriteSource::RIGHT_ROW;
        rect.x += speed;
    }
    if input.up.active {
        source.x = SpriteSource::UP_COLUMN;
        rect.y -= speed;
    }
    if input.down.active {
        source.x = SpriteSource::DOWN_COLUMN;
        rect.y += speed;
    }
}

/// Whether `enemy` is inside the square repel area around `player`.
pub fn in_repel_range(player: &Rect, enemy: &Rect, radius: i32) -> bool {
    (enemy.x - player.x).abs() < radius && (enemy.y - player.y).abs() < radius
}

/// Move the player and trigger repel.
pub fn player_controller(
    input: Res<InputState>,
    config: Res<GameConfig>,
    mut players: Query<(&mut Rect, &Speed, &mut SpriteSource), (With<Player>, Without<Enemy>)>,
    mut enemies: Query<(Entity, &Rect, &mut Speed, &mut EnemyBehavior), (With<Enemy>, Without<Player>)>,
) {
    let tuning: EnemyTuning = config.enemy_tuning();
    let radius = config.repel_radius();

    for (mut rect, speed, mut source) in players.iter_mut() {
        step_player(&mut rect, &mut source, &input, speed.0);

        if !input.repel.active {
            continue;
        }
        let mut repelled = 0;
        for (entity, enemy_rect, mut enemy_speed, mut behavior) in enemies.iter_mut() {
            if in_repel_range(&rect, enemy_rect, radius) {
                behavior.flee(&mut enemy_speed, &tuning);
                repelled += 1;
                debug!("Repelled {:?}, fleeing for {} ticks", entity, behavior.flee_timer);
            }
        }
        if input.repel.just_pressed {
            info!("Repel used, {} enemies in range", repelled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::input::PressedKeys;

    fn input(keys: PressedKeys) -> InputState {
        let mut state = InputState::default();
        state.apply(&keys);
        state
    }

    #[test]
    fn each_direction_moves_by_speed() {
        let mut rect = Rect::new(100, 100, 32, 32);
        let mut source = SpriteSource::default();

        step_player(&mut rect, &mut source, &input(PressedKeys { left: true, ..Default::default() }), 3);
        assert_eq!((rect.x, rect.y), (97, 100));
        assert_eq!(source.y, SpriteSource::LEFT_ROW);

        step_player(&mut rect, &mut source, &input(PressedKeys { right: true, ..Default::default() }), 3);
        assert_eq!((rect.x, rect.y), (100, 100));
        assert_eq!(source.y, SpriteSource::RIGHT_ROW);

        step_player(&mut rect, &mut source, &input(PressedKeys { up: true, ..Default::default() }), 3);
        assert_eq!((rect.x, rect.y), (100, 97));
        assert_eq!(source.x, SpriteSource::UP_COLUMN);

        step_player(&mut rect, &mut source, &input(PressedKeys { down: true, ..Default::default() }), 3);
        assert_eq!((rect.x, rect.y), (100, 100));
        assert_eq!(source.x, SpriteSource::DOWN_COLUMN);
    }

    #[test]
    fn diagonal_is_not_normalized() {
        let mut rect = Rect::new(0, 0, 32, 32);
        let mut source = SpriteSource::default();
        let keys = PressedKeys {
            right: true,
            down: true,
            ..Default::default()
        };
        step_player(&mut rect, &mut source, &input(keys), 3);
        assert_eq!((rect.x, rect.y), (3, 3));
    }

    #[test]
    fn opposite_keys_cancel_out() {
        let mut rect = Rect::new(0, 0, 32, 32);
        let mut source = SpriteSource::default();
        let keys = PressedKeys {
            left: true,
            right: true,
            ..Default::default()
        };
        step_player(&mut rect, &mut source, &input(keys), 3);
        assert_eq!((rect.x, rect.y), (0, 0));
        assert_eq!(source.y, SpriteSource::RIGHT_ROW);
    }

    #[test]
    fn repel_range_is_a_strict_square() {
        let player = Rect::new(0, 0, 32, 32);
        assert!(in_repel_range(&player, &Rect::new(159, -159, 32, 32), 160));
        assert!(!in_repel_range(&player, &Rect::new(160, 0, 32, 32), 160));
        assert!(!in_repel_range(&player, &Rect::new(0, -160, 32, 32), 160));
    }
}
