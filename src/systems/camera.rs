//! Player-centered camera.
//!
//! There is no view transform: every rectangle lives in screen space, and
//! the camera keeps the player in the middle of the viewport by moving the
//! whole world the other way. [`camera_follow`] runs right after the player
//! moves and:
//!
//! 1. computes `(dx, dy)` = viewport center − player center,
//! 2. shifts every entity by it with [`apply_camera_shift`],
//! 3. scrolls the [`Background`] by `dx × background_speed` and wraps it,
//! 4. feeds `dx` to the player's walk animation.
use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::rect::Rect;
use crate::components::role::Player;
use crate::components::spritesource::SpriteSource;
use crate::resources::background::Background;
use crate::resources::gameconfig::GameConfig;
use crate::resources::group::EntityGroups;
use crate::resources::viewport::Viewport;

/// Delta that moves `target`'s center onto the viewport center.
pub fn camera_offset(viewport: &Viewport, target: &Rect) -> (i32, i32) {
    let (cx, cy) = viewport.center();
    (cx - target.center_x(), cy - target.center_y())
}

/// Translate every rectangle by `(dx, dy)`.
pub fn apply_camera_shift<'a>(rects: impl IntoIterator<Item = &'a mut Rect>, dx: i32, dy: i32) {
    for rect in rects {
        rect.translate(dx, dy);
    }
}

/// Recenter the world on the player and scroll the background.
pub fn camera_follow(
    viewport: Res<Viewport>,
    config: Res<GameConfig>,
    groups: Res<EntityGroups>,
    mut background: ResMut<Background>,
    mut rects: Query<&mut Rect>,
    mut animated: Query<(&mut Animation, &mut SpriteSource), With<Player>>,
) {
    let Some(player) = groups.player() else {
        return;
    };
    let Some(target) = rects.get(player).ok().copied() else {
        return;
    };
    let (dx, dy) = camera_offset(&viewport, &target);

    apply_camera_shift(rects.iter_mut().map(Mut::into_inner), dx, dy);
    background.scroll(dx * config.background_speed, viewport.w);

    for (mut animation, mut source) in animated.iter_mut() {
        if let Some(frame_x) = animation.advance(dx) {
            source.x = frame_x;
        }
    }
}
