//! Obstacle collision resolution.
//!
//! Movers (the player and enemies) step a whole `speed` per tick without any
//! sweep test, so they can end a tick sunk into a wall by up to `speed`
//! pixels. [`resolve_collisions`] pushes them back out in two passes:
//!
//! 1. **Vertical.** Among the obstacles overlapping the mover, the first one
//!    it is standing on (or bumping its head against) snaps the mover onto
//!    that edge. Only one vertical correction happens per tick.
//! 2. **Horizontal.** Overlaps are queried again, and every obstacle still
//!    found pushes the mover out sideways, away from the obstacle's side.
//!
//! A contact only counts as vertical when the vertical penetration is within
//! the tolerance (`|speed|`) and the mover is not within tolerance of either
//! side edge. This keeps a mover sliding along a floor from being shoved
//! sideways, and a mover walking into a wall from being lifted on top of it.
//!
//! At `speed == 0` the tolerance is zero: only exact edge contact counts, so
//! a stationary mover embedded in an obstacle is not lifted out vertically.
use bevy_ecs::prelude::*;
use bevy_ecs::query::QueryFilter;

use crate::components::rect::Rect;
use crate::components::role::{Obstacle, Player};
use crate::components::speed::Speed;
use crate::resources::group::EntityGroups;

/// Neither side edge of `mover` is within `tolerance` of the facing side of
/// `obstacle`.
fn clear_of_sides(mover: &Rect, obstacle: &Rect, tolerance: i32) -> bool {
    (mover.left() - obstacle.right()).abs() > tolerance
        && (obstacle.left() - mover.right()).abs() > tolerance
}

/// `mover`'s bottom sits on `obstacle`'s top, within tolerance.
pub fn is_standing(mover: &Rect, obstacle: &Rect, tolerance: i32) -> bool {
    (obstacle.top() - mover.bottom()).abs() <= tolerance && clear_of_sides(mover, obstacle, tolerance)
}

/// `mover`'s top touches `obstacle`'s bottom, within tolerance.
pub fn hit_head(mover: &Rect, obstacle: &Rect, tolerance: i32) -> bool {
    (mover.top() - obstacle.bottom()).abs() <= tolerance && clear_of_sides(mover, obstacle, tolerance)
}

/// Push `mover` out of the `obstacles` it overlaps. Obstacles are examined in
/// slice order.
pub fn resolve_collisions(mover: &mut Rect, speed: Speed, obstacles: &[Rect]) {
    let tolerance = speed.tolerance();

    let hits: Vec<&Rect> = obstacles.iter().filter(|o| mover.overlaps(o)).collect();
    for hit in hits {
        if is_standing(mover, hit, tolerance) {
            mover.set_bottom(hit.top());
            break;
        }
        if hit_head(mover, hit, tolerance) {
            mover.set_top(hit.bottom());
            break;
        }
    }

    let hits: Vec<&Rect> = obstacles.iter().filter(|o| mover.overlaps(o)).collect();
    for hit in hits {
        if hit.x - mover.x < 0 {
            mover.set_left(hit.right());
        } else {
            mover.set_right(hit.left());
        }
    }
}

/// Obstacle rectangles in spawn order.
pub fn obstacle_rects<F: QueryFilter>(walls: &[Entity], query: &Query<&Rect, F>) -> Vec<Rect> {
    walls
        .iter()
        .filter_map(|&entity| query.get(entity).ok().copied())
        .collect()
}

/// Resolve the player's overlaps with walls and stones.
pub fn player_collision(
    groups: Res<EntityGroups>,
    obstacles: Query<&Rect, (With<Obstacle>, Without<Player>)>,
    mut players: Query<(&mut Rect, &Speed), (With<Player>, Without<Obstacle>)>,
) {
    let walls = obstacle_rects(&groups.walls, &obstacles);
    for (mut rect, speed) in players.iter_mut() {
        resolve_collisions(&mut rect, *speed, &walls);
    }
}
