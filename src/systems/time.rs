//! Time update system.
//!
//! Advances the [`WorldTime`](crate::resources::worldtime::WorldTime) tick
//! counter once per simulated tick.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

pub fn update_world_time(mut time: ResMut<WorldTime>) {
    time.tick += 1;
}
