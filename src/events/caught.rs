//! Loss event and observer.
//!
//! The enemy system triggers [`PlayerCaughtEvent`] when an enemy rectangle
//! overlaps the player after moving. [`observe_player_caught`] flips
//! [`GameState`] to [`GameStates::Caught`], which clears the "still playing"
//! flag and stops the tick schedule from running again.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::worldtime::WorldTime;

/// Event fired when an enemy touches the player.
///
/// Several enemies may reach the player in the same tick; each fires its own
/// event and the observer is idempotent.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerCaughtEvent {
    pub enemy: Entity,
}

/// Global observer that ends the round.
pub fn observe_player_caught(
    trigger: On<PlayerCaughtEvent>,
    mut game_state: ResMut<GameState>,
    time: Res<WorldTime>,
) {
    if !game_state.is_playing() {
        return;
    }
    info!(
        "Player caught by {:?} at tick {}",
        trigger.event().enemy,
        time.tick
    );
    game_state.set(GameStates::Caught);
}
