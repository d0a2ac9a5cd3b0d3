use crate::resources::gamestate::GameState;
use bevy_ecs::prelude::*;

/// Run condition: the round is still being played.
pub fn state_is_playing(state: Res<GameState>) -> bool {
    state.is_playing()
}
