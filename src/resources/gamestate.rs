//! High-level game state resource.
//!
//! Tracks whether the round is still running. The only transition inside a
//! round is [`GameStates::Playing`] to [`GameStates::Caught`], applied by
//! `crate::events::caught::observe_player_caught`. Starting a new round
//! rebuilds the whole world, state included.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

/// Discrete high-level states the game can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStates {
    #[default]
    Playing,
    /// An enemy touched the player. No more ticks are simulated.
    Caught,
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::Playing`].
    pub fn new() -> Self {
        Self::default()
    }
    /// Read-only access to the current state.
    pub fn get(&self) -> GameStates {
        self.current
    }
    /// Update the current state immediately.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
    /// The "still playing" outcome flag.
    pub fn is_playing(&self) -> bool {
        self.current == GameStates::Playing
    }
}
