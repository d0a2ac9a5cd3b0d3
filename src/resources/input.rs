//! Per-tick input resource.
//!
//! The simulation never polls devices. Whoever drives the loop (the window
//! front end or the headless runner) fills a [`PressedKeys`] snapshot once per
//! tick, and [`InputState::apply`] copies it into the [`InputState`] resource
//! that systems read.
use bevy_ecs::prelude::*;

/// Raw snapshot of the keys held during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressedKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub repel: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean key state with its press edge.
pub struct BoolState {
    /// Whether the key is held this tick.
    pub active: bool,
    /// Whether the key went down this tick.
    pub just_pressed: bool,
}

impl BoolState {
    /// Record this tick's level and derive the press edge from the previous one.
    pub fn update(&mut self, active: bool) {
        self.just_pressed = active && !self.active;
        self.active = active;
    }
}

/// Resource capturing the per-tick input relevant to gameplay.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub up: BoolState,
    pub down: BoolState,
    pub repel: BoolState,
}

impl InputState {
    pub fn apply(&mut self, keys: &PressedKeys) {
        self.left.update(keys.left);
        self.right.update(keys.right);
        self.up.update(keys.up);
        self.down.update(keys.down);
        self.repel.update(keys.repel);
    }
}
