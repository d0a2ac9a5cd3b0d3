//! Pursue/flee state machine for enemies.
//!
//! An enemy starts out [`EnemyState::Pursuing`]. The player's repel action
//! switches it to [`EnemyState::Fleeing`] and arms a countdown measured in
//! ticks. While the countdown runs the enemy moves with a negative speed,
//! which turns the chase step into a retreat. Once a tick starts with the
//! countdown spent, the enemy goes back to pursuit speed.
//!
//! # Related
//!
//! - [`crate::systems::enemy`] – runs [`EnemyBehavior::begin_tick`] and the movement step
//! - [`crate::systems::playercontroller`] – calls [`EnemyBehavior::flee`] on repel

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::components::speed::Speed;
use crate::resources::gameconfig::EnemyTuning;

/// Behavior state of an enemy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    #[default]
    Pursuing,
    Fleeing,
}

/// Per-enemy state machine component.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnemyBehavior {
    pub state: EnemyState,
    /// Ticks of fleeing left. Never negative.
    pub flee_timer: i32,
}

impl EnemyBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fleeing(&self) -> bool {
        self.state == EnemyState::Fleeing
    }

    /// Start (or restart) fleeing. A second call while already fleeing
    /// resets the countdown rather than extending it.
    pub fn flee(&mut self, speed: &mut Speed, tuning: &EnemyTuning) {
        self.state = EnemyState::Fleeing;
        self.flee_timer = tuning.flee_ticks;
        speed.0 = tuning.flee_speed;
    }

    /// Advance the countdown at the start of a tick, before the enemy moves.
    pub fn begin_tick(&mut self, speed: &mut Speed, tuning: &EnemyTuning) {
        if self.flee_timer <= 0 {
            self.state = EnemyState::Pursuing;
            speed.0 = tuning.pursue_speed;
        } else {
            self.flee_timer = (self.flee_timer - tuning.flee_decay).max(0);
            self.state = EnemyState::Fleeing;
            speed.0 = tuning.flee_speed;
        }
    }
}
