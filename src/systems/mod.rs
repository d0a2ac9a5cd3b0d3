//! Game systems.
//!
//! This module groups all ECS systems that advance the simulation, plus the
//! render snapshot extraction. The tick schedule built in
//! [`crate::game::build_schedule`] chains them in this order:
//!
//! 1. [`time`] – bump the tick counter
//! 2. [`playercontroller`] – move the player from input and trigger repel
//! 3. [`camera`] – recenter every entity on the player and scroll the background
//! 4. [`collision`] – push the player out of walls
//! 5. [`enemy`] – flee/pursue step, wall collisions and the loss check
//!
//! Also:
//! - [`gamestate`] – run condition gating the schedule on "still playing"
//! - [`render`] – copy out a frame for an external renderer

pub mod camera;
pub mod collision;
pub mod enemy;
pub mod gamestate;
pub mod playercontroller;
pub mod render;
pub mod time;
