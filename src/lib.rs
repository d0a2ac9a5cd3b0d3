//! Tilechase library.
//!
//! A tile-based chase game simulated on `bevy_ecs`: the player walks a map
//! of walls, stones and ground tiles, the camera keeps them centered, and
//! enemies home in until they touch the player. Repelling sends nearby
//! enemies running for a few seconds.
//!
//! The modules are exposed for the binary and for integration tests.
//!
//! - [`components`] – per-entity data (rectangles, speed, enemy behavior, animation)
//! - [`events`] – the "player caught" event and its observer
//! - [`game`] – world construction and the per-tick schedule
//! - [`map`] – text map parsing
//! - [`resources`] – config, input, viewport, background and round state
//! - [`systems`] – the tick systems and render snapshot extraction

pub mod components;
pub mod events;
#[cfg(feature = "window")]
pub mod frontend;
pub mod game;
pub mod map;
pub mod resources;
pub mod systems;
