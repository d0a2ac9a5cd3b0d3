//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: configuration, input, timing, the
//! viewport and background scroll, and the ordered role groups. Each
//! submodule documents the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `background` – wrapping background scroll offset and its draw layout
//! - `gameconfig` – gameplay tuning loaded from an INI file
//! - `gamestate` – whether the round is still being played
//! - `group` – entities per role, in deterministic spawn order
//! - `input` – per-tick snapshot of the keys relevant to the game
//! - `viewport` – visible region size in pixels
//! - `worldtime` – simulation tick counter
pub mod background;
pub mod gameconfig;
pub mod gamestate;
pub mod group;
pub mod input;
pub mod viewport;
pub mod worldtime;
