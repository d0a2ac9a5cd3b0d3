//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. Every entity gets a [`rect::Rect`], a [`zindex::ZIndex`]
//! and one role marker from [`role`]; movers add speed and behavior.
//!
//! Submodules overview:
//! - [`animation`] – distance-driven walk cycle for the player sprite
//! - [`enemybehavior`] – pursue/flee state machine for enemies
//! - [`rect`] – integer AABB position and size
//! - [`role`] – player/enemy/obstacle/ground markers
//! - [`speed`] – signed per-tick displacement, also the collision tolerance
//! - [`spritesource`] – sprite-sheet offset hint for renderers
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod enemybehavior;
pub mod rect;
pub mod role;
pub mod speed;
pub mod spritesource;
pub mod zindex;
