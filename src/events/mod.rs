//! Event types and observers used by the game.
//!
//! Events let a system announce an outcome without reaching into resources
//! it does not own. Observers are registered when the world is built.
//!
//! Submodules:
//! - [`caught`] – an enemy reached the player; ends the round
pub mod caught;
