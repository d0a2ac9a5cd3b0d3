//! Sprite-sheet source offset.
//!
//! Purely visual: the player controller writes a facing hint here when a
//! direction key is held and the animation writes the current frame column.
//! Renderers cut the sprite at `(x, y)` out of the entity's sheet.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Top-left pixel of the current sprite inside its sheet.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSource {
    pub x: i32,
    pub y: i32,
}

impl SpriteSource {
    /// Sheet row used while walking left.
    pub const LEFT_ROW: i32 = 64;
    /// Sheet row used while walking right.
    pub const RIGHT_ROW: i32 = 32;
    /// Sheet column used while walking up.
    pub const UP_COLUMN: i32 = 128;
    /// Sheet column used while walking down.
    pub const DOWN_COLUMN: i32 = 96;
}
