//! Viewport size resource.
//!
//! Stores the visible region in pixels. The camera keeps the player centered
//! in it and enemies home in on its center.

use bevy_ecs::prelude::Resource;

/// Visible region in pixels, origin at the top-left corner.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl Viewport {
    pub fn center(&self) -> (i32, i32) {
        (self.w / 2, self.h / 2)
    }
}
