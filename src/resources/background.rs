//! Scrolling background offset.
//!
//! The background is one viewport-wide image drawn twice: once at
//! [`Background::x`] and once mirrored right next to it. The camera system
//! moves the offset by the scroll delta and wraps it into
//! `[-viewport_width, viewport_width]`, which makes the pair tile forever.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Background {
    /// Horizontal offset of the primary copy.
    pub x: i32,
}

/// Where to draw both copies of the background this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundLayout {
    /// Left edge of the unmirrored copy.
    pub primary_x: i32,
    /// Left edge of the horizontally mirrored copy.
    pub mirrored_x: i32,
}

impl Background {
    /// Add a scroll delta and wrap into `[-width, width]`.
    pub fn scroll(&mut self, delta: i32, width: i32) {
        self.x = wrap_background(self.x + delta, width);
    }

    /// Positions of both copies for a viewport `width` pixels wide.
    pub fn layout(&self, width: i32) -> BackgroundLayout {
        let mut mirrored_x = width + self.x;
        if self.x > 0 {
            mirrored_x -= 2 * width;
        }
        BackgroundLayout {
            primary_x: self.x,
            mirrored_x,
        }
    }
}

/// Past `+width` the offset restarts at `-width`, and the other way round.
pub fn wrap_background(x: i32, width: i32) -> i32 {
    if x > width {
        -width
    } else if x < -width {
        width
    } else {
        x
    }
}
