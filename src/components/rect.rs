//! Integer axis-aligned rectangle component.
//!
//! Every entity in the world carries a [`Rect`]. Positions are in screen
//! pixels: the camera moves every rectangle each tick instead of keeping a
//! separate world/view transform.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with its origin at the top-left corner.
///
/// Width and height are always positive. Edge setters move the rectangle and
/// keep its size.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0, "rect size must be positive");
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> i32 {
        self.y
    }
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
    pub fn left(&self) -> i32 {
        self.x
    }
    pub fn right(&self) -> i32 {
        self.x + self.width
    }
    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }
    pub fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.height;
    }
    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }
    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.width;
    }

    /// Move by a delta on both axes.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Strict AABB overlap test. Rectangles that only share an edge do not
    /// overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
