//! Distance-driven sprite animation.
//!
//! Unlike a time-based animation, [`Animation`] advances by how far the
//! entity moved: the camera feeds it the horizontal scroll delta each tick.
//! Standing still keeps the current frame.

use bevy_ecs::prelude::Component;
use smallvec::SmallVec;

/// Animation playback state for an entity with a [`SpriteSource`](crate::components::spritesource::SpriteSource).
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Animation {
    /// Accumulated distance since the last wrap.
    pub counter: i32,
    /// Distance covered per frame. Always positive.
    pub frame_duration: i32,
    /// Sheet x offset of each frame.
    pub frames: SmallVec<[i32; 4]>,
    pub current_frame: usize,
}

impl Animation {
    /// Two-frame walk cycle used by the player sheet.
    pub fn walk_cycle(frame_duration: i32) -> Self {
        Self::new(frame_duration, [0, 32])
    }

    pub fn new(frame_duration: i32, frames: impl IntoIterator<Item = i32>) -> Self {
        let frames: SmallVec<[i32; 4]> = frames.into_iter().collect();
        debug_assert!(frame_duration > 0, "frame duration must be positive");
        debug_assert!(!frames.is_empty(), "animation needs at least one frame");
        Self {
            counter: 0,
            frame_duration,
            frames,
            current_frame: 0,
        }
    }

    /// Sheet x offset of the frame on display.
    pub fn frame_offset(&self) -> i32 {
        self.frames[self.current_frame]
    }

    /// Feed a movement delta. Returns the new frame's sheet offset when the
    /// frame changed.
    pub fn advance(&mut self, distance: i32) -> Option<i32> {
        self.counter += distance.abs();
        let frame_count = self.frames.len();
        let new_frame = round_half_even(self.counter, self.frame_duration) as usize % frame_count;
        if new_frame == self.current_frame {
            return None;
        }
        self.current_frame = new_frame;
        self.counter %= frame_count as i32 * self.frame_duration;
        Some(self.frame_offset())
    }
}

/// `numerator / denominator` rounded to the nearest integer, ties to even.
/// Both operands are non-negative.
fn round_half_even(numerator: i32, denominator: i32) -> i32 {
    let quotient = numerator / denominator;
    let twice_remainder = 2 * (numerator % denominator);
    if twice_remainder > denominator || (twice_remainder == denominator && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}
