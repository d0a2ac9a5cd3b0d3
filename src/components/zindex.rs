//! Z-index component for render ordering.
//!
//! The [`ZIndex`] component is the draw layer of an entity. Ground tiles use
//! [`ZIndex::GROUND`]; players, enemies and obstacles use
//! [`ZIndex::ACTORS`]. It has no effect on the simulation.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing.
///
/// Higher values are drawn later (on top). Entities on the same layer keep
/// their spawn order.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const GROUND: ZIndex = ZIndex(0);
    pub const ACTORS: ZIndex = ZIndex(1);
}
