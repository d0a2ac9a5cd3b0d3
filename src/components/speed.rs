use bevy_ecs::prelude::Component;

/// Signed per-tick displacement of a moving entity.
///
/// The magnitude doubles as the collision tolerance. A negative value makes
/// an enemy run away from the point it would otherwise chase.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Speed(pub i32);

impl Speed {
    /// Collision margin for this speed.
    pub fn tolerance(&self) -> i32 {
        self.0.abs()
    }
}
