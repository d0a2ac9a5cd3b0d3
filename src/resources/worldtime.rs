use bevy_ecs::prelude::Resource;

/// Simulation clock. The game runs on fixed ticks, so time is a counter.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorldTime {
    /// Ticks simulated since the world was built.
    pub tick: u64,
}
