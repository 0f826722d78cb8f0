use bevy_ecs::prelude::Resource;

/// Running totals reported by the headless runner.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    pub spawned: u64,
    pub destroyed: u64,
}
