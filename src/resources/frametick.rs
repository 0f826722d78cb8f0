use bevy_ecs::prelude::Resource;

/// Number of simulated frames since the simulation started.
///
/// Advanced by [`crate::systems::time::update_frame_tick`] before the frame
/// schedule runs, so every system in a frame sees the same value.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameTick {
    pub frame: u64,
}
