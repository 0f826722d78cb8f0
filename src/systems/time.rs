//! Frame counter update.
use bevy_ecs::prelude::*;

use crate::resources::frametick::FrameTick;

/// Advances [`FrameTick`] by one. Called once before each run of the frame
/// schedule.
pub fn update_frame_tick(world: &mut World) {
    let mut tick = world.resource_mut::<FrameTick>();
    tick.frame += 1;
}
