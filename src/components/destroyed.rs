//! Deferred destruction marker.
//!
//! Objects never despawn themselves in the middle of a frame. Marking an
//! entity [`Destroyed`] removes it from collision passes and updates from the
//! next system onwards, while contact records already delivered this frame
//! stay valid. [`crate::systems::lifecycle::reap_destroyed`] despawns marked
//! entities as the last step of the frame.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug)]
pub struct Destroyed;
