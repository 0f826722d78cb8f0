//! Frame-limited lifetime.
//!
//! [`Lifespan`] counts object updates and marks the entity
//! [`Destroyed`](super::destroyed::Destroyed) on the update where the
//! counter first goes negative, so `Lifespan::new(n)` lives for `n + 1`
//! frames. See [`crate::systems::lifecycle::lifespan_system`].

use bevy_ecs::prelude::Component;

use crate::components::timer::Countdown;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lifespan(pub Countdown);

impl Lifespan {
    pub fn new(frames: i16) -> Self {
        Lifespan(Countdown::new(frames))
    }
}
