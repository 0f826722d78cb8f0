//! Object lifecycle events.
//!
//! [`ObjectSpawned`] is triggered by [`crate::objects::spawn_object`] for
//! every object placed by the level loader or spawned by another object.
//! [`ObjectDestroyed`] is triggered by
//! [`crate::systems::lifecycle::reap_destroyed`] when a marked object is
//! despawned at the end of a frame.
//!
//! The observers here keep [`SimStats`] current; register them with
//! `world.add_observer`.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::objectkind::Kind;
use crate::resources::stats::SimStats;

#[derive(Event, Debug, Clone, Copy)]
pub struct ObjectSpawned {
    pub entity: Entity,
    pub kind: Kind,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ObjectDestroyed {
    pub entity: Entity,
    pub kind: Option<Kind>,
}

pub fn observe_object_spawned(trigger: On<ObjectSpawned>, stats: Option<ResMut<SimStats>>) {
    let event = trigger.event();
    trace!("spawned {:?} {:?}", event.kind, event.entity);
    if let Some(mut stats) = stats {
        stats.spawned += 1;
    }
}

pub fn observe_object_destroyed(trigger: On<ObjectDestroyed>, stats: Option<ResMut<SimStats>>) {
    let event = trigger.event();
    trace!("destroyed {:?} {:?}", event.kind, event.entity);
    if let Some(mut stats) = stats {
        stats.destroyed += 1;
    }
}
