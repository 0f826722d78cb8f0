//! Object lifecycle systems.
//!
//! Destruction is always deferred: systems mark entities with [`Destroyed`]
//! and [`reap_destroyed`], the last system of the frame, despawns them and
//! triggers [`ObjectDestroyed`]. Until then a marked entity still exists, so
//! children reading it and contact records naming it stay valid for the
//! rest of the frame.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::culloffscreen::CullOffscreen;
use crate::components::destroyed::Destroyed;
use crate::components::lifespan::Lifespan;
use crate::components::mapposition::MapPosition;
use crate::components::objectkind::ObjectKind;
use crate::events::lifecycle::ObjectDestroyed;
use crate::resources::viewport::Viewport;

/// Marks objects whose [`Lifespan`] ran out this frame.
pub fn lifespan_system(
    mut query: Query<(Entity, &mut Lifespan), Without<Destroyed>>,
    mut commands: Commands,
) {
    for (entity, mut lifespan) in query.iter_mut() {
        if lifespan.0.tick_negative() {
            commands.entity(entity).insert(Destroyed);
        }
    }
}

/// Marks [`CullOffscreen`] objects outside the viewport's active range.
pub fn offscreen_cull_system(
    query: Query<(Entity, &MapPosition), (With<CullOffscreen>, Without<Destroyed>)>,
    viewport: Option<Res<Viewport>>,
    mut commands: Commands,
) {
    let Some(viewport) = viewport else {
        return;
    };
    for (entity, position) in query.iter() {
        if !viewport.in_active_range(position.x, position.y) {
            trace!("culling {:?} at ({}, {})", entity, position.x, position.y);
            commands.entity(entity).insert(Destroyed);
        }
    }
}

/// Despawns every object marked [`Destroyed`].
pub fn reap_destroyed(
    query: Query<(Entity, Option<&ObjectKind>), With<Destroyed>>,
    mut commands: Commands,
) {
    for (entity, kind) in query.iter() {
        commands.entity(entity).try_despawn();
        commands.trigger(ObjectDestroyed {
            entity,
            kind: kind.map(|k| k.kind),
        });
    }
}
