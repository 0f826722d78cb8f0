//! Stand-in actor driver for the headless runner.
//!
//! In a full game the player character is simulated elsewhere and objects
//! only see it through [`Actor`]. The runner still needs something that
//! moves the actor around a level, so [`reference_actor_physics`] applies a
//! minimal version of the same fixed-point rules: sub-pixel integration,
//! gravity while airborne, and landing on the terrain floor.

use bevy_ecs::prelude::*;

use crate::components::actor::{Actor, MainActor};
use crate::fixedpoint::{apply_gravity, integrate};
use crate::resources::terrain::Terrain;
use crate::resources::viewport::Viewport;

pub const ACTOR_GRAVITY: i16 = 0x38;
pub const FLOOR_PROBE_RANGE: i32 = 16;

pub fn reference_actor_physics(mut actors: Query<&mut Actor>, terrain: Option<Res<Terrain>>) {
    for mut actor in actors.iter_mut() {
        actor.invulnerable = actor.invulnerable.saturating_sub(1);

        let (x, x_sub) = integrate(actor.x, actor.x_sub, actor.x_vel);
        actor.x = x;
        actor.x_sub = x_sub;

        // Objects carrying the actor keep it in place vertically.
        if actor.standing_on.is_some() {
            continue;
        }

        if actor.airborne {
            let (y, y_sub) = integrate(actor.y, actor.y_sub, actor.y_vel);
            actor.y = y;
            actor.y_sub = y_sub;
            actor.y_vel = apply_gravity(actor.y_vel, ACTOR_GRAVITY);
        }

        let Some(terrain) = terrain.as_ref() else {
            continue;
        };
        match terrain.0.floor_distance(actor.x, actor.feet(), FLOOR_PROBE_RANGE) {
            Some(probe) if actor.airborne => {
                if actor.y_vel >= 0 && probe.distance <= 0 {
                    actor.y += probe.distance;
                    actor.y_sub = 0;
                    actor.y_vel = 0;
                    actor.airborne = false;
                    actor.hurt = false;
                }
            }
            Some(probe) => actor.y += probe.distance,
            None => actor.airborne = true,
        }
    }
}

/// Keeps the viewport centered on the [`MainActor`].
pub fn follow_main_actor(
    actors: Query<&Actor, With<MainActor>>,
    viewport: Option<ResMut<Viewport>>,
) {
    let (Some(actor), Some(mut viewport)) = (actors.iter().next(), viewport) else {
        return;
    };
    viewport.center_on(actor.x, actor.y);
}
