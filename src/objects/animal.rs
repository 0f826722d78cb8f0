//! Freed animal.
//!
//! Caged animals wait inside their capsule until it reports itself
//! activated, count down their own release delay, then pop upward and fall.
//! On touching the floor they become walkers or fliers depending on their
//! species and keep bouncing along it, turning at walls.
//!
//! A capsule that no longer exists, or is marked destroyed, counts as not
//! activated, so orphaned animals stay caged until they are culled.

use bevy_ecs::prelude::*;

use crate::components::animation::AnimationPlayer;
use crate::components::culloffscreen::CullOffscreen;
use crate::components::destroyed::Destroyed;
use crate::components::mapposition::MapPosition;
use crate::components::motion::Motion;
use crate::components::objectkind::{Kind, ObjectKind};
use crate::components::parent::ParentObject;
use crate::components::phase::Phase;
use crate::components::sprite::Sprite;
use crate::components::timer::Countdown;
use crate::objects::capsule::Capsule;
use crate::objects::{spawn_object, table_entry};
use crate::resources::terrain::Terrain;

pub const RELEASE_Y_VEL: i16 = -0x400;
pub const FALL_GRAVITY: i16 = 0x38;
pub const Y_RADIUS: i32 = 12;
pub const FLOOR_PROBE_RANGE: i32 = 16;
pub const WALL_PROBE_RANGE: i32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Species {
    pub x_speed: i16,
    pub bounce: i16,
    pub gravity: i16,
    pub flies: bool,
}

pub const SPECIES: [Species; 3] = [
    Species {
        x_speed: 0x200,
        bounce: -0x400,
        gravity: 0x38,
        flies: false,
    },
    Species {
        x_speed: 0x180,
        bounce: -0x300,
        gravity: 0x38,
        flies: false,
    },
    Species {
        x_speed: 0x300,
        bounce: -0x300,
        gravity: 0x18,
        flies: true,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimalState {
    Prison,
    Fall,
    Walk,
    Fly,
}

#[derive(Component, Clone, Debug)]
pub struct Animal {
    pub phase: Phase<AnimalState>,
    pub delay: Countdown,
    pub species: Species,
    pub facing_right: bool,
}

fn base_bundle(state: AnimalState, subtype: u8, x: i32, y: i32, delay: i16, facing_right: bool) -> impl Bundle {
    let motion = match state {
        AnimalState::Prison => Motion::default().frozen(),
        _ => Motion::default().with_gravity(FALL_GRAVITY),
    };
    (
        ObjectKind::new(Kind::Animal, subtype),
        MapPosition::new(x, y),
        Animal {
            phase: Phase::new(state),
            delay: Countdown::new(delay),
            species: table_entry(&SPECIES, subtype as usize, Kind::Animal),
            facing_right,
        },
        motion,
        Sprite::new(Kind::Animal.sheet(), 8, Y_RADIUS).with_flip_h(!facing_right),
        AnimationPlayer::new("animal_prison"),
        CullOffscreen,
    )
}

/// Spawns an animal caged in `capsule`, leaving `delay` frames after the
/// capsule activates.
pub fn spawn_caged(
    commands: &mut Commands,
    capsule: Entity,
    species: u8,
    x: i32,
    y: i32,
    delay: i16,
    facing_right: bool,
) -> Entity {
    spawn_object(
        commands,
        Kind::Animal,
        (
            base_bundle(AnimalState::Prison, species, x, y, delay, facing_right),
            ParentObject(capsule),
        ),
    )
}

/// Spawns an animal that starts falling immediately.
pub fn spawn_free(commands: &mut Commands, species: u8, x: i32, y: i32, facing_right: bool) -> Entity {
    spawn_object(
        commands,
        Kind::Animal,
        base_bundle(AnimalState::Fall, species, x, y, 0, facing_right),
    )
}

pub fn animal_update(
    mut query: Query<
        (
            &mut Animal,
            &mut Motion,
            &mut MapPosition,
            Option<&ParentObject>,
            &mut AnimationPlayer,
            &mut Sprite,
        ),
        Without<Destroyed>,
    >,
    capsules: Query<&Capsule, Without<Destroyed>>,
    terrain: Option<Res<Terrain>>,
) {
    for (mut animal, mut motion, mut position, parent, mut animation, mut sprite) in
        query.iter_mut()
    {
        match animal.phase.current() {
            AnimalState::Prison => {
                let activated = parent
                    .and_then(|parent| capsules.get(parent.entity()).ok())
                    .is_some_and(|capsule| capsule.is_activated());
                if activated && animal.delay.tick_negative() {
                    animal.phase.transition_to(AnimalState::Fall);
                    motion.frozen = false;
                    motion.x_vel = 0;
                    motion.y_vel = RELEASE_Y_VEL;
                    motion.gravity = FALL_GRAVITY;
                }
            }
            AnimalState::Fall | AnimalState::Walk | AnimalState::Fly => {
                let Some(terrain) = terrain.as_ref() else {
                    animal.phase.tick();
                    continue;
                };

                let floor =
                    terrain
                        .0
                        .floor_distance(position.x, position.y + Y_RADIUS, FLOOR_PROBE_RANGE);
                if let Some(probe) = floor
                    && motion.y_vel >= 0
                    && probe.distance < 0
                {
                    position.y += probe.distance;
                    if animal.phase.is(AnimalState::Fall) {
                        let species = animal.species;
                        let (next, script) = if species.flies {
                            (AnimalState::Fly, "animal_fly")
                        } else {
                            (AnimalState::Walk, "animal_walk")
                        };
                        animal.phase.transition_to(next);
                        animation.play(script);
                        motion.gravity = species.gravity;
                        motion.x_vel = if animal.facing_right {
                            species.x_speed
                        } else {
                            -species.x_speed
                        };
                    }
                    motion.y_vel = animal.species.bounce;
                    motion.y_sub = 0;
                }

                if !animal.phase.is(AnimalState::Fall) {
                    let wall = terrain.0.wall_distance(
                        position.x,
                        position.y,
                        animal.facing_right,
                        WALL_PROBE_RANGE,
                    );
                    if wall.is_some_and(|probe| probe.distance <= 0) {
                        animal.facing_right = !animal.facing_right;
                        motion.x_vel = -motion.x_vel;
                        sprite.flip_h = !animal.facing_right;
                    }
                }
            }
        }
        animal.phase.tick();
    }
}
