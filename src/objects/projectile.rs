//! Shooter projectile.
//!
//! Spawned held at the shooter's muzzle, it waits for the shooter's released
//! flag and then flies straight at [`SPEED`] until its lifespan runs out, it
//! leaves the active range, or it hits an actor. The harmful hitbox is
//! handled by [`crate::systems::collision::hurt_on_touch`].

use bevy_ecs::prelude::*;

use crate::components::animation::AnimationPlayer;
use crate::components::contact::TouchContacts;
use crate::components::culloffscreen::CullOffscreen;
use crate::components::destroyed::Destroyed;
use crate::components::hitbox::{HitKind, Hitbox};
use crate::components::lifespan::Lifespan;
use crate::components::mapposition::MapPosition;
use crate::components::motion::Motion;
use crate::components::objectkind::{Kind, ObjectKind};
use crate::components::parent::ParentObject;
use crate::components::phase::Phase;
use crate::components::sprite::Sprite;
use crate::objects::shooter::Shooter;
use crate::objects::spawn_object;

pub const SPEED: i16 = 0x200;
pub const LIFESPAN: i16 = 180;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectileState {
    Held,
    Flying,
}

#[derive(Component, Clone, Debug)]
pub struct Projectile {
    pub phase: Phase<ProjectileState>,
    pub facing_right: bool,
}

fn velocity(facing_right: bool) -> i16 {
    if facing_right { SPEED } else { -SPEED }
}

fn base_bundle(state: ProjectileState, x: i32, y: i32, facing_right: bool) -> impl Bundle {
    let motion = match state {
        ProjectileState::Held => Motion::default().frozen(),
        ProjectileState::Flying => Motion::new(velocity(facing_right), 0),
    };
    (
        ObjectKind::new(Kind::Projectile, 0),
        MapPosition::new(x, y),
        Projectile {
            phase: Phase::new(state),
            facing_right,
        },
        motion,
        Hitbox::new(4, 4, HitKind::Harmful),
        TouchContacts::default(),
        Sprite::new(Kind::Projectile.sheet(), 4, 4)
            .with_priority(4)
            .with_flip_h(!facing_right),
        AnimationPlayer::new("projectile"),
        CullOffscreen,
    )
}

pub fn spawn_held(
    commands: &mut Commands,
    shooter: Entity,
    x: i32,
    y: i32,
    facing_right: bool,
) -> Entity {
    spawn_object(
        commands,
        Kind::Projectile,
        (
            base_bundle(ProjectileState::Held, x, y, facing_right),
            ParentObject(shooter),
        ),
    )
}

pub fn spawn_flying(commands: &mut Commands, x: i32, y: i32, facing_right: bool) -> Entity {
    spawn_object(
        commands,
        Kind::Projectile,
        (
            base_bundle(ProjectileState::Flying, x, y, facing_right),
            Lifespan::new(LIFESPAN),
        ),
    )
}

pub fn projectile_update(
    mut commands: Commands,
    mut query: Query<
        (Entity, &mut Projectile, &mut Motion, Option<&ParentObject>),
        Without<Destroyed>,
    >,
    shooters: Query<&Shooter, Without<Destroyed>>,
) {
    for (entity, mut projectile, mut motion, parent) in query.iter_mut() {
        if projectile.phase.is(ProjectileState::Held) {
            let released = parent
                .and_then(|parent| shooters.get(parent.entity()).ok())
                .is_some_and(|shooter| shooter.has_released());
            if released {
                projectile.phase.transition_to(ProjectileState::Flying);
                motion.frozen = false;
                motion.x_vel = velocity(projectile.facing_right);
                commands.entity(entity).insert(Lifespan::new(LIFESPAN));
            }
        }
        projectile.phase.tick();
    }
}

/// Removes a projectile once it has hit an actor.
pub fn projectile_on_touch(
    mut commands: Commands,
    query: Query<(Entity, &TouchContacts), (With<Projectile>, Without<Destroyed>)>,
) {
    for (entity, touches) in query.iter() {
        if !touches.actors.is_empty() {
            commands.entity(entity).insert(Destroyed);
        }
    }
}
