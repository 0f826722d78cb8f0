//! Shooter turret.
//!
//! Sits idle until the main actor comes within [`ENTER_RANGE`] pixels on both
//! axes, then turns toward it and charges a projectile held at the muzzle.
//! When the charge runs out the shooter raises its released flag, which the
//! held projectile polls to start flying, and cools down for a
//! subtype-dependent time. It keeps firing while the actor stays inside
//! [`EXIT_RANGE`].

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::actor::{Actor, MainActor};
use crate::components::animation::AnimationPlayer;
use crate::components::destroyed::Destroyed;
use crate::components::mapposition::MapPosition;
use crate::components::objectkind::{Kind, ObjectKind};
use crate::components::phase::Phase;
use crate::components::proximity::ProximityGate;
use crate::components::sprite::Sprite;
use crate::components::timer::Countdown;
use crate::events::audio::{SoundCmd, SoundEffect};
use crate::objects::{projectile, spawn_object, table_entry};

pub const ENTER_RANGE: i32 = 64;
pub const EXIT_RANGE: i32 = 96;
pub const CHARGE_FRAMES: i16 = 20;
pub const COOLDOWNS: [i16; 3] = [60, 90, 120];
pub const MUZZLE_OFFSET: i32 = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShooterState {
    Idle,
    Charging,
    Cooldown,
}

#[derive(Component, Clone, Debug)]
pub struct Shooter {
    pub phase: Phase<ShooterState>,
    pub timer: Countdown,
    pub gate: ProximityGate,
    pub cooldown: i16,
    pub facing_right: bool,
    pub projectile: Option<Entity>,
    released: bool,
}

impl Shooter {
    /// True from the end of a charge until the next charge starts.
    pub fn has_released(&self) -> bool {
        self.released
    }
}

pub fn bundle(subtype: u8, x: i32, y: i32) -> impl Bundle {
    let kind = ObjectKind::new(Kind::Shooter, subtype);
    (
        kind,
        MapPosition::new(x, y),
        Shooter {
            phase: Phase::new(ShooterState::Idle),
            timer: Countdown::default(),
            gate: ProximityGate::new(ENTER_RANGE, EXIT_RANGE),
            cooldown: table_entry(&COOLDOWNS, kind.subtype as usize, Kind::Shooter),
            facing_right: false,
            projectile: None,
            released: false,
        },
        Sprite::new(Kind::Shooter.sheet(), 16, 16).with_flip_h(true),
        AnimationPlayer::new("shooter_idle"),
    )
}

pub fn spawn(commands: &mut Commands, subtype: u8, x: i32, y: i32) -> Entity {
    spawn_object(commands, Kind::Shooter, bundle(subtype, x, y))
}

pub fn shooter_update(
    mut commands: Commands,
    mut query: Query<
        (
            Entity,
            &mut Shooter,
            &MapPosition,
            &mut AnimationPlayer,
            &mut Sprite,
        ),
        Without<Destroyed>,
    >,
    actors: Query<&Actor, With<MainActor>>,
    mut sounds: MessageWriter<SoundCmd>,
) {
    let target = actors.iter().next().map(|actor| (actor.x, actor.y));

    for (entity, mut shooter, position, mut animation, mut sprite) in query.iter_mut() {
        let engaged = match target {
            Some((x, y)) => shooter.gate.update(x - position.x, y - position.y),
            None => {
                shooter.gate.release();
                false
            }
        };
        let facing_right = target.is_some_and(|(x, _)| x >= position.x);

        let charge = match shooter.phase.current() {
            ShooterState::Idle => engaged,
            ShooterState::Charging => {
                if shooter.timer.tick_negative() {
                    shooter.released = true;
                    let cooldown = shooter.cooldown;
                    shooter.timer.set(cooldown);
                    shooter.phase.transition_to(ShooterState::Cooldown);
                    animation.play("shooter_idle");
                    sounds.write(SoundCmd::new(SoundEffect::Shoot));
                }
                false
            }
            ShooterState::Cooldown => {
                let expired = shooter.timer.tick_negative();
                if expired && !engaged {
                    shooter.released = false;
                    shooter.phase.transition_to(ShooterState::Idle);
                }
                expired && engaged
            }
        };

        if charge {
            debug!("shooter {:?} charging", entity);
            shooter.released = false;
            shooter.facing_right = facing_right;
            shooter.timer.set(CHARGE_FRAMES);
            shooter.phase.transition_to(ShooterState::Charging);
            animation.play("shooter_charge");
            sprite.flip_h = !facing_right;
            let muzzle_x = if facing_right {
                position.x + MUZZLE_OFFSET
            } else {
                position.x - MUZZLE_OFFSET
            };
            shooter.projectile = Some(projectile::spawn_held(
                &mut commands,
                entity,
                muzzle_x,
                position.y,
                facing_right,
            ));
        }
        shooter.phase.tick();
    }
}
