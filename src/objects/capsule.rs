//! Animal capsule.
//!
//! On its first update the capsule spawns its [`Button`] on top. Pressing
//! the button starts the opening: a burst of sparkles and eight caged
//! animals spawn, and [`OPEN_DELAY`] frames later the capsule reports itself
//! activated. Each animal polls that flag and leaves after its own
//! staggered delay.

use arrayvec::ArrayVec;
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::animation::AnimationPlayer;
use crate::components::contact::SolidContacts;
use crate::components::destroyed::Destroyed;
use crate::components::mapposition::MapPosition;
use crate::components::objectkind::{Kind, ObjectKind};
use crate::components::phase::Phase;
use crate::components::solidbody::SolidBody;
use crate::components::sprite::Sprite;
use crate::components::timer::Countdown;
use crate::events::audio::{SoundCmd, SoundEffect};
use crate::objects::button::{self, Button};
use crate::objects::{animal, sparkle, spawn_object, table_entry};

pub const HALF_WIDTH: i32 = 32;
pub const HALF_HEIGHT: i32 = 24;
pub const OPEN_DELAY: i16 = 30;
pub const ANIMAL_COUNT: usize = 8;
/// Frames between consecutive animals leaving.
pub const ANIMAL_STAGGER: i16 = 8;
pub const SPARKLE_COUNT: u8 = 8;
pub const SPARKLE_ANGLE_STEP: u8 = 32;
/// Species pairs released by each capsule subtype.
pub const SPECIES_PAIRS: [[u8; 2]; 3] = [[0, 1], [1, 2], [0, 2]];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapsuleState {
    Init,
    Closed,
    Opening,
    Open,
}

#[derive(Component, Clone, Debug)]
pub struct Capsule {
    pub phase: Phase<CapsuleState>,
    pub timer: Countdown,
    pub button: Option<Entity>,
    pub animals: ArrayVec<Entity, ANIMAL_COUNT>,
    activated: bool,
}

impl Capsule {
    /// True once the capsule has fully opened.
    pub fn is_activated(&self) -> bool {
        self.activated
    }
}

pub fn bundle(subtype: u8, x: i32, y: i32) -> impl Bundle {
    (
        ObjectKind::new(Kind::Capsule, subtype),
        MapPosition::new(x, y),
        Capsule {
            phase: Phase::new(CapsuleState::Init),
            timer: Countdown::default(),
            button: None,
            animals: ArrayVec::new(),
            activated: false,
        },
        SolidBody::new(HALF_WIDTH, HALF_HEIGHT),
        SolidContacts::default(),
        Sprite::new(Kind::Capsule.sheet(), HALF_WIDTH, HALF_HEIGHT),
        AnimationPlayer::new("capsule_closed"),
    )
}

pub fn spawn(commands: &mut Commands, subtype: u8, x: i32, y: i32) -> Entity {
    spawn_object(commands, Kind::Capsule, bundle(subtype, x, y))
}

/// Y of the button center sitting on the capsule at `capsule_y`.
pub fn button_y(capsule_y: i32) -> i32 {
    capsule_y - HALF_HEIGHT - button::HALF_HEIGHT
}

pub fn capsule_update(
    mut commands: Commands,
    mut query: Query<
        (
            Entity,
            &mut Capsule,
            &MapPosition,
            &ObjectKind,
            &mut AnimationPlayer,
        ),
        Without<Destroyed>,
    >,
    buttons: Query<&Button>,
    mut sounds: MessageWriter<SoundCmd>,
) {
    for (entity, mut capsule, position, kind, mut animation) in query.iter_mut() {
        match capsule.phase.current() {
            CapsuleState::Init => {
                let button =
                    button::spawn(&mut commands, position.x, button_y(position.y), Some(entity));
                capsule.button = Some(button);
                capsule.phase.transition_to(CapsuleState::Closed);
            }
            CapsuleState::Closed => {
                let pressed = capsule
                    .button
                    .and_then(|button| buttons.get(button).ok())
                    .is_some_and(|button| button.pressed);
                if pressed {
                    debug!("capsule {:?} opening", entity);
                    capsule.phase.transition_to(CapsuleState::Opening);
                    capsule.timer.set(OPEN_DELAY);
                    animation.play("capsule_opening");
                    sounds.write(SoundCmd::new(SoundEffect::CapsuleExplode));
                    release_contents(&mut commands, entity, &mut capsule, *position, kind);
                }
            }
            CapsuleState::Opening => {
                if capsule.timer.tick_negative() {
                    capsule.phase.transition_to(CapsuleState::Open);
                    capsule.activated = true;
                    animation.play("capsule_open");
                    sounds.write(SoundCmd::new(SoundEffect::CapsuleOpen));
                }
            }
            CapsuleState::Open => {}
        }
        capsule.phase.tick();
    }
}

fn release_contents(
    commands: &mut Commands,
    entity: Entity,
    capsule: &mut Capsule,
    position: MapPosition,
    kind: &ObjectKind,
) {
    for index in 0..SPARKLE_COUNT {
        sparkle::spawn(
            commands,
            position.x,
            position.y,
            index * SPARKLE_ANGLE_STEP,
            sparkle::START_RADIUS,
        );
    }

    let species = table_entry(&SPECIES_PAIRS, kind.subtype as usize, Kind::Capsule);
    for index in 0..ANIMAL_COUNT {
        let x = position.x - HALF_WIDTH / 2 + (index as i32) * (HALF_WIDTH / ANIMAL_COUNT as i32);
        let animal = animal::spawn_caged(
            commands,
            entity,
            species[index % 2],
            x,
            position.y,
            index as i16 * ANIMAL_STAGGER,
            x >= position.x,
        );
        if capsule.animals.try_push(animal).is_err() {
            warn!("capsule {:?} cannot track more animals", entity);
        }
    }
}
