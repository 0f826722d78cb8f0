//! Spring.
//!
//! Launches an actor that lands on it. The subtype picks the launch speed.
//! After a launch the spring ignores that actor for [`COOLDOWN`] frames so
//! the actor can leave without colliding again, then returns to idle.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::actor::Actor;
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
use crate::objects::{spawn_object, table_entry};

pub const STRENGTHS: [i16; 2] = [-0x1000, -0x0A00];
pub const COOLDOWN: i16 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpringState {
    Idle,
    Launched,
}

#[derive(Component, Clone, Debug)]
pub struct Spring {
    pub phase: Phase<SpringState>,
    pub cooldown: Countdown,
    pub strength: i16,
}

pub fn bundle(subtype: u8, x: i32, y: i32) -> impl Bundle {
    let kind = ObjectKind::new(Kind::Spring, subtype);
    (
        kind,
        MapPosition::new(x, y),
        Spring {
            phase: Phase::new(SpringState::Idle),
            cooldown: Countdown::default(),
            strength: table_entry(&STRENGTHS, kind.low_nibble(), Kind::Spring),
        },
        SolidBody::new(16, 8),
        SolidContacts::default(),
        Sprite::new(Kind::Spring.sheet(), 16, 8),
        AnimationPlayer::new("spring_idle"),
    )
}

pub fn spawn(commands: &mut Commands, subtype: u8, x: i32, y: i32) -> Entity {
    spawn_object(commands, Kind::Spring, bundle(subtype, x, y))
}

pub fn spring_on_contact(
    mut query: Query<
        (
            &mut Spring,
            &mut SolidBody,
            &SolidContacts,
            &mut AnimationPlayer,
        ),
        Without<Destroyed>,
    >,
    mut actors: Query<&mut Actor>,
    mut sounds: MessageWriter<SoundCmd>,
) {
    for (mut spring, mut body, contacts, mut animation) in query.iter_mut() {
        if !spring.phase.is(SpringState::Idle) {
            continue;
        }
        let Some(actor_entity) = contacts.standing().next() else {
            continue;
        };
        let Ok(mut actor) = actors.get_mut(actor_entity) else {
            continue;
        };
        actor.launch(spring.strength);
        debug!("spring launched {:?} at {:#x}", actor_entity, spring.strength);

        body.exempt = Some(actor_entity);
        spring.cooldown.set(COOLDOWN);
        spring.phase.transition_to(SpringState::Launched);
        animation.play("spring_bounce");
        sounds.write(SoundCmd::new(SoundEffect::Spring));
    }
}

pub fn spring_update(mut query: Query<(&mut Spring, &mut SolidBody), Without<Destroyed>>) {
    for (mut spring, mut body) in query.iter_mut() {
        if spring.phase.is(SpringState::Launched) && spring.cooldown.tick_negative() {
            spring.phase.transition_to(SpringState::Idle);
            body.exempt = None;
        }
        spring.phase.tick();
    }
}
