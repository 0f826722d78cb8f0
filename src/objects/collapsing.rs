//! Collapsing platform.
//!
//! A one-way platform that starts shaking when stood on and drops away once
//! its subtype-dependent delay has run out. The delay uses the
//! negative-crossing rule: with a delay of `n` the platform drops on the
//! `n + 1`th update, counting the one in the frame of first contact.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animation::AnimationPlayer;
use crate::components::contact::SolidContacts;
use crate::components::culloffscreen::CullOffscreen;
use crate::components::destroyed::Destroyed;
use crate::components::mapposition::MapPosition;
use crate::components::motion::Motion;
use crate::components::objectkind::{Kind, ObjectKind};
use crate::components::phase::Phase;
use crate::components::solidbody::SolidBody;
use crate::components::sprite::Sprite;
use crate::components::timer::Countdown;
use crate::events::audio::{SoundCmd, SoundEffect};
use crate::objects::{spawn_object, table_entry};

pub const DELAYS: [i16; 3] = [30, 15, 7];
pub const FALL_GRAVITY: i16 = 0x38;
pub const HALF_WIDTH: i32 = 32;
pub const HALF_HEIGHT: i32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollapseState {
    Idle,
    Shaking,
    Falling,
}

#[derive(Component, Clone, Debug)]
pub struct CollapsingPlatform {
    pub phase: Phase<CollapseState>,
    pub timer: Countdown,
    pub delay: i16,
}

pub fn bundle(subtype: u8, x: i32, y: i32) -> impl Bundle {
    (
        ObjectKind::new(Kind::CollapsingPlatform, subtype),
        MapPosition::new(x, y),
        CollapsingPlatform {
            phase: Phase::new(CollapseState::Idle),
            timer: Countdown::default(),
            delay: table_entry(&DELAYS, subtype as usize, Kind::CollapsingPlatform),
        },
        SolidBody::platform(HALF_WIDTH, HALF_HEIGHT),
        SolidContacts::default(),
        Motion::default().with_gravity(FALL_GRAVITY).frozen(),
        Sprite::new(Kind::CollapsingPlatform.sheet(), HALF_WIDTH, HALF_HEIGHT),
        AnimationPlayer::new("platform"),
        CullOffscreen,
    )
}

pub fn spawn(commands: &mut Commands, subtype: u8, x: i32, y: i32) -> Entity {
    spawn_object(commands, Kind::CollapsingPlatform, bundle(subtype, x, y))
}

pub fn collapsing_on_contact(
    mut query: Query<
        (
            &mut CollapsingPlatform,
            &SolidContacts,
            &mut AnimationPlayer,
        ),
        Without<Destroyed>,
    >,
) {
    for (mut platform, contacts, mut animation) in query.iter_mut() {
        if platform.phase.is(CollapseState::Idle) && contacts.any_standing() {
            let delay = platform.delay;
            platform.timer.set(delay);
            platform.phase.transition_to(CollapseState::Shaking);
            animation.play("platform_shake");
        }
    }
}

pub fn collapsing_update(
    mut query: Query<
        (
            Entity,
            &mut CollapsingPlatform,
            &mut SolidBody,
            &mut Motion,
            &mut AnimationPlayer,
        ),
        Without<Destroyed>,
    >,
    mut sounds: MessageWriter<SoundCmd>,
) {
    for (entity, mut platform, mut body, mut motion, mut animation) in query.iter_mut() {
        if platform.phase.is(CollapseState::Shaking) && platform.timer.tick_negative() {
            debug!("platform {:?} collapsing", entity);
            platform.phase.transition_to(CollapseState::Falling);
            body.enabled = false;
            motion.frozen = false;
            animation.play("platform");
            sounds.write(SoundCmd::new(SoundEffect::Collapse));
        }
        platform.phase.tick();
    }
}
