//! Spikes.
//!
//! Solid hazard. The subtype's high nibble picks the width, the low nibble
//! the mode: upright or sideways, static or retracting. Upright spikes hurt
//! an actor standing on them; sideways spikes hurt an actor touching their
//! side. Retracting spikes wait [`RETRACT_WAIT`] frames, slide
//! [`RETRACT_DISTANCE`] pixels at [`RETRACT_SPEED`] per frame, wait again and
//! slide back.

use bevy_ecs::prelude::*;

use crate::components::actor::Actor;
use crate::components::contact::{SolidContact, SolidContacts};
use crate::components::destroyed::Destroyed;
use crate::components::mapposition::MapPosition;
use crate::components::objectkind::{Kind, ObjectKind};
use crate::components::phase::Phase;
use crate::components::solidbody::SolidBody;
use crate::components::sprite::Sprite;
use crate::components::timer::Countdown;
use crate::events::audio::{SoundCmd, SoundEffect};
use crate::objects::{spawn_object, table_entry};
use crate::resources::viewport::Viewport;

pub const HALF_WIDTHS: [i32; 4] = [8, 16, 24, 32];
pub const HALF_DEPTH: i32 = 16;
pub const RETRACT_WAIT: i16 = 60;
pub const RETRACT_DISTANCE: i32 = 32;
pub const RETRACT_SPEED: i32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpikeMode {
    Upright,
    UprightRetracting,
    Sideways,
    SidewaysRetracting,
}

impl SpikeMode {
    pub fn sideways(self) -> bool {
        matches!(self, SpikeMode::Sideways | SpikeMode::SidewaysRetracting)
    }

    pub fn retracts(self) -> bool {
        matches!(
            self,
            SpikeMode::UprightRetracting | SpikeMode::SidewaysRetracting
        )
    }
}

pub const MODES: [SpikeMode; 4] = [
    SpikeMode::Upright,
    SpikeMode::UprightRetracting,
    SpikeMode::Sideways,
    SpikeMode::SidewaysRetracting,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpikeState {
    Extended,
    Retracting,
    Retracted,
    Extending,
}

#[derive(Component, Clone, Debug)]
pub struct Spikes {
    pub phase: Phase<SpikeState>,
    pub mode: SpikeMode,
    pub timer: Countdown,
    /// How far the spikes have slid in, `0..=RETRACT_DISTANCE`.
    pub offset: i32,
    pub base_x: i32,
    pub base_y: i32,
    /// Sideways spikes pointing left slide right to retract.
    pub points_left: bool,
}

impl Spikes {
    fn position(&self) -> MapPosition {
        if !self.mode.sideways() {
            MapPosition::new(self.base_x, self.base_y + self.offset)
        } else if self.points_left {
            MapPosition::new(self.base_x + self.offset, self.base_y)
        } else {
            MapPosition::new(self.base_x - self.offset, self.base_y)
        }
    }

    fn harms(&self, contact: SolidContact) -> bool {
        if self.mode.sideways() {
            contact.is_side()
        } else {
            contact == SolidContact::Standing
        }
    }
}

pub fn bundle(subtype: u8, x: i32, y: i32, flip: bool) -> impl Bundle {
    let kind = ObjectKind::new(Kind::Spikes, subtype);
    let span = table_entry(&HALF_WIDTHS, kind.high_nibble(), Kind::Spikes);
    let mode = table_entry(&MODES, kind.low_nibble(), Kind::Spikes);
    let (half_width, half_height) = if mode.sideways() {
        (HALF_DEPTH, span)
    } else {
        (span, HALF_DEPTH)
    };
    (
        kind,
        MapPosition::new(x, y),
        Spikes {
            phase: Phase::new(SpikeState::Extended),
            mode,
            timer: Countdown::new(RETRACT_WAIT),
            offset: 0,
            base_x: x,
            base_y: y,
            points_left: flip,
        },
        SolidBody::new(half_width, half_height),
        SolidContacts::default(),
        Sprite::new(Kind::Spikes.sheet(), half_width, half_height)
            .with_frame(mode.sideways() as u16)
            .with_flip_h(flip),
    )
}

pub fn spawn(commands: &mut Commands, subtype: u8, x: i32, y: i32, flip: bool) -> Entity {
    spawn_object(commands, Kind::Spikes, bundle(subtype, x, y, flip))
}

pub fn spikes_on_contact(
    query: Query<(&Spikes, &MapPosition, &SolidContacts), Without<Destroyed>>,
    mut actors: Query<&mut Actor>,
    mut sounds: MessageWriter<SoundCmd>,
) {
    for (spikes, position, contacts) in query.iter() {
        for record in &contacts.records {
            if !spikes.harms(record.contact) {
                continue;
            }
            if let Ok(mut actor) = actors.get_mut(record.actor)
                && actor.hurt_from(position.x)
            {
                sounds.write(SoundCmd::new(SoundEffect::Hurt));
            }
        }
    }
}

pub fn spikes_update(
    mut query: Query<(&mut Spikes, &mut MapPosition, &Sprite), Without<Destroyed>>,
    viewport: Option<Res<Viewport>>,
    mut sounds: MessageWriter<SoundCmd>,
) {
    for (mut spikes, mut position, sprite) in query.iter_mut() {
        if !spikes.mode.retracts() {
            continue;
        }
        match spikes.phase.current() {
            SpikeState::Extended | SpikeState::Retracted => {
                if spikes.timer.tick_negative() {
                    let next = if spikes.phase.is(SpikeState::Extended) {
                        SpikeState::Retracting
                    } else {
                        SpikeState::Extending
                    };
                    spikes.phase.transition_to(next);
                    let visible = viewport.as_ref().is_some_and(|v| {
                        v.is_visible(position.x, position.y, sprite.half_width, sprite.half_height)
                    });
                    if visible {
                        sounds.write(SoundCmd::new(SoundEffect::SpikesMove));
                    }
                }
            }
            SpikeState::Retracting => {
                spikes.offset = (spikes.offset + RETRACT_SPEED).min(RETRACT_DISTANCE);
                if spikes.offset == RETRACT_DISTANCE {
                    spikes.phase.transition_to(SpikeState::Retracted);
                    spikes.timer.set(RETRACT_WAIT);
                }
            }
            SpikeState::Extending => {
                spikes.offset = (spikes.offset - RETRACT_SPEED).max(0);
                if spikes.offset == 0 {
                    spikes.phase.transition_to(SpikeState::Extended);
                    spikes.timer.set(RETRACT_WAIT);
                }
            }
        }
        *position = spikes.position();
        spikes.phase.tick();
    }
}
