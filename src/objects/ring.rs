//! Ring.
//!
//! Collectible. The first actor touching a spinning ring picks it up: the
//! ring count goes up, the pickup sound alternates channel through the
//! shared [`RingSoundToggle`], and the ring plays its sparkle script once
//! before removing itself.

use bevy_ecs::prelude::*;

use crate::components::actor::Actor;
use crate::components::animation::AnimationPlayer;
use crate::components::contact::TouchContacts;
use crate::components::destroyed::Destroyed;
use crate::components::hitbox::{HitKind, Hitbox};
use crate::components::mapposition::MapPosition;
use crate::components::objectkind::{Kind, ObjectKind};
use crate::components::phase::Phase;
use crate::components::sprite::Sprite;
use crate::events::audio::{SoundCmd, SoundEffect};
use crate::objects::spawn_object;
use crate::resources::ringsound::RingSoundToggle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingState {
    Spinning,
    Sparkling,
}

#[derive(Component, Clone, Debug)]
pub struct Ring {
    pub phase: Phase<RingState>,
}

pub fn bundle(x: i32, y: i32) -> impl Bundle {
    (
        ObjectKind::new(Kind::Ring, 0),
        MapPosition::new(x, y),
        Ring {
            phase: Phase::new(RingState::Spinning),
        },
        Hitbox::new(6, 6, HitKind::Collectible),
        TouchContacts::default(),
        Sprite::new(Kind::Ring.sheet(), 8, 8).with_priority(2),
        AnimationPlayer::new("ring_spin"),
    )
}

pub fn spawn(commands: &mut Commands, x: i32, y: i32) -> Entity {
    spawn_object(commands, Kind::Ring, bundle(x, y))
}

pub fn ring_on_touch(
    mut query: Query<
        (
            &mut Ring,
            &mut Hitbox,
            &TouchContacts,
            &mut AnimationPlayer,
        ),
        Without<Destroyed>,
    >,
    mut actors: Query<&mut Actor>,
    mut toggle: Option<ResMut<RingSoundToggle>>,
    mut sounds: MessageWriter<SoundCmd>,
) {
    for (mut ring, mut hitbox, touches, mut animation) in query.iter_mut() {
        if !ring.phase.is(RingState::Spinning) {
            continue;
        }
        let collector = touches
            .actors
            .iter()
            .copied()
            .find(|&actor| actors.get(actor).is_ok_and(|a| !a.hurt));
        let Some(collector) = collector else {
            continue;
        };
        if let Ok(mut actor) = actors.get_mut(collector) {
            actor.collect_ring();
        }
        let effect = toggle
            .as_mut()
            .map_or(SoundEffect::RingRight, |toggle| toggle.next_effect());
        sounds.write(SoundCmd::new(effect));

        ring.phase.transition_to(RingState::Sparkling);
        hitbox.kind = HitKind::Inert;
        animation.play("ring_sparkle");
    }
}

pub fn ring_update(
    mut commands: Commands,
    mut query: Query<(Entity, &mut Ring, &AnimationPlayer), Without<Destroyed>>,
) {
    for (entity, mut ring, animation) in query.iter_mut() {
        if ring.phase.is(RingState::Sparkling)
            && ring.phase.frames_in_phase() > 0
            && animation.is_finished()
        {
            commands.entity(entity).insert(Destroyed);
        }
        ring.phase.tick();
    }
}
