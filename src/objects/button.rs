//! Floor button.
//!
//! A one-way platform that reads as pressed while any actor stands on it.
//! Pressing sinks it by [`DEPRESS_DEPTH`] pixels and carries the standing
//! actors down with it. A parent object (the capsule) polls
//! [`Button::pressed`] during its own update.

use bevy_ecs::prelude::*;

use crate::components::actor::Actor;
use crate::components::contact::SolidContacts;
use crate::components::destroyed::Destroyed;
use crate::components::mapposition::MapPosition;
use crate::components::objectkind::{Kind, ObjectKind};
use crate::components::parent::ParentObject;
use crate::components::solidbody::SolidBody;
use crate::components::sprite::Sprite;
use crate::events::audio::{SoundCmd, SoundEffect};
use crate::objects::spawn_object;

pub const DEPRESS_DEPTH: i32 = 4;
pub const HALF_WIDTH: i32 = 16;
pub const HALF_HEIGHT: i32 = 4;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Button {
    pub pressed: bool,
    was_pressed: bool,
    base_y: i32,
}

pub fn spawn(commands: &mut Commands, x: i32, y: i32, parent: Option<Entity>) -> Entity {
    let base = (
        ObjectKind::new(Kind::Button, 0),
        MapPosition::new(x, y),
        Button {
            base_y: y,
            ..Default::default()
        },
        SolidBody::platform(HALF_WIDTH, HALF_HEIGHT),
        SolidContacts::default(),
        Sprite::new(Kind::Button.sheet(), HALF_WIDTH, HALF_HEIGHT),
    );
    match parent {
        Some(parent) => spawn_object(commands, Kind::Button, (base, ParentObject(parent))),
        None => spawn_object(commands, Kind::Button, base),
    }
}

pub fn button_on_contact(mut query: Query<(&mut Button, &SolidContacts), Without<Destroyed>>) {
    for (mut button, contacts) in query.iter_mut() {
        button.pressed = contacts.any_standing();
    }
}

pub fn button_update(
    mut query: Query<
        (&mut Button, &mut MapPosition, &SolidContacts, &mut Sprite),
        Without<Destroyed>,
    >,
    mut actors: Query<&mut Actor>,
    mut sounds: MessageWriter<SoundCmd>,
) {
    for (mut button, mut position, contacts, mut sprite) in query.iter_mut() {
        if button.pressed && !button.was_pressed {
            position.y = button.base_y + DEPRESS_DEPTH;
            sprite.frame = 1;
            for actor_entity in contacts.standing() {
                if let Ok(mut actor) = actors.get_mut(actor_entity) {
                    actor.y += DEPRESS_DEPTH;
                }
            }
            sounds.write(SoundCmd::new(SoundEffect::Button));
        } else if !button.pressed && button.was_pressed {
            position.y = button.base_y;
            sprite.frame = 0;
        }
        button.was_pressed = button.pressed;
    }
}
