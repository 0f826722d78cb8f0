//! Swinging platform.
//!
//! A one-way platform oscillating around its placed position along one axis.
//! The subtype's high nibble picks the amplitude, bit 0 the axis (set for
//! vertical) and bits 1-3 the angular speed. Actors standing on it are moved
//! by the same delta as the platform each frame.
//!
//! Offsets use the integer sine table with a truncating shift, so the path
//! repeats exactly every `256 / speed` frames.

use bevy_ecs::prelude::*;

use crate::components::actor::Actor;
use crate::components::contact::SolidContacts;
use crate::components::destroyed::Destroyed;
use crate::components::mapposition::MapPosition;
use crate::components::objectkind::{Kind, ObjectKind};
use crate::components::solidbody::SolidBody;
use crate::components::sprite::Sprite;
use crate::fixedpoint::{scale_by, sin};
use crate::objects::{spawn_object, table_entry};

pub const AMPLITUDES: [i32; 4] = [16, 32, 48, 64];
pub const SPEEDS: [u8; 3] = [1, 2, 4];
pub const HALF_WIDTH: i32 = 24;
pub const HALF_HEIGHT: i32 = 8;

#[derive(Component, Clone, Copy, Debug)]
pub struct SwingPlatform {
    pub angle: u8,
    pub speed: u8,
    pub amplitude: i32,
    pub vertical: bool,
    pub origin_x: i32,
    pub origin_y: i32,
}

impl SwingPlatform {
    pub fn position_at(&self, angle: u8) -> MapPosition {
        let offset = scale_by(sin(angle), self.amplitude);
        if self.vertical {
            MapPosition::new(self.origin_x, self.origin_y + offset)
        } else {
            MapPosition::new(self.origin_x + offset, self.origin_y)
        }
    }
}

pub fn bundle(subtype: u8, x: i32, y: i32) -> impl Bundle {
    let kind = ObjectKind::new(Kind::SwingPlatform, subtype);
    (
        kind,
        MapPosition::new(x, y),
        SwingPlatform {
            angle: 0,
            speed: table_entry(&SPEEDS, kind.low_nibble() >> 1, Kind::SwingPlatform),
            amplitude: table_entry(&AMPLITUDES, kind.high_nibble(), Kind::SwingPlatform),
            vertical: subtype & 1 != 0,
            origin_x: x,
            origin_y: y,
        },
        SolidBody::platform(HALF_WIDTH, HALF_HEIGHT),
        SolidContacts::default(),
        Sprite::new(Kind::SwingPlatform.sheet(), HALF_WIDTH, HALF_HEIGHT),
    )
}

pub fn spawn(commands: &mut Commands, subtype: u8, x: i32, y: i32) -> Entity {
    spawn_object(commands, Kind::SwingPlatform, bundle(subtype, x, y))
}

pub fn swing_update(
    mut query: Query<(&mut SwingPlatform, &mut MapPosition, &SolidContacts), Without<Destroyed>>,
    mut actors: Query<&mut Actor>,
) {
    for (mut platform, mut position, contacts) in query.iter_mut() {
        platform.angle = platform.angle.wrapping_add(platform.speed);
        let next = platform.position_at(platform.angle);
        let (dx, dy) = (next.x - position.x, next.y - position.y);
        *position = next;

        for actor_entity in contacts.standing() {
            if let Ok(mut actor) = actors.get_mut(actor_entity) {
                actor.x += dx;
                actor.y += dy;
            }
        }
    }
}
