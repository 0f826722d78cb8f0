//! Sparkle.
//!
//! Decorative particle spiralling into a point. The radius is a 16.16 value
//! that closes an eighth of the remaining gap every frame while the angle
//! advances; the sparkle removes itself once the whole-pixel radius reaches
//! zero. Positions use only the integer part of the radius.

use bevy_ecs::prelude::*;

use crate::components::animation::AnimationPlayer;
use crate::components::destroyed::Destroyed;
use crate::components::lifespan::Lifespan;
use crate::components::mapposition::MapPosition;
use crate::components::objectkind::{Kind, ObjectKind};
use crate::components::sprite::Sprite;
use crate::fixedpoint::{Fixed16, cos, scale_by, sin};
use crate::objects::spawn_object;

pub const START_RADIUS: i32 = 32;
pub const SPIN: u8 = 8;
pub const SHRINK_SHIFT: u32 = 3;
pub const LIFESPAN: i16 = 120;

#[derive(Component, Clone, Copy, Debug)]
pub struct Sparkle {
    pub radius: Fixed16,
    pub angle: u8,
    pub center_x: i32,
    pub center_y: i32,
}

impl Sparkle {
    pub fn position(&self) -> MapPosition {
        let radius = self.radius.integer();
        MapPosition::new(
            self.center_x + scale_by(cos(self.angle), radius),
            self.center_y + scale_by(sin(self.angle), radius),
        )
    }
}

pub fn bundle(center_x: i32, center_y: i32, angle: u8, radius: i32) -> impl Bundle {
    let sparkle = Sparkle {
        radius: Fixed16::from_int(radius),
        angle,
        center_x,
        center_y,
    };
    (
        ObjectKind::new(Kind::Sparkle, 0),
        sparkle.position(),
        sparkle,
        Sprite::new(Kind::Sparkle.sheet(), 4, 4).with_priority(6),
        AnimationPlayer::new("sparkle"),
        Lifespan::new(LIFESPAN),
    )
}

pub fn spawn(commands: &mut Commands, center_x: i32, center_y: i32, angle: u8, radius: i32) -> Entity {
    spawn_object(commands, Kind::Sparkle, bundle(center_x, center_y, angle, radius))
}

pub fn sparkle_update(
    mut commands: Commands,
    mut query: Query<(Entity, &mut Sparkle, &mut MapPosition), Without<Destroyed>>,
) {
    for (entity, mut sparkle, mut position) in query.iter_mut() {
        sparkle.radius = sparkle.radius.approach(Fixed16::ZERO, SHRINK_SHIFT);
        sparkle.angle = sparkle.angle.wrapping_add(SPIN);
        *position = sparkle.position();
        if sparkle.radius.integer() == 0 {
            commands.entity(entity).insert(Destroyed);
        }
    }
}
