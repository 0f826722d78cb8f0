//! Bubble generator and bubbles.
//!
//! The generator only works while it is on screen. Every interval, taken
//! from the subtype plus a random extra from [`SimRng`], it releases a bubble
//! near its position. Bubbles rise at a constant speed and wobble sideways
//! along a sine of their own angle.

use bevy_ecs::prelude::*;

use crate::components::animation::AnimationPlayer;
use crate::components::culloffscreen::CullOffscreen;
use crate::components::destroyed::Destroyed;
use crate::components::lifespan::Lifespan;
use crate::components::mapposition::MapPosition;
use crate::components::motion::Motion;
use crate::components::objectkind::{Kind, ObjectKind};
use crate::components::sprite::Sprite;
use crate::components::timer::Countdown;
use crate::fixedpoint::{scale_by, sin};
use crate::objects::{spawn_object, table_entry};
use crate::resources::rng::SimRng;
use crate::resources::viewport::Viewport;

pub const INTERVALS: [i16; 3] = [32, 64, 128];
pub const INTERVAL_JITTER: i32 = 31;
pub const SPAWN_DRIFT: i32 = 8;
pub const RISE_SPEED: i16 = -0x88;
pub const WOBBLE: i32 = 4;
pub const ANGLE_STEP: u8 = 2;
pub const LIFESPAN: i16 = 240;

#[derive(Component, Clone, Copy, Debug)]
pub struct BubbleGenerator {
    pub timer: Countdown,
    pub interval: i16,
}

#[derive(Component, Clone, Copy, Debug)]
pub struct Bubble {
    pub angle: u8,
    pub base_x: i32,
}

pub fn generator_bundle(subtype: u8, x: i32, y: i32) -> impl Bundle {
    let interval = table_entry(&INTERVALS, subtype as usize, Kind::BubbleGenerator);
    (
        ObjectKind::new(Kind::BubbleGenerator, subtype),
        MapPosition::new(x, y),
        BubbleGenerator {
            timer: Countdown::new(interval),
            interval,
        },
        Sprite::new(Kind::BubbleGenerator.sheet(), 8, 8).with_priority(1),
    )
}

pub fn spawn_generator(commands: &mut Commands, subtype: u8, x: i32, y: i32) -> Entity {
    spawn_object(commands, Kind::BubbleGenerator, generator_bundle(subtype, x, y))
}

pub fn bundle(x: i32, y: i32) -> impl Bundle {
    (
        ObjectKind::new(Kind::Bubble, 0),
        MapPosition::new(x, y),
        Bubble {
            angle: 0,
            base_x: x,
        },
        Motion::new(0, RISE_SPEED),
        Sprite::new(Kind::Bubble.sheet(), 8, 8).with_priority(5),
        AnimationPlayer::new("bubble_grow"),
        Lifespan::new(LIFESPAN),
        CullOffscreen,
    )
}

pub fn spawn(commands: &mut Commands, x: i32, y: i32) -> Entity {
    spawn_object(commands, Kind::Bubble, bundle(x, y))
}

pub fn bubble_generator_update(
    mut commands: Commands,
    mut query: Query<(&mut BubbleGenerator, &MapPosition, &Sprite), Without<Destroyed>>,
    viewport: Option<Res<Viewport>>,
    mut rng: Option<ResMut<SimRng>>,
) {
    let Some(viewport) = viewport else {
        return;
    };
    for (mut generator, position, sprite) in query.iter_mut() {
        if !viewport.is_visible(position.x, position.y, sprite.half_width, sprite.half_height) {
            continue;
        }
        if !generator.timer.tick_negative() {
            continue;
        }
        let (drift, jitter) = match rng.as_mut() {
            Some(rng) => (rng.spread(SPAWN_DRIFT), rng.up_to(INTERVAL_JITTER)),
            None => (0, 0),
        };
        spawn(&mut commands, position.x + drift, position.y);
        let interval = generator.interval + jitter as i16;
        generator.timer.set(interval);
    }
}

pub fn bubble_update(mut query: Query<(&mut Bubble, &mut MapPosition), Without<Destroyed>>) {
    for (mut bubble, mut position) in query.iter_mut() {
        bubble.angle = bubble.angle.wrapping_add(ANGLE_STEP);
        position.x = bubble.base_x + scale_by(sin(bubble.angle), WOBBLE);
    }
}
