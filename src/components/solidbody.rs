//! Solid body provider.
//!
//! A [`SolidBody`] is a box actors can stand on and push against. Its half
//! height differs depending on whether the actor was already standing on it
//! last frame (`ground_half_height`) or is arriving from the air
//! (`air_half_height`). Top-solid-only bodies behave as one-way platforms:
//! they can be landed on from above but never block from the side or below.
//!
//! The contact pass in [`crate::systems::collision`] classifies every overlap
//! and leaves the result in the provider's
//! [`SolidContacts`](super::contact::SolidContacts).

use bevy_ecs::prelude::{Component, Entity};

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolidBody {
    pub half_width: i32,
    pub air_half_height: i32,
    pub ground_half_height: i32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub top_solid_only: bool,
    pub enabled: bool,
    /// Actor the body ignores, e.g. the one a spring just launched.
    pub exempt: Option<Entity>,
}

impl SolidBody {
    pub fn new(half_width: i32, half_height: i32) -> Self {
        Self {
            half_width,
            air_half_height: half_height,
            ground_half_height: half_height,
            offset_x: 0,
            offset_y: 0,
            top_solid_only: false,
            enabled: true,
            exempt: None,
        }
    }

    /// One-way platform of the given extents.
    pub fn platform(half_width: i32, half_height: i32) -> Self {
        Self {
            top_solid_only: true,
            ..Self::new(half_width, half_height)
        }
    }

    pub fn with_ground_half_height(mut self, half_height: i32) -> Self {
        self.ground_half_height = half_height;
        self
    }

    pub fn with_offset(mut self, x: i32, y: i32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    pub fn is_solid_for(&self, actor: Entity) -> bool {
        self.enabled && self.exempt != Some(actor)
    }

    pub fn half_height(&self, actor_was_standing: bool) -> i32 {
        if actor_was_standing {
            self.ground_half_height
        } else {
            self.air_half_height
        }
    }
}
