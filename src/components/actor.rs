//! The controlled actor, seen from the objects' side.
//!
//! Objects consume and mutate the player character through this narrow
//! component only: position and sub-pixels, 8.8 velocities, the flags the
//! contact protocol sets, and the few reactions objects trigger (landing,
//! launching, getting hurt, collecting a ring). Moving the actor each frame
//! is the job of an external integrator; the headless runner uses
//! [`crate::systems::actor::reference_actor_physics`].

use bevy_ecs::prelude::{Component, Entity};

pub const DEFAULT_PUSH_RADIUS: i32 = 10;
pub const DEFAULT_Y_RADIUS: i32 = 19;
pub const HURT_Y_VEL: i16 = -0x400;
pub const HURT_X_VEL: i16 = 0x200;
pub const INVULNERABLE_FRAMES: u16 = 120;
pub const MAX_RINGS: u16 = 999;

#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    pub x: i32,
    pub y: i32,
    pub x_sub: u8,
    pub y_sub: u8,
    pub x_vel: i16,
    pub y_vel: i16,
    pub facing_right: bool,
    pub airborne: bool,
    /// Horizontal half extent used against solid bodies.
    pub push_radius: i32,
    /// Vertical half extent; the feet are at `y + y_radius`.
    pub y_radius: i32,
    pub hit_half_width: i32,
    pub hit_half_height: i32,
    pub standing_on: Option<Entity>,
    pub pushing: bool,
    pub invulnerable: u16,
    pub hurt: bool,
    pub rings: u16,
}

impl Default for Actor {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Actor {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            x_sub: 0,
            y_sub: 0,
            x_vel: 0,
            y_vel: 0,
            facing_right: true,
            airborne: true,
            push_radius: DEFAULT_PUSH_RADIUS,
            y_radius: DEFAULT_Y_RADIUS,
            hit_half_width: 8,
            hit_half_height: DEFAULT_Y_RADIUS - 3,
            standing_on: None,
            pushing: false,
            invulnerable: 0,
            hurt: false,
            rings: 0,
        }
    }

    pub fn with_velocity(mut self, x_vel: i16, y_vel: i16) -> Self {
        self.x_vel = x_vel;
        self.y_vel = y_vel;
        self
    }

    pub fn feet(&self) -> i32 {
        self.y + self.y_radius
    }

    /// Puts the actor on top of a provider whose top edge is at `top`.
    pub fn land_on(&mut self, provider: Entity, top: i32) {
        self.y = top - self.y_radius;
        self.y_sub = 0;
        self.y_vel = 0;
        self.airborne = false;
        self.hurt = false;
        self.standing_on = Some(provider);
    }

    /// Throws the actor upward with the given 8.8 velocity.
    pub fn launch(&mut self, y_vel: i16) {
        self.y_vel = y_vel;
        self.airborne = true;
        self.standing_on = None;
    }

    pub fn is_vulnerable(&self) -> bool {
        !self.hurt && self.invulnerable == 0
    }

    /// Knocks the actor away from `source_x`. Returns false if the actor was
    /// already hurt or still invulnerable.
    pub fn hurt_from(&mut self, source_x: i32) -> bool {
        if !self.is_vulnerable() {
            return false;
        }
        self.hurt = true;
        self.invulnerable = INVULNERABLE_FRAMES;
        self.y_vel = HURT_Y_VEL;
        self.x_vel = if self.x < source_x {
            -HURT_X_VEL
        } else {
            HURT_X_VEL
        };
        self.airborne = true;
        self.standing_on = None;
        true
    }

    pub fn collect_ring(&mut self) {
        self.rings = (self.rings + 1).min(MAX_RINGS);
    }
}

/// Marks the actor objects react to for proximity tests and camera follow.
#[derive(Component, Clone, Copy, Debug)]
pub struct MainActor;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hurt_knocks_away_from_source_once() {
        let mut actor = Actor::new(100, 100);
        assert!(actor.hurt_from(110));
        assert_eq!(actor.x_vel, -HURT_X_VEL);
        assert_eq!(actor.y_vel, HURT_Y_VEL);
        assert_eq!(actor.invulnerable, INVULNERABLE_FRAMES);
        assert!(!actor.hurt_from(90));
        assert_eq!(actor.x_vel, -HURT_X_VEL);
    }

    #[test]
    fn landing_clears_hurt_but_not_invulnerability() {
        let mut actor = Actor::new(0, 0);
        actor.hurt_from(-10);
        actor.land_on(Entity::PLACEHOLDER, 50);
        assert_eq!(actor.y, 50 - DEFAULT_Y_RADIUS);
        assert!(!actor.hurt);
        assert!(!actor.is_vulnerable());
    }

    #[test]
    fn rings_cap() {
        let mut actor = Actor::new(0, 0);
        actor.rings = MAX_RINGS;
        actor.collect_ring();
        assert_eq!(actor.rings, MAX_RINGS);
    }
}
