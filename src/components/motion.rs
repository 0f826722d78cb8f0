//! Fixed-point kinematic state.
//!
//! [`Motion`] holds an 8.8 velocity per axis, the 8-bit sub-pixel
//! accumulators that pair with [`MapPosition`](super::mapposition::MapPosition),
//! and a per-object gravity that is added to the vertical velocity before each
//! integration step.
//!
//! The `frozen` flag lets an object keep its motion state while something
//! else (a parent, a waiting phase) controls where it is.

use bevy_ecs::prelude::Component;

use crate::fixedpoint::{apply_gravity, integrate};

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Motion {
    pub x_vel: i16,
    pub y_vel: i16,
    pub x_sub: u8,
    pub y_sub: u8,
    /// Added to `y_vel` once per frame, before the position moves.
    pub gravity: i16,
    pub frozen: bool,
}

impl Motion {
    pub fn new(x_vel: i16, y_vel: i16) -> Self {
        Self {
            x_vel,
            y_vel,
            ..Default::default()
        }
    }

    pub fn with_gravity(mut self, gravity: i16) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn frozen(mut self) -> Self {
        self.frozen = true;
        self
    }

    /// Applies gravity and then moves `(x, y)` by one frame of velocity.
    pub fn step(&mut self, x: &mut i32, y: &mut i32) {
        self.y_vel = apply_gravity(self.y_vel, self.gravity);
        (*x, self.x_sub) = integrate(*x, self.x_sub, self.x_vel);
        (*y, self.y_sub) = integrate(*y, self.y_sub, self.y_vel);
    }

    pub fn stop(&mut self) {
        self.x_vel = 0;
        self.y_vel = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_applies_before_the_move() {
        let mut motion = Motion::new(0, -0x400).with_gravity(0x38);
        let (mut x, mut y) = (0, 100);
        motion.step(&mut x, &mut y);
        assert_eq!(motion.y_vel, -0x3C8);
        assert_eq!((y, motion.y_sub), (96, 0x38));
    }

    #[test]
    fn falling_from_rest_moves_on_the_first_frame() {
        let mut motion = Motion::new(0, 0).with_gravity(0x100);
        let (mut x, mut y) = (0, 0);
        motion.step(&mut x, &mut y);
        assert_eq!(y, 1);
        motion.step(&mut x, &mut y);
        assert_eq!(y, 3);
    }

    #[test]
    fn horizontal_sub_pixels_accumulate() {
        let mut motion = Motion::new(0x80, 0);
        let (mut x, mut y) = (0, 0);
        motion.step(&mut x, &mut y);
        assert_eq!((x, motion.x_sub), (0, 0x80));
        motion.step(&mut x, &mut y);
        assert_eq!((x, motion.x_sub), (1, 0));
        assert_eq!(y, 0);
    }
}
