//! Fixed-point arithmetic shared by every object.
//!
//! Positions are whole pixels with an 8-bit sub-pixel accumulator, velocities
//! are signed 8.8 values (256 = one pixel per frame), and a few effects carry
//! 16.16 values for extra precision. All shifts are arithmetic, so negative
//! values round toward negative infinity.
//!
//! # Related
//!
//! - [`crate::components::motion::Motion`] – per-object velocity and gravity
//! - [`crate::systems::movement::movement_system`] – applies [`integrate`] every frame

use std::ops::{Add, AddAssign, Neg, Shr, Sub, SubAssign};
use std::sync::OnceLock;

/// Signed fixed-point value with `FRAC` fractional bits stored in an `i32`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed<const FRAC: u32>(i32);

/// 8.8 fixed point, the unit of object velocities.
pub type Fixed8 = Fixed<8>;
/// 16.16 fixed point, used by effects that need sub-pixel radii.
pub type Fixed16 = Fixed<16>;

impl<const FRAC: u32> Fixed<FRAC> {
    pub const ZERO: Self = Fixed(0);
    pub const ONE: Self = Fixed(1 << FRAC);

    pub const fn from_raw(raw: i32) -> Self {
        Fixed(raw)
    }

    pub const fn from_int(value: i32) -> Self {
        Fixed(value << FRAC)
    }

    pub const fn from_parts(integer: i32, fraction: u32) -> Self {
        Fixed((integer << FRAC) | (fraction & ((1 << FRAC) - 1)) as i32)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Whole part, floored.
    pub const fn integer(self) -> i32 {
        self.0 >> FRAC
    }

    /// Fractional bits, always non-negative.
    pub const fn fraction(self) -> u32 {
        (self.0 & ((1 << FRAC) - 1)) as u32
    }

    pub const fn wrapping_add(self, other: Self) -> Self {
        Fixed(self.0.wrapping_add(other.0))
    }

    /// Moves toward `target` by the remaining distance divided by `2^shift`.
    ///
    /// Computed as `value - ((value - target) >> shift)`. Adding the shifted
    /// `value - target` instead would push the value away from the target and
    /// diverge; subtracting it is what makes the operator converge.
    ///
    /// The step is floored, so from below the value reaches the target while
    /// from above it stops once the remaining gap is smaller than `2^shift`
    /// raw units.
    pub const fn approach(self, target: Self, shift: u32) -> Self {
        Fixed(self.0 - ((self.0 - target.0) >> shift))
    }
}

impl<const FRAC: u32> Add for Fixed<FRAC> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Fixed(self.0 + rhs.0)
    }
}

impl<const FRAC: u32> AddAssign for Fixed<FRAC> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<const FRAC: u32> Sub for Fixed<FRAC> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Fixed(self.0 - rhs.0)
    }
}

impl<const FRAC: u32> SubAssign for Fixed<FRAC> {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<const FRAC: u32> Neg for Fixed<FRAC> {
    type Output = Self;
    fn neg(self) -> Self {
        Fixed(-self.0)
    }
}

impl<const FRAC: u32> Shr<u32> for Fixed<FRAC> {
    type Output = Self;
    fn shr(self, rhs: u32) -> Self {
        Fixed(self.0 >> rhs)
    }
}

/// One frame of sub-pixel integration along a single axis.
///
/// Adds the 8.8 `velocity` to the 8-bit accumulator `sub`, moves `position`
/// by the whole pixels that fall out (floored) and returns the new position
/// and the leftover fraction, which is always in `0..=255`.
pub fn integrate(position: i32, sub: u8, velocity: i16) -> (i32, u8) {
    let total = sub as i32 + velocity as i32;
    (position + (total >> 8), (total & 0xFF) as u8)
}

/// Adds gravity to an 8.8 velocity using the 16-bit wraparound of the
/// original hardware.
pub fn apply_gravity(velocity: i16, gravity: i16) -> i16 {
    velocity.wrapping_add(gravity)
}

static SINE_TABLE: OnceLock<[i16; 256]> = OnceLock::new();

/// Sine of an 8-bit angle (256 steps per turn) scaled by 256.
pub fn sine_table() -> &'static [i16; 256] {
    SINE_TABLE.get_or_init(|| {
        let mut table = [0i16; 256];
        for (index, slot) in table.iter_mut().enumerate() {
            let radians = index as f64 * std::f64::consts::TAU / 256.0;
            *slot = (radians.sin() * 256.0).round() as i16;
        }
        table
    })
}

pub fn sin(angle: u8) -> i32 {
    sine_table()[angle as usize] as i32
}

pub fn cos(angle: u8) -> i32 {
    sine_table()[angle.wrapping_add(64) as usize] as i32
}

/// Scales a table value by `magnitude`, dropping the 8 fractional bits.
pub fn scale_by(value: i32, magnitude: i32) -> i32 {
    (value * magnitude) >> 8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_frames_at_four_pixels_per_frame() {
        let mut position = 100;
        let mut sub = 0u8;
        for _ in 0..4 {
            (position, sub) = integrate(position, sub, 0x400);
        }
        assert_eq!(position, 116);
        assert_eq!(sub, 0);
    }

    #[test]
    fn fractional_velocity_carries_into_position() {
        let (position, sub) = integrate(10, 0xC0, 0x80);
        assert_eq!(position, 11);
        assert_eq!(sub, 0x40);
    }

    #[test]
    fn negative_velocity_floors() {
        let (position, sub) = integrate(10, 0, -0x80);
        assert_eq!(position, 9);
        assert_eq!(sub, 0x80);

        let (position, sub) = integrate(position, sub, -0x80);
        assert_eq!(position, 9);
        assert_eq!(sub, 0);
    }

    #[test]
    fn continuity_of_position_and_accumulator() {
        let mut position = 0;
        let mut sub = 0u8;
        let mut velocity: i16 = -0x500;
        for _ in 0..200 {
            let before = position * 256 + sub as i32;
            let (next, next_sub) = integrate(position, sub, velocity);
            let after = next * 256 + next_sub as i32;
            assert_eq!(after - before, velocity as i32);
            position = next;
            sub = next_sub;
            velocity = apply_gravity(velocity, 0x38);
        }
    }

    #[test]
    fn gravity_wraps_at_sixteen_bits() {
        assert_eq!(apply_gravity(i16::MAX, 1), i16::MIN);
        assert_eq!(apply_gravity(-0x400, 0x38), -0x3C8);
    }

    #[test]
    fn fixed_parts() {
        let value = Fixed16::from_parts(3, 0x8000);
        assert_eq!(value.integer(), 3);
        assert_eq!(value.fraction(), 0x8000);

        let negative = Fixed8::from_raw(-0x80);
        assert_eq!(negative.integer(), -1);
        assert_eq!(negative.fraction(), 0x80);
    }

    #[test]
    fn approach_from_below_reaches_target() {
        let mut value = Fixed8::from_raw(0);
        let target = Fixed8::from_raw(100);
        for _ in 0..16 {
            value = value.approach(target, 1);
        }
        assert_eq!(value, target);
    }

    #[test]
    fn approach_closes_the_gap_by_its_shift() {
        let value = Fixed16::ZERO.approach(Fixed16::ONE, 2);
        assert_eq!(value.raw(), 0x4000);
        let value = Fixed16::ONE.approach(Fixed16::ZERO, 2);
        assert_eq!(value.raw(), 0xC000);
    }

    #[test]
    fn approach_from_above_stalls_short_of_target() {
        let mut value = Fixed8::from_raw(3);
        value = value.approach(Fixed8::ZERO, 1);
        assert_eq!(value.raw(), 2);
        value = value.approach(Fixed8::ZERO, 1);
        assert_eq!(value.raw(), 1);
        value = value.approach(Fixed8::ZERO, 1);
        assert_eq!(value.raw(), 1);
    }

    #[test]
    fn sine_table_landmarks() {
        assert_eq!(sin(0), 0);
        assert_eq!(sin(64), 256);
        assert_eq!(sin(128), 0);
        assert_eq!(sin(192), -256);
        assert_eq!(cos(0), 256);
        assert_eq!(cos(128), -256);
    }

    #[test]
    fn scale_by_truncates_toward_negative_infinity() {
        assert_eq!(scale_by(256, 32), 32);
        assert_eq!(scale_by(-1, 1), -1);
        assert_eq!(scale_by(181, 64), 45);
    }
}
