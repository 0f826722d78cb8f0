//! Frame countdowns.
//!
//! Object timers are plain counters decremented once per update. Some fire
//! when the counter first goes negative, others when it reaches zero; the two
//! differ by one frame and callers pick the one the behavior needs.

/// Integer countdown decremented once per object update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    pub remaining: i16,
}

impl Countdown {
    pub fn new(frames: i16) -> Self {
        Self { remaining: frames }
    }

    pub fn set(&mut self, frames: i16) {
        self.remaining = frames;
    }

    /// Decrements, then reports whether the counter went below zero.
    /// A countdown set to `n` fires on the `n + 1`th call.
    pub fn tick_negative(&mut self) -> bool {
        self.remaining = self.remaining.wrapping_sub(1);
        self.remaining < 0
    }

    /// Decrements, then reports whether the counter reached zero or below.
    /// A countdown set to `n` fires on the `n`th call.
    pub fn tick_zero(&mut self) -> bool {
        self.remaining = self.remaining.wrapping_sub(1);
        self.remaining <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calls_until(mut fire: impl FnMut() -> bool) -> usize {
        (1..100).find(|_| fire()).unwrap_or(0)
    }

    #[test]
    fn negative_crossing_fires_one_call_later_than_zero() {
        let mut negative = Countdown::new(3);
        assert_eq!(calls_until(|| negative.tick_negative()), 4);
        assert_eq!(negative.remaining, -1);

        let mut zero = Countdown::new(3);
        assert_eq!(calls_until(|| zero.tick_zero()), 3);
        assert_eq!(zero.remaining, 0);
    }

    #[test]
    fn zero_countdown_fires_immediately_on_negative_crossing() {
        let mut countdown = Countdown::new(0);
        assert!(countdown.tick_negative());
    }
}
