//! Distance gate with hysteresis.
//!
//! Objects that react to the actor coming near use separate enter and exit
//! distances so an actor hovering around one threshold does not make them
//! flicker between states. Both tests are strict: an actor exactly at the
//! threshold distance is outside.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProximityGate {
    pub enter: i32,
    pub exit: i32,
    engaged: bool,
}

impl ProximityGate {
    pub fn new(enter: i32, exit: i32) -> Self {
        debug_assert!(exit >= enter, "exit threshold inside enter threshold");
        Self {
            enter,
            exit,
            engaged: false,
        }
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Feeds the actor's offset from the object and returns the new state.
    pub fn update(&mut self, dx: i32, dy: i32) -> bool {
        let limit = if self.engaged { self.exit } else { self.enter };
        self.engaged = dx.abs() < limit && dy.abs() < limit;
        self.engaged
    }

    /// Drops back to disengaged, e.g. when there is no actor to track.
    pub fn release(&mut self) {
        self.engaged = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_threshold_is_strict() {
        let mut gate = ProximityGate::new(64, 96);
        assert!(!gate.update(64, 0));
        assert!(!gate.update(-64, 0));
        assert!(gate.update(63, 0));
    }

    #[test]
    fn exit_threshold_is_wider() {
        let mut gate = ProximityGate::new(64, 96);
        assert!(gate.update(10, 0));
        assert!(gate.update(80, 0));
        assert!(gate.update(95, -20));
        assert!(!gate.update(96, 0));
        assert!(!gate.update(80, 0));
    }

    #[test]
    fn vertical_distance_counts_too() {
        let mut gate = ProximityGate::new(64, 96);
        assert!(!gate.update(0, 64));
        assert!(gate.update(0, -63));
    }
}
