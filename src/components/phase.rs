//! Per-object finite state machine.
//!
//! [`Phase`] tracks the current state of an object, the state it came from
//! and how many updates it has spent in the current one. Each object type
//! supplies its own state enum and keeps the transition logic in its update
//! system; the machine only records what happened.
//!
//! # Example
//!
//! ```ignore
//! if spring.phase.current() == SpringState::Launched && spring.cooldown.tick_negative() {
//!     spring.phase.transition_to(SpringState::Idle);
//! }
//! spring.phase.tick();
//! ```

use std::fmt::Debug;

use log::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phase<S: Copy + Eq + Debug> {
    current: S,
    previous: S,
    frames_in_phase: u32,
}

impl<S: Copy + Eq + Debug> Phase<S> {
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            previous: initial,
            frames_in_phase: 0,
        }
    }

    pub fn current(&self) -> S {
        self.current
    }

    pub fn previous(&self) -> S {
        self.previous
    }

    pub fn is(&self, state: S) -> bool {
        self.current == state
    }

    /// Updates spent in the current state before this one.
    pub fn frames_in_phase(&self) -> u32 {
        self.frames_in_phase
    }

    /// Switches state. Re-entering the current state is ignored.
    pub fn transition_to(&mut self, next: S) {
        if next == self.current {
            return;
        }
        trace!("phase {:?} -> {:?}", self.current, next);
        self.previous = self.current;
        self.current = next;
        self.frames_in_phase = 0;
    }

    /// Counts one update in the current state. Call once at the end of the
    /// owning object's update.
    pub fn tick(&mut self) {
        self.frames_in_phase = self.frames_in_phase.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Door {
        Shut,
        Open,
    }

    #[test]
    fn transition_resets_frame_count() {
        let mut phase = Phase::new(Door::Shut);
        phase.tick();
        phase.tick();
        assert_eq!(phase.frames_in_phase(), 2);

        phase.transition_to(Door::Open);
        assert!(phase.is(Door::Open));
        assert_eq!(phase.previous(), Door::Shut);
        assert_eq!(phase.frames_in_phase(), 0);
    }

    #[test]
    fn re_entering_current_state_is_ignored() {
        let mut phase = Phase::new(Door::Shut);
        phase.tick();
        phase.transition_to(Door::Shut);
        assert_eq!(phase.frames_in_phase(), 1);
    }
}
