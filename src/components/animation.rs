//! Script-driven sprite animation.
//!
//! An [`AnimationScript`] is a list of sprite frame indices, a delay in frames
//! and an [`EndAction`] telling the player what to do after the last frame.
//! [`AnimationPlayer`] is the per-object playback state: which script was
//! requested, which one is running, the cursor into its frame list and the
//! delay countdown.
//!
//! Timing follows the "decrement then branch on negative" rule: a delay of
//! `d` keeps each frame on screen for `d + 1` updates.
//!
//! # Related
//!
//! - [`crate::resources::animationstore::AnimationStore`] – script registry
//! - [`crate::systems::animation::animation_system`] – drives every player once per frame

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::resources::animationstore::AnimationStore;

/// Delay value meaning "never advance".
pub const FOREVER: u16 = u16::MAX;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndAction {
    /// Stay on the last frame.
    Hold,
    /// Restart at the first frame.
    Loop,
    /// Resume `n` frames before the end.
    LoopBack(u8),
    /// Chain into another script.
    Switch(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationScript {
    pub frames: Vec<u16>,
    #[serde(default)]
    pub delay: u16,
    /// Optional per-frame delays overriding `delay`.
    #[serde(default)]
    pub delays: Option<Vec<u16>>,
    pub end: EndAction,
}

impl AnimationScript {
    pub fn new(frames: impl Into<Vec<u16>>, delay: u16, end: EndAction) -> Self {
        Self {
            frames: frames.into(),
            delay,
            delays: None,
            end,
        }
    }

    /// A script with per-frame delays must carry exactly one per frame.
    pub fn delays_match(&self) -> bool {
        self.delays
            .as_ref()
            .is_none_or(|delays| delays.len() == self.frames.len())
    }

    pub fn delay_at(&self, cursor: usize) -> u16 {
        self.delays
            .as_ref()
            .and_then(|delays| delays.get(cursor).copied())
            .unwrap_or(self.delay)
    }
}

#[derive(Component, Clone, Debug, Default, PartialEq, Eq)]
pub struct AnimationPlayer {
    requested: String,
    current: String,
    cursor: usize,
    countdown: i32,
    frame: u16,
    finished: bool,
}

impl AnimationPlayer {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            requested: script.into(),
            ..Default::default()
        }
    }

    /// Requests a script. Playback restarts only if the id differs from the
    /// one already requested.
    pub fn play(&mut self, script: &str) {
        if self.requested != script {
            self.requested.clear();
            self.requested.push_str(script);
        }
    }

    pub fn current_script(&self) -> &str {
        &self.current
    }

    /// Sprite frame index to hand to the renderer.
    pub fn current_frame(&self) -> u16 {
        self.frame
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once a [`EndAction::Hold`] script has run off its last frame.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances playback by one frame.
    pub fn update(&mut self, store: &AnimationStore) {
        if self.requested != self.current {
            self.current.clone_from(&self.requested);
            self.restart(store);
            return;
        }

        let Some(script) = store.get(&self.current) else {
            return;
        };
        if script.frames.is_empty() || script.delay_at(self.cursor) == FOREVER {
            return;
        }

        self.countdown -= 1;
        if self.countdown >= 0 {
            return;
        }

        let len = script.frames.len();
        let next = self.cursor + 1;
        if next < len {
            self.cursor = next;
        } else {
            match &script.end {
                EndAction::Hold => {
                    self.cursor = len - 1;
                    self.finished = true;
                }
                EndAction::Loop => self.cursor = 0,
                EndAction::LoopBack(n) => {
                    self.cursor = len.saturating_sub(*n as usize).min(len - 1);
                }
                EndAction::Switch(target) => {
                    let switches = *target != self.current
                        && store.get(target).is_some_and(|s| !s.frames.is_empty());
                    if switches {
                        self.requested.clone_from(target);
                        self.current.clone_from(target);
                        self.restart(store);
                        return;
                    }
                    self.cursor = len - 1;
                }
            }
        }
        self.frame = script.frames[self.cursor];
        self.countdown = script.delay_at(self.cursor) as i32;
    }

    fn restart(&mut self, store: &AnimationStore) {
        self.cursor = 0;
        self.finished = false;
        if let Some(script) = store.get(&self.current)
            && let Some(&first) = script.frames.first()
        {
            self.frame = first;
            self.countdown = script.delay_at(0) as i32;
        }
    }
}
