//! Per-frame contact results.
//!
//! Contacts are never persisted: the collision passes clear every inbox at
//! the start of the frame and refill it, and the listener systems read it
//! before any object update runs. Each contacting actor appears at most once
//! per provider per frame.

use bevy_ecs::prelude::{Component, Entity};
use smallvec::SmallVec;

/// How an actor touched a solid body this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolidContact {
    /// On top, supported by the body.
    Standing,
    /// Against a side while moving into it.
    Pushing,
    /// Against a side without moving into it.
    TouchSide,
    /// Head against the underside.
    TouchBottom,
}

impl SolidContact {
    pub fn is_side(self) -> bool {
        matches!(self, SolidContact::Pushing | SolidContact::TouchSide)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactRecord {
    pub actor: Entity,
    pub contact: SolidContact,
    pub frame: u64,
}

/// Inbox of solid contacts delivered to a provider this frame.
#[derive(Component, Clone, Debug, Default)]
pub struct SolidContacts {
    pub frame: u64,
    pub records: SmallVec<[ContactRecord; 2]>,
}

impl SolidContacts {
    pub fn reset(&mut self, frame: u64) {
        self.frame = frame;
        self.records.clear();
    }

    pub fn push(&mut self, record: ContactRecord) {
        debug_assert!(
            self.records.iter().all(|r| r.actor != record.actor),
            "actor delivered twice in one frame"
        );
        self.records.push(record);
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn standing(&self) -> impl Iterator<Item = Entity> + '_ {
        self.records
            .iter()
            .filter(|r| r.contact == SolidContact::Standing)
            .map(|r| r.actor)
    }

    pub fn any_standing(&self) -> bool {
        self.standing().next().is_some()
    }
}

/// Inbox of actors overlapping a [`Hitbox`](super::hitbox::Hitbox) this frame.
#[derive(Component, Clone, Debug, Default)]
pub struct TouchContacts {
    pub frame: u64,
    pub actors: SmallVec<[Entity; 2]>,
}

impl TouchContacts {
    pub fn reset(&mut self, frame: u64) {
        self.frame = frame;
        self.actors.clear();
    }

    pub fn first(&self) -> Option<Entity> {
        self.actors.first().copied()
    }
}
