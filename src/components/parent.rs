//! Link from a spawned child object to the object that spawned it.
//!
//! The link is a plain [`Entity`] handle, not a bevy hierarchy: the parent may
//! be destroyed at any time and children are expected to cope. Reads go
//! through [`Query::get`](bevy_ecs::prelude::Query::get), and a parent that no
//! longer exists simply yields the child's safe default.

use bevy_ecs::prelude::{Component, Entity};

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParentObject(pub Entity);

impl ParentObject {
    pub fn entity(&self) -> Entity {
        self.0
    }
}
