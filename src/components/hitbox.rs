use bevy_ecs::prelude::Component;

/// What touching a [`Hitbox`] does to an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitKind {
    /// Hurts the actor.
    Harmful,
    /// Picked up by the actor.
    Collectible,
    /// Reports touches without any generic effect.
    Inert,
}

/// Non-solid touch region centered on the object position.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hitbox {
    pub half_width: i32,
    pub half_height: i32,
    pub kind: HitKind,
}

impl Hitbox {
    pub fn new(half_width: i32, half_height: i32, kind: HitKind) -> Self {
        Self {
            half_width,
            half_height,
            kind,
        }
    }

    /// Strict box overlap against another box given by center and half extents.
    pub fn overlaps(&self, x: i32, y: i32, other_x: i32, other_y: i32, other_hw: i32, other_hh: i32) -> bool {
        (x - other_x).abs() < self.half_width + other_hw
            && (y - other_y).abs() < self.half_height + other_hh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let hitbox = Hitbox::new(8, 8, HitKind::Inert);
        assert!(hitbox.overlaps(0, 0, 15, 0, 8, 8));
        assert!(!hitbox.overlaps(0, 0, 16, 0, 8, 8));
        assert!(!hitbox.overlaps(0, 0, 0, -16, 8, 8));
    }
}
