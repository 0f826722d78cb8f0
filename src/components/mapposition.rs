use bevy_ecs::prelude::Component;

/// World position of an object's center, in whole pixels.
///
/// The sub-pixel part lives in [`Motion`](super::motion::Motion) so that
/// objects which never move carry no accumulator.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapPosition {
    pub x: i32,
    pub y: i32,
}

impl MapPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}
