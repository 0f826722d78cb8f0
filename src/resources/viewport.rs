//! Camera viewport in world pixels.
//!
//! The viewport is owned by whoever drives the camera; objects only query it
//! to decide whether they are visible (render, on-screen only sounds and
//! spawns) and whether they have left the active range and should cull.

use bevy_ecs::prelude::Resource;

pub const DEFAULT_WIDTH: i32 = 320;
pub const DEFAULT_HEIGHT: i32 = 224;
pub const DEFAULT_CULL_MARGIN: i32 = 128;

#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Extra distance beyond each edge within which objects stay alive.
    pub cull_margin: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
            cull_margin: DEFAULT_CULL_MARGIN,
        }
    }

    pub fn with_cull_margin(mut self, margin: i32) -> Self {
        self.cull_margin = margin;
        self
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Centers the viewport on a world point.
    pub fn center_on(&mut self, x: i32, y: i32) {
        self.x = x - self.width / 2;
        self.y = y - self.height / 2;
    }

    /// True if a box of the given half extents around `(x, y)` overlaps the
    /// visible area.
    pub fn is_visible(&self, x: i32, y: i32, half_width: i32, half_height: i32) -> bool {
        x + half_width > self.x
            && x - half_width < self.x + self.width
            && y + half_height > self.y
            && y - half_height < self.y + self.height
    }

    /// True if the point lies inside the visible area grown by the cull margin.
    pub fn in_active_range(&self, x: i32, y: i32) -> bool {
        let m = self.cull_margin;
        x >= self.x - m
            && x < self.x + self.width + m
            && y >= self.y - m
            && y < self.y + self.height + m
    }

    pub fn to_screen(&self, x: i32, y: i32) -> (i32, i32) {
        (x - self.x, y - self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_uses_half_extents() {
        let viewport = Viewport::new(320, 224);
        assert!(viewport.is_visible(-7, 100, 8, 8));
        assert!(!viewport.is_visible(-8, 100, 8, 8));
        assert!(viewport.is_visible(327, 100, 8, 8));
        assert!(!viewport.is_visible(328, 100, 8, 8));
    }

    #[test]
    fn active_range_extends_by_margin() {
        let mut viewport = Viewport::new(320, 224).with_cull_margin(128);
        viewport.move_to(1000, 0);
        assert!(viewport.in_active_range(872, 0));
        assert!(!viewport.in_active_range(871, 0));
        assert!(viewport.in_active_range(1447, 0));
        assert!(!viewport.in_active_range(1448, 0));
    }

    #[test]
    fn center_on_offsets_by_half_size() {
        let mut viewport = Viewport::new(320, 224);
        viewport.center_on(500, 300);
        assert_eq!((viewport.x, viewport.y), (340, 188));
        assert_eq!(viewport.to_screen(500, 300), (160, 112));
    }
}
