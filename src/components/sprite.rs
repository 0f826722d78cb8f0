use bevy_ecs::prelude::Component;

/// Drawable part of an object: which sheet, which frame, and how it is
/// oriented. The frame is written by the animation system; objects without an
/// animation player keep whatever frame they were spawned with.
///
/// `half_width`/`half_height` are only used to decide visibility.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub sheet: &'static str,
    pub frame: u16,
    pub half_width: i32,
    pub half_height: i32,
    /// Sheets are drawn facing right, so left-facing objects set this.
    pub flip_h: bool,
    pub flip_v: bool,
    /// Lower values are drawn first.
    pub priority: u8,
}

impl Sprite {
    pub fn new(sheet: &'static str, half_width: i32, half_height: i32) -> Self {
        Self {
            sheet,
            frame: 0,
            half_width,
            half_height,
            flip_h: false,
            flip_v: false,
            priority: 3,
        }
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_flip_h(mut self, flip_h: bool) -> Self {
        self.flip_h = flip_h;
        self
    }

    pub fn with_frame(mut self, frame: u16) -> Self {
        self.frame = frame;
        self
    }
}
