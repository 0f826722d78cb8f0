//! Render command collection and hand-off.
//!
//! Rendering is a separate pass over the world after the frame has been
//! simulated: [`render_command_system`](crate::systems::render::render_command_system)
//! fills the [`RenderQueue`] with one [`RenderCommand`] per visible object,
//! and [`flush_render_queue`](crate::systems::render::flush_render_queue)
//! passes them to a [`Renderer`] in priority order.

use bevy_ecs::prelude::Resource;

/// Sprite drawing service. Coordinates are screen pixels.
pub trait Renderer {
    /// False while the renderer cannot draw (assets still loading, no
    /// surface); the queue is then kept but nothing is drawn.
    fn is_ready(&self) -> bool {
        true
    }

    fn draw_frame(&mut self, sheet: &str, frame: u16, x: i32, y: i32, flip_h: bool, flip_v: bool);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderCommand {
    pub sheet: &'static str,
    pub frame: u16,
    pub x: i32,
    pub y: i32,
    pub flip_h: bool,
    pub flip_v: bool,
    pub priority: u8,
}

#[derive(Resource, Clone, Debug, Default)]
pub struct RenderQueue {
    pub commands: Vec<RenderCommand>,
}
