//! Render command pass.
//!
//! Runs after the frame has been simulated. [`render_command_system`] asks
//! every live, visible object for its sprite and position and queues one
//! command each; [`flush_render_queue`] sorts by priority and hands the
//! commands to the external [`Renderer`] in screen coordinates.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::destroyed::Destroyed;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::resources::renderqueue::{RenderCommand, RenderQueue, Renderer};
use crate::resources::viewport::Viewport;

pub fn render_command_system(
    query: Query<(&MapPosition, &Sprite), Without<Destroyed>>,
    viewport: Option<Res<Viewport>>,
    mut queue: ResMut<RenderQueue>,
) {
    queue.commands.clear();
    let Some(viewport) = viewport else {
        return;
    };
    for (position, sprite) in query.iter() {
        if !viewport.is_visible(position.x, position.y, sprite.half_width, sprite.half_height) {
            continue;
        }
        let (x, y) = viewport.to_screen(position.x, position.y);
        queue.commands.push(RenderCommand {
            sheet: sprite.sheet,
            frame: sprite.frame,
            x,
            y,
            flip_h: sprite.flip_h,
            flip_v: sprite.flip_v,
            priority: sprite.priority,
        });
    }
    // Stable sort keeps query order within a priority.
    queue.commands.sort_by_key(|command| command.priority);
}

/// Draws the queued commands. Returns how many were drawn; zero while the
/// renderer is not ready.
pub fn flush_render_queue(world: &mut World, renderer: &mut dyn Renderer) -> usize {
    if !renderer.is_ready() {
        trace!("renderer not ready, skipping frame");
        return 0;
    }
    let queue = world.resource::<RenderQueue>();
    for command in &queue.commands {
        renderer.draw_frame(
            command.sheet,
            command.frame,
            command.x,
            command.y,
            command.flip_h,
            command.flip_v,
        );
    }
    queue.commands.len()
}
