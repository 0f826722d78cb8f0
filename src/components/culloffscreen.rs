use bevy_ecs::prelude::Component;

/// Marks objects that destroy themselves once they leave the active range
/// around the viewport.
#[derive(Component, Clone, Copy, Debug)]
pub struct CullOffscreen;
