use bevy_ecs::prelude::*;

use crate::components::destroyed::Destroyed;
use crate::components::mapposition::MapPosition;
use crate::components::motion::Motion;

/// Integrates every unfrozen [`Motion`] into its [`MapPosition`].
pub fn movement_system(mut query: Query<(&mut Motion, &mut MapPosition), Without<Destroyed>>) {
    for (mut motion, mut position) in query.iter_mut() {
        if motion.frozen {
            continue;
        }
        let MapPosition { mut x, mut y } = *position;
        motion.step(&mut x, &mut y);
        *position = MapPosition { x, y };
    }
}
