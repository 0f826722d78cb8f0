//! Animation system.
//!
//! Advances every [`AnimationPlayer`] by one frame and copies the resulting
//! frame index into the object's [`Sprite`]. Runs after the object updates so
//! that scripts requested this frame take effect before rendering.
//!
//! # Related
//!
//! - [`crate::components::animation`] – scripts and playback rules
//! - [`crate::resources::animationstore::AnimationStore`] – script lookup

use bevy_ecs::prelude::*;

use crate::components::animation::AnimationPlayer;
use crate::components::destroyed::Destroyed;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;

pub fn animation_system(
    mut query: Query<(&mut AnimationPlayer, &mut Sprite), Without<Destroyed>>,
    store: Option<Res<AnimationStore>>,
) {
    let Some(store) = store else {
        return;
    };
    for (mut player, mut sprite) in query.iter_mut() {
        player.update(&store);
        let frame = player.current_frame();
        if sprite.frame != frame {
            sprite.frame = frame;
        }
    }
}
