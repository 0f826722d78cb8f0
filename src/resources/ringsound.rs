use bevy_ecs::prelude::Resource;

use crate::events::audio::SoundEffect;

/// Alternates the ring pickup sound between the left and right channel.
///
/// One toggle is shared by every ring in the world, so two rings collected
/// back to back always play on opposite sides.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct RingSoundToggle {
    left: bool,
}

impl RingSoundToggle {
    pub fn next_effect(&mut self) -> SoundEffect {
        self.left = !self.left;
        if self.left {
            SoundEffect::RingLeft
        } else {
            SoundEffect::RingRight
        }
    }
}
