//! Sound command forwarding.
//!
//! - [`forward_sound_cmds`] hands every [`SoundCmd`] written this frame to
//!   the [`AudioBridge`], if one is installed.
//! - [`update_sound_cmds`] advances the `Messages<SoundCmd>` buffers. Run it
//!   after the forwarder, once per frame.

use bevy_ecs::prelude::*;

use crate::events::audio::SoundCmd;
use crate::resources::audio::AudioBridge;

pub fn forward_sound_cmds(bridge: Option<Res<AudioBridge>>, mut reader: MessageReader<SoundCmd>) {
    let Some(bridge) = bridge else {
        // Keep the reader cursor current so nothing replays once a bridge
        // is installed.
        let _ = reader.read().count();
        return;
    };
    for cmd in reader.read() {
        bridge.play(cmd.effect);
    }
}

pub fn update_sound_cmds(mut msgs: ResMut<Messages<SoundCmd>>) {
    msgs.update();
}
