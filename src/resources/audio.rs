//! Bridge from the simulation to an external sound player.
//!
//! Objects never talk to audio directly: they write
//! [`SoundCmd`](crate::events::audio::SoundCmd) messages, and
//! [`forward_sound_cmds`](crate::systems::audio::forward_sound_cmds) hands
//! them to whatever [`AudioTrigger`] sits in the [`AudioBridge`]. Without a
//! bridge the commands are dropped.
//!
//! [`setup_audio_channel`] wires a crossbeam channel as the trigger so the
//! consumer can live on another thread.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::audio::{SoundCmd, SoundEffect};

/// Fire-and-forget sound service.
pub trait AudioTrigger: Send + Sync {
    fn play_effect(&self, effect: SoundEffect);
}

#[derive(Resource)]
pub struct AudioBridge {
    trigger: Box<dyn AudioTrigger>,
}

impl AudioBridge {
    pub fn new(trigger: impl AudioTrigger + 'static) -> Self {
        Self {
            trigger: Box::new(trigger),
        }
    }

    pub fn play(&self, effect: SoundEffect) {
        self.trigger.play_effect(effect);
    }
}

/// [`AudioTrigger`] that pushes effects into a crossbeam channel.
pub struct ChannelAudio {
    tx: Sender<SoundEffect>,
}

impl AudioTrigger for ChannelAudio {
    fn play_effect(&self, effect: SoundEffect) {
        // A closed receiver only means nobody is listening anymore.
        let _ = self.tx.send(effect);
    }
}

/// Initializes the `Messages<SoundCmd>` mailbox.
pub fn setup_sound_messages(world: &mut World) {
    world.init_resource::<Messages<SoundCmd>>();
}

/// Installs a channel-backed [`AudioBridge`] and returns the receiving end.
pub fn setup_audio_channel(world: &mut World) -> Receiver<SoundEffect> {
    let (tx, rx) = unbounded::<SoundEffect>();
    world.insert_resource(AudioBridge::new(ChannelAudio { tx }));
    setup_sound_messages(world);
    rx
}

/// Removes the bridge, closing the channel so receivers see the end.
pub fn shutdown_audio(world: &mut World) {
    world.remove_resource::<AudioBridge>();
}
