use bevy_ecs::message::Message;

/// Sound effects objects can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    SpikesMove,
    Hurt,
    Spring,
    Button,
    CapsuleExplode,
    CapsuleOpen,
    Shoot,
    Collapse,
    RingLeft,
    RingRight,
}

impl SoundEffect {
    pub fn name(self) -> &'static str {
        match self {
            SoundEffect::SpikesMove => "spikes_move",
            SoundEffect::Hurt => "hurt",
            SoundEffect::Spring => "spring",
            SoundEffect::Button => "button",
            SoundEffect::CapsuleExplode => "capsule_explode",
            SoundEffect::CapsuleOpen => "capsule_open",
            SoundEffect::Shoot => "shoot",
            SoundEffect::Collapse => "collapse",
            SoundEffect::RingLeft => "ring_left",
            SoundEffect::RingRight => "ring_right",
        }
    }
}

/// Fire-and-forget request to play a sound effect, written by object systems
/// and forwarded to the [`AudioBridge`](crate::resources::audio::AudioBridge)
/// at the end of the frame.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoundCmd {
    pub effect: SoundEffect,
}

impl SoundCmd {
    pub fn new(effect: SoundEffect) -> Self {
        Self { effect }
    }
}
