//! Object type tag and subtype parameter.
//!
//! Every simulated object carries an [`ObjectKind`]: the [`Kind`] selects the
//! behavior and the 8-bit `subtype` parameterizes it. Subtype fields index
//! small per-kind tables; out-of-range indices clamp to the last entry (see
//! [`crate::objects::table_entry`]).

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Spikes,
    Spring,
    Button,
    Capsule,
    Animal,
    Shooter,
    Projectile,
    BubbleGenerator,
    Bubble,
    CollapsingPlatform,
    SwingPlatform,
    Ring,
    Sparkle,
}

impl Kind {
    /// Sprite sheet key used by the renderer for this kind.
    pub fn sheet(self) -> &'static str {
        match self {
            Kind::Spikes => "spikes",
            Kind::Spring => "spring",
            Kind::Button => "button",
            Kind::Capsule => "capsule",
            Kind::Animal => "animal",
            Kind::Shooter => "shooter",
            Kind::Projectile => "projectile",
            Kind::BubbleGenerator => "bubble_generator",
            Kind::Bubble => "bubble",
            Kind::CollapsingPlatform => "collapsing_platform",
            Kind::SwingPlatform => "swing_platform",
            Kind::Ring => "ring",
            Kind::Sparkle => "sparkle",
        }
    }
}

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectKind {
    pub kind: Kind,
    pub subtype: u8,
}

impl ObjectKind {
    pub fn new(kind: Kind, subtype: u8) -> Self {
        Self { kind, subtype }
    }

    /// Upper four bits of the subtype.
    pub fn high_nibble(&self) -> usize {
        (self.subtype >> 4) as usize
    }

    /// Lower four bits of the subtype.
    pub fn low_nibble(&self) -> usize {
        (self.subtype & 0x0F) as usize
    }
}
