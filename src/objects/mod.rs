//! Concrete object behaviors.
//!
//! Every object type is assembled from the shared pieces: a [`Phase`] state
//! machine, [`Countdown`] timers, [`Motion`], an [`AnimationPlayer`], and
//! optionally a [`SolidBody`] or [`Hitbox`]. Each module provides:
//!
//! - a component holding the object's own state,
//! - `bundle`/`spawn` constructors,
//! - an `*_update` system and, for contact-driven objects, an `*_on_contact`
//!   or `*_on_touch` listener system.
//!
//! Listeners run before every update in the frame, so a state change caused
//! by a contact is visible to the same frame's updates (see
//! [`crate::simulation::build_update_schedule`]).
//!
//! [`Phase`]: crate::components::phase::Phase
//! [`Countdown`]: crate::components::timer::Countdown
//! [`Motion`]: crate::components::motion::Motion
//! [`AnimationPlayer`]: crate::components::animation::AnimationPlayer
//! [`SolidBody`]: crate::components::solidbody::SolidBody
//! [`Hitbox`]: crate::components::hitbox::Hitbox

pub mod animal;
pub mod bubble;
pub mod button;
pub mod capsule;
pub mod collapsing;
pub mod projectile;
pub mod ring;
pub mod shooter;
pub mod sparkle;
pub mod spikes;
pub mod spring;
pub mod swing;

use bevy_ecs::prelude::*;
use log::warn;

use crate::components::animation::{AnimationScript, EndAction, FOREVER};
use crate::components::objectkind::Kind;
use crate::events::lifecycle::ObjectSpawned;
use crate::resources::animationstore::AnimationStore;

/// Looks up a subtype-derived table entry, clamping out-of-range indices to
/// the last entry.
pub fn table_entry<T: Copy, const N: usize>(table: &[T; N], index: usize, kind: Kind) -> T {
    if index >= N {
        warn!(
            "{:?} subtype index {} out of range, using {}",
            kind,
            index,
            N - 1
        );
    }
    table[index.min(N - 1)]
}

/// Spawns an object and announces it with [`ObjectSpawned`].
pub fn spawn_object<B: Bundle>(commands: &mut Commands, kind: Kind, bundle: B) -> Entity {
    let entity = commands.spawn(bundle).id();
    commands.trigger(ObjectSpawned { entity, kind });
    entity
}

/// Spawns a level-placed object. Kinds that are normally spawned by a parent
/// start in their free-running state.
pub fn spawn_placed(
    commands: &mut Commands,
    kind: Kind,
    subtype: u8,
    x: i32,
    y: i32,
    flip: bool,
) -> Entity {
    match kind {
        Kind::Spikes => spikes::spawn(commands, subtype, x, y, flip),
        Kind::Spring => spring::spawn(commands, subtype, x, y),
        Kind::Button => button::spawn(commands, x, y, None),
        Kind::Capsule => capsule::spawn(commands, subtype, x, y),
        Kind::Animal => animal::spawn_free(commands, subtype, x, y, !flip),
        Kind::Shooter => shooter::spawn(commands, subtype, x, y),
        Kind::Projectile => projectile::spawn_flying(commands, x, y, !flip),
        Kind::BubbleGenerator => bubble::spawn_generator(commands, subtype, x, y),
        Kind::Bubble => bubble::spawn(commands, x, y),
        Kind::CollapsingPlatform => collapsing::spawn(commands, subtype, x, y),
        Kind::SwingPlatform => swing::spawn(commands, subtype, x, y),
        Kind::Ring => ring::spawn(commands, x, y),
        Kind::Sparkle => sparkle::spawn(commands, x, y, 0, sparkle::START_RADIUS),
    }
}

/// Animation scripts used by the built-in objects.
pub fn default_animations() -> AnimationStore {
    let mut store = AnimationStore::default();
    let still = |frame: u16| AnimationScript::new([frame], FOREVER, EndAction::Hold);

    store.insert("spring_idle", still(0));
    store.insert(
        "spring_bounce",
        AnimationScript::new([1, 2, 2, 2, 1], 0, EndAction::Switch("spring_idle".into())),
    );

    store.insert("capsule_closed", still(0));
    store.insert("capsule_opening", AnimationScript::new([1, 2], 3, EndAction::Loop));
    store.insert("capsule_open", still(3));

    store.insert("animal_prison", still(0));
    store.insert("animal_walk", AnimationScript::new([1, 2], 3, EndAction::Loop));
    store.insert("animal_fly", AnimationScript::new([3, 4], 2, EndAction::Loop));

    store.insert("shooter_idle", still(0));
    store.insert("shooter_charge", AnimationScript::new([1, 2], 1, EndAction::Loop));
    store.insert("projectile", AnimationScript::new([0, 1], 1, EndAction::Loop));

    store.insert(
        "bubble_grow",
        AnimationScript::new([0, 1, 2], 14, EndAction::Switch("bubble_full".into())),
    );
    store.insert("bubble_full", AnimationScript::new([3, 4, 5], 7, EndAction::LoopBack(2)));

    store.insert("platform", still(0));
    store.insert("platform_shake", AnimationScript::new([0, 1], 1, EndAction::Loop));

    store.insert("ring_spin", AnimationScript::new([0, 1, 2, 3], 7, EndAction::Loop));
    store.insert("ring_sparkle", AnimationScript::new([4, 5, 6, 7], 5, EndAction::Hold));

    store.insert("sparkle", AnimationScript::new([0, 1, 2], 2, EndAction::Loop));
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_entry_clamps_to_last() {
        let table = [10, 20, 30];
        assert_eq!(table_entry(&table, 1, Kind::Spring), 20);
        assert_eq!(table_entry(&table, 3, Kind::Spring), 30);
        assert_eq!(table_entry(&table, 255, Kind::Spring), 30);
    }

    #[test]
    fn switch_targets_exist() {
        let store = default_animations();
        for script in store.scripts.values() {
            if let EndAction::Switch(target) = &script.end {
                assert!(store.get(target).is_some(), "missing {target}");
            }
        }
    }
}
