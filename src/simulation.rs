//! Frame driver.
//!
//! [`Simulation`] owns the [`World`] and the schedules that advance it. One
//! call to [`Simulation::step`] is one frame:
//!
//! 1. contact passes fill every provider's inbox from the actors;
//! 2. contact listeners react, all of them before any object update;
//! 3. object updates run, reading and writing their own state;
//! 4. velocities integrate and animations advance;
//! 5. lifespans expire and off-screen objects are culled;
//! 6. queued sound commands are forwarded to the audio bridge;
//! 7. everything marked destroyed during the frame is despawned.
//!
//! Objects spawned by an update are applied at the next sync point and join
//! whatever systems remain in the frame. Their own update runs this frame
//! only if it comes later in the order above, e.g. a bubble spawned by its
//! generator, but not a button spawned by its capsule.
//!
//! [`Simulation::render`] is separate and never changes simulation state.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use crossbeam_channel::Receiver;
use log::{debug, info};

use crate::components::objectkind::Kind;
use crate::events::audio::{SoundCmd, SoundEffect};
use crate::events::lifecycle::{observe_object_destroyed, observe_object_spawned};
use crate::level::LevelLayout;
use crate::objects::animal::animal_update;
use crate::objects::bubble::{bubble_generator_update, bubble_update};
use crate::objects::button::{button_on_contact, button_update};
use crate::objects::capsule::capsule_update;
use crate::objects::collapsing::{collapsing_on_contact, collapsing_update};
use crate::objects::projectile::{projectile_on_touch, projectile_update};
use crate::objects::ring::{ring_on_touch, ring_update};
use crate::objects::shooter::shooter_update;
use crate::objects::sparkle::sparkle_update;
use crate::objects::spikes::{spikes_on_contact, spikes_update};
use crate::objects::spring::{spring_on_contact, spring_update};
use crate::objects::swing::swing_update;
use crate::objects::{default_animations, spawn_placed};
use crate::resources::audio::{setup_audio_channel, setup_sound_messages, shutdown_audio};
use crate::resources::frametick::FrameTick;
use crate::resources::gameconfig::SimConfig;
use crate::resources::renderqueue::{RenderQueue, Renderer};
use crate::resources::ringsound::RingSoundToggle;
use crate::resources::rng::SimRng;
use crate::resources::stats::SimStats;
use crate::resources::terrain::{Terrain, TerrainQuery};
use crate::systems::actor::{follow_main_actor, reference_actor_physics};
use crate::systems::animation::animation_system;
use crate::systems::audio::{forward_sound_cmds, update_sound_cmds};
use crate::systems::collision::{hurt_on_touch, solid_contact_pass, touch_contact_pass};
use crate::systems::lifecycle::{lifespan_system, offscreen_cull_system, reap_destroyed};
use crate::systems::movement::movement_system;
use crate::systems::render::{flush_render_queue, render_command_system};
use crate::systems::time::update_frame_tick;

/// The per-frame object schedule.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            (solid_contact_pass, touch_contact_pass).chain(),
            (
                spikes_on_contact,
                spring_on_contact,
                button_on_contact,
                collapsing_on_contact,
                hurt_on_touch,
                ring_on_touch,
                projectile_on_touch,
            )
                .chain(),
            (
                spikes_update,
                spring_update,
                button_update,
                capsule_update,
                animal_update,
                shooter_update,
                projectile_update,
                bubble_generator_update,
                bubble_update,
                collapsing_update,
                swing_update,
                ring_update,
                sparkle_update,
            )
                .chain(),
            (movement_system, animation_system).chain(),
            (lifespan_system, offscreen_cull_system).chain(),
            (forward_sound_cmds, update_sound_cmds).chain(),
            reap_destroyed,
        )
            .chain(),
    );
    update
}

pub fn build_render_schedule() -> Schedule {
    let mut render = Schedule::default();
    render.add_systems(render_command_system);
    render
}

/// Stand-in actor movement, run before the object schedule.
pub fn build_actor_schedule() -> Schedule {
    let mut actor = Schedule::default();
    actor.add_systems((reference_actor_physics, follow_main_actor).chain());
    actor
}

pub struct Simulation {
    world: World,
    actor: Option<Schedule>,
    update: Schedule,
    render: Schedule,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(&SimConfig::new())
    }
}

impl Simulation {
    pub fn new(config: &SimConfig) -> Self {
        let mut world = World::new();
        world.insert_resource(FrameTick::default());
        world.insert_resource(config.viewport());
        world.insert_resource(default_animations());
        world.insert_resource(SimRng::with_seed(config.seed));
        world.insert_resource(RingSoundToggle::default());
        world.insert_resource(RenderQueue::default());
        world.insert_resource(SimStats::default());
        world.insert_resource(config.clone());
        setup_sound_messages(&mut world);

        world.add_observer(observe_object_spawned);
        world.add_observer(observe_object_destroyed);

        debug!(
            "simulation created: viewport {}x{}, seed {}",
            config.viewport_width, config.viewport_height, config.seed
        );

        Self {
            world,
            actor: None,
            update: build_update_schedule(),
            render: build_render_schedule(),
        }
    }

    /// Moves actors with [`reference_actor_physics`] at the start of each
    /// frame and keeps the viewport on the main actor.
    pub fn with_reference_actor(mut self) -> Self {
        self.actor = Some(build_actor_schedule());
        self
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn frame(&self) -> u64 {
        self.world.resource::<FrameTick>().frame
    }

    pub fn stats(&self) -> SimStats {
        *self.world.resource::<SimStats>()
    }

    pub fn set_terrain(&mut self, terrain: impl TerrainQuery + 'static) {
        self.world.insert_resource(Terrain::new(terrain));
    }

    /// Routes sound effects into a channel and returns the receiver.
    pub fn connect_audio(&mut self) -> Receiver<SoundEffect> {
        setup_audio_channel(&mut self.world)
    }

    /// Drops the audio bridge. Receivers see the channel close.
    pub fn disconnect_audio(&mut self) {
        shutdown_audio(&mut self.world);
    }

    pub fn load_level(&mut self, layout: &LevelLayout) -> Vec<Entity> {
        let placed = layout.spawn(&mut self.world);
        info!("level spawned {} objects", placed.len());
        placed
    }

    /// Places a single object outside of any level layout.
    pub fn spawn(&mut self, kind: Kind, subtype: u8, x: i32, y: i32, flip: bool) -> Entity {
        let mut state = SystemState::<Commands>::new(&mut self.world);
        let entity = spawn_placed(&mut state.get_mut(&mut self.world), kind, subtype, x, y, flip);
        state.apply(&mut self.world);
        entity
    }

    /// Queues a sound directly, as an external caller would.
    pub fn play_sound(&mut self, effect: SoundEffect) {
        self.world.write_message(SoundCmd::new(effect));
    }

    /// Advances one frame.
    pub fn step(&mut self) {
        update_frame_tick(&mut self.world);
        if let Some(actor) = self.actor.as_mut() {
            actor.run(&mut self.world);
        }
        self.update.run(&mut self.world);
        self.world.clear_trackers();
    }

    pub fn run_frames(&mut self, frames: u64) {
        for _ in 0..frames {
            self.step();
        }
    }

    /// Builds and flushes this frame's render commands. Returns the number
    /// of sprites drawn.
    pub fn render(&mut self, renderer: &mut dyn Renderer) -> usize {
        self.render.run(&mut self.world);
        flush_render_queue(&mut self.world, renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::destroyed::Destroyed;
    use crate::components::mapposition::MapPosition;

    #[test]
    fn step_advances_frame_counter() {
        let mut sim = Simulation::default();
        assert_eq!(sim.frame(), 0);
        sim.run_frames(3);
        assert_eq!(sim.frame(), 3);
    }

    #[test]
    fn spawned_objects_are_counted() {
        let mut sim = Simulation::default();
        let ring = sim.spawn(Kind::Ring, 0, 100, 100, false);
        assert!(sim.world().get::<MapPosition>(ring).is_some());
        assert_eq!(sim.stats().spawned, 1);

        sim.world_mut().entity_mut(ring).insert(Destroyed);
        sim.step();
        assert!(sim.world().get_entity(ring).is_err());
        assert_eq!(sim.stats().destroyed, 1);
    }

    #[test]
    fn sound_commands_reach_the_channel() {
        let mut sim = Simulation::default();
        let rx = sim.connect_audio();
        sim.play_sound(SoundEffect::Spring);
        sim.step();
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![SoundEffect::Spring]);

        sim.disconnect_audio();
        sim.play_sound(SoundEffect::Button);
        sim.step();
        assert!(rx.try_recv().is_err());
    }
}
