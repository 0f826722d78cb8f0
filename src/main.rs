//! Headless object simulation runner.
//!
//! Loads a level layout, runs the object simulation for a fixed number of
//! frames with a scripted main actor, and logs what happened: sounds played,
//! sprites drawn, objects spawned and destroyed.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --level assets/level.json --frames 1200
//! RUST_LOG=debug cargo run -- --config assets/config.ini
//! ```

use std::path::PathBuf;
use std::thread;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{debug, info, warn};

use platformer_objects::components::actor::{Actor, MainActor};
use platformer_objects::level::LevelLayout;
use platformer_objects::resources::animationstore::AnimationStore;
use platformer_objects::resources::gameconfig::SimConfig;
use platformer_objects::resources::renderqueue::Renderer;
use platformer_objects::simulation::Simulation;

const WALK_SPEED: i16 = 0x200;
const JUMP_VELOCITY: i16 = -0x680;
const JUMP_INTERVAL: u64 = 90;

/// Frame-exact platformer object simulation
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI file with viewport, seed and audio settings.
    #[arg(long, value_name = "PATH", default_value = "assets/config.ini")]
    config: PathBuf,

    /// Level layout to load.
    #[arg(long, value_name = "PATH", default_value = "assets/level.json")]
    level: PathBuf,

    /// Extra animation scripts merged over the built-in set.
    #[arg(long, value_name = "PATH")]
    animations: Option<PathBuf>,

    /// Number of frames to simulate. Overrides the config file.
    #[arg(long)]
    frames: Option<u64>,
}

/// Renderer that only counts what it is asked to draw.
#[derive(Default)]
struct CountingRenderer {
    sprites: usize,
    frames: usize,
}

impl Renderer for CountingRenderer {
    fn draw_frame(&mut self, sheet: &str, frame: u16, x: i32, y: i32, _flip_h: bool, _flip_v: bool) {
        if self.sprites == 0 {
            debug!("first sprite: {} frame {} at ({}, {})", sheet, frame, x, y);
        }
        self.sprites += 1;
    }
}

/// Walks the main actor right and jumps it at a fixed interval.
fn drive_main_actor(world: &mut World, frame: u64) {
    let mut query = world.query_filtered::<&mut Actor, With<MainActor>>();
    for mut actor in query.iter_mut(world) {
        actor.x_vel = WALK_SPEED;
        actor.facing_right = true;
        if frame % JUMP_INTERVAL == 0 && !actor.airborne {
            actor.launch(JUMP_VELOCITY);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = SimConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{e}; using default settings");
    }
    if let Some(frames) = cli.frames {
        config.frames = frames;
    }

    let layout = match LevelLayout::load_from_file(&cli.level) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut sim = Simulation::new(&config).with_reference_actor();
    if let Some(path) = cli.animations.as_ref() {
        let mut store = sim.world_mut().resource_mut::<AnimationStore>();
        if let Err(e) = store.load_from_file(path) {
            warn!("{e}; keeping built-in animations");
        }
    }
    sim.load_level(&layout);

    let audio = config.audio_enabled.then(|| {
        let rx = sim.connect_audio();
        thread::spawn(move || {
            let mut played = 0usize;
            for effect in rx.iter() {
                debug!("sound: {}", effect.name());
                played += 1;
            }
            played
        })
    });

    info!("Simulating {} frames", config.frames);
    let mut renderer = CountingRenderer::default();
    for _ in 0..config.frames {
        let frame = sim.frame();
        drive_main_actor(sim.world_mut(), frame);
        sim.step();
        if sim.render(&mut renderer) > 0 {
            renderer.frames += 1;
        }
    }

    sim.disconnect_audio();
    if let Some(handle) = audio {
        match handle.join() {
            Ok(played) => info!("Sounds played: {}", played),
            Err(_) => warn!("audio thread panicked"),
        }
    }

    let stats = sim.stats();
    info!(
        "Frames: {}, sprites drawn: {} over {} frames, objects spawned: {}, destroyed: {}",
        sim.frame(),
        renderer.sprites,
        renderer.frames,
        stats.spawned,
        stats.destroyed
    );
}
