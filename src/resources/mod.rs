//! ECS resources made available to systems.
//!
//! Long-lived state and the external services objects query or trigger.
//!
//! Overview
//! - `animationstore` – animation scripts keyed by id
//! - `audio` – bridge to an external sound player
//! - `frametick` – current simulated frame number
//! - `gameconfig` – INI-backed simulation settings
//! - `renderqueue` – render commands and the renderer interface
//! - `ringsound` – shared left/right toggle for ring pickups
//! - `rng` – seeded random source
//! - `stats` – spawn and destroy totals
//! - `terrain` – floor and wall distance queries
//! - `viewport` – camera rectangle and cull margin
pub mod animationstore;
pub mod audio;
pub mod frametick;
pub mod gameconfig;
pub mod renderqueue;
pub mod ringsound;
pub mod rng;
pub mod stats;
pub mod terrain;
pub mod viewport;
