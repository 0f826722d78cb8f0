//! Simulation systems.
//!
//! Submodules overview
//! - [`actor`] – stand-in actor physics and camera follow for the runner
//! - [`animation`] – advance animation players and update sprite frames
//! - [`audio`] – forward sound commands to the audio bridge
//! - [`collision`] – solid and touch contact passes, generic hazard listener
//! - [`lifecycle`] – lifespans, off-screen culling and end-of-frame reaping
//! - [`movement`] – integrate 8.8 velocities into positions
//! - [`render`] – build and flush the render command queue
//! - [`time`] – advance the frame counter

pub mod actor;
pub mod animation;
pub mod audio;
pub mod collision;
pub mod lifecycle;
pub mod movement;
pub mod render;
pub mod time;
