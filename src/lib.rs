//! Platformer object core.
//!
//! Per-object simulation for a 16-bit style 2D platformer: fixed-point motion,
//! script-driven sprite animation, the solid-body contact protocol, and the
//! object lifecycle, all expressed as bevy_ecs components, resources and
//! systems. Concrete object behaviors live in [`objects`] and are built only
//! from the reusable pieces.

pub mod components;
pub mod error;
pub mod events;
pub mod fixedpoint;
pub mod level;
pub mod objects;
pub mod resources;
pub mod simulation;
pub mod systems;
