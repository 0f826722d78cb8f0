//! Messages and events exchanged between systems.
//!
//! Submodules:
//! - [`audio`] – sound effect requests written by objects
//! - [`lifecycle`] – spawn and destroy notifications with their observers
pub mod audio;
pub mod lifecycle;
