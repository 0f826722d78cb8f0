//! ECS components for simulated objects.
//!
//! Submodules overview:
//! - [`actor`] – the controlled actor as objects see it
//! - [`animation`] – animation scripts and the per-object player
//! - [`contact`] – per-frame solid and touch contact inboxes
//! - [`culloffscreen`] – marker for objects that die outside the active range
//! - [`destroyed`] – deferred destruction marker
//! - [`hitbox`] – non-solid touch regions
//! - [`lifespan`] – frame-limited lifetime
//! - [`mapposition`] – world position in whole pixels
//! - [`motion`] – 8.8 velocity, sub-pixels and gravity
//! - [`objectkind`] – object type and subtype
//! - [`parent`] – non-owning link to the spawning object
//! - [`phase`] – generic per-object state machine
//! - [`proximity`] – enter/exit distance gate
//! - [`solidbody`] – solid body provider
//! - [`sprite`] – drawable sheet and frame
//! - [`timer`] – frame countdowns

pub mod actor;
pub mod animation;
pub mod contact;
pub mod culloffscreen;
pub mod destroyed;
pub mod hitbox;
pub mod lifespan;
pub mod mapposition;
pub mod motion;
pub mod objectkind;
pub mod parent;
pub mod phase;
pub mod proximity;
pub mod solidbody;
pub mod sprite;
pub mod timer;
