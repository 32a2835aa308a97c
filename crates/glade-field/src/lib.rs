//! Ambient park background for the glade stopwatch.
//!
//! The park holds three fixed populations: falling leaves, wandering
//! insects and mice scurrying along the bottom edge. Each frame they drift
//! on their own and react to the cursor, most being pushed away while one
//! insect and one mouse follow it.
//!
//! Simulation and drawing are separate passes. [`ParticleField::step`]
//! advances the physics and records the glows it produced;
//! [`ParticleField::render`] replays entities and glows onto any
//! [`Surface`], and [`FieldCanvas`] puts that on a terminal.

mod canvas;
mod color;
mod draw;
mod entity;
mod field;
mod physics;
mod surface;

pub use canvas::FieldCanvas;
pub use color::{BACKDROP, blend, rgb};
pub use entity::{Entity, Kind};
pub use field::{FLYER_COUNT, FOLIAGE_COUNT, GROUNDER_BAND, GROUNDER_COUNT, ParticleField};
pub use physics::{
    ATTRACTION_RANGE, FRICTION, Glow, GlowTint, Impulse, attract, attraction_impulse, repel,
    repulsion_impulse,
};
pub use surface::{DisplayList, DrawCommand, Paint, Surface};
