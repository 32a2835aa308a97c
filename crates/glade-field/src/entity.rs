//! Park inhabitants and their randomized creation.

use glade_core::Viewport;
use glam::Vec2;
use rand::Rng;
use ratatui::style::Color;

use crate::color::{FLYER_PALETTE, FOLIAGE_PALETTE, GROUNDER_BODY};

/// Kind-specific state of an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind {
    /// A falling leaf.
    Foliage {
        /// Downward distance per frame.
        fall_speed: f32,
        /// Horizontal sway amplitude.
        sway: f32,
        /// Sway phase offset in radians.
        sway_phase: f32,
        /// Resting tilt in radians.
        tilt: f32,
    },
    /// An insect wandering anywhere on screen.
    Flyer {
        /// Persistent wander direction.
        drift: Vec2,
    },
    /// A mouse scurrying along the bottom band.
    Grounder {
        /// Persistent wander direction.
        drift: Vec2,
    },
}

/// One animated inhabitant of the park.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub kind: Kind,
    /// Position in viewport units.
    pub position: Vec2,
    /// Velocity accumulated from cursor forces.
    pub velocity: Vec2,
    /// Radius for leaves and insects, body length for mice.
    pub size: f32,
    pub color: Color,
    /// Cursor distance below which the entity is pushed away.
    pub repel_radius: f32,
    /// Attracted to the cursor instead of repelled.
    pub follows_cursor: bool,
}

fn pick<R: Rng + ?Sized>(rng: &mut R, palette: &[Color]) -> Color {
    palette[rng.gen_range(0..palette.len())]
}

impl Entity {
    /// A leaf somewhere in the column above or inside the viewport.
    pub fn foliage<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        let (w, h) = (viewport.width, viewport.height);
        Self {
            kind: Kind::Foliage {
                fall_speed: rng.gen_range(0.3..=1.1),
                sway: rng.gen_range(0.8..=2.2),
                sway_phase: rng.gen_range(0.0..=std::f32::consts::TAU),
                tilt: rng.gen_range(-0.2..=0.2),
            },
            position: Vec2::new(rng.gen_range(0.0..=w), rng.gen_range(-h..=h)),
            velocity: Vec2::ZERO,
            size: rng.gen_range(12.0..=24.0),
            color: pick(rng, &FOLIAGE_PALETTE),
            repel_radius: rng.gen_range(120.0..=260.0),
            follows_cursor: false,
        }
    }

    /// An insect anywhere inside the viewport.
    pub fn flyer<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, follows_cursor: bool) -> Self {
        Self {
            kind: Kind::Flyer {
                drift: Vec2::new(rng.gen_range(-0.7..=0.7), rng.gen_range(-0.7..=0.7)),
            },
            position: Vec2::new(
                rng.gen_range(0.0..=viewport.width),
                rng.gen_range(0.0..=viewport.height),
            ),
            velocity: Vec2::ZERO,
            size: rng.gen_range(7.0..=13.0),
            color: pick(rng, &FLYER_PALETTE),
            repel_radius: rng.gen_range(160.0..=320.0),
            follows_cursor,
        }
    }

    /// A mouse inside the bottom band of the viewport.
    pub fn grounder<R: Rng + ?Sized>(
        rng: &mut R,
        viewport: Viewport,
        follows_cursor: bool,
    ) -> Self {
        let h = viewport.height;
        Self {
            kind: Kind::Grounder {
                drift: Vec2::new(rng.gen_range(-0.5..=0.5), rng.gen_range(-0.2..=0.2)),
            },
            position: Vec2::new(
                rng.gen_range(0.0..=viewport.width),
                rng.gen_range(h * 0.7..=h * 0.95),
            ),
            velocity: Vec2::ZERO,
            size: rng.gen_range(18.0..=28.0),
            color: GROUNDER_BODY,
            repel_radius: rng.gen_range(200.0..=400.0),
            follows_cursor,
        }
    }

    /// Wander direction of insects and mice.
    pub fn drift(&self) -> Option<Vec2> {
        match self.kind {
            Kind::Flyer { drift } | Kind::Grounder { drift } => Some(drift),
            Kind::Foliage { .. } => None,
        }
    }

    pub fn drift_mut(&mut self) -> Option<&mut Vec2> {
        match &mut self.kind {
            Kind::Flyer { drift } | Kind::Grounder { drift } => Some(drift),
            Kind::Foliage { .. } => None,
        }
    }
}
