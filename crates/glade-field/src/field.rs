//! The ambient particle field: populations, frame step and render pass.

use glade_core::{Cursor, ResizePolicy, Viewport};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::draw::{draw_flyer, draw_foliage, draw_glow, draw_grounder};
use crate::entity::{Entity, Kind};
use crate::physics::{self, Glow};
use crate::surface::Surface;

/// Number of leaves in the park.
pub const FOLIAGE_COUNT: usize = 18;

/// Number of insects in the park.
pub const FLYER_COUNT: usize = 7;

/// Number of mice in the park.
pub const GROUNDER_COUNT: usize = 3;

/// Repulsion strength for leaves.
const FOLIAGE_REPEL_STRENGTH: f32 = 8.2;

/// Leaves falling further than this below the bottom edge are recycled.
const FOLIAGE_EXIT_MARGIN: f32 = 30.0;

/// Height band above the top edge where recycled leaves reappear.
const FOLIAGE_RESPAWN_MIN: f32 = -40.0;
const FOLIAGE_RESPAWN_MAX: f32 = -10.0;

/// Vertical band mice are kept in, as fractions of the viewport height.
pub const GROUNDER_BAND: (f32, f32) = (0.70, 0.97);

/// How a wandering kind moves and reacts to the cursor.
#[derive(Debug, Clone, Copy)]
struct Wander {
    repel_strength: f32,
    attract_strength: f32,
    max_speed: f32,
    /// Largest random change to the drift per frame, per axis.
    drift_step: Vec2,
    /// Largest drift magnitude, per axis.
    drift_limit: Vec2,
}

const FLYER_WANDER: Wander = Wander {
    repel_strength: 10.5,
    attract_strength: 5.2,
    max_speed: 7.5,
    drift_step: Vec2::new(0.08, 0.08),
    drift_limit: Vec2::new(1.2, 1.2),
};

const GROUNDER_WANDER: Wander = Wander {
    repel_strength: 12.5,
    attract_strength: 3.5,
    max_speed: 5.2,
    drift_step: Vec2::new(0.03, 0.01),
    drift_limit: Vec2::new(0.7, 0.2),
};

/// Owned state of the animated park.
#[derive(Debug)]
pub struct ParticleField {
    foliage: Vec<Entity>,
    flyers: Vec<Entity>,
    grounders: Vec<Entity>,
    /// Glows produced by the latest step, drawn over the entities.
    glows: Vec<Glow>,
    viewport: Viewport,
    rng: StdRng,
    /// Seed the field was created with.
    seed: u64,
    frames: u64,
}

impl ParticleField {
    /// Populate a field for `viewport` with a random seed.
    pub fn new(viewport: Viewport) -> Self {
        Self::with_seed(viewport, rand::thread_rng().gen_range(0..=u64::MAX))
    }

    /// Populate a field for `viewport` from a fixed seed.
    pub fn with_seed(viewport: Viewport, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let foliage = (0..FOLIAGE_COUNT)
            .map(|_| Entity::foliage(&mut rng, viewport))
            .collect();
        let flyers = (0..FLYER_COUNT)
            .map(|i| Entity::flyer(&mut rng, viewport, i == 0))
            .collect();
        let grounders = (0..GROUNDER_COUNT)
            .map(|i| Entity::grounder(&mut rng, viewport, i == 0))
            .collect();

        log::debug!(
            "park populated for {}x{} with seed {seed}",
            viewport.width,
            viewport.height
        );

        Self {
            foliage,
            flyers,
            grounders,
            glows: Vec::new(),
            viewport,
            rng,
            seed,
            frames: 0,
        }
    }

    pub fn foliage(&self) -> &[Entity] {
        &self.foliage
    }

    pub fn flyers(&self) -> &[Entity] {
        &self.flyers
    }

    pub fn grounders(&self) -> &[Entity] {
        &self.grounders
    }

    /// Every entity in population order: leaves, insects, mice.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.foliage
            .iter()
            .chain(&self.flyers)
            .chain(&self.grounders)
    }

    pub fn glows(&self) -> &[Glow] {
        &self.glows
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of frames stepped so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Adapt to a new viewport size.
    pub fn resize(&mut self, viewport: Viewport, policy: ResizePolicy) {
        if viewport == self.viewport {
            return;
        }
        if policy == ResizePolicy::Rescale {
            let scale = self.viewport.scale_to(viewport);
            for entity in self
                .foliage
                .iter_mut()
                .chain(&mut self.flyers)
                .chain(&mut self.grounders)
            {
                entity.position *= scale;
            }
        }
        log::debug!(
            "park resized to {}x{} ({policy:?})",
            viewport.width,
            viewport.height
        );
        self.viewport = viewport;
    }

    /// Advance every entity by one frame.
    pub fn step(&mut self, cursor: Cursor) {
        let Self {
            foliage,
            flyers,
            grounders,
            glows,
            viewport,
            rng,
            ..
        } = self;
        let (w, h) = (viewport.width, viewport.height);
        glows.clear();

        for leaf in foliage.iter_mut() {
            if let Kind::Foliage {
                fall_speed,
                sway,
                sway_phase,
                ..
            } = leaf.kind
            {
                leaf.position.y += fall_speed;
                leaf.position.x += (leaf.position.y / 30.0 + sway_phase).sin() * sway;
            }
            glows.extend(physics::repel(leaf, cursor, FOLIAGE_REPEL_STRENGTH, rng));
            if leaf.position.y > h + FOLIAGE_EXIT_MARGIN {
                leaf.position = Vec2::new(
                    rng.gen_range(0.0..=w),
                    rng.gen_range(FOLIAGE_RESPAWN_MIN..=FOLIAGE_RESPAWN_MAX),
                );
            }
        }

        for flyer in flyers.iter_mut() {
            glows.extend(wander(flyer, &FLYER_WANDER, cursor, rng));
            bounce(flyer, w, h);
        }

        for mouse in grounders.iter_mut() {
            glows.extend(wander(mouse, &GROUNDER_WANDER, cursor, rng));
            if mouse.position.x < 0.0 {
                mouse.position.x = w;
            } else if mouse.position.x > w {
                mouse.position.x = 0.0;
            }
            mouse.position.y = mouse
                .position
                .y
                .clamp(h * GROUNDER_BAND.0, h * GROUNDER_BAND.1);
        }

        self.frames += 1;
    }

    /// Draw the park: clear, leaves, insects, mice, then this frame's glows.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        for leaf in &self.foliage {
            draw_foliage(leaf, surface);
        }
        for flyer in &self.flyers {
            draw_flyer(flyer, surface);
        }
        for mouse in &self.grounders {
            draw_grounder(mouse, surface);
        }
        for glow in &self.glows {
            draw_glow(glow, surface);
        }
    }
}

/// Random-walk the drift, then either follow the cursor or drift and repel.
fn wander<R: Rng + ?Sized>(
    entity: &mut Entity,
    params: &Wander,
    cursor: Cursor,
    rng: &mut R,
) -> Option<Glow> {
    let drift = entity.drift_mut()?;
    let step = params.drift_step;
    *drift += Vec2::new(
        rng.gen_range(-step.x..=step.x),
        rng.gen_range(-step.y..=step.y),
    );
    *drift = drift.clamp(-params.drift_limit, params.drift_limit);
    let drift = *drift;

    if entity.follows_cursor {
        physics::attract(
            entity,
            cursor,
            params.attract_strength,
            params.max_speed,
            rng,
        )
    } else {
        entity.position += drift;
        physics::repel(entity, cursor, params.repel_strength, rng)
    }
}

/// Reverse the drift component that points past a viewport edge.
fn bounce(flyer: &mut Entity, w: f32, h: f32) {
    let position = flyer.position;
    let Some(drift) = flyer.drift_mut() else {
        return;
    };
    if position.x < 0.0 || position.x > w {
        drift.x = -drift.x;
    }
    if position.y < 0.0 || position.y > h {
        drift.y = -drift.y;
    }
}
