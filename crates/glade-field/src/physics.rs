//! Cursor forces and per-frame integration.
//!
//! Both forces finish with the same integration step: position advances by
//! the accumulated velocity, then velocity decays by [`FRICTION`]. That step
//! runs every frame whether or not the cursor was in range.

use glade_core::Cursor;
use glam::Vec2;
use rand::Rng;

use crate::entity::Entity;

/// Multiplicative velocity decay applied every frame.
pub const FRICTION: f32 = 0.82;

/// Cursor distance within which followers are attracted.
pub const ATTRACTION_RANGE: f32 = 500.0;

/// Attraction distance below which the pull is boosted.
const ATTRACTION_CLOSE: f32 = 120.0;

/// Attraction distance below which followers wiggle.
const ATTRACTION_JITTER_RANGE: f32 = 80.0;

/// Force multiplier at close range.
pub const CLOSE_BOOST: f32 = 2.2;

/// Fraction of the repel radius below which the push is boosted.
const REPEL_CLOSE_FRACTION: f32 = 0.5;

/// Fraction of the repel radius below which repelled entities wiggle.
const REPEL_JITTER_FRACTION: f32 = 0.35;

/// Jitter amplitude for repelled entities.
const REPEL_JITTER: f32 = 2.0;

/// Jitter amplitude for followers.
const ATTRACTION_JITTER: f32 = 2.5;

/// Glow radius relative to the repel radius.
const GLOW_SCALE: f32 = 0.8;

/// Direction used when entity and cursor coincide.
pub const FALLBACK_BEARING: Vec2 = Vec2::X;

/// Which force produced a glow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlowTint {
    Ripple,
    Follow,
}

/// Visual feedback for an entity the cursor is acting on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub position: Vec2,
    pub radius: f32,
    pub tint: GlowTint,
    /// Cursor is very close; drawn larger and brighter.
    pub vivid: bool,
}

/// Velocity change computed for one frame, before jitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impulse {
    pub force: Vec2,
    /// Close range: boosted force and a vivid glow.
    pub close: bool,
    /// Close enough to add random jitter.
    pub jitter: bool,
}

fn bearing(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).try_normalize().unwrap_or(FALLBACK_BEARING)
}

/// Push away from `cursor` for an entity at `position`, or `None` when the
/// cursor is outside `radius`.
pub fn repulsion_impulse(position: Vec2, cursor: Vec2, radius: f32, strength: f32) -> Option<Impulse> {
    let distance = position.distance(cursor);
    if distance >= radius {
        return None;
    }
    let close = distance < radius * REPEL_CLOSE_FRACTION;
    let boost = if close { CLOSE_BOOST } else { 1.0 };
    let magnitude = (radius - distance) / radius * strength * boost;
    Some(Impulse {
        force: bearing(cursor, position) * magnitude,
        close,
        jitter: distance < radius * REPEL_JITTER_FRACTION,
    })
}

/// Pull toward `cursor` for an entity at `position`, or `None` when the
/// cursor is off-screen or beyond [`ATTRACTION_RANGE`].
pub fn attraction_impulse(position: Vec2, cursor: Cursor, strength: f32) -> Option<Impulse> {
    if !cursor.is_on_screen() {
        return None;
    }
    let target = cursor.position();
    let distance = position.distance(target);
    if distance >= ATTRACTION_RANGE {
        return None;
    }
    let close = distance < ATTRACTION_CLOSE;
    let boost = if close { CLOSE_BOOST } else { 1.0 };
    let magnitude = strength * (1.0 - distance / ATTRACTION_RANGE) * boost;
    Some(Impulse {
        force: bearing(position, target) * magnitude,
        close,
        jitter: distance < ATTRACTION_JITTER_RANGE,
    })
}

fn jitter<R: Rng + ?Sized>(rng: &mut R, amplitude: f32) -> Vec2 {
    Vec2::new(
        rng.gen_range(-amplitude..=amplitude),
        rng.gen_range(-amplitude..=amplitude),
    )
}

fn integrate(entity: &mut Entity) {
    entity.position += entity.velocity;
    entity.velocity *= FRICTION;
}

fn glow(entity: &Entity, tint: GlowTint, vivid: bool) -> Glow {
    Glow {
        position: entity.position,
        radius: entity.repel_radius * GLOW_SCALE,
        tint,
        vivid,
    }
}

/// Push `entity` away from the cursor, then integrate.
///
/// Returns the glow to draw when the cursor was in range.
pub fn repel<R: Rng + ?Sized>(
    entity: &mut Entity,
    cursor: Cursor,
    strength: f32,
    rng: &mut R,
) -> Option<Glow> {
    let effect = repulsion_impulse(entity.position, cursor.position(), entity.repel_radius, strength)
        .map(|impulse| {
            let effect = glow(entity, GlowTint::Ripple, impulse.close);
            entity.velocity += impulse.force;
            if impulse.jitter {
                entity.velocity += jitter(rng, REPEL_JITTER);
            }
            effect
        });
    integrate(entity);
    effect
}

/// Pull `entity` toward the cursor with per-axis speed limit `max_speed`,
/// then integrate.
///
/// Returns the glow to draw when the cursor was in range.
pub fn attract<R: Rng + ?Sized>(
    entity: &mut Entity,
    cursor: Cursor,
    strength: f32,
    max_speed: f32,
    rng: &mut R,
) -> Option<Glow> {
    let effect = attraction_impulse(entity.position, cursor, strength).map(|impulse| {
        let effect = glow(entity, GlowTint::Follow, impulse.close);
        entity.velocity += impulse.force;
        entity.velocity = entity
            .velocity
            .clamp(Vec2::splat(-max_speed), Vec2::splat(max_speed));
        if impulse.jitter {
            entity.velocity += jitter(rng, ATTRACTION_JITTER);
        }
        effect
    });
    integrate(entity);
    effect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Kind;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::style::Color;
    use rstest::rstest;

    fn entity_at(position: Vec2, velocity: Vec2, repel_radius: f32) -> Entity {
        Entity {
            kind: Kind::Flyer { drift: Vec2::ZERO },
            position,
            velocity,
            size: 10.0,
            color: Color::White,
            repel_radius,
            follows_cursor: false,
        }
    }

    #[test]
    fn test_repulsion_at_zero_distance_uses_fallback_bearing() {
        let position = Vec2::new(300.0, 200.0);
        let impulse = repulsion_impulse(position, position, 100.0, 8.2).unwrap();
        assert_relative_eq!(impulse.force.length(), 8.2 * 2.2, epsilon = 1e-4);
        assert_relative_eq!(impulse.force.x, 8.2 * 2.2, epsilon = 1e-4);
        assert_eq!(impulse.force.y, 0.0);
        assert!(impulse.close);
        assert!(impulse.jitter);
    }

    #[test]
    fn test_repulsion_points_away_from_cursor() {
        let impulse = repulsion_impulse(Vec2::new(100.0, 0.0), Vec2::ZERO, 200.0, 10.0).unwrap();
        // (200 - 100) / 200 * 10, not boosted at exactly half the radius.
        assert_relative_eq!(impulse.force.x, 5.0, epsilon = 1e-4);
        assert!(!impulse.close);
        assert!(!impulse.jitter);
    }

    // Radius 200, strength 10: boosted below 100, jitter below 70.
    #[rstest]
    #[case(68.0, 0.66 * 10.0 * 2.2, true, true)]
    #[case(72.0, 0.64 * 10.0 * 2.2, true, false)]
    #[case(98.0, 0.51 * 10.0 * 2.2, true, false)]
    #[case(102.0, 0.49 * 10.0, false, false)]
    #[case(199.0, 0.005 * 10.0, false, false)]
    fn test_repulsion_thresholds(
        #[case] distance: f32,
        #[case] magnitude: f32,
        #[case] close: bool,
        #[case] jitter: bool,
    ) {
        let impulse =
            repulsion_impulse(Vec2::new(distance, 0.0), Vec2::ZERO, 200.0, 10.0).unwrap();
        assert_relative_eq!(impulse.force.x, magnitude, epsilon = 1e-4);
        assert_eq!(impulse.force.y, 0.0);
        assert_eq!(impulse.close, close);
        assert_eq!(impulse.jitter, jitter);
    }

    #[test]
    fn test_repulsion_out_of_range() {
        assert_eq!(repulsion_impulse(Vec2::new(250.0, 0.0), Vec2::ZERO, 200.0, 10.0), None);
    }

    #[test]
    fn test_attraction_points_toward_cursor() {
        let impulse =
            attraction_impulse(Vec2::new(100.0, 100.0), Cursor::at(100.0, 350.0), 4.0).unwrap();
        assert_relative_eq!(impulse.force.y, 4.0 * 0.5, epsilon = 1e-4);
        assert_relative_eq!(impulse.force.x, 0.0, epsilon = 1e-4);
        assert!(!impulse.close);
    }

    // Strength 5.2: boosted below 120, jitter below 80, nothing from 500.
    #[rstest]
    #[case(60.0, 5.2 * 0.88 * 2.2, true, true)]
    #[case(79.0, 5.2 * 0.842 * 2.2, true, true)]
    #[case(80.0, 5.2 * 0.84 * 2.2, true, false)]
    #[case(100.0, 5.2 * 0.8 * 2.2, true, false)]
    #[case(119.0, 5.2 * 0.762 * 2.2, true, false)]
    #[case(121.0, 5.2 * 0.758, false, false)]
    #[case(499.0, 5.2 * 0.002, false, false)]
    fn test_attraction_thresholds(
        #[case] distance: f32,
        #[case] magnitude: f32,
        #[case] close: bool,
        #[case] jitter: bool,
    ) {
        let cursor = Cursor::at(100.0 + distance, 100.0);
        let impulse = attraction_impulse(Vec2::new(100.0, 100.0), cursor, 5.2).unwrap();
        assert_relative_eq!(impulse.force.x, magnitude, epsilon = 1e-4);
        assert_relative_eq!(impulse.force.y, 0.0, epsilon = 1e-4);
        assert_eq!(impulse.close, close);
        assert_eq!(impulse.jitter, jitter);
    }

    #[test]
    fn test_attraction_out_of_range() {
        let cursor = Cursor::at(600.0, 100.0);
        assert_eq!(attraction_impulse(Vec2::new(100.0, 100.0), cursor, 5.2), None);
    }

    #[test]
    fn test_attract_up_close_glows_vivid() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut entity = entity_at(Vec2::new(100.0, 100.0), Vec2::ZERO, 200.0);
        let effect = attract(&mut entity, Cursor::at(200.0, 100.0), 5.2, 7.5, &mut rng).unwrap();
        assert!(effect.vivid);
        assert_eq!(effect.tint, GlowTint::Follow);
        // 9.152 clamped to the 7.5 speed limit, then one friction step.
        assert_relative_eq!(entity.velocity.x, 7.5 * FRICTION);
        assert_relative_eq!(entity.position.x, 107.5);
    }

    #[test]
    fn test_attraction_ignores_offscreen_cursor() {
        assert_eq!(attraction_impulse(Vec2::new(10.0, 10.0), Cursor::away(), 5.0), None);
        // Even when the entity sits right next to the sentinel.
        assert_eq!(attraction_impulse(Cursor::OFFSCREEN, Cursor::away(), 5.0), None);
    }

    #[test]
    fn test_attract_with_sentinel_is_pure_friction() {
        let mut rng = StdRng::seed_from_u64(9);
        let velocity = Vec2::new(3.0, -2.0);
        let mut entity = entity_at(Vec2::new(50.0, 50.0), velocity, 200.0);
        let effect = attract(&mut entity, Cursor::away(), 5.2, 7.5, &mut rng);
        assert_eq!(effect, None);
        assert_eq!(entity.position, Vec2::new(53.0, 48.0));
        assert_relative_eq!(entity.velocity.x, velocity.x * FRICTION);
        assert_relative_eq!(entity.velocity.y, velocity.y * FRICTION);
    }

    #[test]
    fn test_repel_out_of_range_still_decays() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut entity = entity_at(Vec2::new(500.0, 500.0), Vec2::new(10.0, 0.0), 100.0);
        let effect = repel(&mut entity, Cursor::at(10.0, 10.0), 8.2, &mut rng);
        assert_eq!(effect, None);
        assert_eq!(entity.position, Vec2::new(510.0, 500.0));
        assert_relative_eq!(entity.velocity.x, 8.2);
    }

    #[test]
    fn test_repel_emits_vivid_glow_up_close() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut entity = entity_at(Vec2::new(100.0, 100.0), Vec2::ZERO, 200.0);
        let effect = repel(&mut entity, Cursor::at(90.0, 100.0), 8.2, &mut rng).unwrap();
        assert!(effect.vivid);
        assert_eq!(effect.tint, GlowTint::Ripple);
        assert_eq!(effect.position, Vec2::new(100.0, 100.0));
        assert_relative_eq!(effect.radius, 160.0);
        assert!(entity.position.x > 100.0);
    }

    #[test]
    fn test_attract_clamps_speed_before_jitter() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut entity = entity_at(Vec2::new(100.0, 100.0), Vec2::new(50.0, -50.0), 200.0);
        // 200 units away: no jitter, so the clamp alone bounds the velocity.
        let effect = attract(&mut entity, Cursor::at(300.0, 100.0), 5.2, 7.5, &mut rng).unwrap();
        assert_eq!(effect.tint, GlowTint::Follow);
        assert!(!effect.vivid);
        assert_relative_eq!(entity.velocity.x, 7.5 * FRICTION);
        assert_relative_eq!(entity.velocity.y, -7.5 * FRICTION);
    }
}
