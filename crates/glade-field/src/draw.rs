//! How each inhabitant looks.

use std::f32::consts::FRAC_PI_4;

use glam::Vec2;

use crate::color::{FOLLOW_GLOW, GROUNDER_TAIL, RIPPLE, VIVID_CORE, WING};
use crate::entity::{Entity, Kind};
use crate::physics::{Glow, GlowTint};
use crate::surface::{Paint, Surface};

/// Leaf: a tilted ellipse rocking with its sway.
pub fn draw_foliage<S: Surface + ?Sized>(leaf: &Entity, surface: &mut S) {
    let Kind::Foliage {
        sway_phase, tilt, ..
    } = leaf.kind
    else {
        return;
    };
    let rotation = tilt + (leaf.position.y / 40.0 + sway_phase).sin() * 0.2;
    surface.fill_ellipse(
        leaf.position,
        Vec2::new(leaf.size * 0.6, leaf.size),
        rotation,
        Paint::new(leaf.color, 0.7),
    );
}

/// Insect: round body with two pale wings.
pub fn draw_flyer<S: Surface + ?Sized>(flyer: &Entity, surface: &mut S) {
    let s = flyer.size;
    let wing = Paint::new(WING, 0.3);
    surface.fill_circle(flyer.position, s, Paint::new(flyer.color, 0.8));
    surface.fill_ellipse(
        flyer.position + Vec2::new(-s * 0.7, -s * 0.3),
        Vec2::new(s * 0.7, s * 0.3),
        FRAC_PI_4,
        wing,
    );
    surface.fill_ellipse(
        flyer.position + Vec2::new(s * 0.7, -s * 0.3),
        Vec2::new(s * 0.7, s * 0.3),
        -FRAC_PI_4,
        wing,
    );
}

/// Mouse: body, head, ear and a curled tail.
pub fn draw_grounder<S: Surface + ?Sized>(mouse: &Entity, surface: &mut S) {
    let s = mouse.size;
    let at = |x: f32, y: f32| mouse.position + Vec2::new(x * s, y * s);
    let fur = Paint::new(mouse.color, 0.8);

    surface.fill_ellipse(mouse.position, Vec2::new(s * 0.7, s * 0.4), 0.0, fur);
    surface.fill_circle(at(0.5, -0.1), s * 0.22, fur);
    surface.fill_circle(at(0.65, -0.22), s * 0.11, Paint::new(mouse.color, 0.6));
    surface.stroke_curve(
        at(-0.7, 0.1),
        at(-1.0, 0.5),
        at(-1.2, 0.2),
        Paint::new(GROUNDER_TAIL, 0.4),
    );
}

/// Ripple or follow glow; close-range glows get a bright core and a halo.
pub fn draw_glow<S: Surface + ?Sized>(glow: &Glow, surface: &mut S) {
    let tint = match glow.tint {
        GlowTint::Ripple => RIPPLE,
        GlowTint::Follow => FOLLOW_GLOW,
    };
    if glow.vivid {
        let radius = glow.radius * 1.25;
        surface.stroke_ring(glow.position, radius * 1.08, Paint::new(FOLLOW_GLOW, 0.25));
        surface.stroke_ring(glow.position, radius, Paint::new(VIVID_CORE, 0.45));
    } else {
        surface.stroke_ring(glow.position, glow.radius, Paint::new(tint, 0.25));
    }
}
