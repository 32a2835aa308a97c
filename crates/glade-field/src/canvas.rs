//! Terminal rendering of the park on a Braille canvas.

use glam::Vec2;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Painter, Shape},
    },
};

use crate::color::{BACKDROP, blend};
use crate::field::ParticleField;
use crate::surface::{DisplayList, DrawCommand, Paint};

/// Braille dots per terminal cell, horizontally and vertically.
const DOTS_PER_CELL: Vec2 = Vec2::new(2.0, 4.0);

/// Widget drawing a [`ParticleField`] across its whole area.
#[derive(Debug)]
pub struct FieldCanvas<'a> {
    field: &'a ParticleField,
}

impl<'a> FieldCanvas<'a> {
    pub fn new(field: &'a ParticleField) -> Self {
        Self { field }
    }
}

impl Widget for FieldCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let viewport = self.field.viewport();
        let mut list = DisplayList::default();
        self.field.render(&mut list);

        // Viewport units covered by one Braille dot.
        let dot = Vec2::new(
            viewport.width / (area.width as f32 * DOTS_PER_CELL.x),
            viewport.height / (area.height as f32 * DOTS_PER_CELL.y),
        )
        .max(Vec2::splat(f32::EPSILON));
        let backdrop = BACKDROP;

        Canvas::default()
            .marker(Marker::Braille)
            .background_color(backdrop)
            .x_bounds([0.0, viewport.width as f64])
            .y_bounds([0.0, viewport.height as f64])
            .paint(|ctx| {
                for command in list.commands() {
                    ctx.draw(&Command {
                        command,
                        height: viewport.height,
                        dot,
                        backdrop,
                    });
                }
            })
            .render(area, buf);
    }
}

/// A recorded draw command sampled onto the canvas grid.
struct Command<'a> {
    command: &'a DrawCommand,
    /// Viewport height, for flipping y (the canvas grows upward).
    height: f32,
    dot: Vec2,
    backdrop: Color,
}

impl Command<'_> {
    fn color(&self, paint: Paint) -> Color {
        blend(paint.color, paint.alpha, self.backdrop)
    }

    fn plot(&self, painter: &mut Painter, point: Vec2, color: Color) {
        if let Some((x, y)) = painter.get_point(point.x as f64, (self.height - point.y) as f64) {
            painter.paint(x, y, color);
        }
    }

    fn fill_ellipse(&self, painter: &mut Painter, center: Vec2, radii: Vec2, rotation: f32, color: Color) {
        let reach = radii.max_element();
        if reach <= 0.0 {
            return;
        }
        // Always light the centre so tiny shapes stay visible.
        self.plot(painter, center, color);

        let (sin, cos) = (-rotation).sin_cos();
        let steps_x = (reach / self.dot.x).ceil() as i32;
        let steps_y = (reach / self.dot.y).ceil() as i32;
        for j in -steps_y..=steps_y {
            for i in -steps_x..=steps_x {
                let offset = Vec2::new(i as f32 * self.dot.x, j as f32 * self.dot.y);
                let local = Vec2::new(
                    offset.x * cos - offset.y * sin,
                    offset.x * sin + offset.y * cos,
                );
                if (local / radii).length_squared() <= 1.0 {
                    self.plot(painter, center + offset, color);
                }
            }
        }
    }

    fn stroke_ring(&self, painter: &mut Painter, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let samples = (std::f32::consts::TAU * radius / self.dot.min_element()).ceil().max(8.0) as usize;
        for k in 0..samples {
            let angle = k as f32 / samples as f32 * std::f32::consts::TAU;
            self.plot(painter, center + Vec2::from_angle(angle) * radius, color);
        }
    }

    fn stroke_curve(&self, painter: &mut Painter, from: Vec2, control: Vec2, to: Vec2, color: Color) {
        let span = from.distance(control) + control.distance(to);
        let samples = (span / self.dot.min_element()).ceil().max(2.0) as usize;
        for k in 0..=samples {
            let t = k as f32 / samples as f32;
            let u = 1.0 - t;
            let point = from * (u * u) + control * (2.0 * u * t) + to * (t * t);
            self.plot(painter, point, color);
        }
    }
}

impl Shape for Command<'_> {
    fn draw(&self, painter: &mut Painter) {
        match *self.command {
            DrawCommand::Ellipse {
                center,
                radii,
                rotation,
                paint,
            } => self.fill_ellipse(painter, center, radii, rotation, self.color(paint)),
            DrawCommand::Ring {
                center,
                radius,
                paint,
            } => self.stroke_ring(painter, center, radius, self.color(paint)),
            DrawCommand::Curve {
                from,
                control,
                to,
                paint,
            } => self.stroke_curve(painter, from, control, to, self.color(paint)),
        }
    }
}
