//! Drawing targets for the park.

use glam::Vec2;
use ratatui::style::Color;

/// Fill or stroke color with an opacity in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub alpha: f32,
}

impl Paint {
    pub const fn new(color: Color, alpha: f32) -> Self {
        Self { color, alpha }
    }
}

/// A 2D raster target in viewport units, y growing downward.
pub trait Surface {
    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Fill an ellipse rotated by `rotation` radians around its centre.
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32, paint: Paint);

    /// Stroke a circle outline.
    fn stroke_ring(&mut self, center: Vec2, radius: f32, paint: Paint);

    /// Stroke a quadratic Bézier curve.
    fn stroke_curve(&mut self, from: Vec2, control: Vec2, to: Vec2, paint: Paint);

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint) {
        self.fill_ellipse(center, Vec2::splat(radius), 0.0, paint);
    }
}

/// One recorded drawing operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Ellipse {
        center: Vec2,
        radii: Vec2,
        rotation: f32,
        paint: Paint,
    },
    Ring {
        center: Vec2,
        radius: f32,
        paint: Paint,
    },
    Curve {
        from: Vec2,
        control: Vec2,
        to: Vec2,
        paint: Paint,
    },
}

/// Surface that records commands for later replay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for DisplayList {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32, paint: Paint) {
        self.commands.push(DrawCommand::Ellipse {
            center,
            radii,
            rotation,
            paint,
        });
    }

    fn stroke_ring(&mut self, center: Vec2, radius: f32, paint: Paint) {
        self.commands.push(DrawCommand::Ring {
            center,
            radius,
            paint,
        });
    }

    fn stroke_curve(&mut self, from: Vec2, control: Vec2, to: Vec2, paint: Paint) {
        self.commands.push(DrawCommand::Curve {
            from,
            control,
            to,
            paint,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_empties_the_list() {
        let mut list = DisplayList::default();
        let paint = Paint::new(Color::White, 1.0);
        list.fill_circle(Vec2::ZERO, 3.0, paint);
        list.stroke_ring(Vec2::ZERO, 5.0, paint);
        assert_eq!(list.len(), 2);
        assert_eq!(
            list.commands()[0],
            DrawCommand::Ellipse {
                center: Vec2::ZERO,
                radii: Vec2::splat(3.0),
                rotation: 0.0,
                paint,
            }
        );
        list.clear();
        assert!(list.is_empty());
    }
}
