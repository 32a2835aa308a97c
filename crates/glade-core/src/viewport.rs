//! Viewport geometry in virtual pixels.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Virtual pixels per terminal column.
pub const CELL_WIDTH: f32 = 8.0;

/// Virtual pixels per terminal row.
pub const CELL_HEIGHT: f32 = 16.0;

/// Size of the drawable area in virtual pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Viewport covering a terminal area of `cols` x `rows` cells.
    pub fn from_cells(cols: u16, rows: u16) -> Self {
        Self {
            width: cols as f32 * CELL_WIDTH,
            height: rows as f32 * CELL_HEIGHT,
        }
    }

    /// Centre of a terminal cell in viewport units.
    pub fn cell_to_point(col: u16, row: u16) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * CELL_WIDTH,
            (row as f32 + 0.5) * CELL_HEIGHT,
        )
    }

    /// Per-axis factor mapping positions in `self` onto `other`.
    ///
    /// A degenerate axis maps to 1.0 so positions are left in place.
    pub fn scale_to(self, other: Viewport) -> Vec2 {
        let axis = |from: f32, to: f32| if from > 0.0 { to / from } else { 1.0 };
        Vec2::new(axis(self.width, other.width), axis(self.height, other.height))
    }
}

/// What happens to entity positions when the viewport changes size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizePolicy {
    /// Scale positions proportionally to the new viewport.
    #[default]
    Rescale,
    /// Leave absolute positions untouched.
    Keep,
}
