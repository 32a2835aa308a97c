//! Pointer position as seen by the particle field.

use glam::Vec2;

/// Last known pointer position in viewport units.
///
/// When the pointer leaves the terminal the cursor is parked at
/// [`Cursor::OFFSCREEN`], far outside every interaction radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    position: Vec2,
}

impl Cursor {
    /// Sentinel position used while the pointer is away.
    pub const OFFSCREEN: Vec2 = Vec2::new(-1000.0, -1000.0);

    /// Cursor at the given viewport position.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
        }
    }

    /// Cursor parked at the off-screen sentinel.
    pub fn away() -> Self {
        Self {
            position: Self::OFFSCREEN,
        }
    }

    pub fn position(self) -> Vec2 {
        self.position
    }

    /// Whether the pointer sits strictly inside the positive quadrant.
    ///
    /// Attraction only engages for on-screen cursors, so the sentinel
    /// disables it outright.
    pub fn is_on_screen(self) -> bool {
        self.position.x > 0.0 && self.position.y > 0.0
    }

    /// Move the cursor to a new viewport position.
    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Park the cursor at the sentinel.
    pub fn leave(&mut self) {
        self.position = Self::OFFSCREEN;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::away()
    }
}
