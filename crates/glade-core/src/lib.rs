//! Core types shared by the glade crates.

mod cursor;
mod theme;
mod viewport;

pub use cursor::Cursor;
pub use theme::ColorTheme;
pub use viewport::{CELL_HEIGHT, CELL_WIDTH, ResizePolicy, Viewport};
