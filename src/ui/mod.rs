//! Terminal UI components.
//!
//! The grid, status bar, and toast bar render every frame; the paste
//! confirmation and help overlays draw on top when active. All layout is
//! computed from the model each frame, including the scroll position.

mod overlays;
mod render;
mod status;

pub use render::{column_widths, render};

/// Columns never collapse below this display width, so an empty grid
/// still reads as a table.
pub const MIN_COLUMN_WIDTH: usize = 3;

#[cfg(test)]
mod tests;
