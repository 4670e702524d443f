// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. grid::GridCursor)
    clippy::module_name_repetitions
)]

//! # Tablefmt
//!
//! A keyboard-driven terminal table editor.
//!
//! Tablefmt edits a small grid of text cells in the terminal and moves
//! tables between formats:
//! - Import pasted TSV, CSV, or pipe-delimited text
//! - Export as a Markdown table or fixed-width box text
//! - Grow and shrink the grid with keyboard shortcuts
//!
//! ## Architecture
//!
//! Tablefmt uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`grid`]: The editable table of headers and rows
//! - [`format`]: Import detection and export codecs
//! - [`ui`]: Terminal UI components

pub mod app;
pub mod format;
pub mod grid;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::format::{ParsedTable, PasteFormat};
    pub use crate::grid::Grid;
}
