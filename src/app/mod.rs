//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete session state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{CellEditor, FocusTarget, GridCursor, Model, Section, ToastLevel};
pub use update::{Message, update};

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    confirm_paste: bool,
}

impl App {
    /// Create a new application with the confirmation gate enabled.
    pub const fn new() -> Self {
        Self {
            confirm_paste: true,
        }
    }

    /// Enable or disable the paste confirmation gate.
    pub const fn with_confirm(mut self, enabled: bool) -> Self {
        self.confirm_paste = enabled;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
