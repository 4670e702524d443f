use std::time::{Duration, Instant};

use crate::format::{self, ParsedTable};
use crate::grid::Grid;

/// Severity of a transient status-bar notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// Which part of the grid the cursor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The header row.
    Header,
    /// A data row, by index.
    Body(usize),
}

/// Explicit focus coordinates: the row/section plus the column. The
/// cursor is the single source of truth for where editing happens; the
/// rendering layer never infers position from layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    pub section: Section,
    pub col: usize,
}

/// A one-shot directive to move the cursor after a structural change.
///
/// Set by `update`, drained exactly once by the rendering layer via
/// [`Model::take_focus_request`] so it cannot re-fire on later redraws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// First cell of the last row - the default target after adding a row.
    LastRowStart,
    /// An explicit cell, used by Enter-navigation.
    Cell { row: usize, col: usize },
}

/// In-flight text edit of the focused cell or header.
///
/// `cursor` is a char index into `text`; all edits are char-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellEditor {
    text: String,
    cursor: usize,
}

impl CellEditor {
    /// Start editing existing content with the cursor at the end.
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map_or(self.text.len(), |(idx, _)| idx)
    }

    pub fn insert_char(&mut self, ch: char) {
        let idx = self.byte_index();
        self.text.insert(idx, ch);
        self.cursor += 1;
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index();
            self.text.remove(idx);
        }
    }

    pub fn delete_forward(&mut self) {
        let idx = self.byte_index();
        if idx < self.text.len() {
            self.text.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }
}

/// The complete session state.
///
/// All state lives here - no global or scattered state. The grid is the
/// only long-lived entity; everything else is cursor, overlay, and
/// notification bookkeeping around it.
pub struct Model {
    /// The editable table.
    pub grid: Grid,
    /// Current cursor position (header or body cell).
    pub cursor: GridCursor,
    /// Active cell edit; `None` means navigate mode.
    pub editor: Option<CellEditor>,
    /// One-shot focus outbox, drained by the rendering layer.
    pending_focus: Option<FocusTarget>,
    /// Parsed paste awaiting user confirmation.
    pub pending_paste: Option<ParsedTable>,
    /// Whether paste import requires confirmation before replacing the grid.
    pub confirm_paste: bool,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    toast: Option<Toast>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("cursor", &self.cursor)
            .field("editing", &self.editor.is_some())
            .field("pending_paste", &self.pending_paste.is_some())
            .field("help_visible", &self.help_visible)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a fresh session over the default minimal grid.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            cursor: GridCursor {
                section: Section::Body(0),
                col: 0,
            },
            editor: None,
            pending_focus: None,
            pending_paste: None,
            confirm_paste: true,
            help_visible: false,
            toast: None,
            should_quit: false,
        }
    }

    pub const fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Text currently under the cursor.
    pub fn focused_text(&self) -> &str {
        match self.cursor.section {
            Section::Header => self.grid.header(self.cursor.col),
            Section::Body(row) => self.grid.cell(row, self.cursor.col),
        }
    }

    /// Begin editing the focused cell, keeping its content.
    pub fn begin_edit(&mut self) {
        self.editor = Some(CellEditor::from_text(self.focused_text()));
    }

    /// Begin a fresh edit of the focused cell, replacing its content with
    /// one typed character.
    pub fn begin_edit_replace(&mut self, ch: char) {
        let mut editor = CellEditor::default();
        editor.insert_char(ch);
        self.editor = Some(editor);
    }

    /// Write the active edit back into the grid and leave edit mode.
    /// No-op in navigate mode.
    pub fn commit_edit(&mut self) {
        if let Some(editor) = self.editor.take() {
            let text = editor.text().to_string();
            match self.cursor.section {
                Section::Header => self.grid.set_header(self.cursor.col, text),
                Section::Body(row) => self.grid.set_cell(row, self.cursor.col, text),
            }
        }
    }

    /// Drop the active edit without writing it back.
    pub fn discard_edit(&mut self) {
        self.editor = None;
    }

    /// Queue a one-shot focus move. A newer request replaces an unconsumed
    /// older one.
    pub fn request_focus(&mut self, target: FocusTarget) {
        self.pending_focus = Some(target);
    }

    /// Drain the focus outbox. Consumed once per request by the rendering
    /// layer.
    pub fn take_focus_request(&mut self) -> Option<FocusTarget> {
        self.pending_focus.take()
    }

    /// Move the cursor to a focus target, clamped to the current grid.
    pub fn apply_focus(&mut self, target: FocusTarget) {
        let last_row = self.grid.row_count() - 1;
        let last_col = self.grid.column_count() - 1;
        self.cursor = match target {
            FocusTarget::LastRowStart => GridCursor {
                section: Section::Body(last_row),
                col: 0,
            },
            FocusTarget::Cell { row, col } => GridCursor {
                section: Section::Body(row.min(last_row)),
                col: col.min(last_col),
            },
        };
    }

    /// Re-clamp the cursor after a structural change shrank the grid.
    pub fn clamp_cursor(&mut self) {
        let last_col = self.grid.column_count() - 1;
        self.cursor.col = self.cursor.col.min(last_col);
        if let Section::Body(row) = self.cursor.section {
            let last_row = self.grid.row_count() - 1;
            self.cursor.section = Section::Body(row.min(last_row));
        }
    }

    /// Run pasted text through the import codec.
    ///
    /// Failures surface as an error toast with no state change. A
    /// successful parse either waits in `pending_paste` for confirmation
    /// or, when the confirmation gate is disabled, replaces the grid
    /// immediately.
    pub fn import_paste(&mut self, text: &str) {
        match format::import(text) {
            Err(err) => self.show_toast(ToastLevel::Error, format!("Import failed: {err}")),
            Ok(table) => {
                if self.confirm_paste {
                    self.pending_paste = Some(table);
                } else {
                    self.apply_paste(table);
                }
            }
        }
    }

    /// Replace the grid with imported data.
    pub fn apply_paste(&mut self, table: ParsedTable) {
        self.discard_edit();
        self.grid.replace(table.headers, table.rows);
        self.cursor = GridCursor {
            section: Section::Body(0),
            col: 0,
        };
        self.pending_focus = None;
        self.show_toast(
            ToastLevel::Info,
            format!(
                "Imported {} column(s), {} row(s)",
                self.grid.column_count(),
                self.grid.row_count()
            ),
        );
    }

    pub fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }

    pub const fn confirm_active(&self) -> bool {
        self.pending_paste.is_some()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}
