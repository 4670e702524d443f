use crate::app::Model;
use crate::app::model::{FocusTarget, GridCursor, Section};

/// All possible events and actions in the application.
///
/// These represent user input and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Structure
    /// Append a column
    AddColumn,
    /// Drop the last column (no-op at one column)
    RemoveColumn,
    /// Append a row and request focus on it
    AddRow,
    /// Drop the last row (no-op at one row)
    RemoveRow,
    /// Reset to the default minimal grid, unconditionally
    ClearTable,

    // Cursor (navigate mode)
    /// Move cursor up one row (into the header from row 0)
    CursorUp,
    /// Move cursor down one row (into row 0 from the header)
    CursorDown,
    /// Move cursor one column left
    CursorLeft,
    /// Move cursor one column right
    CursorRight,
    /// Tab: move right, growing the grid when at the last column
    TabForward,
    /// Request focus on an explicit body cell (Enter-navigation)
    FocusCell { row: usize, col: usize },

    // Cell editing
    /// Start editing the focused cell, keeping its content
    BeginEdit,
    /// Start editing the focused cell fresh with one typed char
    BeginEditReplace(char),
    /// Insert a character at the text cursor
    EditInsertChar(char),
    /// Delete the character before the text cursor (Backspace)
    EditDeleteBack,
    /// Delete the character at the text cursor (Delete)
    EditDeleteForward,
    /// Move the text cursor left
    EditMoveLeft,
    /// Move the text cursor right
    EditMoveRight,
    /// Move the text cursor to the start of the cell (Home)
    EditMoveHome,
    /// Move the text cursor to the end of the cell (End)
    EditMoveEnd,
    /// Write the edit back into the grid
    CommitEdit,
    /// Drop the edit without writing it back
    CancelEdit,

    // Export and import
    /// Copy the grid to the clipboard as a Markdown table
    CopyMarkdown,
    /// Copy the grid to the clipboard as a fixed-width box table
    CopyFixedWidth,
    /// Read the system clipboard and route it through the paste flow
    ReadClipboard,
    /// Pasted text arrived (bracketed paste or clipboard read)
    PasteText(String),
    /// Accept the pending paste, replacing the grid
    ConfirmPaste,
    /// Reject the pending paste
    CancelPaste,

    // Overlays
    /// Toggle the help overlay
    ToggleHelp,
    /// Hide the help overlay
    HideHelp,

    // Application
    /// Redraw the screen
    Redraw,
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function.
pub fn update(mut model: Model, msg: Message) -> Model {
    // Messages that leave the focused cell commit the in-flight edit first,
    // so exported or navigated-away-from content is never stale. Clearing
    // and paste-replacement discard it instead.
    match &msg {
        Message::AddColumn
        | Message::RemoveColumn
        | Message::AddRow
        | Message::RemoveRow
        | Message::CursorUp
        | Message::CursorDown
        | Message::CursorLeft
        | Message::CursorRight
        | Message::TabForward
        | Message::FocusCell { .. }
        | Message::CopyMarkdown
        | Message::CopyFixedWidth => model.commit_edit(),
        Message::ClearTable | Message::ConfirmPaste => model.discard_edit(),
        _ => {}
    }

    match msg {
        // Structure
        Message::AddColumn => {
            model.grid.add_column();
        }
        Message::RemoveColumn => {
            model.grid.remove_column();
            model.clamp_cursor();
        }
        Message::AddRow => {
            model.grid.add_row();
            model.request_focus(FocusTarget::LastRowStart);
        }
        Message::RemoveRow => {
            model.grid.remove_row();
            model.clamp_cursor();
        }
        Message::ClearTable => {
            model.grid.clear();
            model.cursor = GridCursor {
                section: Section::Body(0),
                col: 0,
            };
            model.pending_paste = None;
        }

        // Cursor
        Message::CursorUp => {
            model.cursor.section = match model.cursor.section {
                Section::Header | Section::Body(0) => Section::Header,
                Section::Body(row) => Section::Body(row - 1),
            };
        }
        Message::CursorDown => {
            let last_row = model.grid.row_count() - 1;
            model.cursor.section = match model.cursor.section {
                Section::Header => Section::Body(0),
                Section::Body(row) => Section::Body((row + 1).min(last_row)),
            };
        }
        Message::CursorLeft => {
            model.cursor.col = model.cursor.col.saturating_sub(1);
        }
        Message::CursorRight => {
            let last_col = model.grid.column_count() - 1;
            model.cursor.col = (model.cursor.col + 1).min(last_col);
        }
        Message::TabForward => {
            // At the last column, Tab grows the grid instead of leaving it.
            if model.cursor.col == model.grid.column_count() - 1 {
                model.grid.add_column();
            }
            model.cursor.col += 1;
        }
        Message::FocusCell { row, col } => {
            model.request_focus(FocusTarget::Cell { row, col });
        }

        // Cell editing
        Message::BeginEdit => model.begin_edit(),
        Message::BeginEditReplace(ch) => model.begin_edit_replace(ch),
        Message::EditInsertChar(ch) => {
            if let Some(editor) = &mut model.editor {
                editor.insert_char(ch);
            }
        }
        Message::EditDeleteBack => {
            if let Some(editor) = &mut model.editor {
                editor.delete_back();
            }
        }
        Message::EditDeleteForward => {
            if let Some(editor) = &mut model.editor {
                editor.delete_forward();
            }
        }
        Message::EditMoveLeft => {
            if let Some(editor) = &mut model.editor {
                editor.move_left();
            }
        }
        Message::EditMoveRight => {
            if let Some(editor) = &mut model.editor {
                editor.move_right();
            }
        }
        Message::EditMoveHome => {
            if let Some(editor) = &mut model.editor {
                editor.move_home();
            }
        }
        Message::EditMoveEnd => {
            if let Some(editor) = &mut model.editor {
                editor.move_end();
            }
        }
        Message::CommitEdit => model.commit_edit(),
        Message::CancelEdit => model.discard_edit(),

        // Import
        Message::PasteText(text) => model.import_paste(&text),
        Message::ConfirmPaste => {
            if let Some(table) = model.pending_paste.take() {
                model.apply_paste(table);
            }
        }
        Message::CancelPaste => {
            model.pending_paste = None;
        }

        // Overlays
        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }

        // CopyMarkdown/CopyFixedWidth/ReadClipboard: clipboard work happens
        // in effects. Redraw: no state change needed.
        Message::CopyMarkdown
        | Message::CopyFixedWidth
        | Message::ReadClipboard
        | Message::Redraw => {}

        // Application
        Message::Quit => {
            model.should_quit = true;
        }
    }
    model
}
