use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;

use crate::app::model::Section;
use crate::app::{App, Message, Model};

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            // Bracketed paste delivers the pasted text as one event.
            Event::Paste(text) => Some(Message::PasteText(text.clone())),
            Event::Resize(_, _) => Some(Message::Redraw),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return Some(Message::HideHelp);
        }

        // The paste-confirmation overlay captures the keyboard.
        if model.confirm_active() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char('y') => Some(Message::ConfirmPaste),
                KeyCode::Esc | KeyCode::Char('n') => Some(Message::CancelPaste),
                _ => None,
            };
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl {
            return match key.code {
                KeyCode::Char('a') => Some(Message::AddColumn),
                KeyCode::Char('r') => Some(Message::RemoveColumn),
                KeyCode::Char('s') => Some(Message::AddRow),
                KeyCode::Char('d') => Some(Message::RemoveRow),
                KeyCode::Char('m') => Some(Message::CopyMarkdown),
                KeyCode::Char('l') | KeyCode::Char('k') => Some(Message::CopyFixedWidth),
                KeyCode::Char('v') => Some(Message::ReadClipboard),
                // Hard reset, regardless of an active edit
                KeyCode::Delete => Some(Message::ClearTable),
                KeyCode::Char('q') | KeyCode::Char('c') => Some(Message::Quit),
                // Ctrl+Enter deliberately does nothing
                _ => None,
            };
        }

        if key.code == KeyCode::Enter && key.modifiers.contains(KeyModifiers::SHIFT) {
            // Shift+Enter deliberately does nothing
            return None;
        }

        match key.code {
            KeyCode::Enter => Some(Self::enter_message(model)),
            KeyCode::Tab => Some(Message::TabForward),
            KeyCode::BackTab => Some(Message::CursorLeft),
            KeyCode::Delete => {
                if model.is_editing() {
                    Some(Message::EditDeleteForward)
                } else {
                    // Destructive clear only when no cell editor is focused
                    Some(Message::ClearTable)
                }
            }
            KeyCode::Backspace if model.is_editing() => Some(Message::EditDeleteBack),
            KeyCode::Up => Some(Message::CursorUp),
            KeyCode::Down => Some(Message::CursorDown),
            KeyCode::Left => {
                if model.is_editing() {
                    Some(Message::EditMoveLeft)
                } else {
                    Some(Message::CursorLeft)
                }
            }
            KeyCode::Right => {
                if model.is_editing() {
                    Some(Message::EditMoveRight)
                } else {
                    Some(Message::CursorRight)
                }
            }
            KeyCode::Home if model.is_editing() => Some(Message::EditMoveHome),
            KeyCode::End if model.is_editing() => Some(Message::EditMoveEnd),
            KeyCode::Esc if model.is_editing() => Some(Message::CancelEdit),
            KeyCode::F(1) => Some(Message::ToggleHelp),
            KeyCode::F(2) if !model.is_editing() => Some(Message::BeginEdit),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::ALT) => {
                if model.is_editing() {
                    Some(Message::EditInsertChar(ch))
                } else {
                    Some(Message::BeginEditReplace(ch))
                }
            }
            _ => None,
        }
    }

    /// Enter either grows the grid (last row), or moves focus one row down
    /// in the same column. From the header it moves into the first body row.
    fn enter_message(model: &Model) -> Message {
        match model.cursor.section {
            Section::Header => Message::FocusCell {
                row: 0,
                col: model.cursor.col,
            },
            Section::Body(row) if row == model.grid.row_count() - 1 => Message::AddRow,
            Section::Body(row) => Message::FocusCell {
                row: row + 1,
                col: model.cursor.col,
            },
        }
    }

    pub(super) fn view(model: &mut Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}
