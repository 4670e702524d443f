use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, FocusTarget, Message, Model, Section, ToastLevel, update};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn type_text(mut model: Model, text: &str) -> Model {
    let mut chars = text.chars();
    if let Some(first) = chars.next() {
        model = update(model, Message::BeginEditReplace(first));
    }
    for ch in chars {
        model = update(model, Message::EditInsertChar(ch));
    }
    model
}

#[test]
fn test_default_grid_scenario() {
    // Default grid, two added columns, guarded row removal, then a new row
    // with a focus request on it.
    let mut model = Model::new();
    assert_eq!(model.grid.headers(), ["Header 1"]);
    assert_eq!(model.grid.rows(), [vec![String::new()]]);

    model = update(model, Message::AddColumn);
    model = update(model, Message::AddColumn);
    assert_eq!(model.grid.headers(), ["Header 1", "Header 2", "Header 3"]);
    for row in model.grid.rows() {
        assert_eq!(row, &vec![String::new(); 3]);
    }

    model = update(model, Message::RemoveRow);
    assert_eq!(model.grid.row_count(), 1);

    model = update(model, Message::AddRow);
    assert_eq!(model.grid.row_count(), 2);
    assert_eq!(model.take_focus_request(), Some(FocusTarget::LastRowStart));
}

#[test]
fn test_focus_request_is_one_shot() {
    let mut model = update(Model::new(), Message::AddRow);
    assert!(model.take_focus_request().is_some());
    assert!(model.take_focus_request().is_none());
}

#[test]
fn test_apply_focus_last_row_start() {
    let mut model = update(Model::new(), Message::AddRow);
    let target = model.take_focus_request().unwrap();
    model.apply_focus(target);
    assert_eq!(model.cursor.section, Section::Body(1));
    assert_eq!(model.cursor.col, 0);
}

#[test]
fn test_focus_cell_targets_explicit_coordinates() {
    let mut model = Model::new();
    model = update(model, Message::AddRow);
    model.take_focus_request();
    model = update(model, Message::FocusCell { row: 1, col: 0 });
    let target = model.take_focus_request().unwrap();
    assert_eq!(target, FocusTarget::Cell { row: 1, col: 0 });
    model.apply_focus(target);
    assert_eq!(model.cursor.section, Section::Body(1));
}

#[test]
fn test_apply_focus_clamps_out_of_range_cell() {
    let mut model = Model::new();
    model.apply_focus(FocusTarget::Cell { row: 9, col: 9 });
    assert_eq!(model.cursor.section, Section::Body(0));
    assert_eq!(model.cursor.col, 0);
}

#[test]
fn test_typing_commits_into_cell() {
    let mut model = type_text(Model::new(), "Al");
    model = update(model, Message::CommitEdit);
    assert_eq!(model.grid.cell(0, 0), "Al");
    assert!(!model.is_editing());
}

#[test]
fn test_navigation_commits_active_edit() {
    let mut model = Model::new();
    model = update(model, Message::AddRow);
    model.take_focus_request();
    model = type_text(model, "pending");
    model = update(model, Message::CursorDown);
    assert_eq!(model.grid.cell(0, 0), "pending");
    assert_eq!(model.cursor.section, Section::Body(1));
}

#[test]
fn test_cancel_edit_restores_content() {
    let mut model = Model::new();
    model.grid.set_cell(0, 0, "keep");
    model = type_text(model, "discard");
    model = update(model, Message::CancelEdit);
    assert_eq!(model.grid.cell(0, 0), "keep");
}

#[test]
fn test_header_edit_via_cursor_up() {
    let mut model = update(Model::new(), Message::CursorUp);
    assert_eq!(model.cursor.section, Section::Header);
    model = type_text(model, "Name");
    model = update(model, Message::CommitEdit);
    assert_eq!(model.grid.header(0), "Name");
}

#[test]
fn test_export_commits_active_edit_first() {
    let mut model = type_text(Model::new(), "fresh");
    model = update(model, Message::CopyMarkdown);
    assert_eq!(model.grid.cell(0, 0), "fresh");
}

#[test]
fn test_clear_discards_active_edit() {
    let mut model = type_text(Model::new(), "gone");
    model = update(model, Message::ClearTable);
    assert!(!model.is_editing());
    assert_eq!(model.grid.cell(0, 0), "");
}

#[test]
fn test_tab_at_last_column_grows_grid() {
    let mut model = Model::new();
    model = update(model, Message::TabForward);
    assert_eq!(model.grid.column_count(), 2);
    assert_eq!(model.cursor.col, 1);
}

#[test]
fn test_tab_mid_grid_only_moves() {
    let mut model = Model::new();
    model = update(model, Message::AddColumn);
    model.cursor.col = 0;
    model = update(model, Message::TabForward);
    assert_eq!(model.grid.column_count(), 2);
    assert_eq!(model.cursor.col, 1);
}

#[test]
fn test_remove_column_clamps_cursor() {
    let mut model = Model::new();
    model = update(model, Message::AddColumn);
    model.cursor.col = 1;
    model = update(model, Message::RemoveColumn);
    assert_eq!(model.cursor.col, 0);
}

#[test]
fn test_paste_waits_for_confirmation() {
    let mut model = Model::new();
    model = update(model, Message::PasteText("Name\tAge\nAl\t30".into()));
    assert!(model.confirm_active());
    assert_eq!(model.grid.headers(), ["Header 1"]);

    model = update(model, Message::ConfirmPaste);
    assert_eq!(model.grid.headers(), ["Name", "Age"]);
    assert_eq!(model.grid.rows(), [vec!["Al".to_string(), "30".to_string()]]);
    let (_, level) = model.active_toast().unwrap();
    assert_eq!(level, ToastLevel::Info);
}

#[test]
fn test_paste_rejection_keeps_grid() {
    let mut model = Model::new();
    model = update(model, Message::PasteText("a,b\n1,2".into()));
    model = update(model, Message::CancelPaste);
    assert!(!model.confirm_active());
    assert_eq!(model.grid.headers(), ["Header 1"]);
}

#[test]
fn test_paste_without_gate_applies_directly() {
    let mut model = Model::new();
    model.confirm_paste = false;
    model = update(model, Message::PasteText("a,b\n1,2".into()));
    assert!(!model.confirm_active());
    assert_eq!(model.grid.headers(), ["a", "b"]);
}

#[test]
fn test_unsupported_paste_reports_error_without_state_change() {
    let mut model = Model::new();
    model = update(model, Message::PasteText("no table here".into()));
    assert!(!model.confirm_active());
    assert_eq!(model.grid.headers(), ["Header 1"]);
    let (message, level) = model.active_toast().unwrap();
    assert_eq!(level, ToastLevel::Error);
    assert!(message.contains("unsupported format"));
}

#[test]
fn test_toggle_help_changes_visibility() {
    let model = Model::new();
    assert!(!model.help_visible);

    let model = update(model, Message::ToggleHelp);
    assert!(model.help_visible);

    let model = update(model, Message::HideHelp);
    assert!(!model.help_visible);
}

#[test]
fn test_quit_sets_flag() {
    let model = update(Model::new(), Message::Quit);
    assert!(model.should_quit);
}

// Key mapping

#[test]
fn test_ctrl_shortcuts_map_to_structure_messages() {
    let model = Model::new();
    assert_eq!(App::handle_key(ctrl('a'), &model), Some(Message::AddColumn));
    assert_eq!(App::handle_key(ctrl('r'), &model), Some(Message::RemoveColumn));
    assert_eq!(App::handle_key(ctrl('s'), &model), Some(Message::AddRow));
    assert_eq!(App::handle_key(ctrl('d'), &model), Some(Message::RemoveRow));
    assert_eq!(App::handle_key(ctrl('m'), &model), Some(Message::CopyMarkdown));
    assert_eq!(App::handle_key(ctrl('l'), &model), Some(Message::CopyFixedWidth));
    assert_eq!(App::handle_key(ctrl('k'), &model), Some(Message::CopyFixedWidth));
    assert_eq!(App::handle_key(ctrl('v'), &model), Some(Message::ReadClipboard));
}

#[test]
fn test_ctrl_delete_clears_even_while_editing() {
    let model = type_text(Model::new(), "editing");
    let msg = App::handle_key(
        KeyEvent::new(KeyCode::Delete, KeyModifiers::CONTROL),
        &model,
    );
    assert_eq!(msg, Some(Message::ClearTable));
}

#[test]
fn test_plain_delete_depends_on_edit_state() {
    let model = Model::new();
    assert_eq!(
        App::handle_key(key(KeyCode::Delete), &model),
        Some(Message::ClearTable)
    );

    let model = type_text(model, "x");
    assert_eq!(
        App::handle_key(key(KeyCode::Delete), &model),
        Some(Message::EditDeleteForward)
    );
}

#[test]
fn test_enter_adds_row_in_last_row() {
    let model = Model::new();
    assert_eq!(
        App::handle_key(key(KeyCode::Enter), &model),
        Some(Message::AddRow)
    );
}

#[test]
fn test_enter_moves_down_in_same_column() {
    let mut model = Model::new();
    model = update(model, Message::AddColumn);
    model = update(model, Message::AddRow);
    model.take_focus_request();
    model.cursor.section = Section::Body(0);
    model.cursor.col = 1;
    assert_eq!(
        App::handle_key(key(KeyCode::Enter), &model),
        Some(Message::FocusCell { row: 1, col: 1 })
    );
}

#[test]
fn test_enter_in_header_focuses_first_body_row() {
    let mut model = Model::new();
    model.cursor.section = Section::Header;
    assert_eq!(
        App::handle_key(key(KeyCode::Enter), &model),
        Some(Message::FocusCell { row: 0, col: 0 })
    );
}

#[test]
fn test_modified_enter_is_ignored() {
    let model = Model::new();
    assert_eq!(
        App::handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT), &model),
        None
    );
    assert_eq!(
        App::handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL), &model),
        None
    );
}

#[test]
fn test_typed_char_starts_replacing_edit() {
    let model = Model::new();
    assert_eq!(
        App::handle_key(key(KeyCode::Char('x')), &model),
        Some(Message::BeginEditReplace('x'))
    );

    let model = type_text(model, "x");
    assert_eq!(
        App::handle_key(key(KeyCode::Char('y')), &model),
        Some(Message::EditInsertChar('y'))
    );
}

#[test]
fn test_confirm_overlay_captures_keys() {
    let mut model = Model::new();
    model = update(model, Message::PasteText("a,b\n1,2".into()));
    assert_eq!(
        App::handle_key(key(KeyCode::Enter), &model),
        Some(Message::ConfirmPaste)
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Char('y')), &model),
        Some(Message::ConfirmPaste)
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Esc), &model),
        Some(Message::CancelPaste)
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Char('n')), &model),
        Some(Message::CancelPaste)
    );
    assert_eq!(App::handle_key(key(KeyCode::Char('z')), &model), None);
}

#[test]
fn test_help_overlay_swallows_next_key() {
    let model = update(Model::new(), Message::ToggleHelp);
    assert_eq!(
        App::handle_key(key(KeyCode::Char('x')), &model),
        Some(Message::HideHelp)
    );
}
