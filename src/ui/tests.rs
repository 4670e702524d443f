use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::app::{Message, Model, update};
use crate::ui::overlays::centered_popup_rect;
use crate::ui::{MIN_COLUMN_WIDTH, column_widths, render};

fn buffer_text(buffer: &Buffer) -> String {
    let mut text = String::new();
    for y in buffer.area.top()..buffer.area.bottom() {
        for x in buffer.area.left()..buffer.area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn draw(model: &mut Model) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| render(model, frame)).unwrap();
    buffer_text(terminal.backend().buffer())
}

#[test]
fn test_column_widths_track_widest_content() {
    let mut model = Model::new();
    model.grid.set_header(0, "Name");
    model.grid.set_cell(0, 0, "Alexander");
    assert_eq!(column_widths(&model), vec![9]);
}

#[test]
fn test_column_widths_have_floor() {
    let model = Model::new();
    // "Header 1" is 8 wide, above the floor
    assert_eq!(column_widths(&model), vec![8]);

    let mut model = Model::new();
    model.grid.set_header(0, "x");
    assert_eq!(
        column_widths(&model),
        vec![u16::try_from(MIN_COLUMN_WIDTH).unwrap()]
    );
}

#[test]
fn test_column_widths_reserve_room_for_edit_cursor() {
    let mut model = Model::new();
    model.grid.set_header(0, "abc");
    model = update(model, Message::BeginEdit);
    model = update(model, Message::EditInsertChar('d'));
    // "abcd" plus the block cursor past it
    assert_eq!(column_widths(&model), vec![5]);
}

#[test]
fn test_centered_popup_rect_is_clamped_and_centered() {
    let area = Rect::new(0, 0, 80, 24);
    let popup = centered_popup_rect(40, 10, area);
    assert_eq!(popup, Rect::new(20, 7, 40, 10));

    let popup = centered_popup_rect(200, 100, area);
    assert_eq!(popup, area);
}

#[test]
fn test_render_default_grid() {
    let mut model = Model::new();
    let text = draw(&mut model);
    assert!(text.contains("| Header 1 |"));
    assert!(text.contains("+----------+"));
    assert!(text.contains("NAV"));
}

#[test]
fn test_render_applies_pending_focus() {
    let mut model = Model::new();
    model = update(model, Message::AddRow);
    draw(&mut model);
    assert_eq!(model.take_focus_request(), None);
    assert_eq!(model.cursor.section, crate::app::Section::Body(1));
}

#[test]
fn test_render_confirm_overlay() {
    let mut model = Model::new();
    model = update(model, Message::PasteText("a,b\n1,2".into()));
    let text = draw(&mut model);
    assert!(text.contains("Replace the table with the pasted data?"));
    assert!(text.contains("2 column(s), 1 row(s)"));
}

#[test]
fn test_render_help_overlay() {
    let mut model = update(Model::new(), Message::ToggleHelp);
    let text = draw(&mut model);
    assert!(text.contains("Copy as Markdown"));
}

#[test]
fn test_render_toast_bar() {
    let mut model = Model::new();
    model.show_toast(crate::app::ToastLevel::Error, "boom");
    let text = draw(&mut model);
    assert!(text.contains("[error] boom"));
}
